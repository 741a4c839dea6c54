use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NodeError {
    #[error("node {index}: xp {xp} exceeds requirement {required}")]
    XpOverflow { index: usize, xp: u32, required: u32 },

    #[error("node {index}: completed flag does not match xp {xp}/{required}")]
    CompletionMismatch { index: usize, xp: u32, required: u32 },
}

/// One step on the quest map, gated by an XP threshold.
///
/// Invariants (enforced here and by `Progress`):
/// - `xp` never exceeds the node's XP requirement,
/// - `completed` holds exactly when `xp` equals the requirement,
/// - `unlocked` is monotonic: once set it never reverts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    index: usize,
    xp: u32,
    completed: bool,
    unlocked: bool,
}

impl Node {
    /// Creates a fresh node at zero XP. Only node 0 starts unlocked.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            xp: 0,
            completed: false,
            unlocked: index == 0,
        }
    }

    /// Rehydrate a node from persisted storage.
    ///
    /// `required` is the XP requirement for this index, supplied by the
    /// caller so the model stays independent of any particular config.
    ///
    /// # Errors
    ///
    /// Returns `NodeError::XpOverflow` if `xp` exceeds `required`, or
    /// `NodeError::CompletionMismatch` if the completed flag disagrees
    /// with the XP value.
    pub fn from_persisted(
        index: usize,
        xp: u32,
        completed: bool,
        unlocked: bool,
        required: u32,
    ) -> Result<Self, NodeError> {
        if xp > required {
            return Err(NodeError::XpOverflow {
                index,
                xp,
                required,
            });
        }
        if completed != (xp == required) {
            return Err(NodeError::CompletionMismatch {
                index,
                xp,
                required,
            });
        }

        Ok(Self {
            index,
            xp,
            completed,
            unlocked,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    /// Add `amount` XP, clamped to `required`. Returns the new total and
    /// marks the node completed when the requirement is met.
    pub(crate) fn award_xp(&mut self, amount: u32, required: u32) -> u32 {
        self.xp = self.xp.saturating_add(amount).min(required);
        if self.xp == required {
            self.completed = true;
        }
        self.xp
    }

    /// Unlock the node. Unlocking is one-way.
    pub(crate) fn unlock(&mut self) {
        self.unlocked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_node_starts_unlocked() {
        assert!(Node::new(0).unlocked());
        assert!(!Node::new(1).unlocked());
        assert!(!Node::new(29).unlocked());
    }

    #[test]
    fn award_clamps_at_requirement_and_completes() {
        let mut node = Node::new(0);
        assert_eq!(node.award_xp(25, 100), 25);
        assert!(!node.completed());

        node.award_xp(90, 100);
        assert_eq!(node.xp(), 100);
        assert!(node.completed());

        // Further awards stay clamped.
        node.award_xp(25, 100);
        assert_eq!(node.xp(), 100);
    }

    #[test]
    fn rehydration_rejects_overflow_and_flag_mismatch() {
        let err = Node::from_persisted(3, 200, false, true, 175).unwrap_err();
        assert!(matches!(err, NodeError::XpOverflow { .. }));

        let err = Node::from_persisted(0, 100, false, true, 100).unwrap_err();
        assert!(matches!(err, NodeError::CompletionMismatch { .. }));

        let err = Node::from_persisted(0, 50, true, true, 100).unwrap_err();
        assert!(matches!(err, NodeError::CompletionMismatch { .. }));

        let node = Node::from_persisted(0, 100, true, true, 100).unwrap();
        assert!(node.completed());
    }
}
