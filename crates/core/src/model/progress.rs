use thiserror::Error;

use crate::model::{Node, NodeError};
use crate::progression::{AnswerOutcome, ProgressionConfig};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("expected {expected} nodes, found {found}")]
    WrongNodeCount { expected: usize, found: usize },

    #[error("node at position {position} carries index {index}")]
    IndexMismatch { position: usize, index: usize },

    #[error("node 0 must be unlocked")]
    FirstNodeLocked,

    #[error("node {index} is unlocked but its predecessor is not completed")]
    PrematureUnlock { index: usize },

    #[error("current node {current} out of range for {count} nodes")]
    CurrentOutOfRange { current: usize, count: usize },

    #[error(transparent)]
    Node(#[from] NodeError),
}

/// The whole map's progress: one `Node` per step plus the last node the
/// player opened. Persisted as a single snapshot, replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    nodes: Vec<Node>,
    current_node: usize,
}

impl Progress {
    /// Fresh progress: every node at zero XP, only node 0 unlocked.
    #[must_use]
    pub fn new_default(config: &ProgressionConfig) -> Self {
        let nodes = (0..config.node_count()).map(Node::new).collect();
        Self {
            nodes,
            current_node: 0,
        }
    }

    /// Rehydrate progress from a persisted snapshot, checking every
    /// invariant. A snapshot that fails here is treated by callers as
    /// absent, never as a partially valid state.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the node count, node indices, unlock
    /// chain, or current-node pointer are inconsistent with `config`.
    pub fn from_persisted(
        nodes: Vec<Node>,
        current_node: usize,
        config: &ProgressionConfig,
    ) -> Result<Self, ProgressError> {
        if nodes.len() != config.node_count() {
            return Err(ProgressError::WrongNodeCount {
                expected: config.node_count(),
                found: nodes.len(),
            });
        }
        for (position, node) in nodes.iter().enumerate() {
            if node.index() != position {
                return Err(ProgressError::IndexMismatch {
                    position,
                    index: node.index(),
                });
            }
        }
        if !nodes[0].unlocked() {
            return Err(ProgressError::FirstNodeLocked);
        }
        for index in 1..nodes.len() {
            if nodes[index].unlocked() && !nodes[index - 1].completed() {
                return Err(ProgressError::PrematureUnlock { index });
            }
        }
        if current_node >= nodes.len() {
            return Err(ProgressError::CurrentOutOfRange {
                current: current_node,
                count: nodes.len(),
            });
        }

        Ok(Self {
            nodes,
            current_node,
        })
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    #[must_use]
    pub fn current_node(&self) -> usize {
        self.current_node
    }

    /// Record `index` as the node the player is working on. Out-of-range
    /// indices are ignored.
    pub fn set_current(&mut self, index: usize) -> bool {
        if index < self.nodes.len() {
            self.current_node = index;
            true
        } else {
            false
        }
    }

    /// Sum of XP across all nodes. Display-only, never stored.
    #[must_use]
    pub fn total_xp(&self) -> u64 {
        self.nodes.iter().map(|node| u64::from(node.xp())).sum()
    }

    /// Credit one correct answer to the node at `index`.
    ///
    /// Adds the per-answer reward clamped to the node's requirement.
    /// Filling the bar marks the node completed and unlocks its
    /// successor; that transition is the sole unlock trigger besides
    /// node 0's initial state.
    ///
    /// Returns `None` for an out-of-range or still-locked node, leaving
    /// state untouched.
    pub fn apply_correct_answer(
        &mut self,
        index: usize,
        config: &ProgressionConfig,
    ) -> Option<AnswerOutcome> {
        let required = config.required_xp(index);
        let node = self.nodes.get_mut(index)?;
        if !node.unlocked() {
            return None;
        }

        let was_completed = node.completed();
        let xp = node.award_xp(config.xp_per_correct(), required);
        let completed = node.completed();
        let newly_completed = completed && !was_completed;

        let mut unlocked = None;
        if newly_completed {
            if let Some(next) = self.nodes.get_mut(index + 1) {
                next.unlock();
                unlocked = Some(index + 1);
            }
        }

        Some(AnswerOutcome {
            node_index: index,
            xp,
            required_xp: required,
            completed,
            newly_completed,
            unlocked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProgressionConfig {
        ProgressionConfig::default()
    }

    #[test]
    fn default_progress_matches_fresh_run() {
        let progress = Progress::new_default(&config());
        assert_eq!(progress.nodes().len(), 30);
        assert_eq!(progress.current_node(), 0);
        assert!(progress.nodes()[0].unlocked());
        for node in &progress.nodes()[1..] {
            assert!(!node.unlocked());
            assert_eq!(node.xp(), 0);
        }
        assert_eq!(progress.total_xp(), 0);
    }

    #[test]
    fn four_correct_answers_complete_node_zero_and_unlock_node_one() {
        let config = config();
        let mut progress = Progress::new_default(&config);

        for expected_xp in [25, 50, 75] {
            let outcome = progress.apply_correct_answer(0, &config).unwrap();
            assert_eq!(outcome.xp, expected_xp);
            assert!(!outcome.completed);
            assert!(!progress.nodes()[1].unlocked());
        }

        let outcome = progress.apply_correct_answer(0, &config).unwrap();
        assert_eq!(outcome.xp, 100);
        assert!(outcome.completed);
        assert!(outcome.newly_completed);
        assert_eq!(outcome.unlocked, Some(1));
        assert!(progress.nodes()[0].completed());
        assert!(progress.nodes()[1].unlocked());
    }

    #[test]
    fn answers_on_completed_node_stay_clamped() {
        let config = config();
        let mut progress = Progress::new_default(&config);
        for _ in 0..4 {
            progress.apply_correct_answer(0, &config).unwrap();
        }

        let outcome = progress.apply_correct_answer(0, &config).unwrap();
        assert_eq!(outcome.xp, 100);
        assert!(outcome.completed);
        assert!(!outcome.newly_completed);
        assert_eq!(outcome.unlocked, None);
    }

    #[test]
    fn locked_or_missing_nodes_are_ignored() {
        let config = config();
        let mut progress = Progress::new_default(&config);
        assert!(progress.apply_correct_answer(5, &config).is_none());
        assert!(progress.apply_correct_answer(99, &config).is_none());
        assert_eq!(progress.total_xp(), 0);
    }

    #[test]
    fn unlocking_is_monotonic_across_operations() {
        let config = config();
        let mut progress = Progress::new_default(&config);
        for _ in 0..4 {
            progress.apply_correct_answer(0, &config).unwrap();
        }
        assert!(progress.nodes()[1].unlocked());

        // Nothing that follows may relock node 1.
        progress.set_current(1);
        for _ in 0..3 {
            progress.apply_correct_answer(1, &config).unwrap();
        }
        progress.apply_correct_answer(0, &config).unwrap();
        assert!(progress.nodes()[1].unlocked());
    }

    #[test]
    fn set_current_rejects_out_of_range() {
        let mut progress = Progress::new_default(&config());
        assert!(progress.set_current(7));
        assert_eq!(progress.current_node(), 7);
        assert!(!progress.set_current(30));
        assert_eq!(progress.current_node(), 7);
    }

    #[test]
    fn rehydration_rejects_broken_unlock_chain() {
        let config = config();
        let mut nodes: Vec<Node> = (0..30).map(Node::new).collect();
        // Unlock node 2 without completing node 1.
        nodes[2] = Node::from_persisted(2, 0, false, true, config.required_xp(2)).unwrap();

        let err = Progress::from_persisted(nodes, 0, &config).unwrap_err();
        assert!(matches!(err, ProgressError::PrematureUnlock { index: 2 }));
    }

    #[test]
    fn rehydration_rejects_wrong_count_and_bad_current() {
        let config = config();
        let nodes: Vec<Node> = (0..10).map(Node::new).collect();
        let err = Progress::from_persisted(nodes, 0, &config).unwrap_err();
        assert!(matches!(err, ProgressError::WrongNodeCount { .. }));

        let nodes: Vec<Node> = (0..30).map(Node::new).collect();
        let err = Progress::from_persisted(nodes, 30, &config).unwrap_err();
        assert!(matches!(err, ProgressError::CurrentOutOfRange { .. }));
    }
}
