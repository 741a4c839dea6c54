use crate::model::Difficulty;

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Tunable constants driving XP requirements and tier assignment.
///
/// Defaults mirror the shipped game: 30 nodes, 100 base XP, +25 XP of
/// requirement per node, 25 XP per correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionConfig {
    node_count: usize,
    base_xp: u32,
    xp_increment_per_node: u32,
    xp_per_correct: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            node_count: 30,
            base_xp: 100,
            xp_increment_per_node: 25,
            xp_per_correct: 25,
        }
    }
}

impl ProgressionConfig {
    /// Creates a config with explicit constants. `node_count` must be > 0.
    #[must_use]
    pub fn new(node_count: usize, base_xp: u32, xp_increment_per_node: u32, xp_per_correct: u32) -> Self {
        Self {
            node_count,
            base_xp,
            xp_increment_per_node,
            xp_per_correct,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[must_use]
    pub fn xp_per_correct(&self) -> u32 {
        self.xp_per_correct
    }

    /// XP required to complete the node at `index`. Strictly increasing.
    #[must_use]
    pub fn required_xp(&self, index: usize) -> u32 {
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_xp
            .saturating_add(step.saturating_mul(self.xp_increment_per_node))
    }

    /// Difficulty tier for the node at `index`.
    ///
    /// The node range is split into four bands of `ceil(node_count / 4)`
    /// nodes, the last band absorbing the remainder. For 30 nodes this
    /// yields the canonical boundaries at indices 8, 16 and 24.
    #[must_use]
    pub fn difficulty_for_node(&self, index: usize) -> Difficulty {
        let band = self.node_count.div_ceil(4).max(1);
        match index / band {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            2 => Difficulty::Hard,
            _ => Difficulty::Expert,
        }
    }
}

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Result of crediting one correct answer to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub node_index: usize,
    pub xp: u32,
    pub required_xp: u32,
    pub completed: bool,
    /// True only on the transition that filled the XP bar.
    pub newly_completed: bool,
    /// Index of the node unlocked by this answer, if any.
    pub unlocked: Option<usize>,
}
