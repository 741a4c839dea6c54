use std::time::Duration;

use quest_core::model::{Difficulty, Question};

use super::queue::QuestionQueue;

/// Pause between a correct-answer flash and the next question.
pub const CORRECT_FEEDBACK_DELAY: Duration = Duration::from_millis(650);
/// Pause between a wrong-answer flash and the next question.
pub const WRONG_FEEDBACK_DELAY: Duration = Duration::from_millis(700);
/// Pause between filling the XP bar and closing the quiz.
pub const COMPLETION_CLOSE_DELAY: Duration = Duration::from_millis(900);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    Correct,
    Incorrect,
}

/// Where the session currently stands.
///
/// `Feedback` is the transient flash after an answer; the presentation
/// layer schedules `advance` after the matching delay. `Completed` is
/// terminal: the node's XP bar is full and the session only waits to
/// be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Presenting,
    Feedback(AnswerVerdict),
    Completed,
}

/// One open node's quiz: a shuffled question queue plus the phase
/// machine driving it. Transient by design — dropping the session is
/// `close()`, and only XP already committed to `Progress` survives.
#[derive(Debug, Clone)]
pub struct QuizSession {
    node_index: usize,
    difficulty: Difficulty,
    queue: QuestionQueue,
    current: Question,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start a session over `pool`. Returns `None` for an empty pool.
    pub(crate) fn start(node_index: usize, difficulty: Difficulty, pool: &[Question]) -> Option<Self> {
        let mut queue = QuestionQueue::new(pool.to_vec())?;
        let current = queue.next();
        Some(Self {
            node_index,
            difficulty,
            queue,
            current,
            phase: QuizPhase::Presenting,
        })
    }

    #[must_use]
    pub fn node_index(&self) -> usize {
        self.node_index
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.current
    }

    /// Whether the session reached its terminal state.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    /// Judge the selected option.
    ///
    /// Only legal while a question is presented; in any other phase, or
    /// for an option index the current question does not have, the
    /// input is ignored and `None` is returned. State is untouched in
    /// the ignored case.
    pub fn answer(&mut self, selected: usize) -> Option<AnswerVerdict> {
        if self.phase != QuizPhase::Presenting {
            return None;
        }
        if selected >= self.current.options().len() {
            return None;
        }

        let verdict = if self.current.is_correct(selected) {
            AnswerVerdict::Correct
        } else {
            AnswerVerdict::Incorrect
        };
        self.phase = QuizPhase::Feedback(verdict);
        Some(verdict)
    }

    /// Leave the feedback flash and present the next question.
    ///
    /// A no-op unless the session is in `Feedback`; this is what makes
    /// a stale auto-advance timer harmless after completion or after
    /// the session was replaced.
    pub fn advance(&mut self) -> bool {
        if !matches!(self.phase, QuizPhase::Feedback(_)) {
            return false;
        }
        self.current = self.queue.next();
        self.phase = QuizPhase::Presenting;
        true
    }

    /// Move to the terminal state once the node's XP bar filled.
    pub(crate) fn mark_completed(&mut self) {
        self.phase = QuizPhase::Completed;
    }

    /// How long the presentation layer should linger in the current
    /// phase before its scheduled transition, if one is due.
    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        match self.phase {
            QuizPhase::Presenting => None,
            QuizPhase::Feedback(AnswerVerdict::Correct) => Some(CORRECT_FEEDBACK_DELAY),
            QuizPhase::Feedback(AnswerVerdict::Incorrect) => Some(WRONG_FEEDBACK_DELAY),
            QuizPhase::Completed => Some(COMPLETION_CLOSE_DELAY),
        }
    }
}
