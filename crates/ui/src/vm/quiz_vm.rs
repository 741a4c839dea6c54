use std::time::Duration;

use quest_core::model::Progress;
use services::{AnswerVerdict, QuizLoopService, QuizPhase, QuizSession};

use crate::views::ViewError;

/// What the view should do after an answer was judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Input was ignored; nothing to schedule.
    Ignored,
    /// Show feedback, then advance after the session's pending delay.
    Feedback,
    /// Node completed: celebrate, then close after the pending delay.
    Completed { unlocked: Option<usize> },
}

/// View-model over one open quiz session.
///
/// Tracks the XP bar alongside the session so the modal can render
/// without reaching back into the progress snapshot.
pub struct QuizVm {
    session: QuizSession,
    xp: u32,
    required_xp: u32,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession, xp: u32, required_xp: u32) -> Self {
        Self {
            session,
            xp,
            required_xp,
        }
    }

    #[must_use]
    pub fn node_number(&self) -> usize {
        self.session.node_index() + 1
    }

    #[must_use]
    pub fn difficulty_label(&self) -> String {
        self.session.difficulty().as_str().to_uppercase()
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[must_use]
    pub fn required_xp(&self) -> u32 {
        self.required_xp
    }

    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        if self.required_xp == 0 {
            return 0.0;
        }
        (self.xp as f32 / self.required_xp as f32) * 100.0
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.session.current_question().prompt()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        self.session.current_question().options()
    }

    /// Whether option buttons should accept clicks right now.
    #[must_use]
    pub fn accepting_input(&self) -> bool {
        self.session.phase() == QuizPhase::Presenting
    }

    #[must_use]
    pub fn feedback_message(&self) -> Option<&'static str> {
        match self.session.phase() {
            QuizPhase::Feedback(AnswerVerdict::Correct) | QuizPhase::Completed => {
                Some("✅ Correct!")
            }
            QuizPhase::Feedback(AnswerVerdict::Incorrect) => Some("❌ Try another one!"),
            QuizPhase::Presenting => None,
        }
    }

    /// Delay before the currently scheduled transition, if any.
    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        self.session.pending_delay()
    }

    /// Judge `selected` and commit any XP award.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when persisting the award fails.
    pub async fn answer(
        &mut self,
        quiz_loop: &QuizLoopService,
        progress: &mut Progress,
        selected: usize,
    ) -> Result<QuizOutcome, ViewError> {
        let result = quiz_loop
            .answer(progress, &mut self.session, selected)
            .await
            .map_err(|_| ViewError::Unknown)?;

        let Some(result) = result else {
            return Ok(QuizOutcome::Ignored);
        };

        if result.verdict == AnswerVerdict::Correct {
            self.xp = result.xp;
        }
        if result.completed {
            return Ok(QuizOutcome::Completed {
                unlocked: result.unlocked,
            });
        }
        Ok(QuizOutcome::Feedback)
    }

    /// Leave the feedback flash for the next question. No-op when the
    /// session is not in feedback, which is what defuses stale timers.
    pub fn advance(&mut self) {
        self.session.advance();
    }
}
