use quest_core::QuestionBank;
use quest_core::model::Progress;

use super::session::{AnswerVerdict, QuizSession};
use crate::error::QuizError;
use crate::progress_service::ProgressService;

/// Result of judging a single answer, with the node's XP state after
/// any award was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub verdict: AnswerVerdict,
    pub xp: u32,
    pub required_xp: u32,
    /// The node is done and the session is terminal.
    pub completed: bool,
    /// Index of the node this answer unlocked, if any.
    pub unlocked: Option<usize>,
    /// Fire the celebratory effect. Set only on the completing answer.
    pub celebrate: bool,
}

/// Orchestrates quiz sessions against the question bank and persisted
/// progress: opening nodes, judging answers, committing XP.
#[derive(Clone)]
pub struct QuizLoopService {
    bank: QuestionBank,
    progress: ProgressService,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(bank: QuestionBank, progress: ProgressService) -> Self {
        Self { bank, progress }
    }

    #[must_use]
    pub fn progress_service(&self) -> &ProgressService {
        &self.progress
    }

    /// Open a quiz session for the node at `node_index`.
    ///
    /// A locked or unknown node yields `Ok(None)`: refusing the open is
    /// a UI affordance, not an error. Opening records the node as
    /// current and saves the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the snapshot cannot be persisted.
    pub async fn open(
        &self,
        progress: &mut Progress,
        node_index: usize,
    ) -> Result<Option<QuizSession>, QuizError> {
        let Some(node) = progress.node(node_index) else {
            return Ok(None);
        };
        if !node.unlocked() {
            return Ok(None);
        }

        progress.set_current(node_index);
        self.progress.save(progress).await.map_err(QuizError::from)?;

        let difficulty = self.progress.config().difficulty_for_node(node_index);
        Ok(QuizSession::start(
            node_index,
            difficulty,
            self.bank.pool(difficulty),
        ))
    }

    /// Judge the selected option for the session's current question.
    ///
    /// Ignored input (wrong phase, out-of-range option) yields
    /// `Ok(None)` with no state change. A correct answer commits XP and
    /// saves; the completing answer additionally moves the session to
    /// its terminal state and asks the caller to celebrate.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the snapshot cannot be persisted after a
    /// committed award.
    pub async fn answer(
        &self,
        progress: &mut Progress,
        session: &mut QuizSession,
        selected: usize,
    ) -> Result<Option<QuizAnswerResult>, QuizError> {
        let Some(verdict) = session.answer(selected) else {
            return Ok(None);
        };

        let node_index = session.node_index();
        let config = self.progress.config();
        let required_xp = config.required_xp(node_index);

        if verdict == AnswerVerdict::Incorrect {
            let xp = progress.node(node_index).map_or(0, |node| node.xp());
            return Ok(Some(QuizAnswerResult {
                verdict,
                xp,
                required_xp,
                completed: false,
                unlocked: None,
                celebrate: false,
            }));
        }

        let Some(outcome) = progress.apply_correct_answer(node_index, config) else {
            // The session only opens unlocked nodes, so this can fire
            // only if the snapshot was swapped underneath the session.
            return Ok(None);
        };
        self.progress.save(progress).await.map_err(QuizError::from)?;

        if outcome.newly_completed {
            session.mark_completed();
        }

        Ok(Some(QuizAnswerResult {
            verdict,
            xp: outcome.xp,
            required_xp: outcome.required_xp,
            completed: outcome.newly_completed,
            unlocked: outcome.unlocked,
            celebrate: outcome.newly_completed,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizPhase;
    use quest_core::ProgressionConfig;
    use std::sync::Arc;
    use storage::{InMemoryRepository, ProgressRepository};

    fn build_service(repo: &InMemoryRepository) -> QuizLoopService {
        let progress = ProgressService::new(ProgressionConfig::default(), Arc::new(repo.clone()));
        QuizLoopService::new(QuestionBank::builtin(), progress)
    }

    #[tokio::test]
    async fn locked_node_cannot_be_opened() {
        let repo = InMemoryRepository::new();
        let svc = build_service(&repo);
        let mut progress = svc.progress_service().load_or_default().await;

        assert!(svc.open(&mut progress, 1).await.unwrap().is_none());
        assert!(svc.open(&mut progress, 99).await.unwrap().is_none());
        // Refused opens leave nothing persisted.
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn opening_records_current_node_and_saves() {
        let repo = InMemoryRepository::new();
        let svc = build_service(&repo);
        let mut progress = svc.progress_service().load_or_default().await;

        let session = svc.open(&mut progress, 0).await.unwrap().unwrap();
        assert_eq!(session.node_index(), 0);
        assert_eq!(progress.current_node(), 0);
        assert!(repo.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn four_correct_answers_complete_node_zero() {
        let repo = InMemoryRepository::new();
        let svc = build_service(&repo);
        let mut progress = svc.progress_service().load_or_default().await;
        let mut session = svc.open(&mut progress, 0).await.unwrap().unwrap();

        for round in 0..4 {
            // Intersperse a wrong answer before each correct one; wrong
            // answers must not change XP or completion.
            let correct = session.current_question().correct_option();
            let wrong = (correct + 1) % session.current_question().options().len();
            let result = svc
                .answer(&mut progress, &mut session, wrong)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(result.verdict, AnswerVerdict::Incorrect);
            assert_eq!(result.xp, 25 * round);
            assert!(session.advance());

            let correct = session.current_question().correct_option();
            let result = svc
                .answer(&mut progress, &mut session, correct)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(result.verdict, AnswerVerdict::Correct);
            assert_eq!(result.xp, 25 * (round + 1));

            if round < 3 {
                assert!(!result.completed);
                assert!(session.advance());
            } else {
                assert!(result.completed);
                assert!(result.celebrate);
                assert_eq!(result.unlocked, Some(1));
            }
        }

        assert_eq!(session.phase(), QuizPhase::Completed);
        assert!(progress.nodes()[0].completed());
        assert!(progress.nodes()[1].unlocked());

        // The committed XP survived to storage.
        let reloaded = svc.progress_service().load_or_default().await;
        assert_eq!(reloaded, progress);
    }

    #[tokio::test]
    async fn answers_loop_past_the_pool_until_the_bar_fills() {
        let repo = InMemoryRepository::new();
        let svc = build_service(&repo);
        let mut progress = svc.progress_service().load_or_default().await;
        // Node 4 needs 100 + 4*25 = 200 XP, i.e. 8 correct answers —
        // more than the 5-question pool, forcing a reshuffle mid-way.
        for node in 0..4 {
            let mut session = svc.open(&mut progress, node).await.unwrap().unwrap();
            while !session.is_completed() {
                let correct = session.current_question().correct_option();
                svc.answer(&mut progress, &mut session, correct)
                    .await
                    .unwrap();
                session.advance();
            }
        }

        let mut session = svc.open(&mut progress, 4).await.unwrap().unwrap();
        let mut correct_answers = 0;
        while !session.is_completed() {
            let correct = session.current_question().correct_option();
            let result = svc
                .answer(&mut progress, &mut session, correct)
                .await
                .unwrap()
                .unwrap();
            correct_answers += 1;
            assert!(result.xp <= result.required_xp);
            session.advance();
        }
        assert_eq!(correct_answers, 8);
    }

    #[tokio::test]
    async fn ignored_answers_commit_nothing() {
        let repo = InMemoryRepository::new();
        let svc = build_service(&repo);
        let mut progress = svc.progress_service().load_or_default().await;
        let mut session = svc.open(&mut progress, 0).await.unwrap().unwrap();

        assert!(svc.answer(&mut progress, &mut session, 99).await.unwrap().is_none());
        assert_eq!(progress.total_xp(), 0);
    }
}
