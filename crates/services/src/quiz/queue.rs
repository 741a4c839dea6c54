use rand::rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

use quest_core::model::Question;

/// Endless shuffled queue over a fixed question pool.
///
/// Questions are drawn front-to-back; when the queue runs dry it is
/// replenished with a freshly shuffled full copy of the pool, so
/// questions repeat indefinitely across an unbounded number of draws.
/// No ordering guarantee holds across a replenishment boundary: the
/// last question of one batch may equal the first of the next.
#[derive(Debug, Clone)]
pub(crate) struct QuestionQueue {
    pool: Vec<Question>,
    queue: VecDeque<Question>,
}

impl QuestionQueue {
    /// Returns `None` for an empty pool, which the bank never produces.
    pub(crate) fn new(pool: Vec<Question>) -> Option<Self> {
        if pool.is_empty() {
            return None;
        }
        Some(Self {
            pool,
            queue: VecDeque::new(),
        })
    }

    /// Draw the next question, replenishing first if needed.
    pub(crate) fn next(&mut self) -> Question {
        if self.queue.is_empty() {
            self.replenish();
        }
        // Invariant: pool is non-empty, so a replenished queue is too.
        self.queue
            .pop_front()
            .expect("replenished queue holds at least one question")
    }

    fn replenish(&mut self) {
        let mut batch = self.pool.clone();
        let mut rng = rng();
        batch.as_mut_slice().shuffle(&mut rng);
        self.queue = batch.into();
    }

    #[cfg(test)]
    pub(crate) fn queued(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::QuestionBank;
    use quest_core::model::Difficulty;

    fn easy_pool() -> Vec<Question> {
        QuestionBank::builtin().pool(Difficulty::Easy).to_vec()
    }

    fn sorted_prompts(questions: &[Question]) -> Vec<String> {
        let mut prompts: Vec<_> = questions.iter().map(|q| q.prompt().to_owned()).collect();
        prompts.sort();
        prompts
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(QuestionQueue::new(Vec::new()).is_none());
    }

    #[test]
    fn each_batch_is_a_permutation_of_the_pool() {
        let pool = easy_pool();
        let mut queue = QuestionQueue::new(pool.clone()).unwrap();

        let batch: Vec<_> = (0..pool.len()).map(|_| queue.next()).collect();
        assert_eq!(sorted_prompts(&batch), sorted_prompts(&pool));
    }

    #[test]
    fn exhausted_queue_replenishes_with_a_full_fresh_batch() {
        let pool = easy_pool();
        let mut queue = QuestionQueue::new(pool.clone()).unwrap();

        for _ in 0..pool.len() {
            queue.next();
        }
        assert_eq!(queue.queued(), 0);

        // Drawing past the end starts a new full batch.
        let first_of_next = queue.next();
        assert_eq!(queue.queued(), pool.len() - 1);
        assert!(pool.iter().any(|q| q == &first_of_next));

        let mut rest: Vec<_> = (1..pool.len()).map(|_| queue.next()).collect();
        rest.push(first_of_next);
        assert_eq!(sorted_prompts(&rest), sorted_prompts(&pool));
    }
}
