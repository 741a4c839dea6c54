use thiserror::Error;

use crate::model::{Difficulty, Question};

/// Every tier must carry at least this many questions so a session
/// always has material to loop over.
pub const MIN_POOL_SIZE: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("{tier} pool needs at least {MIN_POOL_SIZE} questions, got {len}")]
    PoolTooSmall { tier: Difficulty, len: usize },
}

/// Static mapping from difficulty tier to its question pool.
///
/// Pools are fixed at construction and handed out read-only; sessions
/// copy and shuffle them, the bank itself never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    easy: Vec<Question>,
    medium: Vec<Question>,
    hard: Vec<Question>,
    expert: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from four tier pools.
    ///
    /// # Errors
    ///
    /// Returns `BankError::PoolTooSmall` if any tier carries fewer than
    /// `MIN_POOL_SIZE` questions.
    pub fn new(
        easy: Vec<Question>,
        medium: Vec<Question>,
        hard: Vec<Question>,
        expert: Vec<Question>,
    ) -> Result<Self, BankError> {
        for (tier, pool) in [
            (Difficulty::Easy, &easy),
            (Difficulty::Medium, &medium),
            (Difficulty::Hard, &hard),
            (Difficulty::Expert, &expert),
        ] {
            if pool.len() < MIN_POOL_SIZE {
                return Err(BankError::PoolTooSmall {
                    tier,
                    len: pool.len(),
                });
            }
        }

        Ok(Self {
            easy,
            medium,
            hard,
            expert,
        })
    }

    /// The read-only question pool for `tier`.
    #[must_use]
    pub fn pool(&self, tier: Difficulty) -> &[Question] {
        match tier {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
            Difficulty::Expert => &self.expert,
        }
    }

    /// The built-in HTML quiz content, five questions per tier.
    ///
    /// # Panics
    ///
    /// Panics if the embedded content fails validation, which would be a
    /// programming error in the content tables below.
    #[must_use]
    pub fn builtin() -> Self {
        let easy = build_pool(&[
            (
                "What does HTML stand for?",
                &[
                    "Hyper Text Markup Language",
                    "Home Tool Markup Language",
                    "Hyperlinks and Text Markup Language",
                ],
                0,
            ),
            ("Which tag is used for a paragraph?", &["<p>", "<para>", "<pg>"], 0),
            ("Which tag inserts an image?", &["<img>", "<image>", "<src>"], 0),
            ("Which tag creates a hyperlink?", &["<link>", "<a>", "<href>"], 1),
            ("Which tag creates an unordered list?", &["<ol>", "<ul>", "<li>"], 1),
        ]);
        let medium = build_pool(&[
            (
                "Which attribute contains the URL for a link?",
                &["href", "src", "alt"],
                0,
            ),
            (
                "Where does the <title> tag belong?",
                &["<head>", "<body>", "<footer>"],
                0,
            ),
            ("Which tag groups table rows?", &["<tr>", "<td>", "<th>"], 0),
            (
                "What's the semantic tag for main content?",
                &["<main>", "<section>", "<div>"],
                0,
            ),
            (
                "How do you make text bold in HTML?",
                &["<b>", "<strong>", "Both are acceptable"],
                2,
            ),
        ]);
        let hard = build_pool(&[
            (
                "Which attribute provides alternate text for images?",
                &["alt", "title", "caption"],
                0,
            ),
            (
                "Which tag is used for embedding a video (HTML5)?",
                &["<video>", "<media>", "<embed>"],
                0,
            ),
            (
                "Which tag should contain site navigation links?",
                &["<nav>", "<header>", "<aside>"],
                0,
            ),
            (
                "What is ARIA used for?",
                &[
                    "Accessibility features",
                    "Styling elements",
                    "Database connections",
                ],
                0,
            ),
            (
                "Which element is best for marking up a self-contained composition?",
                &["<article>", "<div>", "<section>"],
                0,
            ),
        ]);
        let expert = build_pool(&[
            (
                "What's the purpose of the 'rel' attribute on <link> tags?",
                &[
                    "Defines relationship/behavior",
                    "Refers to remote resources only",
                    "Sets rendering mode",
                ],
                0,
            ),
            (
                "Which attribute makes an input required in a form?",
                &["required", "must", "validate"],
                0,
            ),
            (
                "Which tag group is valid inside <table> (HTML5)?",
                &[
                    "<caption>, <thead>, <tbody>, <tfoot>",
                    "<section>, <article>",
                    "<nav>, <aside>",
                ],
                0,
            ),
            (
                "Which meta tag sets the viewport for responsive design?",
                &[
                    "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
                    "<meta name=\"size\">",
                    "<meta name=\"responsive\">",
                ],
                0,
            ),
            (
                "When should you use <button type='submit'> vs <a> links?",
                &[
                    "Forms submit use button, navigation use <a>",
                    "Both are interchangeable",
                    "Use <a> for everything",
                ],
                0,
            ),
        ]);

        Self::new(easy, medium, hard, expert).expect("builtin pools should satisfy bank rules")
    }
}

fn build_pool(entries: &[(&str, &[&str], usize)]) -> Vec<Question> {
    entries
        .iter()
        .map(|(prompt, options, correct)| {
            let options = options.iter().map(|s| (*s).to_owned()).collect();
            Question::new(*prompt, options, *correct)
                .expect("builtin question should be well-formed")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_has_five_questions_per_tier() {
        let bank = QuestionBank::builtin();
        for tier in Difficulty::ALL {
            assert_eq!(bank.pool(tier).len(), 5, "{tier}");
        }
    }

    #[test]
    fn undersized_pool_is_rejected() {
        let bank = QuestionBank::builtin();
        let mut easy = bank.pool(Difficulty::Easy).to_vec();
        easy.truncate(3);

        let err = QuestionBank::new(
            easy,
            bank.pool(Difficulty::Medium).to_vec(),
            bank.pool(Difficulty::Hard).to_vec(),
            bank.pool(Difficulty::Expert).to_vec(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BankError::PoolTooSmall {
                tier: Difficulty::Easy,
                len: 3
            }
        ));
    }
}
