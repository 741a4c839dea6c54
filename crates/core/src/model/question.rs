use thiserror::Error;

/// A question must offer between 2 and 4 answer options.
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least {MIN_OPTIONS} options, got {len}")]
    TooFewOptions { len: usize },

    #[error("question allows at most {MAX_OPTIONS} options, got {len}")]
    TooManyOptions { len: usize },

    #[error("correct option {index} out of range for {len} options")]
    CorrectOutOfRange { index: usize, len: usize },
}

/// One multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is empty, the option count
    /// is outside `[MIN_OPTIONS, MAX_OPTIONS]`, or `correct_option`
    /// does not address an option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                len: options.len(),
            });
        }
        if options.len() > MAX_OPTIONS {
            return Err(QuestionError::TooManyOptions {
                len: options.len(),
            });
        }
        if correct_option >= options.len() {
            return Err(QuestionError::CorrectOutOfRange {
                index: correct_option,
                len: options.len(),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_option,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Whether `selected` addresses the correct option.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn accepts_two_to_four_options() {
        assert!(Question::new("Q?", opts(&["a", "b"]), 0).is_ok());
        assert!(Question::new("Q?", opts(&["a", "b", "c", "d"]), 3).is_ok());
    }

    #[test]
    fn rejects_bad_shapes() {
        let err = Question::new("Q?", opts(&["only"]), 0).unwrap_err();
        assert!(matches!(err, QuestionError::TooFewOptions { len: 1 }));

        let err = Question::new("Q?", opts(&["a", "b", "c", "d", "e"]), 0).unwrap_err();
        assert!(matches!(err, QuestionError::TooManyOptions { len: 5 }));

        let err = Question::new("Q?", opts(&["a", "b"]), 2).unwrap_err();
        assert!(matches!(err, QuestionError::CorrectOutOfRange { .. }));

        let err = Question::new("   ", opts(&["a", "b"]), 0).unwrap_err();
        assert!(matches!(err, QuestionError::EmptyPrompt));
    }

    #[test]
    fn answer_check_matches_correct_index() {
        let question = Question::new("Q?", opts(&["a", "b", "c"]), 1).unwrap();
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(5));
    }
}
