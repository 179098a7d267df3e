use crate::trivia_engine::models::{AnswerKey, Question};

/// Why a generated question was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("option {0} is blank")]
    BlankOption(AnswerKey),
    #[error("options {0} and {1} have the same text")]
    DuplicateOption(AnswerKey, AnswerKey),
    #[error("correct answer {0} does not point at a populated option")]
    UnresolvedAnswer(AnswerKey),
}

/// Check every structural rule, reporting the first one broken.
pub fn check(question: &Question) -> Result<(), ValidationError> {
    if question.correct_text().trim().is_empty() {
        return Err(ValidationError::UnresolvedAnswer(question.correct_answer));
    }

    for (key, text) in question.keyed_options() {
        if text.trim().is_empty() {
            return Err(ValidationError::BlankOption(key));
        }
    }

    for (i, a) in AnswerKey::ALL.iter().enumerate() {
        for b in &AnswerKey::ALL[i + 1..] {
            if question.option(*a) == question.option(*b) {
                return Err(ValidationError::DuplicateOption(*a, *b));
            }
        }
    }
    Ok(())
}

/// `true` when the question is safe to show.
pub fn validate(question: &Question) -> bool {
    check(question).is_ok()
}
