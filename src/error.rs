use thiserror::Error;

use crate::model::common::{FormId, Identity, QuestionId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Not owner: {caller} may not modify form {form}")]
    NotOwner { form: FormId, caller: Identity },
    #[error("Question/answer mismatch: form has {questions} questions but {answers} answers were submitted")]
    QuestionAnswerMismatch { questions: usize, answers: usize },
    #[error("Already answered: {respondent} has already answered question {index} ('{question}') of form {form}")]
    AlreadyAnswered {
        form: FormId,
        index: usize,
        question: QuestionId,
        respondent: Identity,
    },
    #[error("Duplicate question ID: form {form} already has a question '{question}'")]
    DuplicateQuestionId { form: FormId, question: QuestionId },
    #[error("Form IDs exhausted: no further forms can be created")]
    FormIdsExhausted,
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Construct an [`Error::NotFound`] describing the missing entity.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
