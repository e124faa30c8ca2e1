use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{
    common::{FormId, FormMetadata, Identity},
    question::Question,
};

/// Core form data: an owned, append-only sequence of questions plus metadata.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Form {
    /// Unique ID.
    id: FormId,
    /// Creator of the form; the only identity allowed to add questions.
    owner: Identity,
    /// Top-level metadata.
    #[serde(flatten)]
    metadata: FormMetadata,
    /// Creation time.
    created_at: DateTime<Utc>,
    /// Form questions, in answer order.
    questions: Vec<Question>,
}

impl Form {
    /// Create a new form owned by `owner`.
    pub fn new(
        id: FormId,
        metadata: FormMetadata,
        questions: Vec<Question>,
        owner: Identity,
    ) -> Self {
        Self {
            id,
            owner,
            metadata,
            created_at: Utc::now(),
            questions,
        }
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    pub fn metadata(&self) -> &FormMetadata {
        &self.metadata
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Find the first question with the given ID.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    pub(crate) fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    /// Append `question` to the end of the form.
    ///
    /// Only the owner may do this. With [`Config::unique_question_ids`] set, a
    /// question whose ID is already present is rejected too.
    pub fn add_question(
        &mut self,
        question: Question,
        caller: &Identity,
        config: &Config,
    ) -> Result<()> {
        if *caller != self.owner {
            warn!("{caller} tried to add a question to form {}", self.id);
            return Err(Error::NotOwner {
                form: self.id,
                caller: caller.clone(),
            });
        }
        if config.unique_question_ids() && self.question(question.id()).is_some() {
            warn!(
                "{caller} tried to add a second question '{}' to form {}",
                question.id(),
                self.id
            );
            return Err(Error::DuplicateQuestionId {
                form: self.id,
                question: question.id().clone(),
            });
        }

        debug!("Adding question '{}' to form {}", question.id(), self.id);
        self.questions.push(question);
        Ok(())
    }
}

/// Example test data.
#[cfg(test)]
mod examples {
    use super::*;

    impl Form {
        pub fn example(questions: Vec<Question>) -> Self {
            Self::new(
                FormId::from(1),
                FormMetadata::example(),
                questions,
                Identity::owner_example(),
            )
        }
    }
}
