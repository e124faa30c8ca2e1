use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::Config;
use crate::error::Result;
use crate::model::{
    common::{Answer, FormId, FormMetadata, Identity},
    question::Question,
};

use super::Form;

/// A shared reference to a published form.
///
/// Every clone refers to the same form. Reads may proceed concurrently, while
/// [`FormHandle::add_question`] and [`FormHandle::submit_answer`] each hold the
/// form's write lock for their whole duration.
#[derive(Debug, Clone)]
pub struct FormHandle {
    form: Arc<RwLock<Form>>,
    config: Arc<Config>,
}

impl FormHandle {
    pub(crate) fn new(form: Form, config: Arc<Config>) -> Self {
        Self {
            form: Arc::new(RwLock::new(form)),
            config,
        }
    }

    // A panic while holding the lock cannot leave a form half-mutated: each
    // write is a single push or map insert.
    fn read(&self) -> RwLockReadGuard<'_, Form> {
        self.form.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Form> {
        self.form.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> FormId {
        self.read().id()
    }

    pub fn owner(&self) -> Identity {
        self.read().owner().clone()
    }

    pub fn metadata(&self) -> FormMetadata {
        self.read().metadata().clone()
    }

    /// A copy of the form's questions, in order, including recorded answers.
    pub fn questions(&self) -> Vec<Question> {
        self.read().questions().to_vec()
    }

    pub fn question_count(&self) -> usize {
        self.read().questions().len()
    }

    /// A consistent copy of the entire form.
    pub fn snapshot(&self) -> Form {
        self.read().clone()
    }

    /// Append a question. Only the owner may do this.
    pub fn add_question(&self, question: Question, caller: &Identity) -> Result<()> {
        self.write().add_question(question, caller, &self.config)
    }

    /// Submit `respondent`'s answers, one per question, in question order.
    pub fn submit_answer(&self, answers: Vec<Answer>, respondent: &Identity) -> Result<()> {
        self.write()
            .submit_answers(answers, respondent, self.config.submission())
    }

    /// Has `respondent` answered any question of this form?
    pub fn has_responded(&self, respondent: &Identity) -> bool {
        self.read()
            .questions()
            .iter()
            .any(|question| question.has_answered(respondent))
    }
}
