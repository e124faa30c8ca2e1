use std::collections::{hash_map::Entry, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::common::{Answer, Identity, QuestionId};

/// A single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question ID, chosen by the form owner.
    id: QuestionId,
    /// Free-form tag describing the expected answer shape, e.g. "single-choice".
    #[serde(rename = "type")]
    kind: String,
    /// Question text.
    prompt: String,
    /// Allowed choices, for choice-type questions.
    options: Option<Vec<String>>,
    /// Recorded answers by respondent. Each respondent answers at most once.
    answers: HashMap<Identity, Answer>,
}

/// Create a new question with no answers.
pub fn create_question(
    id: impl Into<QuestionId>,
    kind: impl Into<String>,
    prompt: impl Into<String>,
    options: Option<Vec<String>>,
) -> Question {
    Question {
        id: id.into(),
        kind: kind.into(),
        prompt: prompt.into(),
        options,
        answers: HashMap::new(),
    }
}

impl Question {
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }

    /// Number of respondents who have answered this question.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// The answer recorded for `respondent`, if any.
    pub fn answer(&self, respondent: &Identity) -> Option<&str> {
        self.answers.get(respondent).map(String::as_str)
    }

    pub fn has_answered(&self, respondent: &Identity) -> bool {
        self.answers.contains_key(respondent)
    }

    /// Read-only view of every recorded answer.
    pub fn answers(&self) -> &HashMap<Identity, Answer> {
        &self.answers
    }

    /// Record `answer` for `respondent` unless they have already answered.
    /// Returns whether the answer was recorded; an existing answer is never replaced.
    pub(crate) fn record_answer(&mut self, respondent: &Identity, answer: Answer) -> bool {
        match self.answers.entry(respondent.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(answer);
                true
            }
        }
    }
}
