use serde::{Deserialize, Serialize};

use crate::model::{
    common::{FormId, FormMetadata, Identity, QuestionId},
    question::{create_question, Question},
};

use super::Form;

/// A form specification, e.g. as loaded from a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    /// Top-level metadata.
    #[serde(flatten)]
    pub metadata: FormMetadata,
    /// Question specifications, in answer order.
    #[serde(default)]
    pub questions: Vec<QuestionSpec>,
}

impl FormSpec {
    /// Build an unanswered form with the given ID and owner.
    pub fn into_form(self, id: FormId, owner: Identity) -> Form {
        Form::new(
            id,
            self.metadata,
            self.questions.into_iter().map(Question::from).collect(),
            owner,
        )
    }
}

/// A question specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl From<QuestionSpec> for Question {
    fn from(spec: QuestionSpec) -> Self {
        create_question(spec.id, spec.kind, spec.prompt, spec.options)
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl FormSpec {
        pub fn example() -> Self {
            Self {
                metadata: FormMetadata::example(),
                questions: vec![QuestionSpec::example1(), QuestionSpec::example2()],
            }
        }
    }

    impl QuestionSpec {
        pub fn example1() -> Self {
            Self {
                id: "Q1".to_string(),
                kind: "single-choice".to_string(),
                prompt: "Would you recommend this course?".to_string(),
                options: Some(vec!["yes".to_string(), "no".to_string()]),
            }
        }

        pub fn example2() -> Self {
            Self {
                id: "Q2".to_string(),
                kind: "text".to_string(),
                prompt: "What should we change?".to_string(),
                options: None,
            }
        }
    }
}
