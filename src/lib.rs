//! Survey forms: owners publish forms made of questions, and respondents
//! submit one answer per question, at most once each.

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate registry_test;

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod registry;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{
    common::{Answer, FormId, FormMetadata, Identity, QuestionId},
    form::{Form, FormHandle, FormSpec, QuestionSpec},
    question::{create_question, Question},
    respondent_mapping::{MappingHandle, RespondentMapping},
    submission::SubmissionPolicy,
};
pub use registry::Registry;
