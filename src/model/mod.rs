pub mod common;
pub mod form;
pub mod question;
pub mod respondent_mapping;
pub mod submission;
