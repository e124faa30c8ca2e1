mod identity;
mod metadata;

pub use identity::{FormId, Identity};
pub use metadata::FormMetadata;

/// Question IDs are opaque strings chosen by the form owner.
pub type QuestionId = String;
/// Answers are recorded as raw text; their content is never interpreted.
pub type Answer = String;
