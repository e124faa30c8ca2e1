pub use form_core::Form;
pub use handle::FormHandle;
pub use spec::{FormSpec, QuestionSpec};

mod form_core;
mod handle;
mod spec;
