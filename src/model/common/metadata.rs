use serde::{Deserialize, Serialize};

/// A view on just the form's descriptive metadata.
/// None of these fields are validated or interpreted.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct FormMetadata {
    /// Who the form is aimed at.
    pub audience: String,
    /// What kind of data the form collects.
    pub data_type: String,
    /// Why the data is being collected.
    pub purpose: String,
    /// Demographic the respondents are drawn from.
    pub demographic: String,
}

impl FormMetadata {
    pub fn new(
        audience: impl Into<String>,
        data_type: impl Into<String>,
        purpose: impl Into<String>,
        demographic: impl Into<String>,
    ) -> Self {
        Self {
            audience: audience.into(),
            data_type: data_type.into(),
            purpose: purpose.into(),
            demographic: demographic.into(),
        }
    }
}
