use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The address of an account interacting with forms: an owner or a respondent.
/// Resolving and authenticating identities is the caller's job; here they are
/// only compared by value.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Identity {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl From<&str> for Identity {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

/// A unique identifier for a published form, allocated by the registry.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(u32);

impl FormId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for FormId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FormId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
