use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::model::submission::SubmissionPolicy;

/// File consulted for configuration, relative to the working directory.
pub const CONFIG_FILE: &str = "Survey.toml";

/// Prefix of environment variables overriding the configuration file.
pub const ENV_PREFIX: &str = "SURVEY_";

/// Application configuration, derived from the built-in defaults, then
/// `Survey.toml`, then `SURVEY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    submission: SubmissionPolicy,
    unique_question_ids: bool,
    unique_respondents: bool,
}

impl Config {
    /// The layered configuration sources, lowest priority first.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load the configuration from all sources.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// What happens to earlier answers when a submission fails part-way through.
    /// Configured via `SUBMISSION`.
    pub fn submission(&self) -> SubmissionPolicy {
        self.submission
    }

    /// Reject questions whose ID is already used within the same form.
    /// Configured via `UNIQUE_QUESTION_IDS`.
    pub fn unique_question_ids(&self) -> bool {
        self.unique_question_ids
    }

    /// Skip recording a respondent a mapping already contains.
    /// Configured via `UNIQUE_RESPONDENTS`.
    pub fn unique_respondents(&self) -> bool {
        self.unique_respondents
    }

    pub fn with_submission(mut self, policy: SubmissionPolicy) -> Self {
        self.submission = policy;
        self
    }

    pub fn with_unique_question_ids(mut self, unique: bool) -> Self {
        self.unique_question_ids = unique;
        self
    }

    pub fn with_unique_respondents(mut self, unique: bool) -> Self {
        self.unique_respondents = unique;
        self
    }
}
