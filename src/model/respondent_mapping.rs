use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::model::common::{FormId, Identity};

/// The identities that have engaged with a form.
///
/// This is a log kept alongside the form, not derived from it: recording a
/// respondent here says nothing about whether they have submitted answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentMapping {
    /// The form being tracked.
    form_id: FormId,
    /// Respondents in the order they were added.
    respondents: Vec<Identity>,
}

impl RespondentMapping {
    /// Create an empty mapping for the given form.
    pub fn new(form_id: FormId) -> Self {
        Self {
            form_id,
            respondents: Vec::new(),
        }
    }

    pub fn form_id(&self) -> FormId {
        self.form_id
    }

    pub fn respondents(&self) -> &[Identity] {
        &self.respondents
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.respondents.contains(identity)
    }

    /// Record `identity`. Duplicates are kept unless `unique` is set, in which
    /// case an identity already present is skipped. Returns whether it was recorded.
    pub fn add_respondent(&mut self, identity: Identity, unique: bool) -> bool {
        if unique && self.contains(&identity) {
            return false;
        }
        self.respondents.push(identity);
        true
    }
}

/// A shared reference to a published [`RespondentMapping`].
#[derive(Debug, Clone)]
pub struct MappingHandle {
    mapping: Arc<RwLock<RespondentMapping>>,
    config: Arc<Config>,
}

impl MappingHandle {
    pub(crate) fn new(mapping: RespondentMapping, config: Arc<Config>) -> Self {
        Self {
            mapping: Arc::new(RwLock::new(mapping)),
            config,
        }
    }

    pub fn form_id(&self) -> FormId {
        self.mapping
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .form_id()
    }

    /// A copy of the recorded respondents, in order.
    pub fn respondents(&self) -> Vec<Identity> {
        self.mapping
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .respondents()
            .to_vec()
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.mapping
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(identity)
    }

    /// Record `identity` as a respondent. Returns whether it was recorded.
    pub fn add_respondent(&self, identity: Identity) -> bool {
        let mut mapping = self.mapping.write().unwrap_or_else(PoisonError::into_inner);
        let recorded = mapping.add_respondent(identity, self.config.unique_respondents());
        if recorded {
            debug!(
                "Form {} now has {} respondent entries",
                mapping.form_id(),
                mapping.respondents().len()
            );
        }
        recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_kept_by_default() {
        let handle = MappingHandle::new(
            RespondentMapping::new(FormId::from(1)),
            Arc::new(Config::default()),
        );
        let respondent = Identity::respondent_example1();

        assert!(handle.add_respondent(respondent.clone()));
        assert!(handle.add_respondent(respondent.clone()));

        assert_eq!(handle.respondents(), vec![respondent.clone(), respondent]);
    }

    #[test]
    fn duplicates_are_skipped_when_unique() {
        let handle = MappingHandle::new(
            RespondentMapping::new(FormId::from(1)),
            Arc::new(Config::default().with_unique_respondents(true)),
        );
        let first = Identity::respondent_example1();
        let second = Identity::respondent_example2();

        assert!(handle.add_respondent(first.clone()));
        assert!(!handle.add_respondent(first.clone()));
        assert!(handle.add_respondent(second.clone()));

        assert_eq!(handle.respondents(), vec![first, second]);
    }

    #[test]
    fn order_is_preserved() {
        let mut mapping = RespondentMapping::new(FormId::from(4));
        for address in ["0x3", "0x1", "0x2"] {
            mapping.add_respondent(Identity::from(address), false);
        }

        assert_eq!(mapping.form_id(), FormId::from(4));
        assert_eq!(
            mapping.respondents(),
            [Identity::from("0x3"), Identity::from("0x1"), Identity::from("0x2")]
        );
        assert!(mapping.contains(&Identity::from("0x1")));
        assert!(!mapping.contains(&Identity::from("0x4")));
    }
}
