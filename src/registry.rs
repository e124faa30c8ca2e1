use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{
    common::{FormId, FormMetadata, Identity},
    form::{Form, FormHandle, FormSpec},
    question::Question,
    respondent_mapping::{MappingHandle, RespondentMapping},
};

/// Published forms and respondent mappings, addressable by form ID.
///
/// The registry only guards its own tables. Each form and mapping has its own
/// lock, so work on one entity never waits on another.
#[derive(Debug)]
pub struct Registry {
    config: Arc<Config>,
    next_id: AtomicU32,
    forms: RwLock<HashMap<FormId, FormHandle>>,
    mappings: RwLock<HashMap<FormId, MappingHandle>>,
}

impl Registry {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            next_id: AtomicU32::new(1),
            forms: Default::default(),
            mappings: Default::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Atomically allocate the next form ID. IDs are never reused, so once
    /// the counter reaches `u32::MAX` no further forms can be created.
    fn next_id(&self) -> Result<FormId> {
        self.next_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                next.checked_add(1)
            })
            .map(FormId::from)
            .map_err(|_| Error::FormIdsExhausted)
    }

    fn publish(&self, form: Form) -> FormHandle {
        let id = form.id();
        let handle = FormHandle::new(form, self.config.clone());
        self.forms
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, handle.clone());
        handle
    }

    /// Create a form owned by `creator` and publish it.
    pub fn create_form(
        &self,
        metadata: FormMetadata,
        questions: Vec<Question>,
        creator: Identity,
    ) -> Result<FormHandle> {
        let form = Form::new(self.next_id()?, metadata, questions, creator);
        info!(
            "Published form {} owned by {} with {} questions",
            form.id(),
            form.owner(),
            form.questions().len()
        );
        Ok(self.publish(form))
    }

    /// Create a form from a specification and publish it.
    pub fn create_form_from_spec(
        &self,
        spec: FormSpec,
        creator: Identity,
    ) -> Result<FormHandle> {
        let form = spec.into_form(self.next_id()?, creator);
        info!(
            "Published form {} owned by {} from specification",
            form.id(),
            form.owner()
        );
        Ok(self.publish(form))
    }

    /// Get a published form by ID.
    pub fn form(&self, id: FormId) -> Result<FormHandle> {
        self.forms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("Form with ID '{}'", id)))
    }

    /// All published forms owned by `owner`, in creation order.
    pub fn forms_owned_by(&self, owner: &Identity) -> Vec<FormHandle> {
        let mut owned: Vec<_> = self
            .forms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|form| form.owner() == *owner)
            .cloned()
            .collect();
        owned.sort_by_key(FormHandle::id);
        owned
    }

    /// Create and publish the respondent mapping for a published form.
    ///
    /// The mapping refers to the form by ID only and is never updated together
    /// with it. A form has at most one mapping: if one was already published,
    /// that one is returned.
    pub fn create_respondent_mapping(&self, form: &FormHandle) -> MappingHandle {
        let form_id = form.id();
        let mut mappings = self.mappings.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = mappings.get(&form_id) {
            warn!("Respondent mapping for form {form_id} already exists, reusing it");
            return existing.clone();
        }
        let handle = MappingHandle::new(RespondentMapping::new(form_id), self.config.clone());
        mappings.insert(form_id, handle.clone());
        info!("Published respondent mapping for form {form_id}");
        handle
    }

    /// Get the respondent mapping for a form.
    pub fn respondent_mapping(&self, form_id: FormId) -> Result<MappingHandle> {
        self.mappings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&form_id)
            .cloned()
            .ok_or_else(|| {
                Error::not_found(format!("Respondent mapping for form with ID '{}'", form_id))
            })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
