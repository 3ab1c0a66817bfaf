//! # Page Templates
//!
//! Generic [`TemplateDefinition`] / [`LoadedTemplate`] pair backed by a
//! [`TemplateSource`]. Hosts that do not need custom template types register a
//! [`PageDefinition`] per template identifier and get attribute storage for free.

use super::source::TemplateSource;
use crate::error::{Result, TemplateError};
use crate::registry::{LoadedTemplate, PageKey, TemplateDefinition};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Definition that builds [`PageTemplate`]s reading from a shared source
#[derive(Debug, Clone)]
pub struct PageDefinition {
    type_name: String,
    source: Arc<dyn TemplateSource>,
}

impl PageDefinition {
    pub fn new(type_name: impl Into<String>, source: Arc<dyn TemplateSource>) -> Self {
        Self {
            type_name: type_name.into(),
            source,
        }
    }

    /// Factory closure suitable for [`TemplateFactories::register_factory`].
    ///
    /// [`TemplateFactories::register_factory`]: crate::registry::TemplateFactories::register_factory
    pub fn factory(
        type_name: impl Into<String>,
        source: Arc<dyn TemplateSource>,
    ) -> impl Fn() -> Arc<dyn TemplateDefinition> + Send + Sync + 'static {
        let type_name = type_name.into();
        move || -> Arc<dyn TemplateDefinition> {
            Arc::new(PageDefinition::new(type_name.clone(), Arc::clone(&source)))
        }
    }
}

impl TemplateDefinition for PageDefinition {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn new_template(
        &self,
        key: &PageKey,
        name: &str,
        throw_on_missing: bool,
    ) -> Result<Arc<dyn LoadedTemplate>> {
        let template = PageTemplate::new(
            key.clone(),
            name,
            self.type_name.clone(),
            Arc::clone(&self.source),
        );
        template.load(throw_on_missing)?;
        Ok(Arc::new(template))
    }
}

#[derive(Debug, Default)]
struct PageState {
    title: Option<String>,
    attributes: serde_json::Map<String, serde_json::Value>,
    exists: bool,
    loaded_at: Option<DateTime<Utc>>,
    load_count: u64,
}

/// Loaded page whose attributes are refreshed from its source on every load
#[derive(Debug)]
pub struct PageTemplate {
    key: PageKey,
    name: String,
    type_name: String,
    source: Arc<dyn TemplateSource>,
    state: RwLock<PageState>,
}

impl PageTemplate {
    /// Create an unloaded template; call [`LoadedTemplate::load`] to fill it
    pub fn new(
        key: PageKey,
        name: impl Into<String>,
        type_name: impl Into<String>,
        source: Arc<dyn TemplateSource>,
    ) -> Self {
        Self {
            key,
            name: name.into(),
            type_name: type_name.into(),
            source,
            state: RwLock::new(PageState::default()),
        }
    }

    pub fn title(&self) -> Option<String> {
        self.state.read().title.clone()
    }

    pub fn attributes(&self) -> serde_json::Map<String, serde_json::Value> {
        self.state.read().attributes.clone()
    }

    /// Whether the last load found stored data
    pub fn is_loaded(&self) -> bool {
        self.state.read().exists
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().loaded_at
    }

    pub fn load_count(&self) -> u64 {
        self.state.read().load_count
    }
}

impl LoadedTemplate for PageTemplate {
    fn key(&self) -> &PageKey {
        &self.key
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn load(&self, throw_on_missing: bool) -> Result<()> {
        let record = self.source.fetch(&self.key);
        if record.is_none() && throw_on_missing {
            return Err(TemplateError::missing_data(self.key.to_string()));
        }

        let mut state = self.state.write();
        match record {
            Some(record) => {
                state.title = record.title;
                state.attributes = record.attributes;
                state.exists = true;
            }
            None => {
                state.title = None;
                state.attributes.clear();
                state.exists = false;
            }
        }
        state.loaded_at = Some(Utc::now());
        state.load_count += 1;

        debug!(
            page_key = %self.key,
            exists = state.exists,
            load_count = state.load_count,
            "Page template data loaded"
        );
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<serde_json::Value> {
        self.state.read().attributes.get(name).cloned()
    }
}
