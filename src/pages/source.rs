//! # Template Sources
//!
//! Where page data comes from. The registry never touches storage; a source is
//! handed to [`PageDefinition`](super::PageDefinition) and consulted every time a
//! page template loads.

use crate::registry::PageKey;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

/// Stored content for one page
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PageRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl PageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }
}

/// Backing store for page data
pub trait TemplateSource: Send + Sync + Debug {
    /// Record for `key`, `None` when nothing is stored
    fn fetch(&self, key: &PageKey) -> Option<PageRecord>;
}

/// Thread-safe in-memory source
#[derive(Debug, Default)]
pub struct MemorySource {
    records: RwLock<HashMap<PageKey, PageRecord>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under `key`, returning the previous record
    pub fn insert(&self, key: PageKey, record: PageRecord) -> Option<PageRecord> {
        self.records.write().insert(key, record)
    }

    pub fn remove(&self, key: &PageKey) -> Option<PageRecord> {
        self.records.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl TemplateSource for MemorySource {
    fn fetch(&self, key: &PageKey) -> Option<PageRecord> {
        self.records.read().get(key).cloned()
    }
}
