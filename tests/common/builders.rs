//! Test template types and registry builders shared by the integration tests.

#![allow(dead_code)]

use page_templates::pages::{MemorySource, PageDefinition, TemplateSource};
use page_templates::registry::{
    LoadedTemplate, PageKey, TemplateDefinition, TemplateFactories, TemplateRegistry,
};
use page_templates::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Definition that counts how many instances it manufactures
#[derive(Debug)]
pub struct CountingDefinition {
    type_name: String,
    built: AtomicUsize,
    source: Arc<dyn TemplateSource>,
}

impl CountingDefinition {
    pub fn built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }
}

impl TemplateDefinition for CountingDefinition {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn new_template(
        &self,
        key: &PageKey,
        name: &str,
        throw_on_missing: bool,
    ) -> Result<Arc<dyn LoadedTemplate>> {
        self.built.fetch_add(1, Ordering::SeqCst);
        PageDefinition::new(self.type_name.clone(), Arc::clone(&self.source))
            .new_template(key, name, throw_on_missing)
    }
}

/// Registry plus the counters a test needs to observe construction
pub struct TestRegistry {
    pub registry: Arc<TemplateRegistry>,
    pub source: Arc<MemorySource>,
    pub definitions_built: Arc<AtomicUsize>,
}

impl TestRegistry {
    pub fn definitions_built(&self) -> usize {
        self.definitions_built.load(Ordering::SeqCst)
    }
}

/// Build a registry knowing each of `identifiers`, all backed by one memory source.
pub fn test_registry(identifiers: &[&str]) -> TestRegistry {
    let source = Arc::new(MemorySource::new());
    let definitions_built = Arc::new(AtomicUsize::new(0));

    let mut factories = TemplateFactories::new();
    for identifier in identifiers {
        let type_name = identifier.to_string();
        let source: Arc<dyn TemplateSource> = source.clone();
        let counter = Arc::clone(&definitions_built);
        factories.register_factory(*identifier, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Arc::new(CountingDefinition {
                type_name: type_name.clone(),
                built: AtomicUsize::new(0),
                source: Arc::clone(&source),
            })
        });
    }

    TestRegistry {
        registry: Arc::new(TemplateRegistry::new(factories)),
        source,
        definitions_built,
    }
}
