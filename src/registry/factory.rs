//! # Template Factories
//!
//! Explicit identifier-to-constructor table used by the registry to build template
//! definitions. Identifiers are registered up front, typically once at startup,
//! and the registry only ever calls each factory once per identifier.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use page_templates::registry::TemplateFactories;
//! use std::sync::Arc;
//!
//! let mut factories = TemplateFactories::new();
//! factories.register_type::<HomeTemplate>("HomeTemplate");
//! factories.register_factory("SeoTemplate", || Arc::new(SeoTemplate::with_source(source.clone())));
//! ```

use super::template::TemplateDefinition;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Constructor for a template definition
pub type DefinitionFactory = Box<dyn Fn() -> Arc<dyn TemplateDefinition> + Send + Sync>;

/// Table of definition constructors keyed by template identifier
#[derive(Default)]
pub struct TemplateFactories {
    factories: HashMap<String, DefinitionFactory>,
}

impl fmt::Debug for TemplateFactories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identifiers = self.identifiers();
        identifiers.sort();
        f.debug_struct("TemplateFactories")
            .field("identifiers", &identifiers)
            .finish()
    }
}

impl TemplateFactories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor function. A later registration for the same
    /// identifier replaces the earlier one.
    pub fn register_factory<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn TemplateDefinition> + Send + Sync + 'static,
    {
        self.factories.insert(identifier.into(), Box::new(factory));
    }

    /// Register a definition type constructed through `Default`
    pub fn register_type<T>(&mut self, identifier: impl Into<String>)
    where
        T: TemplateDefinition + Default + 'static,
    {
        self.register_factory(identifier, || Arc::new(T::default()));
    }

    /// Builder-style [`register_type`](Self::register_type)
    #[must_use]
    pub fn with_type<T>(mut self, identifier: impl Into<String>) -> Self
    where
        T: TemplateDefinition + Default + 'static,
    {
        self.register_type::<T>(identifier);
        self
    }

    /// Build a new definition, `None` when the identifier is unknown
    pub fn create(&self, identifier: &str) -> Option<Arc<dyn TemplateDefinition>> {
        self.factories.get(identifier).map(|factory| factory())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
