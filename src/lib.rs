#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Page Templates
//!
//! Registry mapping logical pages to template definitions, with lazily created and
//! cached template instances.
//!
//! ## Overview
//!
//! Pages are identified by a kind and a name: `route.home` for a page backed by
//! the `home` route, `option.meta+social` for a template governing the `meta` and
//! `social` option groups together. Each page key is bound to a template
//! identifier, and each identifier has exactly one [`TemplateDefinition`] for the
//! registry's lifetime. Loading a page builds its instance once and refreshes that
//! same instance on every later load.
//!
//! ## Module Organization
//!
//! - [`registry`] - Page keys, template contracts, factory table and the registry
//! - [`pages`] - Source-backed template implementation
//! - [`config`] - Options/routes configuration loading
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing initialisation and registry log macro
//!
//! ## Quick Start
//!
//! ```rust
//! use page_templates::config::{OptionGroups, PageTemplatesConfig};
//! use page_templates::pages::{MemorySource, PageDefinition, TemplateSource};
//! use page_templates::registry::{PageKey, TemplateFactories, TemplateRegistry};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source: Arc<dyn TemplateSource> = Arc::new(MemorySource::new());
//! let mut factories = TemplateFactories::new();
//! factories.register_factory("SeoTemplate", PageDefinition::factory("SeoTemplate", source));
//!
//! let mut config = PageTemplatesConfig::default();
//! config
//!     .options
//!     .insert("SeoTemplate".to_string(), OptionGroups::from(vec!["meta", "social"]));
//!
//! let registry = Arc::new(TemplateRegistry::new(factories));
//! registry.register_options_templates(&config.options)?;
//!
//! assert_eq!(
//!     registry.options().get(&PageKey::option("meta+social")).map(String::as_str),
//!     Some("SeoTemplate")
//! );
//!
//! let seo = registry.load("option", "meta+social", false)?;
//! assert_eq!(seo.name(), "SeoTemplate");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pages;
pub mod registry;

pub use error::{Result, TemplateError};
pub use registry::{
    LoadedTemplate, PageKey, PageKind, RegistryStats, RouteTemplate, TemplateDefinition,
    TemplateFactories, TemplateRegistry,
};
