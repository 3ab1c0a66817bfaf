//! # Source-Backed Pages
//!
//! Ready-made template implementation for hosts that only need attribute storage:
//! a [`PageDefinition`] per template identifier, [`PageTemplate`] as the loaded
//! instance, and a pluggable [`TemplateSource`] for the data.
//!
//! ```rust
//! use page_templates::pages::{MemorySource, PageDefinition, PageRecord, TemplateSource};
//! use page_templates::registry::{PageKey, TemplateFactories, TemplateRegistry};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = Arc::new(MemorySource::new());
//! source.insert(PageKey::route("home"), PageRecord::new().with_title("Home"));
//!
//! let mut factories = TemplateFactories::new();
//! factories.register_factory(
//!     "HomeTemplate",
//!     PageDefinition::factory("HomeTemplate", source.clone() as Arc<dyn TemplateSource>),
//! );
//!
//! let registry = TemplateRegistry::new(factories);
//! registry.register("route", "home", "HomeTemplate")?;
//! let page = registry.load("route", "home", true)?;
//! assert_eq!(page.name(), "home");
//! # Ok(())
//! # }
//! ```

pub mod page_template;
pub mod source;

pub use page_template::{PageDefinition, PageTemplate};
pub use source::{MemorySource, PageRecord, TemplateSource};
