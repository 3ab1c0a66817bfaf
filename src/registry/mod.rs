//! # Registry Infrastructure
//!
//! Page template registration, lookup and loading.
//!
//! ## Architecture
//!
//! ```text
//! Registry Infrastructure
//! ├── PageKey / PageKind     (page identity: kind + name)
//! ├── TemplateFactories      (template identifier -> definition constructor)
//! ├── TemplateDefinition     (one per identifier, manufactures loaded templates)
//! ├── LoadedTemplate         (cached, refreshable page state)
//! └── TemplateRegistry       (definitions, page bindings, loaded cache)
//! ```

pub mod factory;
pub mod page_key;
pub mod template;
pub mod templates_registry;

pub use factory::{DefinitionFactory, TemplateFactories};
pub use page_key::{PageKey, PageKind};
pub use template::{LoadedTemplate, RouteTemplate, TemplateDefinition};
pub use templates_registry::{RegistryStats, TemplateRegistry};
