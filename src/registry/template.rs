//! # Template Contracts
//!
//! Traits implemented by the registry's collaborators:
//!
//! - [`TemplateDefinition`]: one per template identifier, manufactures loaded instances
//! - [`LoadedTemplate`]: the live, page-specific instance the registry caches
//! - [`RouteTemplate`]: a route as seen by the route registration pass

use super::page_key::PageKey;
use crate::error::Result;
use std::fmt::Debug;
use std::sync::Arc;

/// Per-identifier singleton responsible for creating loaded templates.
///
/// Definitions are constructed once by the registry through the factory table and
/// must be cheap and side-effect free to construct.
pub trait TemplateDefinition: Send + Sync + Debug {
    /// Short type name of the template, used as the canonical name of option pages
    fn type_name(&self) -> &str;

    /// Create and load a new instance for `key`.
    ///
    /// `name` is the effective display name: the route name for route pages, the
    /// definition's own [`type_name`](Self::type_name) for option pages.
    /// `throw_on_missing` is forwarded as-is; its meaning belongs to the implementation.
    ///
    /// Called while the registry holds the build lock for `key` and no other lock.
    /// Implementations may query the registry or load other pages, but must not
    /// load `key` itself.
    fn new_template(
        &self,
        key: &PageKey,
        name: &str,
        throw_on_missing: bool,
    ) -> Result<Arc<dyn LoadedTemplate>>;
}

/// Mutable page state cached by the registry.
///
/// Handles are shared, so refreshing goes through `&self` and implementations use
/// interior mutability.
pub trait LoadedTemplate: Send + Sync + Debug {
    fn key(&self) -> &PageKey;

    fn name(&self) -> String;

    fn type_name(&self) -> &str;

    /// Refresh the instance in place
    fn load(&self, throw_on_missing: bool) -> Result<()>;

    /// Current value of a stored field, for templates that hold field data
    fn attribute(&self, _name: &str) -> Option<serde_json::Value> {
        None
    }
}

/// A routing entry that may carry a page template identifier
pub trait RouteTemplate {
    fn name(&self) -> &str;

    /// Template identifier, `None` for routes without a page template
    fn template(&self) -> Option<&str>;
}

impl<T: RouteTemplate + ?Sized> RouteTemplate for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn template(&self) -> Option<&str> {
        (**self).template()
    }
}
