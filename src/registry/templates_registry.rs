//! # Templates Registry
//!
//! Maps page keys to template definitions and caches the loaded instance of each
//! page.
//!
//! ## Lifecycle of a page key
//!
//! ```text
//! UNREGISTERED --register()--> REGISTERED --load()--> LOADED
//! LOADED --load()--> LOADED (refreshed in place, same handle)
//! UNREGISTERED --load()--> TemplateNotFound
//! ```
//!
//! Nothing is ever removed: definitions, page bindings and loaded instances live as
//! long as the registry.
//!
//! ## Concurrency
//!
//! - Definitions are built under the `templates` write lock, so an identifier is
//!   constructed at most once even when registrations race.
//! - First loads of a key are serialized by a per-key build lock; concurrent first
//!   loads of the same key wait and then refresh the winner.
//! - No map guard is held while a definition builds or a handle refreshes, so
//!   callbacks may use the registry freely except to load the key being built.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use page_templates::registry::{PageKind, TemplateFactories, TemplateRegistry};
//!
//! let factories = TemplateFactories::new().with_type::<HomeTemplate>("HomeTemplate");
//! let registry = TemplateRegistry::new(factories);
//!
//! registry.register("route", "home", "HomeTemplate")?;
//! let page = registry.load(PageKind::Route, "home", false)?;
//! ```

use super::factory::TemplateFactories;
use super::page_key::{PageKey, PageKind};
use super::template::{LoadedTemplate, RouteTemplate, TemplateDefinition};
use crate::config::{OptionGroups, PageTemplatesConfig};
use crate::error::{Result, TemplateError};
use crate::log_registry;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, warn};

/// Counts of what the registry currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryStats {
    pub templates: usize,
    pub pages: usize,
    pub options: usize,
    pub loaded: usize,
}

/// Registry of page template definitions and their loaded instances
pub struct TemplateRegistry {
    factories: TemplateFactories,
    /// Definition per template identifier
    templates: RwLock<HashMap<String, Arc<dyn TemplateDefinition>>>,
    /// Template identifier per page key
    pages: RwLock<HashMap<PageKey, String>>,
    /// Loaded instance per page key
    loaded: DashMap<PageKey, Arc<dyn LoadedTemplate>>,
    /// Build lock per page key, held only while its first instance is constructed
    building: DashMap<PageKey, Arc<Mutex<()>>>,
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("factories", &self.factories)
            .field("stats", &self.stats())
            .finish()
    }
}

impl TemplateRegistry {
    /// Create an empty registry that builds definitions from `factories`
    pub fn new(factories: TemplateFactories) -> Self {
        Self {
            factories,
            templates: RwLock::new(HashMap::new()),
            pages: RwLock::new(HashMap::new()),
            loaded: DashMap::new(),
            building: DashMap::new(),
        }
    }

    pub fn factories(&self) -> &TemplateFactories {
        &self.factories
    }

    /// Register every route that carries a template identifier.
    ///
    /// Routes without one are skipped. Stops at the first identifier with no factory.
    pub fn register_route_templates<I>(&self, routes: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: RouteTemplate,
    {
        let mut registered = 0usize;
        for route in routes {
            let Some(template) = route.template() else {
                continue;
            };
            self.register(PageKind::Route, route.name(), template)?;
            registered += 1;
        }

        log_registry!(info, "Registered route templates", count: registered);
        Ok(())
    }

    /// Register option templates from a `template identifier -> group(s)` mapping.
    ///
    /// Several groups are joined with `+` into one page key; unsupported values
    /// are skipped.
    pub fn register_options_templates<'a, I>(&self, options: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a String, &'a OptionGroups)>,
    {
        let mut registered = 0usize;
        for (template, groups) in options {
            let Some(name) = groups.composite_name() else {
                warn!(
                    template = %template,
                    value = ?groups,
                    "Skipping option template with unsupported group value"
                );
                continue;
            };
            self.register(PageKind::Option, name, template)?;
            registered += 1;
        }

        log_registry!(info, "Registered option templates", count: registered);
        Ok(())
    }

    /// Warm up from configuration: route pass over `routes` followed by the
    /// configured routes, then the option pass.
    ///
    /// The configuration is validated first; an invalid one fails with
    /// [`TemplateError::Configuration`] before anything is registered.
    pub fn register_from_config<I>(&self, config: &PageTemplatesConfig, routes: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: RouteTemplate,
    {
        config.validate()?;

        self.register_route_templates(routes)?;
        self.register_route_templates(&config.routes)?;
        self.register_options_templates(&config.options)?;

        let stats = self.stats();
        log_registry!(
            info,
            "Registry warm-up complete",
            templates: stats.templates,
            pages: stats.pages,
            options: stats.options
        );
        Ok(())
    }

    /// Bind `kind.name` to `template`, building the definition on first use.
    ///
    /// Re-registering a key rebinds it; the definition for an identifier is only
    /// ever built once.
    pub fn register(
        &self,
        kind: impl Into<PageKind>,
        name: impl Into<String>,
        template: &str,
    ) -> Result<Arc<dyn TemplateDefinition>> {
        let key = PageKey::new(kind, name);

        let definition = {
            let mut templates = self.templates.write();
            match templates.get(template) {
                Some(definition) => Arc::clone(definition),
                None => {
                    let definition = self
                        .factories
                        .create(template)
                        .ok_or_else(|| TemplateError::unknown_template_type(template))?;
                    templates.insert(template.to_string(), Arc::clone(&definition));
                    log_registry!(
                        info,
                        "Constructed template definition",
                        page_key: key,
                        template: template,
                        type_name: definition.type_name()
                    );
                    definition
                }
            }
        };

        let previous = self.pages.write().insert(key.clone(), template.to_string());
        if let Some(previous) = previous.filter(|previous| previous != template) {
            debug!(
                page_key = %key,
                previous = %previous,
                template = %template,
                "Rebound page key to a different template"
            );
        }

        Ok(definition)
    }

    /// Snapshot of all definitions by template identifier
    pub fn templates(&self) -> BTreeMap<String, Arc<dyn TemplateDefinition>> {
        self.templates
            .read()
            .iter()
            .map(|(template, definition)| (template.clone(), Arc::clone(definition)))
            .collect()
    }

    /// Snapshot of all page bindings
    pub fn pages(&self) -> BTreeMap<PageKey, String> {
        self.pages
            .read()
            .iter()
            .map(|(key, template)| (key.clone(), template.clone()))
            .collect()
    }

    /// Snapshot of the page bindings whose kind is `option`
    pub fn options(&self) -> BTreeMap<PageKey, String> {
        self.pages
            .read()
            .iter()
            .filter(|(key, _)| key.is_option())
            .map(|(key, template)| (key.clone(), template.clone()))
            .collect()
    }

    /// Definition bound to `key`, if any
    pub fn page_template(&self, key: &PageKey) -> Option<Arc<dyn TemplateDefinition>> {
        let template = self.pages.read().get(key).cloned()?;
        self.templates.read().get(&template).cloned()
    }

    /// [`page_template`](Self::page_template) for a rendered `kind.name` key
    pub fn page_template_str(&self, key: &str) -> Option<Arc<dyn TemplateDefinition>> {
        PageKey::parse(key).and_then(|key| self.page_template(&key))
    }

    /// Load the page `kind.name`.
    ///
    /// The first load builds the instance through the page's definition. Option
    /// pages are built under the definition's own type name rather than their
    /// (possibly `+`-joined) registered name. Later loads refresh the cached
    /// instance in place and return the same handle.
    pub fn load(
        &self,
        kind: impl Into<PageKind>,
        name: impl Into<String>,
        throw_on_missing: bool,
    ) -> Result<Arc<dyn LoadedTemplate>> {
        let key = PageKey::new(kind, name);

        let Some(definition) = self.page_template(&key) else {
            let dangling = self.pages.read().get(&key).cloned();
            log_registry!(warn, "Page template not found", page_key: key, template: dangling.as_deref().unwrap_or("none"));
            return Err(TemplateError::template_not_found(dangling, key.to_string()));
        };

        if let Some(cached) = self.cached(&key) {
            return self.refresh(&key, cached, throw_on_missing);
        }

        let gate = Arc::clone(self.building.entry(key.clone()).or_default().value());
        let guard = gate.lock();
        if let Some(cached) = self.cached(&key) {
            drop(guard);
            return self.refresh(&key, cached, throw_on_missing);
        }

        let name = if key.is_option() {
            definition.type_name().to_string()
        } else {
            key.name.clone()
        };
        let instance = definition.new_template(&key, &name, throw_on_missing)?;
        self.loaded.insert(key.clone(), Arc::clone(&instance));
        drop(guard);

        log_registry!(debug, "Loaded new page template", page_key: key, template: definition.type_name());
        Ok(instance)
    }

    fn cached(&self, key: &PageKey) -> Option<Arc<dyn LoadedTemplate>> {
        self.loaded.get(key).map(|entry| Arc::clone(entry.value()))
    }

    fn refresh(
        &self,
        key: &PageKey,
        cached: Arc<dyn LoadedTemplate>,
        throw_on_missing: bool,
    ) -> Result<Arc<dyn LoadedTemplate>> {
        cached.load(throw_on_missing)?;
        log_registry!(debug, "Refreshed page template", page_key: key);
        Ok(cached)
    }

    /// Cached instance for `kind.name`, without loading or refreshing it
    pub fn loaded(
        &self,
        kind: impl Into<PageKind>,
        name: impl Into<String>,
    ) -> Option<Arc<dyn LoadedTemplate>> {
        self.cached(&PageKey::new(kind, name))
    }

    pub fn is_loaded(&self, key: &PageKey) -> bool {
        self.loaded.contains_key(key)
    }

    pub fn stats(&self) -> RegistryStats {
        let pages = self.pages.read();
        RegistryStats {
            templates: self.templates.read().len(),
            pages: pages.len(),
            options: pages.keys().filter(|key| key.is_option()).count(),
            loaded: self.loaded.len(),
        }
    }
}
