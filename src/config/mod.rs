//! # Page Template Configuration
//!
//! Declarative input for registry warm-up: the options mapping (template identifier
//! to one or more option groups) and, for hosts without their own router, a list of
//! routes with their template identifiers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use page_templates::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load_from_file("config/page_templates.toml")?;
//! for (template, groups) in &manager.config().options {
//!     println!("{template} -> {:?}", groups.composite_name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use crate::constants::OPTION_GROUP_JOINER;
use crate::registry::RouteTemplate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PageTemplatesConfig {
    /// Template identifier to option group(s)
    #[serde(default)]
    pub options: BTreeMap<String, OptionGroups>,

    /// Routes declared in configuration rather than discovered from a router
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
}

/// The option group(s) a single template governs.
///
/// Values that are neither a name nor a list of names are kept as
/// [`OptionGroups::Unsupported`] so the registry can skip them without failing
/// the whole configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OptionGroups {
    Single(String),
    Many(Vec<String>),
    Unsupported(serde_json::Value),
}

impl OptionGroups {
    /// Name under which the template is registered, `None` for unsupported values.
    ///
    /// Several groups are joined with `+` so they share one page key.
    pub fn composite_name(&self) -> Option<String> {
        match self {
            OptionGroups::Single(name) => Some(name.clone()),
            OptionGroups::Many(names) => Some(names.join(OPTION_GROUP_JOINER)),
            OptionGroups::Unsupported(_) => None,
        }
    }
}

impl From<&str> for OptionGroups {
    fn from(name: &str) -> Self {
        OptionGroups::Single(name.to_string())
    }
}

impl From<Vec<&str>> for OptionGroups {
    fn from(names: Vec<&str>) -> Self {
        OptionGroups::Many(names.into_iter().map(str::to_string).collect())
    }
}

/// A named route, optionally bound to a page template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteDefinition {
    pub name: String,
    #[serde(default)]
    pub template: Option<String>,
}

impl RouteDefinition {
    pub fn new(name: impl Into<String>, template: Option<&str>) -> Self {
        Self {
            name: name.into(),
            template: template.map(str::to_string),
        }
    }
}

impl RouteTemplate for RouteDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

impl PageTemplatesConfig {
    /// Reject empty identifiers and names; unsupported option values are allowed.
    pub fn validate(&self) -> ConfigResult<()> {
        for (template, groups) in &self.options {
            if template.trim().is_empty() {
                return Err(ConfigurationError::validation_error(
                    "options: template identifier cannot be empty",
                ));
            }

            let empty_group = match groups {
                OptionGroups::Single(name) => name.is_empty(),
                OptionGroups::Many(names) => names.is_empty() || names.iter().any(String::is_empty),
                OptionGroups::Unsupported(_) => false,
            };
            if empty_group {
                return Err(ConfigurationError::invalid_value(
                    format!("options.{template}"),
                    format!("{groups:?}"),
                    "option group names cannot be empty",
                ));
            }
        }

        for route in &self.routes {
            if route.name.is_empty() {
                return Err(ConfigurationError::validation_error(
                    "routes: route name cannot be empty",
                ));
            }
            if route.template.as_deref() == Some("") {
                return Err(ConfigurationError::invalid_value(
                    format!("routes.{}.template", route.name),
                    "",
                    "omit the template instead of leaving it empty",
                ));
            }
        }

        Ok(())
    }
}
