//! # Registry Constants
//!
//! Page kinds, key separators and environment variable names shared across the crate.

/// Kind discriminator for pages backed by an application route
pub const ROUTE_KIND: &str = "route";

/// Kind discriminator for pages backed by one or more option groups
pub const OPTION_KIND: &str = "option";

/// Separator between kind and name in a rendered page key (`route.home`)
pub const KEY_SEPARATOR: char = '.';

/// Joiner used when one template governs several option groups (`meta+social`)
pub const OPTION_GROUP_JOINER: &str = "+";

/// Environment variables consulted by configuration and logging
pub mod env {
    pub const ENVIRONMENT: &str = "PAGE_TEMPLATES_ENV";
    pub const APP_ENVIRONMENT: &str = "APP_ENV";
    pub const CONFIG_PREFIX: &str = "PAGE_TEMPLATES";
    pub const CONFIG_SEPARATOR: &str = "__";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const RUST_LOG: &str = "RUST_LOG";

    pub const DEFAULT_ENVIRONMENT: &str = "development";
}
