//! # Structured Logging Module
//!
//! Environment-aware tracing setup and the structured logging macro used by the
//! registry. Initialisation is idempotent and tolerates a global subscriber that
//! was installed by the host application.

use crate::constants::env;
use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console logging with an environment-derived filter.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);
        let use_ansi = IsTerminal::is_terminal(&std::io::stdout());

        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_level(true)
            .with_ansi(use_ansi)
            .with_filter(EnvFilter::new(&log_level));

        let subscriber = tracing_subscriber::registry().with(console_layer);

        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        } else {
            tracing::info!(
                environment = %environment,
                log_level = %log_level,
                ansi_colors = use_ansi,
                "Page template logging initialized"
            );
        }
    });
}

/// Initialize JSON-formatted logging, for hosts that ship logs to a collector.
pub fn init_json_tracing() {
    TRACING_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let json_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .with_filter(EnvFilter::new(&log_level));

        if tracing_subscriber::registry()
            .with(json_layer)
            .try_init()
            .is_err()
        {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }
    });
}

/// Current environment name, from `PAGE_TEMPLATES_ENV` then `APP_ENV`.
pub fn get_environment() -> String {
    environment_from(|name| std::env::var(name).ok())
}

fn environment_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(env::ENVIRONMENT)
        .or_else(|| lookup(env::APP_ENVIRONMENT))
        .unwrap_or_else(|| env::DEFAULT_ENVIRONMENT.to_string())
}

/// Log filter for the given environment. `LOG_LEVEL` wins over `RUST_LOG`.
fn get_log_level(environment: &str) -> String {
    log_level_from(environment, |name| std::env::var(name).ok())
}

fn log_level_from(environment: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    if let Some(level) = lookup(env::LOG_LEVEL).or_else(|| lookup(env::RUST_LOG)) {
        return level.to_lowercase();
    }

    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log registry operations with page key and template identifier fields.
#[macro_export]
macro_rules! log_registry {
    // Full form with page key and template
    ($level:ident, $operation:expr, page_key: $key:expr, template: $template:expr $(, $field:ident: $value:expr)* $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            page_key = %$key,
            template = %$template,
            $($field = ?$value,)*
            "{} ({} -> {})", $operation, $key, $template
        );
    };
    // Page key only
    ($level:ident, $operation:expr, page_key: $key:expr $(, $field:ident: $value:expr)* $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            page_key = %$key,
            $($field = ?$value,)*
            "{} ({})", $operation, $key
        );
    };
    // Generic form with additional fields
    ($level:ident, $operation:expr $(, $field:ident: $value:expr)* $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            $($field = ?$value,)*
            "{}", $operation
        );
    };
}
