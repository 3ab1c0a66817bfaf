//! # Error Types
//!
//! Structured errors for template registration and loading using thiserror.
//!
//! Only [`TemplateError::TemplateNotFound`] is raised by the registry itself when a
//! page key cannot be resolved. The remaining variants come from the factory table,
//! from template collaborators, or from configuration loading.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No definition could be resolved for the requested page key.
    ///
    /// `template` carries the identifier bound to the key when the binding exists
    /// but its definition does not.
    #[error("Template not found for page '{key}' (template: {})", .template.as_deref().unwrap_or("none"))]
    TemplateNotFound {
        template: Option<String>,
        key: String,
    },

    #[error("Unknown template type: no factory registered for '{template}'")]
    UnknownTemplateType { template: String },

    #[error("Missing data for page '{key}'")]
    MissingData { key: String },

    #[error("Failed to load page '{key}': {reason}")]
    LoadFailed { key: String, reason: String },

    /// Configuration rejected during registry warm-up
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TemplateError {
    pub fn template_not_found(template: Option<String>, key: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template,
            key: key.into(),
        }
    }

    pub fn unknown_template_type(template: impl Into<String>) -> Self {
        Self::UnknownTemplateType {
            template: template.into(),
        }
    }

    pub fn missing_data(key: impl Into<String>) -> Self {
        Self::MissingData { key: key.into() }
    }

    pub fn load_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the page itself is unknown, as opposed to a
    /// failure inside an already resolved template.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. })
    }
}

impl From<crate::config::ConfigurationError> for TemplateError {
    fn from(error: crate::config::ConfigurationError) -> Self {
        TemplateError::Configuration(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_with_dangling_template() {
        let error = TemplateError::template_not_found(Some("HomeTemplate".into()), "route.home");
        assert_eq!(
            error.to_string(),
            "Template not found for page 'route.home' (template: HomeTemplate)"
        );
        assert!(error.is_not_found());
    }

    #[test]
    fn test_not_found_display_without_template() {
        let error = TemplateError::template_not_found(None, "option.meta");
        assert_eq!(
            error.to_string(),
            "Template not found for page 'option.meta' (template: none)"
        );
    }

    #[test]
    fn test_other_variants_are_not_not_found() {
        assert!(!TemplateError::missing_data("route.home").is_not_found());
        assert!(!TemplateError::unknown_template_type("Nope").is_not_found());
    }
}
