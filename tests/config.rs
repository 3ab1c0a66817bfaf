//! Configuration Tests
//!
//! Loading the options/routes configuration from files and feeding it to a registry.

mod common;

use common::test_registry;
use page_templates::config::{ConfigManager, ConfigurationError, OptionGroups};
use page_templates::registry::{PageKey, RouteTemplate};
use std::io::Write;

fn write_config(extension: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("temp file should be writable");
    file
}

#[test]
fn toml_file_loads_options_and_routes() {
    let file = write_config(
        ".toml",
        r#"
        [options]
        SeoTemplate = ["meta", "social"]
        FooterTemplate = "footer"

        [[routes]]
        name = "home"
        template = "HomeTemplate"
        "#,
    );

    let manager = ConfigManager::load_from_file(file.path()).expect("valid config");
    let config = manager.config();

    assert_eq!(manager.source_path(), Some(file.path()));
    assert_eq!(
        config.options["SeoTemplate"],
        OptionGroups::from(vec!["meta", "social"])
    );
    assert_eq!(config.routes[0].name(), "home");
    assert_eq!(config.routes[0].template(), Some("HomeTemplate"));
}

#[test]
fn json_file_keeps_unsupported_option_values() {
    let file = write_config(
        ".json",
        r#"{
            "options": {
                "FooterTemplate": "footer",
                "BrokenTemplate": 7
            }
        }"#,
    );

    let config = ConfigManager::load_from_file(file.path())
        .expect("unsupported values do not fail loading")
        .into_config();

    assert_eq!(config.options.len(), 2);
    assert!(matches!(
        config.options["BrokenTemplate"],
        OptionGroups::Unsupported(_)
    ));
    assert!(config.routes.is_empty());
}

#[test]
fn malformed_file_reports_load_error() {
    let file = write_config(".toml", "[options\nSeoTemplate = ");

    let error = ConfigManager::load_from_file(file.path()).expect_err("malformed TOML");
    assert!(matches!(error, ConfigurationError::LoadError { .. }));
}

#[test]
fn loaded_config_drives_registry_warm_up() {
    let file = write_config(
        ".toml",
        r#"
        [options]
        SeoTemplate = ["meta", "social"]
        BrokenTemplate = 3

        [[routes]]
        name = "home"
        template = "HomeTemplate"

        [[routes]]
        name = "sitemap"
        "#,
    );
    let config = ConfigManager::load_from_file(file.path())
        .expect("valid config")
        .into_config();

    let test = test_registry(&["SeoTemplate", "HomeTemplate", "BrokenTemplate"]);
    let no_discovered_routes: Vec<page_templates::config::RouteDefinition> = Vec::new();
    test.registry
        .register_from_config(&config, &no_discovered_routes)
        .expect("known identifiers");

    let pages = test.registry.pages();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[&PageKey::option("meta+social")], "SeoTemplate");
    assert_eq!(pages[&PageKey::route("home")], "HomeTemplate");

    let seo = test
        .registry
        .load("option", "meta+social", false)
        .expect("registered");
    assert_eq!(seo.name(), "SeoTemplate");
}

#[test]
fn mixed_case_identifiers_match_registered_factories() {
    let file = write_config(
        ".toml",
        r#"
        [options]
        SeoTemplate = ["meta", "social"]
        "App.Templates.Footer" = "footer"
        "#,
    );
    let config = ConfigManager::load_from_file(file.path())
        .expect("valid config")
        .into_config();

    let test = test_registry(&["SeoTemplate", "App.Templates.Footer"]);
    test.registry
        .register_from_config(&config, Vec::<page_templates::config::RouteDefinition>::new())
        .expect("identifiers resolve to registered factories");

    let options = test.registry.options();
    assert_eq!(options[&PageKey::option("meta+social")], "SeoTemplate");
    assert_eq!(options[&PageKey::option("footer")], "App.Templates.Footer");
    assert_eq!(
        test.registry
            .page_template(&PageKey::option("footer"))
            .expect("bound")
            .type_name(),
        "App.Templates.Footer"
    );
}

#[test]
fn invalid_config_is_reported_through_the_registry() {
    let mut config = page_templates::config::PageTemplatesConfig::default();
    config
        .options
        .insert("SeoTemplate".to_string(), OptionGroups::from(""));

    let test = test_registry(&["SeoTemplate"]);
    let error = test
        .registry
        .register_from_config(&config, Vec::<page_templates::config::RouteDefinition>::new())
        .expect_err("empty group name");

    assert!(matches!(error, page_templates::TemplateError::Configuration(_)));
    assert!(test.registry.pages().is_empty());
}
