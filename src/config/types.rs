// Configuration type definitions

use serde::Deserialize;

/// Search service configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Query the hosted index instead of the builtin subject catalog
    #[serde(default)]
    pub hosted: bool,
    /// Base URL of the hosted index, e.g. "https://search.example.com"
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Index queried for subject suggestions
    #[serde(default = "default_index")]
    pub index: String,
}

fn default_index() -> String {
    "subjects".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            hosted: false,
            host: String::new(),
            app_id: None,
            api_key: None,
            index: default_index(),
        }
    }
}

/// Field presentation section, passed through to the widget unchanged
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// Hint shown while the field is empty and nothing is selected
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub disabled: bool,
}

fn default_placeholder() -> String {
    "Search subjects\u{2026}".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            placeholder: default_placeholder(),
            disabled: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // For any combination of present/missing sections and fields, parsing
    // should succeed and missing values should fall back to the defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_search_section in prop::bool::ANY,
            include_hosted_field in prop::bool::ANY,
        ) {
            let toml_content = if !include_search_section {
                String::new()
            } else if !include_hosted_field {
                "[search]\n".to_string()
            } else {
                "[search]\nhosted = true\n".to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);

            prop_assert!(config.is_ok(), "Failed to parse config: {}", toml_content);

            let config = config.unwrap();
            prop_assert_eq!(config.search.index, "subjects");
            prop_assert_eq!(
                config.search.hosted,
                include_search_section && include_hosted_field
            );
            prop_assert_eq!(config.ui, UiConfig::default());
        }

        #[test]
        fn prop_index_field_round_trips(
            index in "[a-z][a-z0-9_]{0,18}",
        ) {
            let toml_content = format!("[search]\nindex = \"{index}\"\n");

            let config: Config = toml::from_str(&toml_content).unwrap();

            prop_assert_eq!(config.search.index, index);
        }
    }

    #[test]
    fn full_config_parses() {
        let toml_content = r#"
[search]
hosted = true
host = "https://search.example.com"
app_id = "APP123"
api_key = "key456"
index = "subjects"

[ui]
placeholder = "Pick a subject"
disabled = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();

        assert!(config.search.hosted);
        assert_eq!(config.search.app_id.as_deref(), Some("APP123"));
        assert_eq!(config.ui.placeholder, "Pick a subject");
    }
}
