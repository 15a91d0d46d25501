//! Configuration file support for pm-myst CLI
//!
//! Loads settings from `_pm-myst.toml` configuration file.

use anyhow::{Context, Result};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "_pm-myst.toml";

/// Schema URL for the configuration file, served from `schema/pm-myst.schema.json`
/// in this crate (regenerate with `pm-myst --print-schema`)
pub const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/pm-myst/pm-myst/main/crates/pm-myst-cli/schema/pm-myst.schema.json";

/// Default suffix of files written by export
pub const DEFAULT_EXPORT_SUFFIX: &str = ".myst.json";

/// Default suffix of files written by import
pub const DEFAULT_IMPORT_SUFFIX: &str = ".pm.json";

/// Conversion direction
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Pick from the document's top-level `type` ("doc" exports, "root" imports)
    #[default]
    Auto,
    /// Editor JSON to MyST AST JSON
    Export,
    /// MyST AST JSON to editor JSON
    Import,
}

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Output configuration
    #[serde(skip_serializing_if = "OutputConfig::is_empty")]
    pub output: OutputConfig,
    /// Conversion configuration
    #[serde(skip_serializing_if = "ConvertConfig::is_empty")]
    pub convert: ConvertConfig,
}

/// Output configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
    /// File name suffix for exported MyST documents (default: ".myst.json")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_suffix: Option<String>,
    /// File name suffix for imported editor documents (default: ".pm.json")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_suffix: Option<String>,
}

impl OutputConfig {
    fn is_empty(&self) -> bool {
        self.pretty.is_none() && self.export_suffix.is_none() && self.import_suffix.is_none()
    }
}

/// Conversion configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct ConvertConfig {
    /// Conversion direction: "auto", "export" or "import" (default: "auto")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl ConvertConfig {
    fn is_empty(&self) -> bool {
        self.direction.is_none()
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Try to load configuration from a directory (looks for `_pm-myst.toml`)
    ///
    /// Returns `Ok(None)` if the config file doesn't exist.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Generate JSON schema for the configuration
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Generate JSON schema as a string
    pub fn json_schema_string() -> Result<String> {
        let schema = Self::json_schema();
        serde_json::to_string_pretty(&schema).context("Failed to serialize JSON schema")
    }

    /// Serialize configuration to TOML string with schema directive
    pub fn to_toml_with_schema(&self) -> Result<String> {
        let toml_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        Ok(format!("#:schema {}\n\n{}", SCHEMA_URL, toml_content))
    }

    /// Create a sample configuration with the defaults spelled out, for `--init`
    pub fn sample() -> Self {
        Config {
            output: OutputConfig {
                pretty: Some(true),
                export_suffix: Some(DEFAULT_EXPORT_SUFFIX.to_string()),
                import_suffix: Some(DEFAULT_IMPORT_SUFFIX.to_string()),
            },
            convert: ConvertConfig {
                direction: Some(Direction::Auto),
            },
        }
    }

    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(true)
    }

    pub fn export_suffix(&self) -> &str {
        self.output
            .export_suffix
            .as_deref()
            .unwrap_or(DEFAULT_EXPORT_SUFFIX)
    }

    pub fn import_suffix(&self) -> &str {
        self.output
            .import_suffix
            .as_deref()
            .unwrap_or(DEFAULT_IMPORT_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.output.pretty.is_none());
        assert!(config.convert.direction.is_none());
        assert!(config.pretty());
        assert_eq!(config.export_suffix(), ".myst.json");
        assert_eq!(config.import_suffix(), ".pm.json");
    }

    #[test]
    fn test_parse_output_section() {
        let config: Config = toml::from_str(
            r#"
            [output]
            pretty = false
            export_suffix = ".ast.json"
            import_suffix = ".editor.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.pretty, Some(false));
        assert!(!config.pretty());
        assert_eq!(config.export_suffix(), ".ast.json");
        assert_eq!(config.import_suffix(), ".editor.json");
    }

    #[test]
    fn test_parse_convert_section() {
        let config: Config = toml::from_str(
            r#"
            [convert]
            direction = "import"
            "#,
        )
        .unwrap();

        assert_eq!(config.convert.direction, Some(Direction::Import));
    }

    #[test]
    fn test_invalid_direction() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [convert]
            direction = "sideways"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_empty_config() {
        let config = Config::default();
        let toml = config.to_toml_with_schema().unwrap();
        assert!(toml.starts_with("#:schema"));
        assert!(!toml.contains("[output]"));
        assert!(!toml.contains("[convert]"));
    }

    #[test]
    fn test_serialize_sample_config() {
        let config = Config::sample();
        let toml = config.to_toml_with_schema().unwrap();
        assert!(toml.starts_with("#:schema"));
        assert!(toml.contains("[output]"));
        assert!(toml.contains("direction = \"auto\""));
    }

    #[test]
    fn test_json_schema_generation() {
        let schema = Config::json_schema_string().unwrap();
        assert!(schema.contains("\"title\""));
        assert!(schema.contains("OutputConfig"));
        assert!(schema.contains("Direction"));
    }

    #[test]
    fn test_shipped_schema_matches_config() {
        let shipped: serde_json::Value = serde_json::from_str(include_str!(
            "../schema/pm-myst.schema.json"
        ))
        .unwrap();
        let generated = serde_json::to_value(Config::json_schema()).unwrap();

        let keys = |value: &serde_json::Value, pointer: &str| -> Vec<String> {
            let mut keys: Vec<String> = value
                .pointer(pointer)
                .and_then(|v| v.as_object())
                .map(|map| map.keys().cloned().collect())
                .unwrap_or_default();
            keys.sort();
            keys
        };

        for pointer in [
            "/properties",
            "/$defs",
            "/$defs/OutputConfig/properties",
            "/$defs/ConvertConfig/properties",
        ] {
            assert!(!keys(&shipped, pointer).is_empty(), "{} is empty", pointer);
            assert_eq!(keys(&shipped, pointer), keys(&generated, pointer), "{}", pointer);
        }
    }

    #[test]
    fn test_roundtrip() {
        let config = Config::sample();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.output.pretty, parsed.output.pretty);
        assert_eq!(config.convert.direction, parsed.convert.direction);
    }
}
