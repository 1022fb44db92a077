use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "sqlmaker.toml";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error occurred while reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error occurred
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure for sqlmaker
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Language of the built-in message catalogue
    pub locale: Locale,
    /// Output layout
    pub layout: LayoutConfig,
    /// Defaults applied when the request leaves a value blank
    pub defaults: DefaultsConfig,
    /// Per-message overrides of the catalogue
    pub messages: MessageOverrides,
}

/// Language of user-facing messages
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Korean
    Ko,
}

/// Output layout configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Spaces per nesting level
    pub indent: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Fallback values
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DefaultsConfig {
    /// `resultType` for SELECT when the request has none; empty disables it
    pub result_type: String,
    /// Refuse to generate without an explicit statement id
    pub require_statement_id: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            result_type: "map".to_string(),
            require_statement_id: false,
        }
    }
}

/// Optional replacements for individual catalogue entries
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MessageOverrides {
    /// Shown instead of SQL while the table name is blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_table: Option<String>,
    /// Shown for an unrecognized statement type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsupported_operation: Option<String>,
    /// INSERT without columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_columns: Option<String>,
    /// INSERT with blank literal values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_values: Option<String>,
    /// UPDATE without SET content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_set: Option<String>,
    /// Blank statement id while one is required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_statement_id: Option<String>,
}

/// Resolved user-facing messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Shown instead of SQL while the table name is blank
    pub empty_table: String,
    /// Shown for an unrecognized statement type
    pub unsupported_operation: String,
    /// INSERT without columns
    pub missing_columns: String,
    /// INSERT with blank literal values
    pub missing_values: String,
    /// UPDATE without SET content
    pub missing_set: String,
    /// Blank statement id while one is required
    pub missing_statement_id: String,
}

impl Messages {
    /// Built-in catalogue for `locale`
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                empty_table: "Enter a table name to generate MyBatis SQL.".to_string(),
                unsupported_operation: "Unsupported statement type.".to_string(),
                missing_columns: "Enter column names.".to_string(),
                missing_values: "Enter INSERT values.".to_string(),
                missing_set: "Enter SET values.".to_string(),
                missing_statement_id: "Enter a MyBatis statement ID.".to_string(),
            },
            Locale::Ko => Self {
                empty_table: "테이블명을 입력하면 마이바티스 SQL이 생성됩니다.".to_string(),
                unsupported_operation: "지원하지 않는 타입입니다.".to_string(),
                missing_columns: "칼럼 명을 입력해주세요.".to_string(),
                missing_values: "INSERT 값을 입력해주세요.".to_string(),
                missing_set: "SET 값을 입력해주세요.".to_string(),
                missing_statement_id: "MyBatis Statement ID를 입력해주세요.".to_string(),
            },
        }
    }

    fn apply(mut self, overrides: &MessageOverrides) -> Self {
        let pairs = [
            (&mut self.empty_table, &overrides.empty_table),
            (&mut self.unsupported_operation, &overrides.unsupported_operation),
            (&mut self.missing_columns, &overrides.missing_columns),
            (&mut self.missing_values, &overrides.missing_values),
            (&mut self.missing_set, &overrides.missing_set),
            (&mut self.missing_statement_id, &overrides.missing_statement_id),
        ];
        for (slot, replacement) in pairs {
            if let Some(text) = replacement {
                slot.clone_from(text);
            }
        }
        self
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

impl Config {
    /// Create a default configuration using the given locale
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise `sqlmaker.toml` in `dir` when it exists,
    /// otherwise the built-in defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            Self::from_file(candidate)
        } else {
            debug!("No {CONFIG_FILE_NAME} found, using defaults");
            Ok(Self::default())
        }
    }

    /// Catalogue for the configured locale with overrides applied
    #[must_use]
    pub fn messages(&self) -> Messages {
        Messages::for_locale(self.locale).apply(&self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.layout.indent, 2);
        assert_eq!(config.defaults.result_type, "map");
    }

    #[test]
    fn test_oversized_indent_is_rejected() {
        assert!(toml::from_str::<Config>("[layout]\nindent = 1000000000000\n").is_err());
        assert!(toml::from_str::<Config>("[layout]\nindent = -1\n").is_err());

        let config: Config = toml::from_str("[layout]\nindent = 255\n").unwrap();
        assert_eq!(config.layout.indent, u8::MAX);
    }

    #[test]
    fn test_overrides_replace_single_messages() {
        let config: Config = toml::from_str(
            r#"
locale = "ko"

[messages]
missing_set = "SET please"
"#,
        )
        .unwrap();
        let messages = config.messages();
        assert_eq!(messages.missing_set, "SET please");
        assert_eq!(messages.unsupported_operation, "지원하지 않는 타입입니다.");
    }

    #[test]
    fn test_config_serializes_without_unset_overrides() {
        let text = toml::to_string_pretty(&Config::new(Locale::Ko)).unwrap();
        assert!(text.contains("locale = \"ko\""));
        assert!(!text.contains("empty_table"));
    }
}
