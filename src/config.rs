//! Session configuration
//!
//! Everything here is chosen once at startup (from command-line flags) and
//! stays fixed for the life of the menu session:
//! - `Locale`: which label set prompts and listings use
//! - `OutputFormat`: labelled text lines or one JSON object per line

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Label language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// English labels
    #[default]
    En,

    /// Traditional Chinese labels
    #[value(name = "zh-tw")]
    ZhTw,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhTw => "zh-tw",
        }
    }
}

/// How listed records are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled lines, one record per line
    #[default]
    Text,

    /// Compact JSON, one record (or group) per line
    Json,
}

/// Menu session settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub format: OutputFormat,
}

impl MenuConfig {
    pub fn new(locale: Locale, format: OutputFormat) -> Self {
        MenuConfig { locale, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MenuConfig::default();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: MenuConfig = serde_json::from_str(r#"{"locale":"zh-tw"}"#).unwrap();

        assert_eq!(config.locale, Locale::ZhTw);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_locale_flag_values() {
        assert_eq!(Locale::from_str("zh-tw", true).unwrap(), Locale::ZhTw);
        assert_eq!(Locale::from_str("en", true).unwrap(), Locale::En);
        assert!(Locale::from_str("fr", true).is_err());
        assert_eq!(Locale::ZhTw.as_str(), "zh-tw");
    }
}
