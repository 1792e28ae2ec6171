//! Shared CLI/TUI configuration types.
//!
//! Both binaries read/write `tagsight.toml` using these types. The file is
//! optional: every field has a default, and an absent or unparseable file
//! yields `Config::default()`. File I/O lives beside each binary.

use serde::{Deserialize, Serialize};

/// Canonical config file name used by the CLI and TUI.
pub const CONFIG_FILE_NAME: &str = "tagsight.toml";

/// Top-level configuration (persisted as `tagsight.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub identity: IdentitySettings,
    #[serde(default)]
    pub branding: BrandingSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

/// Session-scoped identity. Used only for PDF branding; no authentication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentitySettings {
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

/// Optional local branding asset for the PDF header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingSettings {
    /// Logo image looked up on local disk; a missing file falls back to a
    /// textual heading.
    #[serde(default = "default_logo_path")]
    pub logo_path: String,
}

impl Default for BrandingSettings {
    fn default() -> Self {
        Self {
            logo_path: default_logo_path(),
        }
    }
}

/// Raster dimensions for chart exports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSettings {
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

fn default_user_id() -> String {
    "anonymous".to_string()
}

fn default_logo_path() -> String {
    "logo.png".to_string()
}

fn default_chart_width() -> u32 {
    900
}

fn default_chart_height() -> u32 {
    600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_fallbacks() {
        let config = Config::default();
        assert_eq!(config.identity.user_id, "anonymous");
        assert_eq!(config.branding.logo_path, "logo.png");
        assert_eq!(config.chart.width, 900);
        assert_eq!(config.chart.height, 600);
    }

    #[test]
    fn empty_toml_deserializes_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str("[identity]\nuser_id = \"riley\"\n").unwrap();
        assert_eq!(config.identity.user_id, "riley");
        assert_eq!(config.branding.logo_path, "logo.png");
    }

    #[test]
    fn roundtrips_through_toml() {
        let mut config = Config::default();
        config.identity.user_id = "casey".to_string();
        config.chart.width = 1200;
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(config, back);
    }
}
