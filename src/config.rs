//! App configuration stored in the browser's `localStorage`.
//!
//! ## Versioning
//!
//! - `CONFIG_VERSION`: current format version. Bump it when fields are added.
//! - `MIN_COMPATIBLE_VERSION`: oldest version that still loads. Only bump it
//!   for breaking changes (a field changing meaning or being removed); added
//!   fields are covered by `#[serde(default)]`.
//!
//! A config that is corrupt or too old is logged and ignored. The app then
//! starts with the default theme.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::{Theme, ThemeOverrides};

pub const CONFIG_VERSION: u32 = 1;

pub const MIN_COMPATIBLE_VERSION: u32 = 1;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "communication_coach_config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    pub theme: ThemeOverrides,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: "info".to_string(),
            theme: ThemeOverrides::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config document.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        if config.version < MIN_COMPATIBLE_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                min: MIN_COMPATIBLE_VERSION,
            });
        }
        config.log_filter()?;
        Theme::with_overrides(&config.theme)?;
        Ok(config)
    }

    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// The theme this config describes. Falls back to the default theme on
    /// a bad token, which `parse` has already ruled out for stored configs.
    pub fn theme(&self) -> Theme {
        Theme::with_overrides(&self.theme).unwrap_or_default()
    }
}

#[cfg(target_arch = "wasm32")]
fn read_storage() -> Result<Option<String>, ConfigError> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ConfigError::Storage)?;
    storage.get_item(STORAGE_KEY).map_err(|_| ConfigError::Storage)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_storage() -> Result<Option<String>, ConfigError> {
    Ok(None)
}

/// Load the stored config, or the default one if nothing usable is stored.
///
/// Runs before the logger is installed, so problems are returned alongside
/// the config for the caller to log once logging is up.
pub fn load() -> (AppConfig, Option<ConfigError>) {
    resolve(read_storage())
}

fn resolve(stored: Result<Option<String>, ConfigError>) -> (AppConfig, Option<ConfigError>) {
    match stored.and_then(|raw| raw.map(|s| AppConfig::parse(&s)).transpose()) {
        Ok(Some(config)) => (config, None),
        Ok(None) => (AppConfig::default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorRole, SizeRole};
    use ratzilla::ratatui::style::Color;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::parse("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn full_document_roundtrip() {
        let mut original = AppConfig::default();
        original.log_level = "debug".into();
        original.theme.colors.insert(ColorRole::Basic, "light_green".into());
        original.theme.sizes.insert(SizeRole::CardGap, 1);

        let json = serde_json::to_string(&original).unwrap();
        let loaded = AppConfig::parse(&json).unwrap();

        assert_eq!(loaded, original);
        assert_eq!(loaded.log_filter().unwrap(), LevelFilter::Debug);
        let theme = loaded.theme();
        assert_eq!(theme.color(ColorRole::Basic), Color::LightGreen);
        assert_eq!(theme.size(SizeRole::CardGap), 1);
    }

    #[test]
    fn version_below_min_compatible_is_rejected() {
        let err = AppConfig::parse(r#"{"version":0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedVersion { found: 0, min: MIN_COMPATIBLE_VERSION }
        ));
    }

    #[test]
    fn newer_version_still_loads() {
        let config = AppConfig::parse(r#"{"version":9,"future_field":true}"#).unwrap();
        assert_eq!(config.version, 9);
    }

    #[test]
    fn corrupt_json_is_rejected() {
        assert!(matches!(AppConfig::parse("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let err = AppConfig::parse(r#"{"log_level":"loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref l) if l == "loud"));
    }

    #[test]
    fn bad_colour_token_is_rejected() {
        let err = AppConfig::parse(r#"{"theme":{"colors":{"brand":"sparkly"}}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidToken(_)));
    }

    #[test]
    fn stored_config_is_used() {
        let (config, err) = resolve(Ok(Some(r#"{"log_level":"warn"}"#.into())));
        assert_eq!(config.log_filter().unwrap(), LevelFilter::Warn);
        assert!(err.is_none());
    }

    #[test]
    fn unusable_storage_falls_back_to_defaults() {
        let (config, err) = resolve(Ok(Some(r#"{"version":0}"#.into())));
        assert_eq!(config, AppConfig::default());
        assert!(matches!(err, Some(ConfigError::UnsupportedVersion { .. })));

        let (config, err) = resolve(Err(ConfigError::Storage));
        assert_eq!(config, AppConfig::default());
        assert!(matches!(err, Some(ConfigError::Storage)));
    }

    #[test]
    fn native_load_returns_defaults() {
        let (config, err) = load();
        assert_eq!(config, AppConfig::default());
        assert!(err.is_none());
    }
}
