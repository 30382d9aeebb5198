use anyhow::Result;
use chrono_tz::Tz;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{DEFAULT_PRODID, DEFAULT_TIMETABLE_PATH, ENV_PREFIX, SETTINGS_FILE};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub prodid: String,
    pub timezone: Option<String>,
}

impl CalendarConfig {
    /// ## Summary
    /// Resolves the configured IANA timezone name, if any.
    ///
    /// ## Errors
    /// Returns an error if the name is not a known IANA timezone.
    pub fn tz(&self) -> CoreResult<Option<Tz>> {
        self.timezone.as_deref().map(parse_timezone).transpose()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub timetable: String,
}

/// ## Summary
/// Parses an IANA timezone name such as `Asia/Shanghai`.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the name is unknown.
pub fn parse_timezone(name: &str) -> CoreResult<Tz> {
    name.parse::<Tz>()
        .map_err(|err| CoreError::ConfigError(format!("unknown timezone '{name}': {err}")))
}

impl Settings {
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("calendar.prodid", DEFAULT_PRODID)?
            .set_default("paths.timetable", DEFAULT_TIMETABLE_PATH)?)
    }

    /// ## Summary
    /// Loads configuration from the optional `kecal.toml` file and `KECAL__*`
    /// environment variables. Environment variables take precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // TOML file
            .add_source(config::File::with_name(SETTINGS_FILE).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not deserialize.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from the environment, a `.env` file and `kecal.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn defaults_apply_without_sources() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.calendar.prodid, DEFAULT_PRODID);
        assert_eq!(settings.calendar.timezone, None);
        assert_eq!(settings.paths.timetable, "config.json");
    }

    #[test]
    fn toml_overrides_defaults() {
        let settings = Settings::from_toml_str(
            "[logging]\nlevel = \"debug\"\n\n[calendar]\ntimezone = \"Asia/Shanghai\"\n",
        )
        .unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.calendar.tz().unwrap(), Some(chrono_tz::Asia::Shanghai));
        assert_eq!(settings.calendar.prodid, DEFAULT_PRODID);
    }

    #[test]
    fn unknown_timezone_is_config_error() {
        let err = parse_timezone("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, CoreError::ConfigError(_)));
        assert!(err.to_string().contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn no_timezone_resolves_to_none() {
        let calendar = CalendarConfig {
            prodid: DEFAULT_PRODID.to_string(),
            timezone: None,
        };
        assert!(calendar.tz().unwrap().is_none());
    }
}
