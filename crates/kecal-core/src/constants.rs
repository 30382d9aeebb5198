/// Product name used in PRODID and UID namespaces.
pub const PRODUCT_NAME: &str = "kecal";

/// Default PRODID for generated calendars.
pub const DEFAULT_PRODID: &str =
    const_str::concat!("-//", PRODUCT_NAME, "//Class Schedule Calendar//EN");

/// Default location of the period timetable file.
pub const DEFAULT_TIMETABLE_PATH: &str = "config.json";

/// Optional settings file, looked up in the working directory.
pub const SETTINGS_FILE: &str = const_str::concat!(PRODUCT_NAME, ".toml");

/// Prefix for settings taken from the environment (`KECAL__LOGGING__LEVEL`).
pub const ENV_PREFIX: &str = "KECAL";

/// Suffix marking a week-range token (`1-16周`).
pub const WEEK_SUFFIX: char = '周';
