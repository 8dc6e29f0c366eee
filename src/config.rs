//! Policy configuration.
//!
//! A [`PolicyConfig`] is built once (defaults, environment, or builder calls)
//! and then bound to a [`PolicyEngine`](crate::PolicyEngine). It is never
//! mutated afterwards, so engines can be shared freely across threads.

use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::blacklist::{blacklist_path_from_env, load_blacklist, BlacklistError};

const DEFAULT_MIN_LENGTH: usize = 12;
const DEFAULT_MAX_CONSECUTIVE_REPEATS: usize = 3;

const DEFAULT_COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "qwerty", "12345", "12345678",
    "111111", "123123", "password123", "p@ssword", "admin", "user",
];

// Keyboard rows and digit runs. The QWERTY rows ("qwerty", "asdfg", "zxcvb")
// extend the AZERTY-only list this policy started from. Order decides which
// sequence is reported when several match.
const DEFAULT_SEQUENCES: &[&str] = &[
    "azerty", "qwerty", "qsdfg", "asdfg", "wxcvb", "zxcvb",
    "12345", "23456", "34567", "45678", "56789", "01234",
    "aqwxs", "edcrfv", "1aqw", "2wsx", "3edc",
    "98765", "87654", "76543", "65432", "54321", "09876",
    "poiuy", "lkjhg", ",nbvc",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("Minimum length must be at least 1")]
    InvalidMinLength,
    #[error("Maximum consecutive repeats must be at least 1")]
    InvalidRepeatThreshold,
    #[error(transparent)]
    Blacklist(#[from] BlacklistError),
}

/// Which character classes a password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl Default for RequiredClasses {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digit: true,
            symbol: true,
        }
    }
}

/// Static policy parameters read by every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    min_length: usize,
    required: RequiredClasses,
    max_consecutive_repeats: usize,
    common_passwords: HashSet<String>,
    sequences: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            required: RequiredClasses::default(),
            max_consecutive_repeats: DEFAULT_MAX_CONSECUTIVE_REPEATS,
            common_passwords: DEFAULT_COMMON_PASSWORDS
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            sequences: DEFAULT_SEQUENCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PolicyConfig {
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn required(&self) -> RequiredClasses {
        self.required
    }

    pub fn max_consecutive_repeats(&self) -> usize {
        self.max_consecutive_repeats
    }

    /// Lowercased common passwords.
    pub fn common_passwords(&self) -> &HashSet<String> {
        &self.common_passwords
    }

    /// Denylisted sequences in match-priority order.
    pub fn sequences(&self) -> &[String] {
        &self.sequences
    }

    /// Checked by [`validate`](Self::validate) when bound to an engine.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_required(mut self, required: RequiredClasses) -> Self {
        self.required = required;
        self
    }

    /// Checked by [`validate`](Self::validate) when bound to an engine.
    pub fn with_max_consecutive_repeats(mut self, max: usize) -> Self {
        self.max_consecutive_repeats = max;
        self
    }

    /// Replaces the common-password set. Entries are lowercased.
    pub fn with_common_passwords<I, S>(mut self, passwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.common_passwords = passwords
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Replaces the sequence list, keeping the given order.
    pub fn with_sequences<I, S>(mut self, sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sequences = sequences.into_iter().map(Into::into).collect();
        self
    }

    /// Merges a common-password file into the current set.
    pub fn with_blacklist_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let extra = load_blacklist(path)?;
        self.common_passwords.extend(extra);
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::InvalidMinLength);
        }
        if self.max_consecutive_repeats == 0 {
            return Err(ConfigError::InvalidRepeatThreshold);
        }
        Ok(())
    }

    /// Builds a config from the defaults overlaid with environment variables.
    ///
    /// | Env Var                       | Effect                                   |
    /// |-------------------------------|------------------------------------------|
    /// | `PWD_MIN_LENGTH`              | minimum length                           |
    /// | `PWD_REQUIRE_UPPER`           | require `A-Z` (`true`/`false`)           |
    /// | `PWD_REQUIRE_LOWER`           | require `a-z`                            |
    /// | `PWD_REQUIRE_DIGIT`           | require `0-9`                            |
    /// | `PWD_REQUIRE_SYMBOL`          | require a punctuation symbol             |
    /// | `PWD_MAX_CONSECUTIVE_REPEATS` | longest allowed run of one character     |
    /// | `PWD_SEQUENCES`               | comma-separated list, replaces defaults  |
    /// | `PWD_BLACKLIST_PATH`          | file merged into the common passwords    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = env_parsed::<usize>("PWD_MIN_LENGTH")? {
            config.min_length = v;
        }
        if let Some(v) = env_bool("PWD_REQUIRE_UPPER")? {
            config.required.upper = v;
        }
        if let Some(v) = env_bool("PWD_REQUIRE_LOWER")? {
            config.required.lower = v;
        }
        if let Some(v) = env_bool("PWD_REQUIRE_DIGIT")? {
            config.required.digit = v;
        }
        if let Some(v) = env_bool("PWD_REQUIRE_SYMBOL")? {
            config.required.symbol = v;
        }
        if let Some(v) = env_parsed::<usize>("PWD_MAX_CONSECUTIVE_REPEATS")? {
            config.max_consecutive_repeats = v;
        }
        if let Ok(raw) = std::env::var("PWD_SEQUENCES") {
            config.sequences = raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(path) = blacklist_path_from_env() {
            config = config.with_blacklist_file(path)?;
        }

        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            min_length = config.min_length,
            max_consecutive_repeats = config.max_consecutive_repeats,
            common_passwords = config.common_passwords.len(),
            sequences = config.sequences.len(),
            "Policy configuration loaded"
        );

        Ok(config)
    }
}

fn env_parsed<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

fn env_bool(key: &'static str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue { key, value: raw }),
        },
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ENV_KEYS: &[&str] = &[
        "PWD_MIN_LENGTH",
        "PWD_REQUIRE_UPPER",
        "PWD_REQUIRE_LOWER",
        "PWD_REQUIRE_DIGIT",
        "PWD_REQUIRE_SYMBOL",
        "PWD_MAX_CONSECUTIVE_REPEATS",
        "PWD_SEQUENCES",
        "PWD_BLACKLIST_PATH",
    ];

    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value); }
    }

    fn clear_env() {
        for key in ENV_KEYS {
            unsafe { std::env::remove_var(key); }
        }
    }

    #[test]
    fn test_default_values() {
        let config = PolicyConfig::default();
        assert_eq!(config.min_length(), 12);
        assert_eq!(config.max_consecutive_repeats(), 3);
        assert_eq!(config.required(), RequiredClasses::default());
        assert!(config.common_passwords().contains("password123"));
        assert!(config.common_passwords().contains("p@ssword"));
        assert_eq!(config.sequences()[0], "azerty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_sequences_include_qwerty_rows() {
        let config = PolicyConfig::default();
        let position = |needle: &str| config.sequences().iter().position(|s| s == needle);

        for row in ["qwerty", "asdfg", "zxcvb"] {
            assert!(position(row).is_some(), "{row} should be a default sequence");
        }
        // each QWERTY row follows its AZERTY counterpart
        assert_eq!(position("qwerty"), Some(position("azerty").unwrap() + 1));
        assert_eq!(position("asdfg"), Some(position("qsdfg").unwrap() + 1));
        assert_eq!(position("zxcvb"), Some(position("wxcvb").unwrap() + 1));
    }

    #[test]
    fn test_builder_lowercases_common_passwords() {
        let config = PolicyConfig::default().with_common_passwords(["Hunter2", "LETMEIN"]);
        assert_eq!(config.common_passwords().len(), 2);
        assert!(config.common_passwords().contains("hunter2"));
        assert!(config.common_passwords().contains("letmein"));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = PolicyConfig::default().with_min_length(0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidMinLength)));

        let config = PolicyConfig::default().with_max_consecutive_repeats(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRepeatThreshold)
        ));
    }

    #[test]
    fn test_with_blacklist_file_merges() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Dragon").expect("Failed to write");

        let config = PolicyConfig::default()
            .with_blacklist_file(temp_file.path())
            .expect("blacklist should load");
        assert!(config.common_passwords().contains("dragon"));
        assert!(config.common_passwords().contains("password"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = PolicyConfig::from_env().expect("defaults are valid");
        assert_eq!(config, PolicyConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env("PWD_MIN_LENGTH", "8");
        set_env("PWD_REQUIRE_SYMBOL", "false");
        set_env("PWD_MAX_CONSECUTIVE_REPEATS", "2");
        set_env("PWD_SEQUENCES", "abcd, ,1234");

        let config = PolicyConfig::from_env().expect("overrides are valid");
        assert_eq!(config.min_length(), 8);
        assert!(!config.required().symbol);
        assert!(config.required().upper);
        assert_eq!(config.max_consecutive_repeats(), 2);
        assert_eq!(config.sequences(), &["abcd".to_string(), "1234".to_string()]);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_number() {
        clear_env();
        set_env("PWD_MIN_LENGTH", "twelve");

        match PolicyConfig::from_env() {
            Err(ConfigError::InvalidValue { key, value }) => {
                assert_eq!(key, "PWD_MIN_LENGTH");
                assert_eq!(value, "twelve");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_bool() {
        clear_env();
        set_env("PWD_REQUIRE_UPPER", "maybe");
        assert!(matches!(
            PolicyConfig::from_env(),
            Err(ConfigError::InvalidValue { key: "PWD_REQUIRE_UPPER", .. })
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_min_length() {
        clear_env();
        set_env("PWD_MIN_LENGTH", "0");
        assert!(matches!(
            PolicyConfig::from_env(),
            Err(ConfigError::InvalidMinLength)
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_blacklist_file() {
        clear_env();
        set_env("PWD_BLACKLIST_PATH", "/nonexistent/blacklist.txt");
        assert!(matches!(
            PolicyConfig::from_env(),
            Err(ConfigError::Blacklist(BlacklistError::FileNotFound(_)))
        ));
        clear_env();
    }
}
