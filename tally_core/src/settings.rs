//! # Settings
//!
//! Presentation settings for the total calculator. Every field has a default,
//! so an empty JSON object (or no settings file at all) reproduces the stock
//! behavior: read the `amount` field, ask `Enter quantity:`, render two
//! decimals.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::settings::Settings;
//!
//! let settings: Settings = serde_json::from_str(r#"{ "decimals": 3 }"#).unwrap();
//! assert_eq!(settings.decimals, 3);
//! assert_eq!(settings.prompt_text, "Enter quantity:");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{TallyError, TallyResult};
use crate::number::MAX_FRACTION_DIGITS;

/// Default name of the form field holding the amount
pub const DEFAULT_FIELD_NAME: &str = "amount";

/// Default text of the quantity prompt
pub const DEFAULT_PROMPT_TEXT: &str = "Enter quantity:";

/// Default dialog text for unparseable input
pub const DEFAULT_INVALID_MESSAGE: &str = "Please enter valid numbers.";

/// Default number of fraction digits in the total
pub const DEFAULT_DECIMALS: usize = 2;

/// Settings controlling how one total is collected and presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Form field the amount is read from
    pub field_name: String,

    /// Text shown by the quantity prompt
    pub prompt_text: String,

    /// Fraction digits in the displayed total (0..=100)
    pub decimals: usize,

    /// Treat a blank field or blank/cancelled prompt as 0 instead of invalid
    pub blank_as_zero: bool,

    /// Dialog text shown when either value is not a number
    pub invalid_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            field_name: DEFAULT_FIELD_NAME.to_string(),
            prompt_text: DEFAULT_PROMPT_TEXT.to_string(),
            decimals: DEFAULT_DECIMALS,
            blank_as_zero: false,
            invalid_message: DEFAULT_INVALID_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    /// Check that every value is usable.
    pub fn validate(&self) -> TallyResult<()> {
        if self.decimals > MAX_FRACTION_DIGITS {
            return Err(TallyError::invalid_settings(
                "decimals",
                format!("must be at most {}, got {}", MAX_FRACTION_DIGITS, self.decimals),
            ));
        }
        if self.field_name.trim().is_empty() {
            return Err(TallyError::invalid_settings("field_name", "must not be empty"));
        }
        Ok(())
    }
}

/// Load and validate settings from a JSON file.
pub fn load_settings(path: &Path) -> TallyResult<Settings> {
    let contents = fs::read_to_string(path).map_err(|e| {
        TallyError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: Settings =
        serde_json::from_str(&contents).map_err(|e| TallyError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    settings.validate()?;
    tracing::debug!(path = %path.display(), ?settings, "loaded settings");

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("tally_test_{}.json", name))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.field_name, "amount");
        assert_eq!(settings.prompt_text, "Enter quantity:");
        assert_eq!(settings.decimals, 2);
        assert!(!settings.blank_as_zero);
        assert_eq!(settings.invalid_message, "Please enter valid numbers.");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_validate_rejects_too_many_decimals() {
        let settings = Settings {
            decimals: 101,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");
    }

    #[test]
    fn test_validate_rejects_blank_field_name() {
        let settings = Settings {
            field_name: "  ".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_settings_from_file() {
        let path = temp_settings_path("load");
        fs::write(&path, r#"{ "decimals": 0, "blank_as_zero": true }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.decimals, 0);
        assert!(settings.blank_as_zero);
        assert_eq!(settings.prompt_text, DEFAULT_PROMPT_TEXT);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_settings_missing_file() {
        let path = temp_settings_path("does_not_exist");
        let _ = fs::remove_file(&path);
        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_settings_bad_json() {
        let path = temp_settings_path("bad_json");
        fs::write(&path, "{ decimals: ").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_settings_validates() {
        let path = temp_settings_path("invalid_decimals");
        fs::write(&path, r#"{ "decimals": 250 }"#).unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");

        let _ = fs::remove_file(&path);
    }
}
