//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub abbreviation: AbbreviationSettings,
    pub batch: BatchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbbreviationSettings {
    pub separator: String,
    pub open_bracket: String,
    pub close_bracket: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    pub skip_unrecognized: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }
    macro_rules! check_no_tone_mark {
        ($section:ident . $field:ident) => {
            if s.$section.$field.chars().any(crate::marks::is_tone_mark) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not contain a tone mark".to_string(),
                });
            }
        };
    }

    check_non_empty!(abbreviation.separator);
    check_non_empty!(abbreviation.open_bracket);
    check_non_empty!(abbreviation.close_bracket);

    check_no_tone_mark!(abbreviation.separator);
    check_no_tone_mark!(abbreviation.open_bracket);
    check_no_tone_mark!(abbreviation.close_bracket);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.abbreviation.separator, " ");
        assert_eq!(s.abbreviation.open_bracket, "₍");
        assert_eq!(s.abbreviation.close_bracket, "₎");
        assert!(!s.batch.skip_unrecognized);
    }

    #[test]
    fn default_style_matches_default_settings() {
        let s = parse_settings_toml(default_toml()).unwrap();
        let style = crate::abbreviate::AbbreviationStyle::from(&s.abbreviation);
        assert_eq!(style, crate::abbreviate::AbbreviationStyle::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[abbreviation]
separator = " / "
open_bracket = "("
close_bracket = ")"

[batch]
skip_unrecognized = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.abbreviation.separator, " / ");
        assert!(s.batch.skip_unrecognized);
    }

    #[test]
    fn error_empty_separator() {
        let toml = r#"
[abbreviation]
separator = ""
open_bracket = "₍"
close_bracket = "₎"

[batch]
skip_unrecognized = false
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("abbreviation.separator"));
    }

    #[test]
    fn error_tone_mark_bracket() {
        let toml = r#"
[abbreviation]
separator = " "
open_bracket = "ˬ"
close_bracket = "₎"

[batch]
skip_unrecognized = false
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("abbreviation.open_bracket"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[abbreviation]
separator = " "
open_bracket = "₍"
close_bracket = "₎"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
