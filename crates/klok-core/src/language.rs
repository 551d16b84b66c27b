//! Supported tutor languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KlokError;

/// A language Klok can tell the time in.
///
/// Passed explicitly to every translation call; there is no ambient
/// "current language".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Dutch,
    German,
}

impl Language {
    /// Every supported language, in table order.
    pub const ALL: [Language; 3] = [Language::English, Language::Dutch, Language::German];

    /// Short code used in config files (`en`, `nl`, `de`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Dutch => "nl",
            Self::German => "de",
        }
    }

    /// Locale tag handed to host speech engines.
    pub fn locale(&self) -> &'static str {
        match self {
            Self::English => "en_US",
            Self::Dutch => "nl_NL",
            Self::German => "de_DE",
        }
    }

    /// The language's own name for itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Dutch => "Nederlands",
            Self::German => "Deutsch",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = KlokError;

    /// Accepts short codes, locale tags (`nl_NL`, `de-DE`) and names,
    /// case-insensitively. Anything else is rejected rather than mapped
    /// to a fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase().replace('-', "_");
        match lower.as_str() {
            "en" | "en_us" | "en_gb" | "english" => Ok(Self::English),
            "nl" | "nl_nl" | "nl_be" | "dutch" | "nederlands" => Ok(Self::Dutch),
            "de" | "de_de" | "de_at" | "de_ch" | "german" | "deutsch" => Ok(Self::German),
            _ => Err(KlokError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = KlokError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_locales_and_names() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("nl_NL".parse::<Language>().unwrap(), Language::Dutch);
        assert_eq!("de-DE".parse::<Language>().unwrap(), Language::German);
        assert_eq!("Nederlands".parse::<Language>().unwrap(), Language::Dutch);
        assert_eq!(" DEUTSCH ".parse::<Language>().unwrap(), Language::German);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let err = "fr_FR".parse::<Language>().unwrap_err();
        assert!(matches!(err, KlokError::UnsupportedLanguage(ref s) if s == "fr_FR"));
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_code_round_trips_through_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
            assert_eq!(lang.locale().parse::<Language>().unwrap(), lang);
        }
    }
}
