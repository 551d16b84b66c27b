//! Default value functions used by serde for config deserialization.

use crate::language::Language;

pub fn default_language() -> Language {
    Language::English
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

pub fn default_rounds() -> u32 {
    10
}

pub fn default_speech_command() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak".to_string()
    }
}
