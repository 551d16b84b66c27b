mod defaults;


use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::KlokError;
use crate::language::Language;
use defaults::*;

/// Top-level Klok configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub klok: KlokConfig,
    #[serde(default)]
    pub lesson: LessonConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KlokConfig {
    /// Language used when the command line does not name one.
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file path. Empty = log to stderr.
    #[serde(default)]
    pub log_file: String,
}

impl Default for KlokConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            log_level: default_log_level(),
            log_file: String::new(),
        }
    }
}

/// Lesson difficulty -- which minutes a target time may land on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonMode {
    /// Full hours only.
    Hours,
    /// Full and half hours.
    HalfHours,
    /// Quarters of the hour (default).
    #[default]
    QuarterHours,
    /// Multiples of five minutes.
    FiveMinutes,
    /// Any minute.
    Minutes,
}

impl LessonMode {
    /// Every mode, easiest first.
    pub const ALL: [LessonMode; 5] = [
        LessonMode::Hours,
        LessonMode::HalfHours,
        LessonMode::QuarterHours,
        LessonMode::FiveMinutes,
        LessonMode::Minutes,
    ];

    /// Name as written in config files and on the command line.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::HalfHours => "half-hours",
            Self::QuarterHours => "quarter-hours",
            Self::FiveMinutes => "five-minutes",
            Self::Minutes => "minutes",
        }
    }

    /// Distance between two neighbouring minute values this mode can produce.
    pub fn minute_step(&self) -> u8 {
        match self {
            Self::Hours => 60,
            Self::HalfHours => 30,
            Self::QuarterHours => 15,
            Self::FiveMinutes => 5,
            Self::Minutes => 1,
        }
    }
}

impl fmt::Display for LessonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LessonMode {
    type Err = KlokError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|m| m.display_name() == wanted)
            .ok_or_else(|| {
                KlokError::Config(format!(
                    "unknown lesson mode '{s}' (expected one of: hours, half-hours, \
                     quarter-hours, five-minutes, minutes)"
                ))
            })
    }
}

/// Lesson settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonConfig {
    #[serde(default)]
    pub mode: LessonMode,
    /// Rounds per lesson; must be at least 1.
    #[serde(default = "default_rounds")]
    pub rounds: u32,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            mode: LessonMode::default(),
            rounds: default_rounds(),
        }
    }
}

/// Speech output through a host text-to-speech command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Program to run, e.g. `say` or `espeak`.
    #[serde(default = "default_speech_command")]
    pub command: String,
    /// Extra arguments placed before the voice flag and the text.
    #[serde(default)]
    pub args: Vec<String>,
    /// Voice per language, passed as `-v <voice>`. espeak falls back to the
    /// language code; `say` needs an entry for every language it should read.
    #[serde(default)]
    pub voices: HashMap<Language, String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: default_speech_command(),
            args: Vec::new(),
            voices: HashMap::new(),
        }
    }
}

impl Config {
    /// Reject values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), KlokError> {
        if self.lesson.rounds == 0 {
            return Err(KlokError::Config(
                "lesson.rounds must be at least 1".to_string(),
            ));
        }
        if self.speech.enabled && self.speech.command.trim().is_empty() {
            return Err(KlokError::Config(
                "speech is enabled but speech.command is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse configuration from TOML text and validate it.
pub fn parse(content: &str) -> Result<Config, KlokError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| KlokError::Config(format!("failed to parse config: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, KlokError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    parse(&content)
}
