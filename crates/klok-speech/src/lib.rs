//! # klok-speech
//!
//! Reads a phrase aloud by handing it to a text-to-speech program already
//! on the host (`say` on macOS, `espeak` elsewhere). Klok does no audio
//! work of its own.

use async_trait::async_trait;
use klok_core::config::SpeechConfig;
use klok_core::{KlokError, Language};
use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Something that can read a phrase aloud.
#[async_trait]
pub trait Speaker: Send + Sync {
    /// Human-readable speaker name.
    fn name(&self) -> &str;

    /// Whether the speaker can be used on this host.
    fn is_available(&self) -> bool;

    /// Speak `text` and return once it has been said.
    async fn speak(&self, text: &str, lang: Language) -> Result<(), KlokError>;
}

/// Speaker used when speech is disabled.
pub struct SilentSpeaker;

#[async_trait]
impl Speaker for SilentSpeaker {
    fn name(&self) -> &str {
        "silent"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn speak(&self, _text: &str, _lang: Language) -> Result<(), KlokError> {
        Ok(())
    }
}

/// Speaker backed by a host command.
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
    voices: HashMap<Language, String>,
}

impl CommandSpeaker {
    pub fn from_config(cfg: &SpeechConfig) -> Self {
        Self {
            program: cfg.command.clone(),
            args: cfg.args.clone(),
            voices: cfg.voices.clone(),
        }
    }

    /// Voice for `lang`: the configured one, else one derived from the
    /// language when the program understands language codes as voices.
    pub fn voice(&self, lang: Language) -> Option<&str> {
        if let Some(voice) = self.voices.get(&lang) {
            return Some(voice.as_str());
        }
        derives_voice_from_language(&self.program).then(|| lang.code())
    }

    /// Build the command: configured args, `-v <voice>` when a voice is
    /// known for `lang`, then the text as the last argument.
    pub fn command(&self, text: &str, lang: Language) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(voice) = self.voice(lang) {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd
    }
}

#[async_trait]
impl Speaker for CommandSpeaker {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        which_exists(&self.program)
    }

    async fn speak(&self, text: &str, lang: Language) -> Result<(), KlokError> {
        debug!(program = %self.program, %lang, "speaking");
        let output = self
            .command(text, lang)
            .output()
            .await
            .map_err(|e| KlokError::Speech(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(KlokError::Speech(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

/// Pick a speaker for the configuration. Falls back to silence (with a
/// warning) when the configured program is not installed.
pub fn speaker_from_config(cfg: &SpeechConfig) -> Box<dyn Speaker> {
    if !cfg.enabled {
        return Box::new(SilentSpeaker);
    }
    let speaker = CommandSpeaker::from_config(cfg);
    if !speaker.is_available() {
        warn!(
            "speech command '{}' not found on PATH; continuing without speech",
            cfg.command
        );
        return Box::new(SilentSpeaker);
    }
    for lang in Language::ALL {
        if speaker.voice(lang).is_none() {
            warn!(
                "no voice for {} configured; '{}' will read it with its default voice \
                 (set speech.voices.{})",
                lang.locale(),
                cfg.command,
                lang.code()
            );
        }
    }
    Box::new(speaker)
}

/// espeak and espeak-ng take a language code (`nl`, `de`) as a voice name.
/// `say` does not, so it needs `speech.voices`.
fn derives_voice_from_language(program: &str) -> bool {
    Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("espeak"))
}

/// Check whether a CLI tool exists on `$PATH`.
fn which_exists(tool: &str) -> bool {
    std::process::Command::new("which")
        .arg(tool)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
