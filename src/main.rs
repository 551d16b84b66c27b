mod i18n;
mod tutor;

use chrono::Timelike;
use clap::{Parser, Subcommand};
use klok_core::config::{self, Config, LessonMode};
use klok_core::Language;
use klok_lesson::{Lesson, TargetGenerator};
use klok_speech::{speaker_from_config, CommandSpeaker, Speaker};
use klok_tell::TimeValue;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser)]
#[command(
    name = "klok",
    version,
    about = "Klok — learn to read the clock in English, Dutch and German"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "klok.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Tell a time, e.g. `klok tell 10:25 --lang nl`.
    Tell {
        /// Time as H:MM.
        time: TimeValue,
        /// Language (en, nl, de). Defaults to the configured language.
        #[arg(short, long)]
        lang: Option<Language>,
        /// Also speak the phrase.
        #[arg(long)]
        speak: bool,
    },
    /// Tell the current local time.
    Now {
        #[arg(short, long)]
        lang: Option<Language>,
        #[arg(long)]
        speak: bool,
    },
    /// Print every time on the dial at the given minute step.
    Chart {
        #[arg(short, long)]
        lang: Option<Language>,
        /// Minute step; must divide 60.
        #[arg(short, long, default_value_t = 5)]
        step: u8,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive lesson.
    Lesson {
        #[arg(short, long)]
        lang: Option<Language>,
        /// hours, half-hours, quarter-hours, five-minutes or minutes.
        #[arg(short, long)]
        mode: Option<LessonMode>,
        /// Number of rounds.
        #[arg(short, long)]
        rounds: Option<u32>,
        /// Speak each target time.
        #[arg(long)]
        speak: bool,
        /// Seed for a repeatable lesson.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the effective configuration and speech availability.
    Status,
}

#[derive(Serialize)]
struct ChartRow {
    time: String,
    phrase: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load(&cli.config)?;
    let _log_guard = init_logging(&cfg)?;
    if Path::new(&cli.config).exists() {
        info!(path = %cli.config, "config loaded");
    } else {
        info!("Config file not found at {}, using defaults", cli.config);
    }

    match cli.command {
        Commands::Tell { time, lang, speak } => {
            let lang = lang.unwrap_or(cfg.klok.language);
            let phrase = klok_tell::tell_time(&time, lang)?;
            println!("{phrase}");
            if speak {
                speak_once(&cfg, &cli.config, &phrase, lang).await?;
            }
        }
        Commands::Now { lang, speak } => {
            let lang = lang.unwrap_or(cfg.klok.language);
            let now = chrono::Local::now();
            let time = TimeValue::from_24h(u8::try_from(now.hour())?, u8::try_from(now.minute())?)?;
            let phrase = klok_tell::tell_time(&time, lang)?;
            println!("{phrase}");
            if speak {
                speak_once(&cfg, &cli.config, &phrase, lang).await?;
            }
        }
        Commands::Chart { lang, step, json } => {
            let lang = lang.unwrap_or(cfg.klok.language);
            let rows = klok_tell::dial(step)?
                .map(|time| -> anyhow::Result<ChartRow> {
                    Ok(ChartRow {
                        time: time.to_string(),
                        phrase: klok_tell::tell_time(&time, lang)?,
                    })
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{:>5}  {}", row.time, row.phrase);
                }
            }
        }
        Commands::Lesson {
            lang,
            mode,
            rounds,
            speak,
            seed,
        } => {
            if speak {
                cfg.speech.enabled = true;
            }
            let speaker = speaker_from_config(&cfg.speech);
            let targets = match seed {
                Some(seed) => TargetGenerator::seeded(seed),
                None => TargetGenerator::from_entropy(),
            };
            let mut tutor = tutor::Tutor {
                lang: lang.unwrap_or(cfg.klok.language),
                lesson: Lesson::new(
                    mode.unwrap_or(cfg.lesson.mode),
                    rounds.unwrap_or(cfg.lesson.rounds),
                )?,
                targets,
                speaker: speaker.as_ref(),
            };
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            tutor.run(stdin, &mut stdout).await?;
        }
        Commands::Status => {
            println!("Klok — Status\n");
            println!("Config: {}", cli.config);
            println!("Language: {} ({})", cfg.klok.language, cfg.klok.language.native_name());
            println!(
                "Lesson: {} x {} rounds",
                cfg.lesson.mode, cfg.lesson.rounds
            );
            println!();

            let speaker = CommandSpeaker::from_config(&cfg.speech);
            println!(
                "  speech: {}",
                if !cfg.speech.enabled {
                    "disabled"
                } else if speaker.is_available() {
                    "enabled"
                } else {
                    "enabled but command not found"
                }
            );
            println!(
                "  {}: {}",
                cfg.speech.command,
                if speaker.is_available() {
                    "available"
                } else {
                    "not found"
                }
            );
        }
    }

    Ok(())
}

/// Speak one phrase, failing loudly if the speech command is missing.
async fn speak_once(
    cfg: &Config,
    config_path: &str,
    phrase: &str,
    lang: Language,
) -> anyhow::Result<()> {
    let speaker = CommandSpeaker::from_config(&cfg.speech);
    if !speaker.is_available() {
        anyhow::bail!(
            "speech command '{}' not found. Set speech.command in {config_path}.",
            cfg.speech.command
        );
    }
    speaker.speak(phrase, lang).await?;
    Ok(())
}

/// Install the tracing subscriber. With `log_file` set, logs go through a
/// non-blocking file writer so they never mix with lesson output; the
/// returned guard must live until exit.
fn init_logging(cfg: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.klok.log_level));

    if cfg.klok.log_file.is_empty() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let path = Path::new(&cfg.klok.log_file);
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log_file '{}' has no file name", cfg.klok.log_file))?;
    let appender = tracing_appender::rolling::never(dir.unwrap_or(Path::new(".")), file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}
