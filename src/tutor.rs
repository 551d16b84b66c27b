//! Interactive lesson loop: tell a target time, read the learner's answer,
//! score it, and announce the medal at the end.

use std::io::Write;

use klok_core::Language;
use klok_lesson::{Lesson, Medal, TargetGenerator};
use klok_speech::Speaker;
use klok_tell::TimeValue;
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::i18n;

/// What the learner typed.
enum Reply {
    Quit,
    Repeat,
    Answer(TimeValue),
    Unreadable,
}

fn parse_reply(line: &str) -> Reply {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Reply::Quit,
        "r" | "repeat" => Reply::Repeat,
        other => other
            .parse::<TimeValue>()
            .map(Reply::Answer)
            .unwrap_or(Reply::Unreadable),
    }
}

/// Everything a lesson run needs from its caller.
pub struct Tutor<'a, R> {
    pub lang: Language,
    pub lesson: Lesson,
    pub targets: TargetGenerator<R>,
    pub speaker: &'a dyn Speaker,
}

impl<R: Rng> Tutor<'_, R> {
    /// Run the lesson to the end. Returns `None` when the learner quits
    /// or input runs out before the last round.
    pub async fn run<I, O>(&mut self, input: I, out: &mut O) -> anyhow::Result<Option<Medal>>
    where
        I: AsyncBufRead + Unpin,
        O: Write,
    {
        let lang = self.lang;
        let mut lines = input.lines();

        writeln!(
            out,
            "{}",
            i18n::lesson_intro(lang, self.lesson.mode(), self.lesson.rounds())
        )?;
        writeln!(out, "{}", i18n::t("answer_hint", lang))?;

        while !self.lesson.is_finished() {
            let target = self.lesson.next_target(&mut self.targets)?;
            let phrase = klok_tell::tell_time(&target, lang)?;
            let round = self.lesson.answered() + 1;
            writeln!(out, "{}", i18n::round_prompt(round, self.lesson.rounds(), &phrase))?;
            self.say(&phrase).await;

            loop {
                out.flush()?;
                let Some(line) = lines.next_line().await? else {
                    writeln!(out, "{}", i18n::t("stopped", lang))?;
                    return Ok(None);
                };
                match parse_reply(&line) {
                    Reply::Quit => {
                        writeln!(out, "{}", i18n::t("stopped", lang))?;
                        info!(
                            good = self.lesson.good(),
                            wrong = self.lesson.wrong(),
                            "lesson quit"
                        );
                        return Ok(None);
                    }
                    Reply::Repeat => {
                        writeln!(out, "{phrase}")?;
                        self.say(&phrase).await;
                    }
                    Reply::Unreadable => writeln!(out, "{}", i18n::t("not_a_time", lang))?,
                    Reply::Answer(answer) => {
                        let verdict = self.lesson.check(answer)?;
                        if verdict.correct {
                            writeln!(out, "{}", i18n::t("correct", lang))?;
                        } else {
                            writeln!(
                                out,
                                "{}",
                                i18n::wrong_answer(lang, &verdict)
                            )?;
                        }
                        writeln!(out, "{}", i18n::score_line(lang, &self.lesson.score()))?;
                        break;
                    }
                }
            }
        }

        let medal = self.lesson.medal();
        if let Some(medal) = medal {
            writeln!(out, "{}", i18n::medal_line(lang, medal))?;
        }
        out.flush()?;
        Ok(medal)
    }

    /// Speak a phrase. Speech failures never end the lesson.
    async fn say(&self, phrase: &str) {
        if let Err(e) = self.speaker.speak(phrase, self.lang).await {
            warn!("speech failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klok_core::config::LessonMode;
    use klok_speech::SilentSpeaker;

    /// Targets the tutor will draw for `seed`, so tests can answer them.
    fn upcoming(seed: u64, mode: LessonMode, n: usize) -> Vec<TimeValue> {
        let mut targets = TargetGenerator::seeded(seed);
        (0..n).map(|_| targets.next_target(mode).unwrap()).collect()
    }

    fn tutor(seed: u64, mode: LessonMode, rounds: u32, lang: Language) -> Tutor<'static, rand::rngs::StdRng> {
        Tutor {
            lang,
            lesson: Lesson::new(mode, rounds).unwrap(),
            targets: TargetGenerator::seeded(seed),
            speaker: &SilentSpeaker,
        }
    }

    #[tokio::test]
    async fn test_all_correct_earns_gold() {
        let answers: Vec<String> = upcoming(21, LessonMode::FiveMinutes, 3)
            .iter()
            .map(|t| t.to_string())
            .collect();
        let input = format!("{}\n", answers.join("\n"));

        let mut t = tutor(21, LessonMode::FiveMinutes, 3, Language::English);
        let mut out = Vec::new();
        let medal = t.run(input.as_bytes(), &mut out).await.unwrap();

        assert_eq!(medal, Some(Medal::Gold));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[1/3]"), "{text}");
        assert!(text.contains("[3/3]"), "{text}");
        assert!(text.contains("Score: 3 - 0"), "{text}");
        assert!(text.contains("🥇"), "{text}");
    }

    #[tokio::test]
    async fn test_unreadable_and_repeat_do_not_use_a_round() {
        let target = upcoming(8, LessonMode::Hours, 1)[0];
        let input = format!("banana\nr\n{target}\n");

        let mut t = tutor(8, LessonMode::Hours, 1, Language::Dutch);
        let mut out = Vec::new();
        let medal = t.run(input.as_bytes(), &mut out).await.unwrap();

        assert_eq!(medal, Some(Medal::Gold));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Dat is geen tijd"), "{text}");
        assert!(text.contains("uur"), "{text}");
    }

    #[tokio::test]
    async fn test_wrong_answer_shows_target() {
        let target = upcoming(13, LessonMode::QuarterHours, 1)[0];
        let wrong_hour = target.hour().dial() % 12 + 1;
        let input = format!("{wrong_hour}:{:02}\n", target.minute());

        let mut t = tutor(13, LessonMode::QuarterHours, 1, Language::German);
        let mut out = Vec::new();
        let medal = t.run(input.as_bytes(), &mut out).await.unwrap();

        assert_eq!(medal, Some(Medal::TryAgain));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&target.to_string()), "{text}");
        assert!(text.contains("Punkte: 0 - 1"), "{text}");
    }

    #[tokio::test]
    async fn test_quit_and_end_of_input_stop_without_medal() {
        let mut t = tutor(1, LessonMode::Hours, 5, Language::English);
        let mut out = Vec::new();
        assert_eq!(t.run(&b"q\n"[..], &mut out).await.unwrap(), None);
        assert!(String::from_utf8(out).unwrap().contains("Lesson stopped."));

        let mut t = tutor(1, LessonMode::Hours, 5, Language::English);
        let mut out = Vec::new();
        assert_eq!(t.run(&b""[..], &mut out).await.unwrap(), None);
    }
}
