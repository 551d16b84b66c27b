//! Format helpers for strings with interpolation.

use klok_core::config::LessonMode;
use klok_core::Language;
use klok_lesson::{Medal, Verdict};

use super::t;

/// Format the opening line of a lesson.
pub fn lesson_intro(lang: Language, mode: LessonMode, rounds: u32) -> String {
    let mode_name = t(&format!("mode_{}", mode.display_name()), lang);
    match lang {
        Language::Dutch => format!("Les: {mode_name}, {rounds} rondes"),
        Language::German => format!("Lektion: {mode_name}, {rounds} Runden"),
        Language::English => format!("Lesson: {mode_name}, {rounds} rounds"),
    }
}

/// Format the prompt for one round: `[3/10] quarter past ten`.
pub fn round_prompt(round: u32, rounds: u32, phrase: &str) -> String {
    format!("[{round}/{rounds}] {phrase}")
}

/// Format the wrong-answer feedback, naming the target and which hand
/// was off: the minute hand by how many minutes, the hour hand outright.
pub fn wrong_answer(lang: Language, verdict: &Verdict) -> String {
    let target = verdict.target;
    let mut hands = Vec::new();
    let minutes_off = verdict.minutes_off();
    if minutes_off > 0 {
        if let Ok(minutes) = klok_tell::spell_minutes(minutes_off, lang) {
            hands.push(minutes);
        }
    }
    if !verdict.hour_right() {
        hands.push(t("wrong_hour", lang).to_string());
    }
    let how_far = hands.join(", ");
    match lang {
        Language::Dutch => format!("👎 Helaas, het was {target} ({how_far})"),
        Language::German => format!("👎 Leider nein, es war {target} ({how_far})"),
        Language::English => format!("👎 Not quite, it was {target} ({how_far})"),
    }
}

/// Format the running score: `Score: 2 - 1`.
pub fn score_line(lang: Language, score: &str) -> String {
    format!("{}: {score}", t("score", lang))
}

/// Format the medal announcement at the end of a lesson.
pub fn medal_line(lang: Language, medal: Medal) -> String {
    let key = match medal {
        Medal::Gold => "medal_gold",
        Medal::Silver => "medal_silver",
        Medal::Bronze => "medal_bronze",
        Medal::TryAgain => "medal_try_again",
    };
    format!("{} {}", medal.emoji(), t(key, lang))
}
