use super::*;
use klok_core::config::LessonMode;
use klok_core::Language;
use klok_lesson::{Medal, Verdict};
use klok_tell::TimeValue;

const KEYS: [&str; 15] = [
    "answer_hint",
    "correct",
    "not_a_time",
    "stopped",
    "wrong_hour",
    "score",
    "medal_gold",
    "medal_silver",
    "medal_bronze",
    "medal_try_again",
    "mode_hours",
    "mode_half-hours",
    "mode_quarter-hours",
    "mode_five-minutes",
    "mode_minutes",
];

#[test]
fn test_all_keys_defined_in_every_language() {
    for lang in Language::ALL {
        for key in KEYS {
            assert_ne!(t(key, lang), "???", "key '{key}' missing for {lang}");
        }
    }
}

#[test]
fn test_every_lesson_mode_has_a_name() {
    for lang in Language::ALL {
        for mode in LessonMode::ALL {
            let key = format!("mode_{}", mode.display_name());
            assert_ne!(t(&key, lang), "???", "{key} missing for {lang}");
        }
    }
}

#[test]
fn test_translations_differ_from_english() {
    for lang in [Language::Dutch, Language::German] {
        for key in ["answer_hint", "correct", "stopped", "medal_gold"] {
            assert_ne!(t(key, lang), t(key, Language::English), "{key} in {lang}");
        }
    }
}

#[test]
fn test_unknown_key_returns_placeholder() {
    assert_eq!(t("nonexistent_key", Language::English), "???");
}

fn verdict(target: (u8, u8), answer: (u8, u8)) -> Verdict {
    let target = TimeValue::new(target.0, target.1).unwrap();
    let answer = TimeValue::new(answer.0, answer.1).unwrap();
    Verdict {
        target,
        answer,
        correct: false,
        off_by: target.dial_distance(&answer),
    }
}

#[test]
fn test_wrong_answer_names_both_hands_when_both_are_off() {
    let msg = wrong_answer(Language::English, &verdict((10, 0), (11, 20)));
    assert_eq!(
        msg,
        "👎 Not quite, it was 10:00 (twenty minutes, the hour hand is off)"
    );
    let msg = wrong_answer(Language::German, &verdict((10, 0), (11, 20)));
    assert!(msg.contains("zwanzig Minuten"), "{msg}");
    assert!(msg.contains("Stundenzeiger"), "{msg}");
}

#[test]
fn test_format_helpers() {
    assert_eq!(
        lesson_intro(Language::English, LessonMode::QuarterHours, 10),
        "Lesson: quarter hours, 10 rounds"
    );
    assert!(lesson_intro(Language::Dutch, LessonMode::Hours, 3).contains("hele uren"));

    assert_eq!(round_prompt(3, 10, "half elf"), "[3/10] half elf");

    let msg = wrong_answer(Language::Dutch, &verdict((10, 25), (10, 30)));
    assert!(msg.contains("10:25"), "{msg}");
    assert!(msg.contains("vijf minuten"), "{msg}");
    assert!(!msg.contains("uurwijzer"), "{msg}");

    let msg = wrong_answer(Language::English, &verdict((10, 25), (12, 25)));
    assert_eq!(msg, "👎 Not quite, it was 10:25 (the hour hand is off)");

    assert_eq!(score_line(Language::German, "2 - 1"), "Punkte: 2 - 1");
    assert!(medal_line(Language::English, Medal::Gold).starts_with("🥇"));
    assert!(medal_line(Language::German, Medal::TryAgain).contains("Würfle"));
}
