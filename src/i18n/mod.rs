//! Internationalization: localized strings for the tutor's own prompts.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! `format` helpers for strings with interpolation. The told times
//! themselves come from `klok-tell`, not from here.

mod format;

#[cfg(test)]
mod tests;

pub use format::*;

use klok_core::Language;

/// Return a localized static string for `key` in the given `lang`.
/// Unknown keys return `"???"`.
pub fn t(key: &str, lang: Language) -> &'static str {
    use Language::{Dutch, English, German};
    match (key, lang) {
        // --- Lesson flow ---
        ("answer_hint", English) => "Set the clock: type the time as H:MM (r = repeat, q = quit)",
        ("answer_hint", Dutch) => "Zet de klok: typ de tijd als U:MM (r = herhaal, q = stop)",
        ("answer_hint", German) => "Stell die Uhr: tippe die Zeit als S:MM (r = wiederholen, q = beenden)",

        ("correct", English) => "👍 Correct!",
        ("correct", Dutch) => "👍 Goed zo!",
        ("correct", German) => "👍 Richtig!",

        ("not_a_time", English) => "That is not a time. Type it like 10:25.",
        ("not_a_time", Dutch) => "Dat is geen tijd. Typ bijvoorbeeld 10:25.",
        ("not_a_time", German) => "Das ist keine Uhrzeit. Tippe zum Beispiel 10:25.",

        ("stopped", English) => "Lesson stopped.",
        ("stopped", Dutch) => "Les gestopt.",
        ("stopped", German) => "Lektion beendet.",

        ("wrong_hour", English) => "the hour hand is off",
        ("wrong_hour", Dutch) => "de uurwijzer staat verkeerd",
        ("wrong_hour", German) => "der Stundenzeiger steht falsch",

        // --- Results ---
        ("score", English) => "Score",
        ("score", Dutch) => "Score",
        ("score", German) => "Punkte",

        ("medal_gold", English) => "Perfect, every clock right!",
        ("medal_gold", Dutch) => "Perfect, alle klokken goed!",
        ("medal_gold", German) => "Perfekt, alle Uhren richtig!",

        ("medal_silver", English) => "Very good!",
        ("medal_silver", Dutch) => "Heel goed!",
        ("medal_silver", German) => "Sehr gut!",

        ("medal_bronze", English) => "Good, keep practising.",
        ("medal_bronze", Dutch) => "Goed, blijf oefenen.",
        ("medal_bronze", German) => "Gut, übe weiter.",

        ("medal_try_again", English) => "Roll the dice and try again.",
        ("medal_try_again", Dutch) => "Gooi de dobbelsteen en probeer het nog eens.",
        ("medal_try_again", German) => "Würfle und versuch es noch einmal.",

        // --- Lesson modes ---
        ("mode_hours", English) => "whole hours",
        ("mode_hours", Dutch) => "hele uren",
        ("mode_hours", German) => "volle Stunden",

        ("mode_half-hours", English) => "half hours",
        ("mode_half-hours", Dutch) => "halve uren",
        ("mode_half-hours", German) => "halbe Stunden",

        ("mode_quarter-hours", English) => "quarter hours",
        ("mode_quarter-hours", Dutch) => "kwartieren",
        ("mode_quarter-hours", German) => "Viertelstunden",

        ("mode_five-minutes", English) => "five minutes",
        ("mode_five-minutes", Dutch) => "vijf minuten",
        ("mode_five-minutes", German) => "fünf Minuten",

        ("mode_minutes", English) => "every minute",
        ("mode_minutes", Dutch) => "elke minuut",
        ("mode_minutes", German) => "jede Minute",

        _ => "???",
    }
}
