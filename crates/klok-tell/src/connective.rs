//! Fixed function words that do not vary with the numeral.

use klok_core::Language;

/// A connective word, keyed by role instead of table position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    Space,
    Minute,
    Minutes,
    OClock,
    Hours,
    To,
    Past,
    Quarter,
    Half,
}

impl Connective {
    pub const ALL: [Connective; 9] = [
        Connective::Space,
        Connective::Minute,
        Connective::Minutes,
        Connective::OClock,
        Connective::Hours,
        Connective::To,
        Connective::Past,
        Connective::Quarter,
        Connective::Half,
    ];

    /// The word for this connective in `lang`.
    pub fn word(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Space, _) => " ",

            (Self::Minute, Language::English) => "minute",
            (Self::Minute, Language::Dutch) => "minuut",
            (Self::Minute, Language::German) => "Minute",

            (Self::Minutes, Language::English) => "minutes",
            (Self::Minutes, Language::Dutch) => "minuten",
            (Self::Minutes, Language::German) => "Minuten",

            (Self::OClock, Language::English) => "o'clock",
            (Self::OClock, Language::Dutch) => "uur",
            (Self::OClock, Language::German) => "Uhr",

            (Self::Hours, Language::English) => "hours",
            (Self::Hours, Language::Dutch) => "uren",
            (Self::Hours, Language::German) => "Stunden",

            (Self::To, Language::English) => "to",
            (Self::To, Language::Dutch) => "voor",
            (Self::To, Language::German) => "vor",

            (Self::Past, Language::English) => "past",
            (Self::Past, Language::Dutch) => "over",
            (Self::Past, Language::German) => "nach",

            (Self::Quarter, Language::English) => "quarter",
            (Self::Quarter, Language::Dutch) => "kwart",
            (Self::Quarter, Language::German) => "Viertel",

            (Self::Half, Language::English) => "half",
            (Self::Half, Language::Dutch) => "half",
            (Self::Half, Language::German) => "halb",
        }
    }
}
