//! Numeral tables and the rules for spelling out hour and minute counts.
//!
//! Everything up to twenty-four is stored literally: the teens do not
//! follow a single "-teen" pattern across the three languages (thirteen,
//! dertien, dreizehn; veertien, not viertien; siebzehn, not siebenzehn).
//! Counts from 25 up are built from a tens word and a units word, in each
//! language's own order.

use klok_core::{KlokError, Language};

/// Table index of the noon sentinel.
pub const NOON: u8 = 0;
/// Table index of the midnight sentinel.
pub const MIDNIGHT: u8 = 25;

const EN_NUMERALS: [&str; 26] = [
    "noon",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
    "twenty-one",
    "twenty-two",
    "twenty-three",
    "twenty-four",
    "midnight",
];

const NL_NUMERALS: [&str; 26] = [
    "twaalf",
    "één",
    "twee",
    "drie",
    "vier",
    "vijf",
    "zes",
    "zeven",
    "acht",
    "negen",
    "tien",
    "elf",
    "twaalf",
    "dertien",
    "veertien",
    "vijftien",
    "zestien",
    "zeventien",
    "achttien",
    "negentien",
    "twintig",
    "eenentwintig",
    "tweeëntwintig",
    "drieëntwintig",
    "vierentwintig",
    "twaalf",
];

const DE_NUMERALS: [&str; 26] = [
    "zwölf",
    "eins",
    "zwei",
    "drei",
    "vier",
    "fünf",
    "sechs",
    "sieben",
    "acht",
    "neun",
    "zehn",
    "elf",
    "zwölf",
    "dreizehn",
    "vierzehn",
    "fünfzehn",
    "sechzehn",
    "siebzehn",
    "achtzehn",
    "neunzehn",
    "zwanzig",
    "einundzwanzig",
    "zweiundzwanzig",
    "dreiundzwanzig",
    "vierundzwanzig",
    "zwölf",
];

const EN_TENS: [&str; 6] = ["", "ten", "twenty", "thirty", "forty", "fifty"];
const NL_TENS: [&str; 6] = ["", "tien", "twintig", "dertig", "veertig", "vijftig"];
const DE_TENS: [&str; 6] = ["", "zehn", "zwanzig", "dreißig", "vierzig", "fünfzig"];

fn numerals(lang: Language) -> &'static [&'static str; 26] {
    match lang {
        Language::English => &EN_NUMERALS,
        Language::Dutch => &NL_NUMERALS,
        Language::German => &DE_NUMERALS,
    }
}

fn tens(lang: Language) -> &'static [&'static str; 6] {
    match lang {
        Language::English => &EN_TENS,
        Language::Dutch => &NL_TENS,
        Language::German => &DE_TENS,
    }
}

/// Look up table entry `index` (0 = noon, 1..=24, 25 = midnight).
pub fn render(index: u8, lang: Language) -> Result<&'static str, KlokError> {
    numerals(lang)
        .get(usize::from(index))
        .copied()
        .ok_or_else(|| KlokError::InvalidInput(format!("numeral index {index} is not in 0..=25")))
}

/// Spell out a count of minutes, 0..=59.
///
/// Counts up to 24 come straight from the table. From 25 on the count is
/// split into tens and units: English writes `twenty-five`, Dutch puts the
/// units first (`vijfentwintig`, `tweeëntwintig`), German likewise
/// (`fünfundzwanzig`).
pub fn render_count(count: u8, lang: Language) -> Result<String, KlokError> {
    if count > 59 {
        return Err(KlokError::InvalidInput(format!(
            "minute count {count} is not in 0..=59"
        )));
    }
    if count < 25 {
        return render(count, lang).map(str::to_string);
    }

    let tens_word = tens(lang)[usize::from(count / 10)];
    let units = count % 10;
    if units == 0 {
        return Ok(tens_word.to_string());
    }

    let word = match lang {
        Language::English => format!("{tens_word}-{}", EN_NUMERALS[usize::from(units)]),
        Language::Dutch => {
            let unit = if units == 1 {
                "een"
            } else {
                NL_NUMERALS[usize::from(units)]
            };
            // twee + en -> tweeën: the diaeresis keeps the vowels apart.
            let joiner = if unit.ends_with('e') { "ën" } else { "en" };
            format!("{unit}{joiner}{tens_word}")
        }
        Language::German => {
            let unit = if units == 1 {
                "ein"
            } else {
                DE_NUMERALS[usize::from(units)]
            };
            format!("{unit}und{tens_word}")
        }
    };
    Ok(word)
}

/// Hour word as used directly before the o'clock marker.
///
/// German drops the `s` of `eins` there: `ein Uhr`.
pub fn render_full_hour(index: u8, lang: Language) -> Result<&'static str, KlokError> {
    match (lang, index) {
        (Language::German, 1) => Ok("ein"),
        _ => render(index, lang),
    }
}
