//! Phrase templates and their composition into text.
//!
//! A template is a short list of tokens picked per (bucket, language).
//! English and Dutch/German genuinely differ between :16 and :44: English
//! keeps counting past the hour, while Dutch and German count around the
//! half hour and name the *next* hour ("vijf voor half elf" is 10:25).

use klok_core::{KlokError, Language};
use tracing::debug;

use crate::bucket::MinuteBucket;
use crate::connective::Connective;
use crate::numeral;
use crate::time::TimeValue;

/// One slot of a phrase template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// The current hour.
    Hour,
    /// The current hour as it stands before the o'clock marker.
    FullHour,
    /// The hour after the current one, wrapping 12 to 1.
    NextHour,
    /// `minute`
    MinutesAfterHour,
    /// `30 - minute`
    MinutesToHalf,
    /// `minute - 30`
    MinutesAfterHalf,
    /// `60 - minute`
    MinutesToHour,
    /// The o'clock marker. English leaves it out after noon and midnight.
    HourMarker,
    Word(Connective),
}

use Connective::{Half, Past, Quarter, To};
use Token::*;

const FULL_HOUR: &[Token] = &[FullHour, HourMarker];
const PAST_HOUR: &[Token] = &[MinutesAfterHour, Word(Past), Hour];
const QUARTER_PAST: &[Token] = &[Word(Quarter), Word(Past), Hour];
const BEFORE_HALF: &[Token] = &[MinutesToHalf, Word(To), Word(Half), NextHour];
const HALF_PAST: &[Token] = &[Word(Half), Word(Past), Hour];
const HALF_NEXT: &[Token] = &[Word(Half), NextHour];
const AFTER_HALF: &[Token] = &[MinutesAfterHalf, Word(Past), Word(Half), NextHour];
const QUARTER_TO: &[Token] = &[Word(Quarter), Word(To), NextHour];
const BEFORE_HOUR: &[Token] = &[MinutesToHour, Word(To), NextHour];

/// Pick the template for a bucket in a language.
pub fn template(bucket: MinuteBucket, lang: Language) -> &'static [Token] {
    let counts_from_half = matches!(lang, Language::Dutch | Language::German);
    match bucket {
        MinuteBucket::FullHour => FULL_HOUR,
        MinuteBucket::PastHour => PAST_HOUR,
        MinuteBucket::QuarterPast => QUARTER_PAST,
        MinuteBucket::BeforeHalf if counts_from_half => BEFORE_HALF,
        MinuteBucket::BeforeHalf => PAST_HOUR,
        MinuteBucket::Half if counts_from_half => HALF_NEXT,
        MinuteBucket::Half => HALF_PAST,
        MinuteBucket::AfterHalf if counts_from_half => AFTER_HALF,
        MinuteBucket::AfterHalf => PAST_HOUR,
        MinuteBucket::QuarterTo => QUARTER_TO,
        MinuteBucket::BeforeHour => BEFORE_HOUR,
    }
}

fn offset(count: Option<u8>, token: Token) -> Result<u8, KlokError> {
    count.ok_or_else(|| KlokError::InvalidInput(format!("{token:?} does not fit this minute")))
}

/// Render a single token for `time`. `None` means the token is silent.
fn render_token(token: Token, time: &TimeValue, lang: Language) -> Result<Option<String>, KlokError> {
    let hour = time.hour();
    let minute = time.minute();
    let word = match token {
        Hour => numeral::render(hour.numeral_index(), lang)?.to_string(),
        FullHour => numeral::render_full_hour(hour.numeral_index(), lang)?.to_string(),
        NextHour => numeral::render(hour.next_index(), lang)?.to_string(),
        MinutesAfterHour => numeral::render_count(minute, lang)?,
        MinutesToHalf => numeral::render_count(offset(30u8.checked_sub(minute), token)?, lang)?,
        MinutesAfterHalf => numeral::render_count(offset(minute.checked_sub(30), token)?, lang)?,
        MinutesToHour => numeral::render_count(60 - minute, lang)?,
        HourMarker if lang == Language::English && hour.is_sentinel() => return Ok(None),
        HourMarker => Connective::OClock.word(lang).to_string(),
        Word(c) => c.word(lang).to_string(),
    };
    Ok(Some(word))
}

/// Fill `tokens` for `time`, joining the segments with single spaces.
pub fn compose(tokens: &[Token], time: &TimeValue, lang: Language) -> Result<String, KlokError> {
    let mut segments = Vec::with_capacity(tokens.len());
    for &token in tokens {
        if let Some(word) = render_token(token, time, lang)? {
            segments.push(word);
        }
    }
    Ok(segments.join(Connective::Space.word(lang)))
}

/// Tell `time` in `lang`.
pub fn tell_time(time: &TimeValue, lang: Language) -> Result<String, KlokError> {
    let bucket = MinuteBucket::classify(time.minute())?;
    let tokens = template(bucket, lang);
    debug!(%time, %lang, ?bucket, "telling time");
    compose(tokens, time, lang)
}

/// Tell a dial time given as plain numbers: `hour` 1..=12, `minute` 0..=59.
pub fn tell(hour: u8, minute: u8, lang: Language) -> Result<String, KlokError> {
    let time = TimeValue::new(hour, minute)?;
    tell_time(&time, lang)
}

/// Spell a duration of 1..=59 minutes, e.g. "five minutes".
pub fn spell_minutes(count: u8, lang: Language) -> Result<String, KlokError> {
    if !(1..=59).contains(&count) {
        return Err(KlokError::InvalidInput(format!(
            "duration {count} is not in 1..=59 minutes"
        )));
    }
    let unit = if count == 1 {
        Connective::Minute
    } else {
        Connective::Minutes
    };
    let number = match (lang, count) {
        (Language::German, 1) => "eine".to_string(),
        _ => numeral::render_count(count, lang)?,
    };
    Ok(format!("{number}{}{}", Connective::Space.word(lang), unit.word(lang)))
}
