//! # klok-tell
//!
//! Turns a time on the dial into the words a person would say, in English,
//! Dutch or German: "quarter to eleven", "vijf voor half elf",
//! "zehn nach halb drei".
//!
//! The engine is a pure function of `(time, language)`. Lesson state,
//! display and speech live with the caller.

mod bucket;
mod connective;
mod numeral;
mod phrase;
mod time;


pub use bucket::MinuteBucket;
pub use connective::Connective;
pub use numeral::{render, render_count, render_full_hour, MIDNIGHT, NOON};
pub use phrase::{compose, spell_minutes, tell, tell_time, template, Token};
pub use time::{ClockHour, TimeValue};

use klok_core::KlokError;

/// Every dial time from 1:00 to 12:59 whose minute is a multiple of `step`.
pub fn dial(step: u8) -> Result<impl Iterator<Item = TimeValue>, KlokError> {
    if step == 0 || 60 % step != 0 {
        return Err(KlokError::InvalidInput(format!(
            "step {step} does not divide the hour"
        )));
    }
    Ok((1..=12u8).flat_map(move |hour| {
        (0..60u8)
            .step_by(usize::from(step))
            .filter_map(move |minute| TimeValue::new(hour, minute).ok())
    }))
}
