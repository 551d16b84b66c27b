//! Classification of a minute value into one of eight phrasing buckets.

use klok_core::KlokError;
use std::ops::RangeInclusive;

/// Which part of the hour a minute falls in. Each bucket maps to one
/// phrasing template per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinuteBucket {
    /// :00
    FullHour,
    /// :01 – :14
    PastHour,
    /// :15
    QuarterPast,
    /// :16 – :29
    BeforeHalf,
    /// :30
    Half,
    /// :31 – :44
    AfterHalf,
    /// :45
    QuarterTo,
    /// :46 – :59
    BeforeHour,
}

impl MinuteBucket {
    /// All buckets in the order they cover the hour.
    pub const ALL: [MinuteBucket; 8] = [
        MinuteBucket::FullHour,
        MinuteBucket::PastHour,
        MinuteBucket::QuarterPast,
        MinuteBucket::BeforeHalf,
        MinuteBucket::Half,
        MinuteBucket::AfterHalf,
        MinuteBucket::QuarterTo,
        MinuteBucket::BeforeHour,
    ];

    /// Classify `minute`, which must be 0..=59.
    pub fn classify(minute: u8) -> Result<Self, KlokError> {
        let bucket = match minute {
            0 => Self::FullHour,
            1..=14 => Self::PastHour,
            15 => Self::QuarterPast,
            16..=29 => Self::BeforeHalf,
            30 => Self::Half,
            31..=44 => Self::AfterHalf,
            45 => Self::QuarterTo,
            46..=59 => Self::BeforeHour,
            _ => {
                return Err(KlokError::InvalidInput(format!(
                    "minute {minute} is not in 0..=59"
                )))
            }
        };
        Ok(bucket)
    }

    /// The minutes this bucket covers.
    pub fn range(&self) -> RangeInclusive<u8> {
        match self {
            Self::FullHour => 0..=0,
            Self::PastHour => 1..=14,
            Self::QuarterPast => 15..=15,
            Self::BeforeHalf => 16..=29,
            Self::Half => 30..=30,
            Self::AfterHalf => 31..=44,
            Self::QuarterTo => 45..=45,
            Self::BeforeHour => 46..=59,
        }
    }
}
