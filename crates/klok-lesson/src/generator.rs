//! Random target times for a lesson mode.

use klok_core::config::LessonMode;
use klok_core::KlokError;
use klok_tell::TimeValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Draws target times, never the same one twice in a row.
pub struct TargetGenerator<R> {
    rng: R,
    previous: Option<TimeValue>,
}

impl TargetGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic generator, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TargetGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            previous: None,
        }
    }

    /// Draw the next target for `mode`.
    pub fn next_target(&mut self, mode: LessonMode) -> Result<TimeValue, KlokError> {
        loop {
            let candidate = self.draw(mode)?;
            if self.previous != Some(candidate) {
                debug!(%candidate, %mode, "drew target");
                self.previous = Some(candidate);
                return Ok(candidate);
            }
        }
    }

    fn draw(&mut self, mode: LessonMode) -> Result<TimeValue, KlokError> {
        let step = mode.minute_step();
        let hour = self.rng.gen_range(1..=12);
        let minute = self.rng.gen_range(0..60 / step) * step;
        TimeValue::new(hour, minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_follow_mode_step() {
        let mut targets = TargetGenerator::seeded(7);
        for mode in LessonMode::ALL {
            for _ in 0..200 {
                let t = targets.next_target(mode).unwrap();
                assert_eq!(t.minute() % mode.minute_step(), 0, "{mode}: {t}");
                assert!((1..=12).contains(&t.hour().dial()));
            }
        }
    }

    #[test]
    fn test_hours_mode_only_full_hours() {
        let mut targets = TargetGenerator::seeded(1);
        for _ in 0..50 {
            assert_eq!(targets.next_target(LessonMode::Hours).unwrap().minute(), 0);
        }
    }

    #[test]
    fn test_never_repeats_back_to_back() {
        let mut targets = TargetGenerator::seeded(42);
        let mut last = None;
        for _ in 0..500 {
            let t = targets.next_target(LessonMode::Hours).unwrap();
            assert_ne!(Some(t), last);
            last = Some(t);
        }
    }

    #[test]
    fn test_quarter_hours_reach_every_quarter() {
        let mut targets = TargetGenerator::seeded(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            seen.insert(targets.next_target(LessonMode::QuarterHours).unwrap().minute());
        }
        let expected: std::collections::HashSet<u8> = [0, 15, 30, 45].into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TargetGenerator::seeded(99);
        let mut b = TargetGenerator::seeded(99);
        for _ in 0..20 {
            assert_eq!(
                a.next_target(LessonMode::FiveMinutes).unwrap(),
                b.next_target(LessonMode::FiveMinutes).unwrap()
            );
        }
    }
}
