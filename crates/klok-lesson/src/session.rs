//! Lesson sessions: rounds, answers, and the medal at the end.

use klok_core::config::LessonMode;
use klok_core::KlokError;
use klok_tell::TimeValue;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::generator::TargetGenerator;

/// Tiered result of a finished lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Medal {
    /// Every round right.
    Gold,
    /// More than 70% right.
    Silver,
    /// More than 50% right.
    Bronze,
    TryAgain,
}

impl Medal {
    /// Medal for `good` correct answers out of `rounds`.
    pub fn for_score(good: u32, rounds: u32) -> Self {
        let ratio = f64::from(good) / f64::from(rounds.max(1));
        if good >= rounds {
            Self::Gold
        } else if ratio > 0.7 {
            Self::Silver
        } else if ratio > 0.5 {
            Self::Bronze
        } else {
            Self::TryAgain
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
            Self::TryAgain => "🎲",
        }
    }
}

/// Outcome of checking one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub target: TimeValue,
    pub answer: TimeValue,
    pub correct: bool,
    /// Shortest distance around the dial from answer to target, in minutes.
    pub off_by: u16,
}

impl Verdict {
    /// Whether the answer's hour matches the target's on the dial.
    pub fn hour_right(&self) -> bool {
        self.target.hour().dial() == self.answer.hour().dial()
    }

    /// How far the minute hand is off, the short way round the face.
    pub fn minutes_off(&self) -> u8 {
        let diff = self.target.minute().abs_diff(self.answer.minute());
        diff.min(60 - diff)
    }
}

/// A lesson in progress.
#[derive(Debug, Clone)]
pub struct Lesson {
    mode: LessonMode,
    rounds: u32,
    good: u32,
    wrong: u32,
    target: Option<TimeValue>,
}

impl Lesson {
    pub fn new(mode: LessonMode, rounds: u32) -> Result<Self, KlokError> {
        if rounds == 0 {
            return Err(KlokError::InvalidInput(
                "a lesson needs at least one round".to_string(),
            ));
        }
        info!(%mode, rounds, "lesson started");
        Ok(Self {
            mode,
            rounds,
            good: 0,
            wrong: 0,
            target: None,
        })
    }

    pub fn mode(&self) -> LessonMode {
        self.mode
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn good(&self) -> u32 {
        self.good
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    pub fn answered(&self) -> u32 {
        self.good + self.wrong
    }

    /// The target waiting for an answer, if any.
    pub fn target(&self) -> Option<TimeValue> {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.answered() >= self.rounds
    }

    /// Start the next round. A new draw replaces an unanswered target.
    pub fn next_target<R: Rng>(
        &mut self,
        targets: &mut TargetGenerator<R>,
    ) -> Result<TimeValue, KlokError> {
        if self.is_finished() {
            return Err(KlokError::InvalidInput(
                "lesson is finished; reset it to play again".to_string(),
            ));
        }
        let target = targets.next_target(self.mode)?;
        self.target = Some(target);
        Ok(target)
    }

    /// Check `answer` against the current target and score the round.
    pub fn check(&mut self, answer: TimeValue) -> Result<Verdict, KlokError> {
        let target = self.target.take().ok_or_else(|| {
            KlokError::InvalidInput("no target to answer; start a round first".to_string())
        })?;
        let correct = target.same_dial_position(&answer);
        if correct {
            self.good += 1;
        } else {
            self.wrong += 1;
        }
        if self.is_finished() {
            info!(good = self.good, wrong = self.wrong, "lesson finished");
        }
        Ok(Verdict {
            target,
            answer,
            correct,
            off_by: target.dial_distance(&answer),
        })
    }

    /// Running score as shown to the learner: `good - wrong`.
    pub fn score(&self) -> String {
        format!("{} - {}", self.good, self.wrong)
    }

    /// The medal, once every round is answered.
    pub fn medal(&self) -> Option<Medal> {
        self.is_finished()
            .then(|| Medal::for_score(self.good, self.rounds))
    }

    /// Clear the score and start over with the same mode and rounds.
    pub fn reset(&mut self) {
        self.good = 0;
        self.wrong = 0;
        self.target = None;
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(lesson: &mut Lesson, targets: &mut TargetGenerator<rand::rngs::StdRng>, right: bool) {
        let target = lesson.next_target(targets).unwrap();
        let answer = if right {
            target
        } else {
            let hour = target.hour().dial() % 12 + 1;
            TimeValue::new(hour, target.minute()).unwrap()
        };
        lesson.check(answer).unwrap();
    }

    #[test]
    fn test_medal_tiers() {
        assert_eq!(Medal::for_score(10, 10), Medal::Gold);
        assert_eq!(Medal::for_score(8, 10), Medal::Silver);
        assert_eq!(Medal::for_score(7, 10), Medal::Bronze);
        assert_eq!(Medal::for_score(6, 10), Medal::Bronze);
        assert_eq!(Medal::for_score(5, 10), Medal::TryAgain);
        assert_eq!(Medal::for_score(0, 2), Medal::TryAgain);
        assert_eq!(Medal::for_score(1, 2), Medal::TryAgain);
        assert_eq!(Medal::for_score(2, 2), Medal::Gold);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(Lesson::new(LessonMode::Hours, 0).is_err());
    }

    #[test]
    fn test_full_lesson_flow() {
        let mut targets = TargetGenerator::seeded(5);
        let mut lesson = Lesson::new(LessonMode::QuarterHours, 4).unwrap();
        assert_eq!(lesson.medal(), None);

        play(&mut lesson, &mut targets, true);
        play(&mut lesson, &mut targets, true);
        play(&mut lesson, &mut targets, false);
        assert_eq!(lesson.score(), "2 - 1");
        assert_eq!((lesson.good(), lesson.wrong()), (2, 1));
        assert!(!lesson.is_finished());

        play(&mut lesson, &mut targets, true);
        assert!(lesson.is_finished());
        assert_eq!(lesson.medal(), Some(Medal::Silver));
        assert!(lesson.next_target(&mut targets).is_err());

        lesson.reset();
        assert_eq!(lesson.score(), "0 - 0");
        assert_eq!((lesson.good(), lesson.wrong()), (0, 0));
        assert_eq!(lesson.medal(), None);
        assert!(lesson.next_target(&mut targets).is_ok());
    }

    #[test]
    fn test_check_without_target_fails() {
        let mut lesson = Lesson::new(LessonMode::Hours, 2).unwrap();
        let answer = TimeValue::new(3, 0).unwrap();
        assert!(matches!(lesson.check(answer), Err(KlokError::InvalidInput(_))));
        assert_eq!(lesson.answered(), 0);
    }

    #[test]
    fn test_verdict_reports_offset() {
        let mut targets = TargetGenerator::seeded(11);
        let mut lesson = Lesson::new(LessonMode::Minutes, 3).unwrap();
        let target = lesson.next_target(&mut targets).unwrap();
        let verdict = lesson.check(target).unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.off_by, 0);
        assert_eq!(lesson.target(), None);
    }

    fn verdict(target: (u8, u8), answer: (u8, u8)) -> Verdict {
        let mut lesson = Lesson::new(LessonMode::Minutes, 1).unwrap();
        lesson.target = Some(TimeValue::new(target.0, target.1).unwrap());
        lesson.check(TimeValue::new(answer.0, answer.1).unwrap()).unwrap()
    }

    #[test]
    fn test_verdict_reads_each_hand() {
        let both = verdict((10, 0), (11, 20));
        assert_eq!(both.off_by, 80);
        assert!(!both.hour_right());
        assert_eq!(both.minutes_off(), 20);

        let hour_only = verdict((10, 15), (2, 15));
        assert!(!hour_only.hour_right());
        assert_eq!(hour_only.minutes_off(), 0);

        let minute_only = verdict((4, 55), (4, 5));
        assert!(minute_only.hour_right());
        assert_eq!(minute_only.minutes_off(), 10);
    }

    #[test]
    fn test_noon_answer_counts_as_twelve() {
        let mut lesson = Lesson::new(LessonMode::Hours, 1).unwrap();
        lesson.target = Some(TimeValue::new(12, 0).unwrap());
        let verdict = lesson.check(TimeValue::from_24h(12, 0).unwrap()).unwrap();
        assert!(verdict.correct);
        assert_eq!(lesson.medal(), Some(Medal::Gold));
    }
}
