//! # klok-lesson
//!
//! A lesson is a fixed number of rounds. Each round draws a target time
//! for the chosen difficulty, the learner answers, and the answer is
//! checked on the dial. After the last round the score earns a medal.
//!
//! All lesson state lives in [`Lesson`], owned by the caller. The
//! translation engine in `klok-tell` never sees it.

mod generator;
mod session;

pub use generator::TargetGenerator;
pub use klok_core::config::LessonMode;
pub use session::{Lesson, Medal, Verdict};
