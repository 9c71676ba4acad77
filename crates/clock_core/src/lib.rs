//! Clock model for the clock-reading toy: time arithmetic, hand geometry,
//! drag resolution, answer checking, and the controller that ties them
//! together.

pub mod controller;
pub mod drag;
pub mod geometry;
pub mod quiz;
pub mod sky;
pub mod time;

pub use controller::{ClockController, QuizPhase};
pub use drag::{DragState, DragTarget};
pub use geometry::{FaceGeometry, FaceTransform, Hand, Point};
pub use quiz::{AnswerCheck, QuizQuestion};
pub use sky::SkyPhase;
pub use time::{ClockFields, ClockTime, Meridiem};
