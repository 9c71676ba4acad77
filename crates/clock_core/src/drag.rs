//! Turning a dragged hand's angle back into a time of day.
//!
//! Both resolvers are approximations: a continuous angle does not carry enough
//! information to pick a unique point in a 24-hour day. The minute resolver
//! guesses hour rollovers from how far the hand jumped, and a jump of more
//! than 45 minutes in a single event is indistinguishable from a short drag
//! the other way.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::Hand,
    time::{ClockTime, MINUTES_PER_HALF_DAY, MINUTES_PER_HOUR},
};

/// Degrees of dial per minute on the minute track.
pub const DEGREES_PER_MINUTE_TICK: f32 = 6.0;
/// A previous minute above this, followed by a candidate below
/// [`CROSSING_LOW_MINUTE`], counts as sweeping forward past 12.
pub const CROSSING_HIGH_MINUTE: u8 = 45;
pub const CROSSING_LOW_MINUTE: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragTarget {
    #[default]
    None,
    HourHand,
    MinuteHand,
}

impl From<Hand> for DragTarget {
    fn from(value: Hand) -> Self {
        match value {
            Hand::Hour => Self::HourHand,
            Hand::Minute => Self::MinuteHand,
        }
    }
}

/// Minute under the minute hand at `angle`, in `[0, 59]`.
pub fn minute_from_angle(angle: f32) -> u8 {
    let ticks = (angle / DEGREES_PER_MINUTE_TICK).round() as i64;
    ticks.rem_euclid(MINUTES_PER_HOUR) as u8
}

/// Hour adjustment, in minutes, implied by the minute hand moving from
/// `previous_minute` to `candidate_minute`.
pub fn crossing_adjustment(previous_minute: u8, candidate_minute: u8) -> i64 {
    if previous_minute > CROSSING_HIGH_MINUTE && candidate_minute < CROSSING_LOW_MINUTE {
        MINUTES_PER_HOUR
    } else if previous_minute < CROSSING_LOW_MINUTE && candidate_minute > CROSSING_HIGH_MINUTE {
        -MINUTES_PER_HOUR
    } else {
        0
    }
}

/// New time after the minute hand is dragged to `angle`.
pub fn resolve_minute_drag(previous: ClockTime, angle: f32) -> ClockTime {
    let candidate = minute_from_angle(angle);
    let base = i64::from(previous.hour()) * MINUTES_PER_HOUR + i64::from(candidate);
    ClockTime::from_minutes(base + crossing_adjustment(previous.minute(), candidate))
}

/// New time after the hour hand is dragged to `angle`.
///
/// The hour hand covers 12 hours per turn, so the angle is read as minutes
/// past 12 and kept in whichever half of the day `previous` is in.
pub fn resolve_hour_drag(previous: ClockTime, angle: f32) -> ClockTime {
    let from_twelve = ((angle * 2.0).round() as i64).rem_euclid(MINUTES_PER_HALF_DAY);
    ClockTime::from_minutes(previous.half_day_offset() + from_twelve)
}

/// Resolves a drag of `target` to `angle`. `None` leaves the time alone.
pub fn resolve_drag(target: DragTarget, previous: ClockTime, angle: f32) -> ClockTime {
    match target {
        DragTarget::None => previous,
        DragTarget::HourHand => resolve_hour_drag(previous, angle),
        DragTarget::MinuteHand => resolve_minute_drag(previous, angle),
    }
}

/// Tracks the single active drag target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    target: DragTarget,
}

impl DragState {
    pub fn target(&self) -> DragTarget {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.target != DragTarget::None
    }

    /// Pointer pressed on `hand`. A drag already in progress keeps its target.
    pub fn pointer_down(&mut self, hand: Hand) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.target = hand.into();
        true
    }

    /// Pointer moved to `angle`; returns the new time while dragging.
    pub fn pointer_move(&self, current: ClockTime, angle: f32) -> Option<ClockTime> {
        self.is_dragging()
            .then(|| resolve_drag(self.target, current, angle))
    }

    pub fn pointer_up(&mut self) {
        self.target = DragTarget::None;
    }

    pub fn pointer_leave(&mut self) {
        self.target = DragTarget::None;
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
