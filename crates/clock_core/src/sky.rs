//! Background sky for the displayed time of day.

use serde::{Deserialize, Serialize};

use crate::time::{ClockTime, MINUTES_PER_DAY};

pub type Rgb = [u8; 3];

const NIGHT: Rgb = [18, 24, 58];
const DAWN: Rgb = [247, 166, 120];
const DAY: Rgb = [135, 200, 250];
const DUSK: Rgb = [236, 126, 92];

/// Sky colour key frames as (minute of day, colour). Must start at 0 and end
/// at a full day so every minute falls between two frames.
const KEYFRAMES: [(i64, Rgb); 8] = [
    (0, NIGHT),
    (5 * 60, NIGHT),
    (6 * 60 + 30, DAWN),
    (8 * 60, DAY),
    (17 * 60, DAY),
    (18 * 60 + 30, DUSK),
    (20 * 60, NIGHT),
    (MINUTES_PER_DAY, NIGHT),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyPhase {
    Night,
    Dawn,
    Day,
    Dusk,
}

impl SkyPhase {
    pub fn of(time: ClockTime) -> Self {
        match time.hour() {
            5..=7 => Self::Dawn,
            8..=16 => Self::Day,
            17..=19 => Self::Dusk,
            _ => Self::Night,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Night
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Night => "Night",
            Self::Dawn => "Morning",
            Self::Day => "Daytime",
            Self::Dusk => "Evening",
        }
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

/// Background colour for `time`, blended between the surrounding key frames.
pub fn sky_color(time: ClockTime) -> Rgb {
    let minute = time.minutes();
    for pair in KEYFRAMES.windows(2) {
        let ((start, from), (end, to)) = (pair[0], pair[1]);
        if minute >= start && minute < end {
            let t = (minute - start) as f32 / (end - start) as f32;
            return [
                lerp_channel(from[0], to[0], t),
                lerp_channel(from[1], to[1], t),
                lerp_channel(from[2], to[2], t),
            ];
        }
    }
    NIGHT
}
