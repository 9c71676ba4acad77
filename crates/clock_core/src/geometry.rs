//! Clock-face geometry: pointer angles, hand tips, and hand hit testing.

use serde::{Deserialize, Serialize};

/// Hour hand length as a fraction of the face radius.
pub const HOUR_HAND_LENGTH: f32 = 0.5;
/// Minute hand length as a fraction of the face radius.
pub const MINUTE_HAND_LENGTH: f32 = 0.78;
/// How far from a hand (as a fraction of the radius) a press still grabs it.
pub const HAND_GRAB_TOLERANCE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Hour,
    Minute,
}

impl Hand {
    pub fn length_fraction(self) -> f32 {
        match self {
            Self::Hour => HOUR_HAND_LENGTH,
            Self::Minute => MINUTE_HAND_LENGTH,
        }
    }
}

/// Screen-space placement of the face: `local = (screen - origin) / scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceTransform {
    pub origin: Point,
    pub scale: f32,
}

impl FaceTransform {
    pub const IDENTITY: Self = Self {
        origin: Point::new(0.0, 0.0),
        scale: 1.0,
    };

    pub fn to_local(&self, screen: Point) -> Point {
        let scale = if self.scale.abs() > f32::EPSILON {
            self.scale
        } else {
            1.0
        };
        Point::new(
            (screen.x - self.origin.x) / scale,
            (screen.y - self.origin.y) / scale,
        )
    }
}

impl Default for FaceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Clock face in face-local coordinates. Screen y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceGeometry {
    pub center: Point,
    pub radius: f32,
    pub transform: FaceTransform,
}

impl FaceGeometry {
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            center,
            radius,
            transform: FaceTransform::IDENTITY,
        }
    }

    pub fn with_transform(mut self, transform: FaceTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn angle_of(&self, screen_pointer: Point) -> f32 {
        pointer_angle(screen_pointer, self.center, &self.transform)
    }

    /// Tip of `hand` drawn at `degrees`, in face-local coordinates.
    pub fn hand_tip(&self, hand: Hand, degrees: f32) -> Point {
        point_on_dial(self.center, degrees, self.radius * hand.length_fraction())
    }
}

/// Angle of the pointer around `center`, clockwise from 12 o'clock, in `[0, 360)`.
pub fn pointer_angle(screen_pointer: Point, center: Point, transform: &FaceTransform) -> f32 {
    let local = transform.to_local(screen_pointer);
    let dx = local.x - center.x;
    let dy = local.y - center.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    let mut degrees = dy.atan2(dx).to_degrees() + 90.0;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    if degrees >= 360.0 {
        degrees -= 360.0;
    }
    degrees
}

/// Point at `distance` from `center` along the dial direction `degrees`.
pub fn point_on_dial(center: Point, degrees: f32, distance: f32) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + distance * radians.sin(),
        center.y - distance * radians.cos(),
    )
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len_sq = abx * abx + aby * aby;
    if len_sq <= f32::EPSILON {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
    p.distance_to(Point::new(a.x + t * abx, a.y + t * aby))
}

/// Which hand, if any, a press at `screen_pointer` grabs.
///
/// The minute hand is drawn over the hour hand, so it wins when both are in
/// reach.
pub fn hand_at(
    screen_pointer: Point,
    face: &FaceGeometry,
    hour_degrees: f32,
    minute_degrees: f32,
) -> Option<Hand> {
    let local = face.transform.to_local(screen_pointer);
    let tolerance = face.radius * HAND_GRAB_TOLERANCE;
    [(Hand::Minute, minute_degrees), (Hand::Hour, hour_degrees)]
        .into_iter()
        .find(|(hand, degrees)| {
            let tip = face.hand_tip(*hand, *degrees);
            distance_to_segment(local, face.center, tip) <= tolerance
        })
        .map(|(hand, _)| hand)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(100.0, 100.0);

    fn angle(x: f32, y: f32) -> f32 {
        pointer_angle(Point::new(x, y), CENTER, &FaceTransform::IDENTITY)
    }

    #[test]
    fn cardinal_directions_map_clockwise_from_twelve() {
        assert!((angle(100.0, 20.0) - 0.0).abs() < 1e-4);
        assert!((angle(180.0, 100.0) - 90.0).abs() < 1e-4);
        assert!((angle(100.0, 180.0) - 180.0).abs() < 1e-4);
        assert!((angle(20.0, 100.0) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn upper_left_quadrant_wraps_into_positive_range() {
        let a = angle(50.0, 50.0);
        assert!((a - 315.0).abs() < 1e-3, "got {a}");
    }

    #[test]
    fn pointer_on_center_is_zero() {
        assert_eq!(angle(100.0, 100.0), 0.0);
    }

    #[test]
    fn uniform_scale_and_offset_do_not_change_angle() {
        let transform = FaceTransform {
            origin: Point::new(40.0, -10.0),
            scale: 2.0,
        };
        // local (180, 100) is screen (40 + 360, -10 + 200).
        let a = pointer_angle(Point::new(400.0, 190.0), CENTER, &transform);
        assert!((a - 90.0).abs() < 1e-4);
    }

    #[test]
    fn angles_stay_below_full_turn() {
        for i in 0..720 {
            let t = (i as f32).to_radians() * 0.5;
            let a = angle(100.0 + 50.0 * t.cos(), 100.0 + 50.0 * t.sin());
            assert!((0.0..360.0).contains(&a), "{a}");
        }
    }

    #[test]
    fn hit_test_prefers_minute_hand() {
        let face = FaceGeometry::new(CENTER, 100.0);
        // Both hands at 12: a press near the center touches both.
        assert_eq!(
            hand_at(Point::new(100.0, 70.0), &face, 0.0, 0.0),
            Some(Hand::Minute)
        );
        // Hour hand at 3, minute hand at 12.
        assert_eq!(
            hand_at(Point::new(140.0, 100.0), &face, 90.0, 0.0),
            Some(Hand::Hour)
        );
        assert_eq!(hand_at(Point::new(20.0, 180.0), &face, 90.0, 0.0), None);
    }

    #[test]
    fn hand_tip_points_along_dial() {
        let face = FaceGeometry::new(CENTER, 100.0);
        let tip = face.hand_tip(Hand::Minute, 90.0);
        assert!((tip.x - 178.0).abs() < 1e-3);
        assert!((tip.y - 100.0).abs() < 1e-3);
    }
}
