use super::*;

fn minute_angle(minute: u8) -> f32 {
    f32::from(minute) * DEGREES_PER_MINUTE_TICK
}

#[test]
fn minute_from_angle_rounds_to_nearest_tick() {
    assert_eq!(minute_from_angle(0.0), 0);
    assert_eq!(minute_from_angle(2.9), 0);
    assert_eq!(minute_from_angle(3.1), 1);
    assert_eq!(minute_from_angle(356.9), 59);
    // 59.5 ticks rounds up to 60, which is back on 12.
    assert_eq!(minute_from_angle(357.0), 0);
}

#[test]
fn minute_drag_keeps_hour_without_crossing() {
    let t = resolve_minute_drag(ClockTime::from_hm(10, 10), minute_angle(25));
    assert_eq!(t, ClockTime::from_hm(10, 25));
}

#[test]
fn forward_crossing_advances_hour() {
    let before = ClockTime::from_hm(10, 58);
    let after = resolve_minute_drag(before, minute_angle(3));
    assert_eq!(after.hour(), before.hour() + 1);
    assert_eq!(after, ClockTime::from_hm(11, 3));
}

#[test]
fn backward_crossing_rewinds_hour() {
    let after = resolve_minute_drag(ClockTime::from_hm(11, 2), minute_angle(59));
    assert_eq!(after, ClockTime::from_hm(10, 59));
}

#[test]
fn crossing_wraps_across_midnight() {
    assert_eq!(
        resolve_minute_drag(ClockTime::from_hm(23, 58), minute_angle(3)),
        ClockTime::from_hm(0, 3)
    );
    assert_eq!(
        resolve_minute_drag(ClockTime::from_hm(0, 2), minute_angle(58)),
        ClockTime::from_hm(23, 58)
    );
}

#[test]
fn previous_minute_thresholds_are_exclusive() {
    assert_eq!(crossing_adjustment(45, 3), 0);
    assert_eq!(crossing_adjustment(46, 3), 60);
    assert_eq!(crossing_adjustment(15, 50), 0);
    assert_eq!(crossing_adjustment(14, 50), -60);
}

#[test]
fn candidate_minute_thresholds_are_exclusive() {
    assert_eq!(crossing_adjustment(58, 15), 0);
    assert_eq!(crossing_adjustment(58, 14), 60);
    assert_eq!(crossing_adjustment(2, 45), 0);
    assert_eq!(crossing_adjustment(2, 46), -60);
}

#[test]
fn boundary_drags_resolve_in_same_hour() {
    assert_eq!(
        resolve_minute_drag(ClockTime::from_hm(10, 45), minute_angle(3)),
        ClockTime::from_hm(10, 3)
    );
    assert_eq!(
        resolve_minute_drag(ClockTime::from_hm(10, 15), minute_angle(50)),
        ClockTime::from_hm(10, 50)
    );
}

#[test]
fn hour_drag_stays_in_morning_half() {
    let t = resolve_hour_drag(ClockTime::from_hm(10, 10), 90.0);
    assert_eq!(t, ClockTime::from_hm(3, 0));
    let t = resolve_hour_drag(ClockTime::from_hm(1, 0), 45.0);
    assert_eq!(t, ClockTime::from_hm(1, 30));
}

#[test]
fn hour_drag_stays_in_afternoon_half() {
    let t = resolve_hour_drag(ClockTime::from_hm(15, 0), 270.0);
    assert_eq!(t, ClockTime::from_hm(21, 0));
}

#[test]
fn hour_drag_full_turn_lands_on_twelve_of_same_half() {
    assert_eq!(resolve_hour_drag(ClockTime::from_hm(9, 0), 359.9), ClockTime::MIDNIGHT);
    assert_eq!(resolve_hour_drag(ClockTime::from_hm(21, 0), 359.9), ClockTime::NOON);
}

#[test]
fn drag_state_tracks_one_target() {
    let mut drag = DragState::default();
    let now = ClockTime::from_hm(10, 10);
    assert_eq!(drag.pointer_move(now, 90.0), None);

    assert!(drag.pointer_down(Hand::Minute));
    assert_eq!(drag.target(), DragTarget::MinuteHand);
    assert!(!drag.pointer_down(Hand::Hour));
    assert_eq!(drag.target(), DragTarget::MinuteHand);
    assert_eq!(drag.pointer_move(now, 90.0), Some(ClockTime::from_hm(10, 15)));

    drag.pointer_up();
    assert!(!drag.is_dragging());

    assert!(drag.pointer_down(Hand::Hour));
    assert_eq!(drag.pointer_move(now, 90.0), Some(ClockTime::from_hm(3, 0)));
    drag.pointer_leave();
    assert_eq!(drag.target(), DragTarget::None);
}
