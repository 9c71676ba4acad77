//! Analog clock widget: paints the face and turns pointer drags into
//! controller transitions.

use clock_core::{
    geometry::{hand_at, point_on_dial},
    ClockController, DragTarget, FaceGeometry, FaceTransform, Hand, Point,
};
use egui::{Align2, Color32, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Vec2};

const MIN_FACE_SIDE: f32 = 180.0;
const FACE_FILL: Color32 = Color32::from_rgb(252, 250, 242);
const RIM: Color32 = Color32::from_rgb(60, 72, 110);
const INK: Color32 = Color32::from_rgb(40, 44, 60);
const HOUR_HAND: Color32 = Color32::from_rgb(214, 69, 65);
const MINUTE_HAND: Color32 = Color32::from_rgb(52, 120, 214);
const HELD_HAND: Color32 = Color32::from_rgb(250, 180, 40);

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

/// Face geometry for `rect`, with the face laid out in rect-local coordinates
/// and the rect's screen offset carried by the transform.
fn face_for(rect: Rect) -> FaceGeometry {
    let side = rect.width().min(rect.height());
    FaceGeometry::new(Point::new(rect.width() / 2.0, rect.height() / 2.0), side * 0.45)
        .with_transform(FaceTransform {
            origin: to_point(rect.min),
            scale: 1.0,
        })
}

fn to_screen(rect: Rect, local: Point) -> Pos2 {
    rect.min + Vec2::new(local.x, local.y)
}

fn handle_input(
    ui: &egui::Ui,
    response: &egui::Response,
    face: &FaceGeometry,
    controller: &mut ClockController,
) {
    let time = controller.time();
    let grabbable = |pos: Pos2| {
        hand_at(
            to_point(pos),
            face,
            time.hour_hand_degrees(),
            time.minute_hand_degrees(),
        )
    };

    if response.drag_started() {
        let press = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(hand) = press.and_then(grabbable) {
            controller.pointer_down(hand);
        }
    }

    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            controller.pointer_move(face.angle_of(to_point(pos)));
        }
    }

    if response.drag_stopped() {
        controller.pointer_up();
    } else if controller.drag_target() != DragTarget::None
        && !ui.input(|i| i.pointer.any_down())
    {
        // Button released outside the window.
        controller.pointer_leave();
    }

    if controller.drag_target() != DragTarget::None {
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
    } else if response.hover_pos().and_then(grabbable).is_some() {
        ui.ctx().set_cursor_icon(CursorIcon::Grab);
    }
}

fn paint_dial(painter: &egui::Painter, rect: Rect, face: &FaceGeometry) {
    let center = to_screen(rect, face.center);
    let r = face.radius;
    painter.circle_filled(center, r, FACE_FILL);
    painter.circle_stroke(center, r, Stroke::new(r * 0.04, RIM));

    for tick in 0..60u16 {
        let degrees = f32::from(tick) * 6.0;
        let (inner, width) = if tick % 5 == 0 {
            (0.86, 2.5)
        } else {
            (0.92, 1.0)
        };
        let a = to_screen(rect, point_on_dial(face.center, degrees, r * inner));
        let b = to_screen(rect, point_on_dial(face.center, degrees, r * 0.96));
        painter.line_segment([a, b], Stroke::new(width, INK));
    }

    for hour in 1..=12u16 {
        let pos = to_screen(
            rect,
            point_on_dial(face.center, f32::from(hour) * 30.0, r * 0.74),
        );
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            hour.to_string(),
            FontId::proportional(r * 0.14),
            INK,
        );
    }
}

fn paint_hand(
    painter: &egui::Painter,
    rect: Rect,
    face: &FaceGeometry,
    hand: Hand,
    degrees: f32,
    held: bool,
) {
    let (width, color) = match hand {
        Hand::Hour => (face.radius * 0.06, HOUR_HAND),
        Hand::Minute => (face.radius * 0.035, MINUTE_HAND),
    };
    let color = if held { HELD_HAND } else { color };
    let tip = to_screen(rect, face.hand_tip(hand, degrees));
    painter.line_segment([to_screen(rect, face.center), tip], Stroke::new(width, color));
    painter.circle_filled(tip, width * 0.5, color);
}

/// Shows the clock and applies any drag to `controller`.
pub fn show(ui: &mut egui::Ui, controller: &mut ClockController) -> egui::Response {
    let available = ui.available_size();
    let side = available.x.min(available.y).max(MIN_FACE_SIDE);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click_and_drag());
    let rect = response.rect;
    let face = face_for(rect);

    handle_input(ui, &response, &face, controller);

    let time = controller.time();
    let held = controller.drag_target();
    paint_dial(&painter, rect, &face);
    paint_hand(
        &painter,
        rect,
        &face,
        Hand::Hour,
        time.hour_hand_degrees(),
        held == DragTarget::HourHand,
    );
    paint_hand(
        &painter,
        rect,
        &face,
        Hand::Minute,
        time.minute_hand_degrees(),
        held == DragTarget::MinuteHand,
    );
    painter.circle_filled(to_screen(rect, face.center), face.radius * 0.05, INK);

    response
}
