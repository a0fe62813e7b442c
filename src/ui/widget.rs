//! egui adapter for the stepper.
//!
//! Widget flow per frame: allocate a painter region with click sensing, route
//! any click through the stepper's dispatch (using the geometry the user
//! actually saw last frame), then run a fresh render pass for this frame's
//! size.

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Sense, Stroke, Vec2};

use crate::paint::{Color, PaintSurface, StepperStyle, TextAnchor};
use crate::stepper::Stepper;

const DEFAULT_HEIGHT: f32 = 80.0;
const MIN_WIDTH: f32 = 200.0;

/// [`PaintSurface`] over an `egui::Painter`, translating container-frame
/// coordinates into the allocated screen rect.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        EguiSurface { painter, origin }
    }

    fn to_screen(&self, p: (f32, f32)) -> Pos2 {
        Pos2::new(self.origin.x + p.0, self.origin.y + p.1)
    }
}

fn to_color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

impl PaintSurface for EguiSurface<'_> {
    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn line_segment(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, to_color32(color)),
        );
    }

    fn text(&mut self, pos: (f32, f32), anchor: TextAnchor, text: &str, size: f32, color: Color) {
        let align = match anchor {
            TextAnchor::CenterCenter => Align2::CENTER_CENTER,
            TextAnchor::CenterTop => Align2::CENTER_TOP,
        };
        self.painter.text(
            self.to_screen(pos),
            align,
            text,
            FontId::proportional(size),
            to_color32(color),
        );
    }
}

/// Draw the stepper into the current layout position and handle clicks.
pub fn show(ui: &mut egui::Ui, stepper: &mut Stepper, style: &StepperStyle) -> egui::Response {
    let desired_size = Vec2::new(ui.available_width().max(MIN_WIDTH), DEFAULT_HEIGHT);
    let (response, painter) = ui.allocate_painter(desired_size, Sense::click());
    let rect = response.rect;

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            stepper.handle_click(pos.x - rect.left(), pos.y - rect.top());
        }
    }

    let hovering_circle = response
        .hover_pos()
        .and_then(|pos| stepper.checkpoint_at(pos.x - rect.left(), pos.y - rect.top()))
        .is_some();

    if ui.is_rect_visible(rect) {
        let mut surface = EguiSurface::new(&painter, rect.min);
        if let Err(e) = stepper.render(rect.width(), rect.height(), style, &mut surface) {
            log::warn!("stepper render pass failed: {}", e);
        }
    }

    if hovering_circle {
        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    } else {
        response
    }
}
