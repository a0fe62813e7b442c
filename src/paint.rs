//! Drawing-surface capability.
//!
//! The geometry/state core renders through [`PaintSurface`] and never touches
//! a concrete toolkit; the egui adapter lives in [`crate::ui`]. The trait
//! covers exactly what the stepper draws: filled circles with alpha, line
//! segments, and anchored text.

use serde::{Deserialize, Serialize};

/// RGBA color, straight (unmultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Same color with the alpha channel replaced.
    pub fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }
}

/// Text anchor relative to the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    CenterCenter,
    CenterTop,
}

/// Minimal drawing capability the stepper renders through.
///
/// Coordinates are in the surface's own frame; implementations translate to
/// their toolkit (see `EguiSurface` in the ui module).
pub trait PaintSurface {
    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color);
    fn line_segment(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color);
    fn text(&mut self, pos: (f32, f32), anchor: TextAnchor, text: &str, size: f32, color: Color);
}

/// Visual theme for the stepper. Serializable so the demo can persist it
/// alongside its settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepperStyle {
    /// Base circle color; per-state alpha is applied on top.
    pub checkpoint_color: Color,
    pub bridge_color: Color,
    pub bridge_width: f32,
    pub label_color: Color,
    /// Font size for the primary label inside the circle.
    pub label_size: f32,
    /// Font size for the caption under the circle.
    pub caption_size: f32,
    pub draw_labels: bool,
}

impl Default for StepperStyle {
    fn default() -> Self {
        StepperStyle {
            checkpoint_color: Color::rgb(0, 200, 255),
            bridge_color: Color::rgba(160, 160, 160, 200),
            bridge_width: 2.0,
            label_color: Color::rgb(235, 235, 235),
            label_size: 14.0,
            caption_size: 10.0,
            draw_labels: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_preserves_channels() {
        let c = Color::rgb(0, 200, 255).with_alpha(70);
        assert_eq!(c, Color::rgba(0, 200, 255, 70));
    }

    #[test]
    fn test_style_round_trips_through_json() {
        let style = StepperStyle::default();
        let json = serde_json::to_string(&style).unwrap();
        let back: StepperStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}
