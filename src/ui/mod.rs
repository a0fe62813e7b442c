//! egui integration.
//!
//! The toolkit-independent core lives in the crate root modules; this module
//! adapts it to egui: `EguiSurface` implements the drawing capability over an
//! `egui::Painter`, `widget::show` wires allocation, click sensing, and the
//! render pass together, and `app` hosts the demo screen.

pub mod app;
pub mod widget;

pub use app::DemoApp;
pub use widget::{show, EguiSurface};
