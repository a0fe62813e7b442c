//! egui_stepper
//!
//! A stepper control for egui: a horizontal sequence of circular checkpoints
//! connected by bridge lines, with click-to-select and a three-state visual
//! model (Passive / Active / Current).
//!
//! The crate is organized into functional modules:
//! - **error**: typed error hierarchy
//! - **models**: checkpoint state machine and configuration types
//! - **layout**: pure geometry solver for circles and bridges
//! - **paint**: toolkit-independent drawing-surface capability and theme
//! - **stepper**: orchestrator owning checkpoints, dispatch, and rendering
//! - **settings**: JSON settings persistence for the demo application
//! - **ui**: egui adapter and demo app
//!
//! The geometry/state core (`layout`, `models`, `stepper`, `paint`) has no
//! dependency on egui; only the `ui` module binds to the toolkit.

// Core foundational modules
pub mod error;
pub mod models;

// Pure layout geometry
pub mod layout;

// Drawing-surface capability and theme
pub mod paint;

// Stepper orchestrator
pub mod stepper;

// Demo settings persistence
pub mod settings;

// egui adapter and demo app
pub mod ui;

// Re-export the log crate for macro usage
pub use log;

// Re-export error types for easy access
pub use error::{Result, SettingsError, StepperError};

// Re-export core types for easy access
pub use layout::{compute_layout, Layout};
pub use models::{Checkpoint, CheckpointState, StepperConfig};
pub use paint::{Color, PaintSurface, StepperStyle, TextAnchor};
pub use stepper::{ClickHandler, Stepper};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
