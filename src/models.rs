//! Core data types for the stepper widget.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StepperError};

/// Visual state of a single checkpoint.
///
/// Exactly one checkpoint is `Current` at any time; everything before it is
/// `Active`, everything after it is `Passive`. The three states map to a
/// strictly increasing opacity ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckpointState {
    Passive,
    Active,
    Current,
}

impl CheckpointState {
    /// State of checkpoint `id` given the stepper's current step.
    pub fn for_position(id: usize, current_step: usize) -> Self {
        match id.cmp(&current_step) {
            std::cmp::Ordering::Less => CheckpointState::Active,
            std::cmp::Ordering::Equal => CheckpointState::Current,
            std::cmp::Ordering::Greater => CheckpointState::Passive,
        }
    }

    /// Alpha channel for this state (0-255). Passive < Active < Current.
    pub fn alpha(&self) -> u8 {
        match self {
            CheckpointState::Passive => 70,
            CheckpointState::Active => 150,
            CheckpointState::Current => 255,
        }
    }
}

impl fmt::Display for CheckpointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckpointState::Passive => write!(f, "Passive"),
            CheckpointState::Active => write!(f, "Active"),
            CheckpointState::Current => write!(f, "Current"),
        }
    }
}

/// One circular marker in the stepper sequence.
///
/// Geometry (`center_x`, `center_y`, `area`, `visual_size`) is owned by the
/// stepper and pushed down on every layout pass; the checkpoint never computes
/// it locally. Coordinates are local to the checkpoint's slot.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    id: usize,
    state: CheckpointState,
    center_x: f32,
    center_y: f32,
    area: f32,
    visual_size: f32,
    /// Main label, drawn inside the circle. Defaults to the ordinal.
    pub primary_text: String,
    /// Caption drawn under the circle.
    pub secondary_text: String,
}

impl Checkpoint {
    pub fn new(id: usize) -> Self {
        Checkpoint {
            id,
            state: CheckpointState::for_position(id, 0),
            center_x: 0.0,
            center_y: 0.0,
            area: 0.0,
            visual_size: 0.0,
            primary_text: id.to_string(),
            secondary_text: format!("Step {}", id + 1),
        }
    }

    /// Stable ordinal position, assigned at creation.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> CheckpointState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CheckpointState) {
        self.state = state;
    }

    /// Push geometry for the next paint. Called once per layout pass by the
    /// owning stepper; performs no validation.
    pub fn set_draw_parameters(&mut self, center_x: f32, center_y: f32, area: f32, visual_size: f32) {
        self.center_x = center_x;
        self.center_y = center_y;
        self.area = area;
        self.visual_size = visual_size;
    }

    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    pub fn area(&self) -> f32 {
        self.area
    }

    /// Circle diameter in pixels.
    pub fn visual_size(&self) -> f32 {
        self.visual_size
    }

    /// True iff `(px, py)` lies on or inside the visible circle. Boundary is
    /// inclusive: a point at exactly `visual_size / 2` from the center hits.
    pub fn hit_test(&self, px: f32, py: f32) -> bool {
        let dx = px - self.center_x;
        let dy = py - self.center_y;
        let radius = self.visual_size / 2.0;
        dx * dx + dy * dy <= radius * radius
    }
}

/// Construction-time stepper configuration. Fixed for the widget's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepperConfig {
    /// Number of checkpoints (>= 1).
    pub step_count: usize,
    /// Vertical margin reserved above and below the circles.
    pub margin_y: f32,
    /// Fraction of a slot's width occupied by the circle diameter, in (0, 1].
    pub cover_ratio: f32,
}

impl Default for StepperConfig {
    fn default() -> Self {
        StepperConfig {
            step_count: 4,
            margin_y: 5.0,
            cover_ratio: 0.5,
        }
    }
}

impl StepperConfig {
    pub fn new(step_count: usize) -> Self {
        StepperConfig {
            step_count,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.step_count < 1 {
            return Err(StepperError::InvalidConfiguration(
                "step_count must be >= 1".to_string(),
            ));
        }
        if !(self.cover_ratio > 0.0 && self.cover_ratio <= 1.0) {
            return Err(StepperError::InvalidConfiguration(format!(
                "cover_ratio must be in (0, 1], got {}",
                self.cover_ratio
            )));
        }
        if !self.margin_y.is_finite() || self.margin_y < 0.0 {
            return Err(StepperError::InvalidConfiguration(format!(
                "margin_y must be a non-negative finite value, got {}",
                self.margin_y
            )));
        }
        Ok(())
    }
}
