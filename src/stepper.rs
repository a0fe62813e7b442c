//! Stepper orchestrator.
//!
//! Owns the checkpoint sequence and the current-step index, re-runs the layout
//! engine on every render pass, pushes geometry down to the checkpoints, and
//! routes pointer clicks to the checkpoint whose circle contains the point.
//!
//! Everything here is synchronous and single-threaded: each `set_current_step`
//! or render pass runs to completion on the UI thread, and checkpoint state is
//! recomputed wholesale (not incrementally) whenever the current step changes.

use crate::error::{Result, StepperError};
use crate::layout::{compute_layout, Layout};
use crate::models::{Checkpoint, CheckpointState, StepperConfig};
use crate::paint::{PaintSurface, StepperStyle, TextAnchor};

/// Handler invoked with a checkpoint's id when a click passes its hit test.
pub type ClickHandler = Box<dyn FnMut(usize)>;

/// Horizontal stepper: N circular checkpoints joined by bridge lines.
///
/// The checkpoint sequence is created at construction and never resized;
/// state changes only through [`Stepper::set_current_step`] (directly or via
/// click dispatch).
pub struct Stepper {
    config: StepperConfig,
    checkpoints: Vec<Checkpoint>,
    current_step: usize,
    on_click: Option<ClickHandler>,
    layout: Option<Layout>,
}

impl Stepper {
    /// Build a stepper with `config.step_count` checkpoints, ids `0..N`,
    /// starting at step 0.
    pub fn new(config: StepperConfig) -> Result<Self> {
        config.validate()?;
        let checkpoints = (0..config.step_count).map(Checkpoint::new).collect();
        Ok(Stepper {
            config,
            checkpoints,
            current_step: 0,
            on_click: None,
            layout: None,
        })
    }

    /// Convenience constructor with default margins and cover ratio.
    pub fn with_steps(step_count: usize) -> Result<Self> {
        Stepper::new(StepperConfig::new(step_count))
    }

    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    pub fn step_count(&self) -> usize {
        self.config.step_count
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Layout solved by the most recent pass, if any.
    pub fn last_layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Set the display labels of checkpoint `index`.
    pub fn set_step_text(&mut self, index: usize, primary: &str, secondary: &str) -> Result<()> {
        let step_count = self.config.step_count;
        let cp = self
            .checkpoints
            .get_mut(index)
            .ok_or(StepperError::IndexOutOfRange { index, step_count })?;
        cp.primary_text = primary.to_string();
        cp.secondary_text = secondary.to_string();
        Ok(())
    }

    /// Make checkpoint `index` the current step and refresh every
    /// checkpoint's state. Fails without touching any state when `index` is
    /// out of range.
    pub fn set_current_step(&mut self, index: usize) -> Result<()> {
        if index >= self.config.step_count {
            return Err(StepperError::IndexOutOfRange {
                index,
                step_count: self.config.step_count,
            });
        }
        self.current_step = index;
        for cp in &mut self.checkpoints {
            cp.set_state(CheckpointState::for_position(cp.id(), index));
        }
        log::debug!("current step -> {}", index);
        Ok(())
    }

    /// Advance to the next step. Returns false (and stays put) at the last.
    pub fn step_forward(&mut self) -> bool {
        self.set_current_step(self.current_step + 1).is_ok()
    }

    /// Go back one step. Returns false (and stays put) at the first.
    pub fn step_back(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }
        self.set_current_step(self.current_step - 1).is_ok()
    }

    /// Replace the click handler for all checkpoints. Without one, a click
    /// that passes the hit test calls `set_current_step(id)`.
    pub fn set_on_click(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    /// Re-run the layout engine for the given container size and push the
    /// solved geometry (slot-local center, slot area, circle diameter) down to
    /// every checkpoint.
    pub fn layout_pass(&mut self, width: f32, height: f32) -> Result<()> {
        let layout = compute_layout(width, height, &self.config)?;
        for (i, cp) in self.checkpoints.iter_mut().enumerate() {
            cp.set_draw_parameters(
                layout.local_center_x(i),
                layout.center_y,
                layout.checkpoint_area,
                layout.visual_size,
            );
        }
        self.layout = Some(layout);
        Ok(())
    }

    /// Id of the checkpoint whose circle contains `(x, y)` (container frame),
    /// based on the most recent layout pass. Does not dispatch anything.
    pub fn checkpoint_at(&self, x: f32, y: f32) -> Option<usize> {
        let layout = self.layout.as_ref()?;
        let slot = layout.slot_at(x)?;
        let local_x = x - layout.slot_origin(slot);
        if self.checkpoints[slot].hit_test(local_x, y) {
            Some(self.checkpoints[slot].id())
        } else {
            None
        }
    }

    /// Route a pointer click at `(x, y)` (container frame) to the checkpoint
    /// whose slot contains `x`. The checkpoint's circle hit test gates the
    /// handler: clicks inside the slot but outside the circle are ignored.
    /// Returns the id of the checkpoint that consumed the click.
    pub fn handle_click(&mut self, x: f32, y: f32) -> Option<usize> {
        let id = self.checkpoint_at(x, y)?;
        log::debug!("checkpoint {} clicked", id);
        match self.on_click.as_mut() {
            Some(handler) => handler(id),
            // Default behavior: clicking a checkpoint makes it current.
            None => {
                let _ = self.set_current_step(id);
            }
        }
        Some(id)
    }

    /// Full render pass: solve layout for the container size, then draw
    /// bridges, circles, and labels through the surface.
    pub fn render(
        &mut self,
        width: f32,
        height: f32,
        style: &StepperStyle,
        surface: &mut dyn PaintSurface,
    ) -> Result<()> {
        self.layout_pass(width, height)?;
        let layout = match self.layout.as_ref() {
            Some(layout) => layout,
            None => return Ok(()),
        };

        for &(start, end) in &layout.bridges {
            surface.line_segment(
                (start, layout.center_y),
                (end, layout.center_y),
                style.bridge_width,
                style.bridge_color,
            );
        }

        for (i, cp) in self.checkpoints.iter().enumerate() {
            let center = (layout.slot_origin(i) + cp.center_x(), cp.center_y());
            let radius = cp.visual_size() / 2.0;
            let color = style.checkpoint_color.with_alpha(cp.state().alpha());
            surface.fill_circle(center, radius, color);

            if style.draw_labels {
                let label_alpha = cp.state().alpha();
                surface.text(
                    center,
                    TextAnchor::CenterCenter,
                    &cp.primary_text,
                    style.label_size,
                    style.label_color.with_alpha(label_alpha),
                );
                surface.text(
                    (center.0, center.1 + radius + 4.0),
                    TextAnchor::CenterTop,
                    &cp.secondary_text,
                    style.caption_size,
                    style.label_color.with_alpha(label_alpha),
                );
            }
        }
        Ok(())
    }
}
