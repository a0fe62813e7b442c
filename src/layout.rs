//! Checkpoint layout engine.
//!
//! Pure geometry: maps a container size and a stepper configuration to circle
//! diameters, circle centers, and bridge segments. The solver is stateless and
//! is re-run on every render pass, since the container may resize between
//! frames; nothing here is cached.
//!
//! Horizontal model: the container width is divided into `step_count` slots of
//! equal width, with half a checkpoint-area reserved as margin on each edge.
//! Circle centers advance with a fixed pitch of `visual_size + bridge_length`,
//! so the circles are evenly spaced and the last center lands exactly at
//! `width - checkpoint_area`.

use crate::error::Result;
use crate::models::StepperConfig;

/// Solved geometry for one layout pass. All x coordinates are in the
/// container's frame; [`Layout::local_center_x`] converts to slot-local.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Width allocated per checkpoint slot before the cover ratio is applied.
    pub checkpoint_area: f32,
    /// Circle diameter (`cover_ratio * checkpoint_area`).
    pub visual_size: f32,
    /// Horizontal gap between the edges of two adjacent circles. Zero for a
    /// single-checkpoint stepper.
    pub bridge_length: f32,
    /// Width of one slot in the partition used for click dispatch.
    pub slot_width: f32,
    /// Circle center x per checkpoint, container frame.
    pub centers: Vec<f32>,
    /// Vertical center shared by circles and bridges.
    pub center_y: f32,
    /// Bridge segments as (start_x, end_x) pairs at `center_y`; empty when
    /// there is only one checkpoint.
    pub bridges: Vec<(f32, f32)>,
}

impl Layout {
    /// Origin of slot `i` in the container frame.
    pub fn slot_origin(&self, i: usize) -> f32 {
        self.checkpoint_area / 2.0 + i as f32 * self.slot_width
    }

    /// Circle center of checkpoint `i`, relative to its own slot's origin.
    pub fn local_center_x(&self, i: usize) -> f32 {
        self.centers[i] - self.slot_origin(i)
    }

    /// Index of the slot containing `x`, or `None` when `x` falls in the edge
    /// margins outside the slot partition.
    pub fn slot_at(&self, x: f32) -> Option<usize> {
        let left = self.checkpoint_area / 2.0;
        let right = left + self.slot_width * self.centers.len() as f32;
        if x < left || x >= right || self.slot_width <= 0.0 {
            return None;
        }
        let idx = ((x - left) / self.slot_width) as usize;
        Some(idx.min(self.centers.len() - 1))
    }
}

/// Solve the layout for the given container size.
///
/// `checkpoint_area` is `width / (step_count + 1)`, clamped down when vertical
/// space is the binding constraint (`area + 2 * margin_y` must fit in
/// `height`). The bridge length spreads whatever width remains after the edge
/// margins and circle diameters evenly over the `step_count - 1` gaps. With a
/// single checkpoint there are no gaps and the bridge length is defined as
/// zero.
pub fn compute_layout(width: f32, height: f32, config: &StepperConfig) -> Result<Layout> {
    config.validate()?;
    let n = config.step_count;

    let mut area = width / (n as f32 + 1.0);
    if area + 2.0 * config.margin_y > height {
        area = (height - 2.0 * config.margin_y).max(0.0);
    }
    let visual = config.cover_ratio * area;

    let bridge = if n >= 2 {
        (width - 2.0 * area - visual * (n as f32 - 1.0)) / (n as f32 - 1.0)
    } else {
        0.0
    };

    let pitch = visual + bridge;
    let centers: Vec<f32> = if n == 1 {
        // No bridges to anchor against; the lone circle sits at the midpoint.
        vec![width / 2.0]
    } else {
        let mut centers: Vec<f32> = (0..n - 1).map(|i| area + i as f32 * pitch).collect();
        // Pin the last center from the final bridge endpoint so the row always
        // aligns exactly with the right edge margin, independent of
        // accumulated rounding in the pitch.
        centers.push(width - area);
        centers
    };

    let center_y = height / 2.0;
    let half_visual = visual / 2.0;
    let bridges: Vec<(f32, f32)> = centers
        .windows(2)
        .map(|pair| (pair[0] + half_visual, pair[1] - half_visual))
        .collect();

    let slot_width = (width - area) / n as f32;

    log::trace!(
        "layout pass: width={} height={} steps={} area={} visual={} bridge={}",
        width,
        height,
        n,
        area,
        visual,
        bridge
    );

    Ok(Layout {
        checkpoint_area: area,
        visual_size: visual,
        bridge_length: bridge,
        slot_width,
        centers,
        center_y,
        bridges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn config(n: usize) -> StepperConfig {
        StepperConfig::new(n)
    }

    #[test]
    fn test_four_steps_unclamped() {
        // 400 / (4 + 1) = 80; 80 + 2*5 fits in 100, so no clamp.
        let layout = compute_layout(400.0, 100.0, &config(4)).unwrap();
        assert!((layout.checkpoint_area - 80.0).abs() < EPS);
        assert!((layout.visual_size - 40.0).abs() < EPS);
        assert!((layout.bridge_length - 40.0).abs() < EPS);
        assert_eq!(layout.centers.len(), 4);
        for (center, expected) in layout.centers.iter().zip([80.0, 160.0, 240.0, 320.0]) {
            assert!((center - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_vertical_clamp_binds_in_short_container() {
        // 400 / 5 = 80 but 80 + 2*5 > 50, so area clamps to 50 - 10 = 40.
        let layout = compute_layout(400.0, 50.0, &config(4)).unwrap();
        assert!((layout.checkpoint_area - 40.0).abs() < EPS);
        assert!((layout.visual_size - 20.0).abs() < EPS);
        // Bridges absorb the reclaimed width: (400 - 80 - 60) / 3.
        assert!((layout.bridge_length - 260.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_last_center_pinned_to_right_edge_margin() {
        for n in 2..12 {
            let layout = compute_layout(777.0, 300.0, &config(n)).unwrap();
            let last = *layout.centers.last().unwrap();
            assert!(
                (last - (777.0 - layout.checkpoint_area)).abs() < EPS,
                "n={}: last center {} not at right edge margin",
                n,
                last
            );
        }
    }

    #[test]
    fn test_centers_evenly_spaced() {
        let layout = compute_layout(640.0, 200.0, &config(5)).unwrap();
        let pitch = layout.visual_size + layout.bridge_length;
        for pair in layout.centers.windows(2) {
            assert!((pair[1] - pair[0] - pitch).abs() < EPS);
        }
    }

    #[test]
    fn test_width_conservation() {
        // N diameters + (N-1) bridges + margins from each container edge to
        // the nearest circle edge must consume exactly the container width.
        let layout = compute_layout(500.0, 120.0, &config(6)).unwrap();
        let n = 6.0;
        let edge_margin = layout.checkpoint_area - layout.visual_size / 2.0;
        let consumed =
            n * layout.visual_size + (n - 1.0) * layout.bridge_length + 2.0 * edge_margin;
        assert!((consumed - 500.0).abs() < EPS);
    }

    #[test]
    fn test_single_checkpoint_has_no_bridges() {
        let layout = compute_layout(200.0, 200.0, &config(1)).unwrap();
        assert_eq!(layout.bridge_length, 0.0);
        assert!(layout.bridges.is_empty());
        // 200 / (1 + 1): the lone circle sits in the middle.
        assert!((layout.centers[0] - 100.0).abs() < EPS);
    }

    #[test]
    fn test_bridges_span_between_circle_edges() {
        let layout = compute_layout(400.0, 100.0, &config(4)).unwrap();
        assert_eq!(layout.bridges.len(), 3);
        for (i, (start, end)) in layout.bridges.iter().enumerate() {
            let half = layout.visual_size / 2.0;
            assert!((start - (layout.centers[i] + half)).abs() < EPS);
            assert!((end - (layout.centers[i + 1] - half)).abs() < EPS);
            assert!((end - start - layout.bridge_length).abs() < EPS);
        }
    }

    #[test]
    fn test_slot_partition_and_lookup() {
        let layout = compute_layout(400.0, 100.0, &config(4)).unwrap();
        assert!((layout.slot_width - 80.0).abs() < EPS);

        // Edge margins belong to no slot.
        assert_eq!(layout.slot_at(10.0), None);
        assert_eq!(layout.slot_at(395.0), None);

        assert_eq!(layout.slot_at(40.0), Some(0));
        assert_eq!(layout.slot_at(119.9), Some(0));
        assert_eq!(layout.slot_at(120.0), Some(1));
        assert_eq!(layout.slot_at(359.9), Some(3));

        // Circles sit centered in their slots for this geometry.
        for i in 0..4 {
            assert!((layout.local_center_x(i) - 40.0).abs() < EPS);
            assert_eq!(layout.slot_at(layout.centers[i]), Some(i));
        }
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        assert!(compute_layout(400.0, 100.0, &config(0)).is_err());
        let mut cfg = config(4);
        cfg.cover_ratio = 1.5;
        assert!(compute_layout(400.0, 100.0, &cfg).is_err());
    }
}
