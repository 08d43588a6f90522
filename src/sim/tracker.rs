//! Time-bounded detection list
//!
//! Shapes painted by the beam wedge get a record that lives for a fixed
//! window and then drops out. The timestamp is written once at first
//! detection and never refreshed when the beam passes over the shape again,
//! so a record's lifetime is measured from first sight. That is observed
//! behavior, kept as-is.

use glam::Vec2;

use crate::sim::geometry::Triangle;
use crate::sim::shape::{Shape, ShapeKind};

/// One detected shape on the display list
#[derive(Debug, Clone)]
pub struct DetectionRecord {
    /// Identity of the source shape
    pub id: u32,
    /// Simulation time of first detection (seconds); never updated
    pub detected_at: f32,
    /// Snapshot of the shape at detection, re-kinded for display
    pub shape: Shape,
}

/// Maintains the currently displayed detections
#[derive(Debug, Clone)]
pub struct DetectionTracker {
    /// Seconds a record survives from first detection
    refresh_window: f32,
    records: Vec<DetectionRecord>,
}

impl DetectionTracker {
    pub fn new(refresh_window: f32) -> Self {
        Self {
            refresh_window,
            records: Vec::new(),
        }
    }

    /// Test every shape against the beam wedge and age out stale records.
    ///
    /// Returns the positions of shapes detected for the first time this
    /// tick, for the driver to spawn echo waves at.
    pub fn update(&mut self, shapes: &[Shape], wedge: &Triangle, now: f32) -> Vec<Vec2> {
        let mut new_hits = Vec::new();

        for shape in shapes {
            if wedge.contains(shape.pos) && !self.records.iter().any(|r| r.id == shape.id) {
                log::debug!("detected shape {} at {:?}", shape.id, shape.pos);
                new_hits.push(shape.pos);
                self.records.push(DetectionRecord {
                    id: shape.id,
                    detected_at: now,
                    shape: shape.clone_as(ShapeKind::Ellipse),
                });
            }
        }

        self.records
            .retain(|r| now - r.detected_at < self.refresh_window);

        new_hits
    }

    /// Currently displayed detections
    pub fn current(&self) -> &[DetectionRecord] {
        &self.records
    }
}
