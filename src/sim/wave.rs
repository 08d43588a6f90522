//! Expanding ring overlays
//!
//! Decorative "ping" rings: one at the sweep origin that grows and restarts
//! forever, and one-shot echoes spawned where a shape was detected. Detection
//! itself uses the beam wedge, not these radii; `contains_shape` exists for
//! alternate detection strategies only.

use glam::Vec2;

use crate::consts::{WAVE_INIT_RADIUS, WAVE_RADIUS_DELTA, WAVE_START_DELAY};
use crate::sim::shape::Shape;

/// How a ring behaves when it outgrows its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveKind {
    /// Center ring: snaps back to the initial radius and grows again
    Ping,
    /// Object echo: deactivates permanently
    Echo,
}

/// An expanding ring
#[derive(Debug, Clone)]
pub struct Wave {
    pub kind: WaveKind,
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub init_radius: f32,
    pub radius_delta: f32,
    /// Seconds to wait before the ring starts growing
    pub start_delay: f32,
    elapsed: f32,
    pub started: bool,
    pub active: bool,
}

impl Wave {
    pub fn new(kind: WaveKind, pos: Vec2, max_radius: f32) -> Self {
        Self {
            kind,
            pos,
            radius: WAVE_INIT_RADIUS,
            max_radius,
            init_radius: WAVE_INIT_RADIUS,
            radius_delta: WAVE_RADIUS_DELTA,
            start_delay: WAVE_START_DELAY,
            elapsed: 0.0,
            started: false,
            active: true,
        }
    }

    /// Center ping ring, starts immediately
    pub fn ping(pos: Vec2, max_radius: f32) -> Self {
        Self {
            start_delay: 0.0,
            ..Self::new(WaveKind::Ping, pos, max_radius)
        }
    }

    /// One-shot echo at a detection position
    pub fn echo(pos: Vec2, max_radius: f32) -> Self {
        Self::new(WaveKind::Echo, pos, max_radius)
    }

    /// Whether the ring may keep growing.
    ///
    /// Echo rings use the original offset check against absolute coordinates
    /// (radius + x, radius + y), kept as observed.
    fn in_bounds(&self) -> bool {
        match self.kind {
            WaveKind::Ping => self.radius <= self.max_radius,
            WaveKind::Echo => {
                self.radius + self.pos.x <= self.max_radius
                    && self.radius + self.pos.y <= self.max_radius
            }
        }
    }

    /// Advance one tick of `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        if !self.started {
            self.elapsed += dt;
            if self.elapsed >= self.start_delay {
                self.started = true;
            }
            return;
        }
        if self.in_bounds() {
            self.radius += self.radius_delta;
        } else {
            match self.kind {
                WaveKind::Ping => self.radius = self.init_radius,
                WaveKind::Echo => self.active = false,
            }
        }
    }

    /// Radial containment check, for detection strategies built on rings
    /// instead of the wedge
    pub fn contains_shape(&self, shape: &Shape) -> bool {
        self.started && self.active && (shape.pos - self.pos).length() <= self.radius
    }
}
