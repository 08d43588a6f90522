//! Simulation context
//!
//! Owns everything the driver loop mutates: sweep, shape list, detection
//! tracker, wave overlays and the seeded RNG. There are no globals; the
//! driver holds the one `RadarState` and serializes all mutation through it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::config::RadarConfig;
use crate::consts::DEFAULT_PERCENT;
use crate::sim::shape::{Shape, ShapeKind};
use crate::sim::sweep::Sweep;
use crate::sim::tracker::{DetectionRecord, DetectionTracker};
use crate::sim::wave::Wave;

/// Control-surface validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("percentage out of range: {0} (expected 0-100)")]
    PercentOutOfRange(u32),
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct RadarState {
    pub config: RadarConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub sweep: Sweep,
    pub shapes: Vec<Shape>,
    pub tracker: DetectionTracker,
    pub waves: Vec<Wave>,
    /// Accumulated simulation time (seconds)
    pub time_secs: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current max shape speed, from the objects-speed control
    object_speed: f32,
    /// Next shape identity; monotonic, never reused
    next_id: u32,
}

impl RadarState {
    /// Build the initial state: one batch of stationary landmarks, one batch
    /// of moving ellipses, and the center ping ring.
    pub fn new(config: RadarConfig, seed: u64) -> Self {
        let center = config.center();
        let sweep = Sweep::new(
            center,
            config.sweep_length,
            config.base_sweep_speed,
            config.base_beam_half_angle,
        );
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            sweep,
            shapes: Vec::new(),
            tracker: DetectionTracker::new(config.refresh_window),
            waves: vec![Wave::ping(center, config.sweep_length)],
            time_secs: 0.0,
            time_ticks: 0,
            object_speed: config.object_speed,
            next_id: 1,
            config,
        };

        let initial = state.config.initial_shapes;
        state.generate_shapes(initial, ShapeKind::Stationary);
        state.generate_shapes(initial, ShapeKind::Ellipse);
        state
    }

    /// Allocate a new shape identity
    fn next_shape_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn check_percent(percent: u32) -> Result<(), SimError> {
        if percent > 100 {
            return Err(SimError::PercentOutOfRange(percent));
        }
        Ok(())
    }

    /// Set the sweep rate; 50% is the configured base rate
    pub fn set_sweep_speed(&mut self, percent: u32) -> Result<(), SimError> {
        Self::check_percent(percent)?;
        self.sweep.speed = self.config.base_sweep_speed * percent as f32 / DEFAULT_PERCENT as f32;
        Ok(())
    }

    /// Set the beam half-angle; 50% is the configured base width
    pub fn set_beam_range(&mut self, percent: u32) -> Result<(), SimError> {
        Self::check_percent(percent)?;
        self.sweep.half_angle =
            self.config.base_beam_half_angle * percent as f32 / DEFAULT_PERCENT as f32;
        Ok(())
    }

    /// Set the max shape speed and re-randomize the motion of every live
    /// shape (stationary shapes get new deltas too; their advance ignores
    /// them).
    pub fn set_object_speed(&mut self, percent: u32) -> Result<(), SimError> {
        Self::check_percent(percent)?;
        self.object_speed = 5.0 * percent as f32 / DEFAULT_PERCENT as f32;
        for shape in &mut self.shapes {
            let (vel, delta_angle) = Shape::random_motion(self.object_speed, &mut self.rng);
            shape.vel = vel;
            shape.delta_angle = delta_angle;
        }
        Ok(())
    }

    /// Append `count` randomized shapes of the given kind.
    ///
    /// Runs between ticks only; the driver never calls this while iterating
    /// the shape list.
    pub fn generate_shapes(&mut self, count: usize, kind: ShapeKind) {
        let bounds = self.config.bounds();
        let speed = self.object_speed;
        for _ in 0..count {
            let id = self.next_shape_id();
            self.shapes
                .push(Shape::random(id, kind, bounds, speed, &mut self.rng));
        }
        if count > 0 {
            log::info!("generated {count} {kind:?} shapes ({} total)", self.shapes.len());
        }
    }

    /// Beam geometry for rendering: (origin, edge 1, edge 2)
    pub fn sweep_edges(&self) -> (Vec2, Vec2, Vec2) {
        let (e1, e2) = self.sweep.edges();
        (self.sweep.center, e1, e2)
    }

    /// Currently displayed detections
    pub fn detections(&self) -> &[DetectionRecord] {
        self.tracker.current()
    }

    /// All shapes, for mini-map rendering
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
