//! Radar Sweep - a rotating radar beam over a field of moving shapes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sweep state, moving shapes, detection
//!   tracking, wave overlays)
//! - `config`: Data-driven simulation parameters
//!
//! Rendering and UI live outside this crate. The simulation is advanced by a
//! single driver calling [`sim::tick`] and queried through [`sim::RadarState`].

pub mod config;
pub mod sim;

pub use config::RadarConfig;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Screen bounds the shapes bounce inside
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed sweep origin
    pub const CENTER_X: f32 = SCREEN_WIDTH / 2.0;
    pub const CENTER_Y: f32 = SCREEN_HEIGHT / 2.0;

    /// Base sweep rate at the 50% control setting (radians per tick)
    pub const RADIANS_PER_TICK: f32 = 0.04;
    /// Base beam half-angle at the 50% control setting (radians)
    pub const BEAM_HALF_ANGLE: f32 = 1.0;
    /// Distance from center to the beam edge points
    pub const SWEEP_LENGTH: f32 = 250.0;

    /// Control sliders are percentages; 50% maps to the base rates above
    pub const DEFAULT_PERCENT: u32 = 50;

    /// Seconds a detection stays on the display list without re-detection
    pub const REFRESH_WINDOW: f32 = 3.0;

    /// Shape size bounds (uniform random in [min, max))
    pub const SHAPE_MIN_SIZE: f32 = 10.0;
    pub const SHAPE_MAX_SIZE: f32 = 30.0;
    /// Angular velocity bound for shapes (degrees per tick, symmetric)
    pub const SHAPE_MAX_SPIN: f32 = 3.0;
    /// Default max shape speed (units per tick, per axis)
    pub const DEFAULT_OBJECT_SPEED: f32 = 1.0;
    /// Shapes spawned per kind at setup
    pub const INITIAL_SHAPES: usize = 10;

    /// Wave overlay defaults
    pub const WAVE_INIT_RADIUS: f32 = 10.0;
    pub const WAVE_RADIUS_DELTA: f32 = 1.0;
    pub const WAVE_START_DELAY: f32 = 0.5;
}

/// Beam edge point at `angle` radians, `len` units out from `center`.
///
/// sin feeds x and cos feeds y on purpose: the sweep starts at 12 o'clock
/// and rotates clockwise. Swapping them reverses the visual rotation.
#[inline]
pub fn beam_point(center: Vec2, len: f32, angle: f32) -> Vec2 {
    Vec2::new(len * angle.sin() + center.x, len * angle.cos() + center.y)
}
