//! Simulation parameters
//!
//! Everything the driver may want to tune without recompiling. Loaded from a
//! JSON file when one is given, otherwise defaults from [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Width of the plane the shapes bounce inside
    pub screen_width: f32,
    /// Height of the plane the shapes bounce inside
    pub screen_height: f32,
    /// Distance from the sweep origin to the beam edge points
    pub sweep_length: f32,
    /// Sweep rate at the 50% control setting (radians per tick)
    pub base_sweep_speed: f32,
    /// Beam half-angle at the 50% control setting (radians)
    pub base_beam_half_angle: f32,
    /// Seconds a detection survives without being refreshed
    pub refresh_window: f32,
    /// Max shape speed per axis (units per tick)
    pub object_speed: f32,
    /// Shapes spawned per kind at setup
    pub initial_shapes: usize,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            sweep_length: SWEEP_LENGTH,
            base_sweep_speed: RADIANS_PER_TICK,
            base_beam_half_angle: BEAM_HALF_ANGLE,
            refresh_window: REFRESH_WINDOW,
            object_speed: DEFAULT_OBJECT_SPEED,
            initial_shapes: INITIAL_SHAPES,
        }
    }
}

impl RadarConfig {
    /// Sweep origin: the fixed center of the screen
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Screen bounds as a vector (width, height)
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Load config from a JSON file, falling back to defaults on any error
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Err(err) => {
                    log::warn!("Bad config {path}: {err}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {path}; using defaults");
                Self::default()
            }
        }
    }
}
