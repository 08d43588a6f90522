//! Moving shapes the radar hunts for
//!
//! Each shape is a tagged variant: the kind selects drawing and whether it
//! moves at all, everything else shares the same kinematic state. Identity is
//! an explicit id assigned at spawn and never reused.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{SHAPE_MAX_SIZE, SHAPE_MAX_SPIN, SHAPE_MIN_SIZE};

/// Display/behavior kind of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Fixed rectangular landmark; never moves
    Stationary,
    Ellipse,
    Rectangle,
    Line,
}

/// A shape on the plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub id: u32,
    pub kind: ShapeKind,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Display rotation (degrees)
    pub angle: f32,
    /// Displacement per tick
    pub vel: Vec2,
    /// Rotation per tick (degrees)
    pub delta_angle: f32,
}

impl Shape {
    /// Spawn a shape with randomized position, size, rotation and motion
    pub fn random(id: u32, kind: ShapeKind, bounds: Vec2, speed: f32, rng: &mut Pcg32) -> Self {
        let (vel, delta_angle) = Self::random_motion(speed, rng);
        Self {
            id,
            kind,
            pos: Vec2::new(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            ),
            width: rng.random_range(SHAPE_MIN_SIZE..SHAPE_MAX_SIZE),
            height: rng.random_range(SHAPE_MIN_SIZE..SHAPE_MAX_SIZE),
            angle: rng.random_range(0.0..360.0),
            vel,
            delta_angle,
        }
    }

    /// Randomize per-tick motion for the given max speed.
    ///
    /// Velocity is uniform in [-speed, speed) per axis; speed 0 pins the
    /// shape (the uniform range would be empty).
    pub fn random_motion(speed: f32, rng: &mut Pcg32) -> (Vec2, f32) {
        if speed <= 0.0 {
            return (Vec2::ZERO, 0.0);
        }
        let vel = Vec2::new(
            rng.random_range(-speed..speed),
            rng.random_range(-speed..speed),
        );
        let delta_angle = rng.random_range(-SHAPE_MAX_SPIN..SHAPE_MAX_SPIN);
        (vel, delta_angle)
    }

    pub fn is_stationary(&self) -> bool {
        self.kind == ShapeKind::Stationary
    }

    /// Advance one tick and bounce off the screen edges.
    ///
    /// The reflection is lagging: a velocity component is negated only while
    /// the shape is already past the boundary AND still heading outward, so a
    /// fast shape overshoots for a few ticks before turning around. There is
    /// no clamp back inside.
    pub fn advance(&mut self, bounds: Vec2) {
        if self.is_stationary() {
            return;
        }

        self.pos += self.vel;
        self.angle += self.delta_angle;

        if self.pos.x < 0.0 && self.vel.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 && self.vel.y < 0.0 {
            self.vel.y = -self.vel.y;
        }
        if self.pos.x > bounds.x && self.vel.x > 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > bounds.y && self.vel.y > 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Rebuild with identical kinematics under a different display kind.
    ///
    /// Used to snapshot a detected shape for the tracker's display list.
    pub fn clone_as(&self, kind: ShapeKind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }
}
