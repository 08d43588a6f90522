//! Sweep state machine
//!
//! A single continuous angle advanced each tick. The wrap at a full rotation
//! is a hard reset to 0.0 rather than a modulo: whatever the angle overshot
//! past 2π is discarded. That truncation is part of the observed behavior and
//! must not be "fixed" into wrap-subtract.

use glam::Vec2;

use crate::beam_point;
use crate::sim::geometry::Triangle;

/// Rotating beam state
#[derive(Debug, Clone)]
pub struct Sweep {
    /// Current beam angle (radians, [0, 2π))
    pub angle: f32,
    /// Radians advanced per tick
    pub speed: f32,
    /// Angular width of the beam wedge (radians)
    pub half_angle: f32,
    /// Fixed sweep origin
    pub center: Vec2,
    /// Distance from origin to the beam edge points
    pub length: f32,
}

impl Sweep {
    pub fn new(center: Vec2, length: f32, speed: f32, half_angle: f32) -> Self {
        Self {
            angle: 0.0,
            speed,
            half_angle,
            center,
            length,
        }
    }

    /// Advance one tick; reset to 0.0 once past a full rotation
    pub fn advance(&mut self) {
        self.angle += self.speed;
        if self.angle > std::f32::consts::TAU {
            self.angle = 0.0;
        }
    }

    /// The two beam edge points at the current angle
    pub fn edges(&self) -> (Vec2, Vec2) {
        (
            beam_point(self.center, self.length, self.angle),
            beam_point(self.center, self.length, self.angle + self.half_angle),
        )
    }

    /// The detection wedge: origin plus both beam edges
    pub fn wedge(&self) -> Triangle {
        let (e1, e2) = self.edges();
        Triangle::new(self.center, e1, e2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_advance_accumulates() {
        let mut sweep = Sweep::new(Vec2::new(400.0, 300.0), 250.0, 0.04, 1.0);
        for _ in 0..10 {
            sweep.advance();
        }
        assert!((sweep.angle - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_wrap_is_reset_not_modulo() {
        // Speed 1.0: ticks 1-6 land at 1..6, tick 7 exceeds 2π and resets
        // to exactly 0.0 (the 0.717 overshoot is discarded)
        let mut sweep = Sweep::new(Vec2::new(400.0, 300.0), 250.0, 1.0, 1.0);
        for _ in 0..6 {
            sweep.advance();
        }
        assert_eq!(sweep.angle, 6.0);
        sweep.advance();
        assert_eq!(sweep.angle, 0.0);
    }

    #[test]
    fn test_angle_stays_in_range() {
        let mut sweep = Sweep::new(Vec2::new(400.0, 300.0), 250.0, 0.13, 1.0);
        for _ in 0..1000 {
            sweep.advance();
            assert!(sweep.angle >= 0.0 && sweep.angle <= TAU);
        }
    }

    #[test]
    fn test_edges_at_zero_point_up() {
        // angle 0: sin(0)=0, cos(0)=1, so edge 1 sits straight above center
        let sweep = Sweep::new(Vec2::new(400.0, 300.0), 250.0, 0.04, 1.0);
        let (e1, _) = sweep.edges();
        assert!((e1.x - 400.0).abs() < 1e-4);
        assert!((e1.y - 550.0).abs() < 1e-4);
    }

    #[test]
    fn test_wedge_spans_half_angle() {
        let sweep = Sweep::new(Vec2::new(400.0, 300.0), 250.0, 0.04, 1.0);
        let wedge = sweep.wedge();
        assert_eq!(wedge.a, sweep.center);
        // Second edge at angle + 1.0 rad
        let expected = beam_point(sweep.center, 250.0, 1.0);
        assert!((wedge.c - expected).length() < 1e-4);
    }
}
