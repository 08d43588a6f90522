//! Point-in-triangle test for the detection wedge
//!
//! The beam paints everything whose center falls inside the triangle spanned
//! by the sweep origin and the two beam edge points.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A triangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

/// Which side of the directed edge b->c the point a lies on.
///
/// 2D cross product; positive on one side, negative on the other, zero when
/// collinear.
#[inline]
pub fn edge_sign(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// Inclusive containment: true when `p` is inside or on the boundary.
    ///
    /// The point is outside only when the three edge signs mix strictly
    /// positive and strictly negative values, so zero signs (boundary,
    /// degenerate triangles) count as inside.
    pub fn contains(&self, p: Vec2) -> bool {
        let d1 = edge_sign(p, self.a, self.b);
        let d2 = edge_sign(p, self.b, self.c);
        let d3 = edge_sign(p, self.c, self.a);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

        !(has_neg && has_pos)
    }

    /// Arithmetic mean of the three vertices
    pub fn centroid(&self) -> Vec2 {
        (self.a + self.b + self.c) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_centroid_inside() {
        let tri = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 80.0),
        );
        assert!(tri.contains(tri.centroid()));
    }

    #[test]
    fn test_vertices_on_boundary_are_inside() {
        let tri = Triangle::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(90.0, 20.0),
            Vec2::new(40.0, 70.0),
        );
        assert!(tri.contains(tri.a));
        assert!(tri.contains(tri.b));
        assert!(tri.contains(tri.c));
    }

    #[test]
    fn test_far_point_outside() {
        let tri = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 80.0),
        );
        assert!(!tri.contains(Vec2::new(5000.0, 5000.0)));
        assert!(!tri.contains(Vec2::new(-5000.0, 10.0)));
    }

    #[test]
    fn test_winding_does_not_matter() {
        let p = Vec2::new(50.0, 20.0);
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        let c = Vec2::new(50.0, 80.0);
        assert!(Triangle::new(a, b, c).contains(p));
        assert!(Triangle::new(c, b, a).contains(p));
    }

    #[test]
    fn test_beam_wedge_scenario() {
        // A wedge the sweep actually produces: origin plus two edge points
        let wedge = Triangle::new(
            Vec2::new(400.0, 300.0),
            Vec2::new(400.0, 550.0),
            Vec2::new(620.0, 460.0),
        );
        assert!(wedge.contains(Vec2::new(450.0, 400.0)));
        assert!(!wedge.contains(Vec2::new(10.0, 10.0)));
    }

    proptest! {
        #[test]
        fn prop_centroid_inside(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            cx in -1000.0f32..1000.0, cy in -1000.0f32..1000.0,
        ) {
            let tri = Triangle::new(
                Vec2::new(ax, ay),
                Vec2::new(bx, by),
                Vec2::new(cx, cy),
            );
            // Skip near-degenerate triangles where float noise flips signs
            let area2 = edge_sign(tri.a, tri.b, tri.c).abs();
            prop_assume!(area2 > 100.0);
            prop_assert!(tri.contains(tri.centroid()));
        }

        #[test]
        fn prop_point_beyond_bounding_box_outside(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            cx in -1000.0f32..1000.0, cy in -1000.0f32..1000.0,
        ) {
            let tri = Triangle::new(
                Vec2::new(ax, ay),
                Vec2::new(bx, by),
                Vec2::new(cx, cy),
            );
            let area2 = edge_sign(tri.a, tri.b, tri.c).abs();
            prop_assume!(area2 > 100.0);
            let far = Vec2::new(
                ax.max(bx).max(cx) + 500.0,
                ay.max(by).max(cy) + 500.0,
            );
            prop_assert!(!tri.contains(far));
        }
    }
}
