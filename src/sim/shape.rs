//! Point-in-shape hit testing for victim hit areas and the wheel backing.
//!
//! Shapes are authored in wheel-local space; callers transform dart positions
//! into that space before testing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A hit-testable 2D shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitShape {
    Circle { center: Vec2, radius: f32 },
    Rect { center: Vec2, half_extents: Vec2 },
}

impl HitShape {
    /// Does the shape contain the given point?
    pub fn contains(&self, point: Vec2) -> bool {
        match *self {
            HitShape::Circle { center, radius } => point.distance(center) < radius,
            HitShape::Rect {
                center,
                half_extents,
            } => {
                let d = (point - center).abs();
                d.x < half_extents.x && d.y < half_extents.y
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains() {
        let c = HitShape::Circle {
            center: Vec2::new(10.0, 0.0),
            radius: 5.0,
        };
        assert!(c.contains(Vec2::new(12.0, 2.0)));
        assert!(!c.contains(Vec2::new(16.0, 0.0)));
        // Boundary is exclusive
        assert!(!c.contains(Vec2::new(15.0, 0.0)));
    }

    #[test]
    fn test_rect_contains() {
        let r = HitShape::Rect {
            center: Vec2::new(0.0, 60.0),
            half_extents: Vec2::new(30.0, 50.0),
        };
        assert!(r.contains(Vec2::new(0.0, 60.0)));
        assert!(r.contains(Vec2::new(-29.0, 100.0)));
        assert!(!r.contains(Vec2::new(31.0, 60.0)));
        assert!(!r.contains(Vec2::new(0.0, 111.0)));
    }
}
