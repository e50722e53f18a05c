//! Axis-aligned box collision
//!
//! Every entity in the arena is a rectangle; overlap is the only physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::box_center;

/// An axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        box_center(self.pos, self.size)
    }

    /// Whether this box lies entirely inside `[0, bounds]` on both axes
    pub fn is_within(&self, bounds: Vec2) -> bool {
        self.min().cmpge(Vec2::ZERO).all() && self.max().cmple(bounds).all()
    }
}

/// True iff the two boxes intersect with positive area
///
/// Strict inequalities: boxes that only share an edge do not collide.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}
