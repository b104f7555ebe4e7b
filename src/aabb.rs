//! Axis-aligned bounding box used to cull rays before scanning a mesh.

use crate::ray::Ray;
use crate::vec3::{Axis, Vec3};

/// Relative slack for the slab comparison, so that hits computed by the triangle test on the box
/// surface are never culled by rounding. Scaled by the magnitude of the values being compared.
const SLAB_TOLERANCE: f64 = 1e-9;

#[inline]
fn slack(magnitude: f64) -> f64 {
    SLAB_TOLERANCE * magnitude.max(1.0)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3<f64>,
    pub max: Vec3<f64>,
}

impl Aabb {
    /// Empty box: folding any point into it yields that point.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3 {
            x: f64::INFINITY,
            y: f64::INFINITY,
            z: f64::INFINITY,
        },
        max: Vec3 {
            x: f64::NEG_INFINITY,
            y: f64::NEG_INFINITY,
            z: f64::NEG_INFINITY,
        },
    };

    pub fn new(min: Vec3<f64>, max: Vec3<f64>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn grow(&mut self, point: &Vec3<f64>) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn is_empty(&self) -> bool {
        Axis::ALL.iter().any(|&axis| self.min[axis] > self.max[axis])
    }

    /// Slab test against the ray's current segment `[0, length]`.
    ///
    /// Only used as a cheap reject: a `true` answer says nothing about the contained shapes.
    pub fn intersects(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }

        let origin = ray.origin();
        let direction = ray.direction();

        let mut t_near = 0.0f64;
        let mut t_far = ray.length();

        for &axis in &Axis::ALL {
            let o = origin[axis];
            let d = direction[axis];
            // Widen the slab by the rounding the triangle test may have picked up at this scale.
            let pad = slack(self.min[axis].abs().max(self.max[axis].abs()).max(o.abs()));
            let (min, max) = (self.min[axis] - pad, self.max[axis] + pad);

            if d.abs() < f64::EPSILON {
                // Parallel to this slab: the origin has to be within it.
                if o < min || o > max {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (min - o) * inv;
            let mut t1 = (max - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_near = t_near.max(t0);
            t_far = t_far.min(t1);

            if t_near > t_far + slack(t_far.abs()) {
                return false;
            }
        }

        true
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::EMPTY
    }
}
