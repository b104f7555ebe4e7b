use crate::geometry::{Geometry, ShaderId, EPSILON};
use crate::intersection::Intersection;
use crate::ray::Ray;
use crate::vec3::{Axis, Vec3};

///
///
/// A plane can be defined as a point representing how far the plane is from the
/// world origin and a normal (defining the orientation of the plane).
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    origin: Vec3<f64>,
    /// Expected to be normalized by the caller.
    normal: Vec3<f64>,
    shader: ShaderId,
}

impl Plane {
    pub fn new(origin: Vec3<f64>, normal: Vec3<f64>, shader: ShaderId) -> Self {
        Self {
            origin,
            normal,
            shader,
        }
    }

    /// Plane facing +Y.
    pub fn horizontal(origin: Vec3<f64>, shader: ShaderId) -> Self {
        Self::new(origin, Vec3::new(0.0, 1.0, 0.0), shader)
    }}

impl Geometry for Plane {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let denominator = ray.direction().dot(&self.normal);
        if denominator.abs() < EPSILON {
            return None;
        }

        let p0r0 = self.origin - ray.origin();
        let t = p0r0.dot(&self.normal) / denominator;

        if t <= EPSILON || t > ray.length() {
            return None;
        }

        Some(Intersection::new(t))
    }

    fn normal(&self, _intersection: &Intersection) -> Vec3<f64> {
        self.normal
    }

    fn min_bound(&self, _axis: Axis) -> f64 {
        f64::NEG_INFINITY
    }

    fn max_bound(&self, _axis: Axis) -> f64 {
        f64::INFINITY
    }

    fn shader(&self) -> ShaderId {
        self.shader
    }
}
