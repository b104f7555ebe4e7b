use crate::geometry::Primitive;
use crate::intersection::Intersection;
use crate::vec3::Vec3;

/// Primitive that produced the current nearest distance of a ray.
#[derive(Copy, Clone, Debug)]
pub struct Hit<'a> {
    pub primitive: &'a Primitive,
    pub intersection: Intersection,
}

/// Parametric ray that accumulates the nearest hit found so far.
///
/// The same value is threaded through every intersection test of one query, so `length` only
/// ever shrinks and `hit` always names the primitive that set it.
#[derive(Clone, Debug)]
pub struct Ray<'a> {
    origin: Vec3<f64>,
    direction: Vec3<f64>,
    length: f64,
    hit: Option<Hit<'a>>,
}

impl<'a> Ray<'a> {
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self {
            origin,
            direction: direction.unit(),
            length: f64::INFINITY,
            hit: None,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    /// Distance to the closest confirmed hit, or infinity.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn hit(&self) -> Option<&Hit<'a>> {
        self.hit.as_ref()
    }

    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }

    /// Point of the current nearest hit.
    pub fn point(&self) -> Option<Vec3<f64>> {
        self.hit.map(|_| self.offset(self.length))
    }

    /// Forgets the accumulated hit so the ray can be traced again.
    pub fn reset(&mut self) {
        self.length = f64::INFINITY;
        self.hit = None;
    }

    pub(crate) fn commit(&mut self, primitive: &'a Primitive, intersection: Intersection) {
        self.length = intersection.t;
        self.hit = Some(Hit { primitive, intersection });
    }
}
