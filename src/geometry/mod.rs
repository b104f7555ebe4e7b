use crate::intersection::Intersection;
use crate::ray::Ray;
use crate::vec2::Vec2;
use crate::vec3::{Axis, Vec3};

mod mesh;
mod plane;
mod triangle;

pub use self::mesh::Mesh;
pub use self::plane::Plane;
pub use self::triangle::{SmoothTriangle, TexturedTriangle, Triangle};

/// Tolerance for parallel rays, degenerate triangles and self-intersections.
pub const EPSILON: f64 = f64::EPSILON;

/// Handle into the shading table owned by whoever builds the scene.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShaderId(pub usize);

/// A single intersectable shape.
///
/// `intersection` is a pure query: it reports a candidate no farther than the ray's current
/// nearest distance (triangles require it to be strictly nearer, planes accept a tie) and never
/// touches the ray. Committing the candidate is up to [`Primitive`].
pub trait Geometry {
    fn intersection(&self, ray: &Ray) -> Option<Intersection>;

    fn normal(&self, intersection: &Intersection) -> Vec3<f64>;

    fn uv(&self, _intersection: &Intersection) -> Vec2<f64> {
        Vec2::default()
    }

    fn min_bound(&self, axis: Axis) -> f64;

    fn max_bound(&self, axis: Axis) -> f64;

    fn shader(&self) -> ShaderId;
}

#[derive(Clone, Debug)]
pub enum Primitive {
    Plane(Plane),
    Triangle(Triangle),
    SmoothTriangle(SmoothTriangle),
    TexturedTriangle(TexturedTriangle),
    Mesh(Mesh),
}

impl Primitive {
    fn shape(&self) -> Option<&dyn Geometry> {
        match self {
            Primitive::Plane(plane) => Some(plane),
            Primitive::Triangle(triangle) => Some(triangle),
            Primitive::SmoothTriangle(triangle) => Some(triangle),
            Primitive::TexturedTriangle(triangle) => Some(triangle),
            Primitive::Mesh(..) => None,
        }
    }

    /// Tests the ray against this primitive, tightening its nearest hit on success.
    ///
    /// A mesh commits the hit to the child triangle, never to itself.
    pub fn intersect<'a>(&'a self, ray: &mut Ray<'a>) -> bool {
        let shape = match self {
            Primitive::Mesh(mesh) => return mesh.intersect(ray),
            _ => self.shape(),
        };

        match shape.and_then(|shape| shape.intersection(ray)) {
            Some(intersection) => {
                ray.commit(self, intersection);
                true
            }
            None => false,
        }
    }

    /// Surface normal at the ray's confirmed hit.
    ///
    /// Meshes report a zero vector: their hits always resolve to a child.
    pub fn normal_at(&self, ray: &Ray) -> Vec3<f64> {
        self.normal_for(&Self::hit_record(ray))
    }

    /// Texture coordinate at the ray's confirmed hit.
    pub fn uv_at(&self, ray: &Ray) -> Vec2<f64> {
        self.uv_for(&Self::hit_record(ray))
    }

    pub fn min_bound(&self, axis: Axis) -> f64 {
        match self {
            Primitive::Mesh(mesh) => mesh.bounds().min[axis],
            _ => self.shape().map_or(f64::NEG_INFINITY, |shape| shape.min_bound(axis)),
        }
    }

    pub fn max_bound(&self, axis: Axis) -> f64 {
        match self {
            Primitive::Mesh(mesh) => mesh.bounds().max[axis],
            _ => self.shape().map_or(f64::INFINITY, |shape| shape.max_bound(axis)),
        }
    }

    pub fn shader(&self) -> ShaderId {
        match self {
            Primitive::Mesh(mesh) => mesh.shader(),
            _ => self.shape().map(|shape| shape.shader()).unwrap_or_default(),
        }
    }

    pub(crate) fn normal_for(&self, intersection: &Intersection) -> Vec3<f64> {
        self.shape().map(|shape| shape.normal(intersection)).unwrap_or_default()
    }

    pub(crate) fn uv_for(&self, intersection: &Intersection) -> Vec2<f64> {
        self.shape().map(|shape| shape.uv(intersection)).unwrap_or_default()
    }

    fn hit_record(ray: &Ray) -> Intersection {
        ray.hit()
            .map(|hit| hit.intersection)
            .unwrap_or_else(|| Intersection::new(ray.length()))
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

impl From<SmoothTriangle> for Primitive {
    fn from(triangle: SmoothTriangle) -> Self {
        Primitive::SmoothTriangle(triangle)
    }
}

impl From<TexturedTriangle> for Primitive {
    fn from(triangle: TexturedTriangle) -> Self {
        Primitive::TexturedTriangle(triangle)
    }
}

impl From<Mesh> for Primitive {
    fn from(mesh: Mesh) -> Self {
        Primitive::Mesh(mesh)
    }
}
