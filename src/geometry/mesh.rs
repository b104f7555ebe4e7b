//! Model that contains one or more triangles.

use crate::aabb::Aabb;
use crate::geometry::{Primitive, ShaderId};
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Owning collection of triangle-like primitives with the box enclosing all their vertices.
///
/// Built incrementally by the mesh loader and read-only afterwards. Planes never end up in
/// here: the box must stay finite.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    primitives: Vec<Primitive>,
    bounds: Aabb,
    shader: ShaderId,
}

impl Mesh {
    pub fn new(shader: ShaderId) -> Self {
        Self {
            primitives: Vec::new(),
            bounds: Aabb::EMPTY,
            shader,
        }
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    #[inline]
    pub fn shader(&self) -> ShaderId {
        self.shader
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub(crate) fn grow(&mut self, vertex: &Vec3<f64>) {
        self.bounds.grow(vertex);
    }

    pub(crate) fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Box reject first, then a linear scan in storage order.
    pub fn intersect<'a>(&'a self, ray: &mut Ray<'a>) -> bool {
        if !self.bounds.intersects(ray) {
            return false;
        }

        let mut hit = false;
        for primitive in &self.primitives {
            hit |= primitive.intersect(ray);
        }

        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Triangle;
    use crate::vec3::Axis;

    fn quad(z: f64) -> Mesh {
        let corners = [
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(1.0, 1.0, z),
            Vec3::new(-1.0, 1.0, z),
        ];

        let mut mesh = Mesh::new(ShaderId(3));
        for &[a, b, c] in &[[0, 1, 2], [0, 2, 3]] {
            let vertices = [corners[a], corners[b], corners[c]];
            for vertex in &vertices {
                mesh.grow(vertex);
            }
            mesh.push(Triangle::new(vertices, ShaderId(3)).into());
        }

        mesh
    }

    #[test]
    fn hit_resolves_to_child() {
        let mesh: Primitive = quad(-2.0).into();
        let mut ray = Ray::new(Vec3::new(-0.5, 0.5, 0.0), Vec3::new(0.0, 0.0, -1.0));

        assert!(mesh.intersect(&mut ray));
        assert_eq!(2.0, ray.length());

        let hit = ray.hit().unwrap();
        assert!(matches!(hit.primitive, Primitive::Triangle(..)));
        assert!(!std::ptr::eq(hit.primitive, &mesh));
        assert_eq!(Vec3::new(0.0, 0.0, 1.0), hit.primitive.normal_at(&ray));
        assert_eq!(Vec3::default(), mesh.normal_at(&ray));
    }

    #[test]
    fn box_reject_skips_scan() {
        let mesh = quad(-2.0);
        let mut ray = Ray::new(Vec3::new(5.0, 5.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

        assert!(!mesh.intersect(&mut ray));
        assert_eq!(f64::INFINITY, ray.length());
        assert!(ray.hit().is_none());
    }

    #[test]
    fn nearest_child_wins() {
        let mut mesh = quad(-4.0);
        let near = quad(-1.0);
        mesh.grow(&near.bounds().min);
        mesh.grow(&near.bounds().max);
        for primitive in near.primitives {
            mesh.push(primitive);
        }

        let mut ray = Ray::new(Vec3::new(0.1, 0.2, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(mesh.intersect(&mut ray));
        assert!((ray.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_follow_vertices() {
        let mesh: Primitive = quad(-2.0).into();

        assert_eq!(-1.0, mesh.min_bound(Axis::X));
        assert_eq!(1.0, mesh.max_bound(Axis::Y));
        assert_eq!(-2.0, mesh.min_bound(Axis::Z));
        assert_eq!(-2.0, mesh.max_bound(Axis::Z));
        assert_eq!(ShaderId(3), mesh.shader());
    }

    #[test]
    fn empty_mesh_never_hits() {
        let mesh = Mesh::new(ShaderId(0));
        let mut ray = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, -1.0));

        assert!(mesh.is_empty());
        assert!(!mesh.intersect(&mut ray));
    }
}
