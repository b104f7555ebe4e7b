//! Flat, smooth-shaded and textured triangles.

use crate::geometry::{Geometry, ShaderId, EPSILON};
use crate::intersection::{Barycentric, Intersection};
use crate::ray::Ray;
use crate::vec2::Vec2;
use crate::vec3::{Axis, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Vec3<f64>; 3],
    shader: ShaderId,
}

impl Triangle {
    pub fn new(vertices: [Vec3<f64>; 3], shader: ShaderId) -> Self {
        Self { vertices, shader }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3<f64>; 3] {
        &self.vertices
    }

    /// Unit normal of the supporting plane, following the winding order.
    pub fn flat_normal(&self) -> Vec3<f64> {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a)).unit()
    }
}

impl Geometry for Triangle {
    /// Möller–Trumbore.
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let [a, b, c] = self.vertices;

        let edge1 = b - a;
        let edge2 = c - a;

        let pvec = ray.direction().cross(&edge2);
        let det = edge1.dot(&pvec);

        // Parallel ray or degenerate triangle.
        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;

        let tvec = ray.origin() - a;
        let lambda = tvec.dot(&pvec) * inv_det;
        if !(0.0..=1.0).contains(&lambda) {
            return None;
        }

        let qvec = tvec.cross(&edge1);
        let mu = ray.direction().dot(&qvec) * inv_det;
        if mu < 0.0 || lambda + mu > 1.0 {
            return None;
        }

        let t = edge2.dot(&qvec) * inv_det;
        if t <= EPSILON || t >= ray.length() {
            return None;
        }

        Some(Intersection::with_barycentric(t, Barycentric::new(lambda, mu)))
    }

    fn normal(&self, _intersection: &Intersection) -> Vec3<f64> {
        self.flat_normal()
    }

    fn min_bound(&self, axis: Axis) -> f64 {
        self.vertices.iter().map(|v| v[axis]).fold(f64::INFINITY, f64::min)
    }

    fn max_bound(&self, axis: Axis) -> f64 {
        self.vertices.iter().map(|v| v[axis]).fold(f64::NEG_INFINITY, f64::max)
    }

    fn shader(&self) -> ShaderId {
        self.shader
    }
}

/// Triangle whose normal is interpolated from its vertex normals.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SmoothTriangle {
    triangle: Triangle,
    normals: [Vec3<f64>; 3],
}

impl SmoothTriangle {
    /// Vertex normals are normalized here.
    pub fn new(vertices: [Vec3<f64>; 3], normals: [Vec3<f64>; 3], shader: ShaderId) -> Self {
        Self {
            triangle: Triangle::new(vertices, shader),
            normals: [normals[0].unit(), normals[1].unit(), normals[2].unit()],
        }
    }

    #[inline]
    pub fn normals(&self) -> &[Vec3<f64>; 3] {
        &self.normals
    }
}

impl Geometry for SmoothTriangle {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        self.triangle.intersection(ray)
    }

    fn normal(&self, intersection: &Intersection) -> Vec3<f64> {
        match intersection.barycentric {
            Some(barycentric) => barycentric.interpolate3(&self.normals).unit(),
            None => self.triangle.flat_normal(),
        }
    }

    fn min_bound(&self, axis: Axis) -> f64 {
        self.triangle.min_bound(axis)
    }

    fn max_bound(&self, axis: Axis) -> f64 {
        self.triangle.max_bound(axis)
    }

    fn shader(&self) -> ShaderId {
        self.triangle.shader
    }
}

/// Smooth triangle carrying per-vertex texture coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TexturedTriangle {
    smooth: SmoothTriangle,
    uv: [Vec2<f64>; 3],
}

impl TexturedTriangle {
    pub fn new(
        vertices: [Vec3<f64>; 3],
        normals: [Vec3<f64>; 3],
        uv: [Vec2<f64>; 3],
        shader: ShaderId,
    ) -> Self {
        Self {
            smooth: SmoothTriangle::new(vertices, normals, shader),
            uv,
        }
    }

    #[inline]
    pub fn texture_coordinates(&self) -> &[Vec2<f64>; 3] {
        &self.uv
    }
}

impl Geometry for TexturedTriangle {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        self.smooth.intersection(ray)
    }

    fn normal(&self, intersection: &Intersection) -> Vec3<f64> {
        self.smooth.normal(intersection)
    }

    /// Barycentric blend of the vertex coordinates; the ray direction plays no part.
    fn uv(&self, intersection: &Intersection) -> Vec2<f64> {
        intersection
            .barycentric
            .map(|barycentric| barycentric.interpolate2(&self.uv))
            .unwrap_or(self.uv[0])
    }

    fn min_bound(&self, axis: Axis) -> f64 {
        self.smooth.min_bound(axis)
    }

    fn max_bound(&self, axis: Axis) -> f64 {
        self.smooth.max_bound(axis)
    }

    fn shader(&self) -> ShaderId {
        self.smooth.shader()
    }
}
