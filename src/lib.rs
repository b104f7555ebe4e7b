//! Geometric core of an offline ray tracer: intersectable primitives, nearest-hit queries and a
//! loader that turns OBJ meshes into bounded triangle collections.

#[macro_use]
extern crate serde_derive;

pub mod aabb;
pub mod camera;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod obj;
pub mod ray;
pub mod render;
pub mod scene;
pub mod vec2;
pub mod vec3;

pub use crate::aabb::Aabb;
pub use crate::error::{FormatError, LoadError, SceneError};
pub use crate::geometry::{Mesh, Plane, Primitive, ShaderId, SmoothTriangle, TexturedTriangle, Triangle};
pub use crate::intersection::{Barycentric, Intersection};
pub use crate::obj::{load_mesh, FaceStyle, MeshOptions, TriangleStyle};
pub use crate::ray::{Hit, Ray};
pub use crate::scene::{Material, Scene};
pub use crate::vec2::Vec2;
pub use crate::vec3::{Axis, Vec3};
