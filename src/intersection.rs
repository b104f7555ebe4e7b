use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// Barycentric position of a hit inside a triangle.
///
/// `lambda` weights the second vertex, `mu` the third one and the remainder goes to the first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Barycentric {
    pub lambda: f64,
    pub mu: f64,
}

impl Barycentric {
    pub fn new(lambda: f64, mu: f64) -> Self {
        Self { lambda, mu }
    }

    /// Weights of the vertices `a`, `b` and `c`, in that order.
    #[inline]
    pub fn weights(&self) -> [f64; 3] {
        [1.0 - self.lambda - self.mu, self.lambda, self.mu]
    }

    pub fn interpolate3(&self, v: &[Vec3<f64>; 3]) -> Vec3<f64> {
        let [wa, wb, wc] = self.weights();
        v[0].scale(wa) + v[1].scale(wb) + v[2].scale(wc)
    }

    pub fn interpolate2(&self, v: &[Vec2<f64>; 3]) -> Vec2<f64> {
        let [wa, wb, wc] = self.weights();
        v[0].scale(wa) + v[1].scale(wb) + v[2].scale(wc)
    }
}

/// Accepted candidate hit, as reported by a single shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub t: f64,
    /// Only triangle-like shapes fill this in.
    pub barycentric: Option<Barycentric>,
}

impl Intersection {
    pub fn new(t: f64) -> Self {
        Self { t, barycentric: None }
    }

    pub fn with_barycentric(t: f64, barycentric: Barycentric) -> Self {
        Self {
            t,
            barycentric: Some(barycentric),
        }
    }
}
