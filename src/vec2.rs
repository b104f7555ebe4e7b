use std::ops::{Add, Mul};

/// Texture coordinate pair.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Vec2<T> {
    pub u: T,
    pub v: T,
}

impl<T> Vec2<T> {
    #[inline]
    pub fn new(u: T, v: T) -> Self {
        Self { u, v }
    }
}

impl<T: Copy + Mul<Output = T>> Vec2<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec2<T> {
        Vec2 {
            u: self.u * factor,
            v: self.v * factor,
        }
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn add(self, other: Vec2<T>) -> Self::Output {
        Vec2 {
            u: self.u + other.u,
            v: self.v + other.v,
        }
    }
}
