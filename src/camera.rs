use crate::ray::Ray;
use crate::vec3::Vec3;

fn default_up() -> Vec3<f64> {
    Vec3::new(0.0, 1.0, 0.0)
}

fn default_fov() -> f64 {
    60.0
}

#[derive(Debug, Deserialize)]
struct CameraConfig {
    origin: Vec3<f64>,
    look_at: Vec3<f64>,
    #[serde(default = "default_up")]
    up: Vec3<f64>,
    /// Horizontal field of view, in degrees.
    #[serde(default = "default_fov")]
    fov: f64,
}

/// Pinhole camera.
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(from = "CameraConfig")]
pub struct Camera {
    origin: Vec3<f64>,
    forward: Vec3<f64>,
    right: Vec3<f64>,
    up: Vec3<f64>,
    /// Half of the viewport width at unit distance.
    extent: f64,
}

impl Camera {
    pub fn new(origin: Vec3<f64>, look_at: Vec3<f64>, up: Vec3<f64>, fov: f64) -> Self {
        let forward = (look_at - origin).unit();
        let right = forward.cross(&up).unit();
        let up = right.cross(&forward);

        Self {
            origin,
            forward,
            right,
            up,
            extent: (fov.to_radians() / 2.0).tan(),
        }
    }

    /// Ray through the viewport point `(x, y)`, both in `[-1, 1]` with `y` pointing up.
    pub fn cast_ray<'a>(&self, x: f64, y: f64) -> Ray<'a> {
        let direction = self.forward + self.right.scale(x * self.extent) + self.up.scale(y * self.extent);
        Ray::new(self.origin, direction)
    }
}

impl From<CameraConfig> for Camera {
    fn from(config: CameraConfig) -> Self {
        Camera::new(config.origin, config.look_at, config.up, config.fov)
    }
}
