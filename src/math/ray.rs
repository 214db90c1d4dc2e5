use crate::math::point3::Point3;
use crate::math::vec3::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3, // not guaranteed to be normalized, must normalize if being used in angles
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn new_zero_ray() -> Ray {
        Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new_zero_vector())
    }

    /// `origin + direction * t`. Only a Euclidean distance when the
    /// direction is unit length.
    pub fn point_at_parameter(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
