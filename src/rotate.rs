use std::sync::Arc;

use crate::hitable::{HitRecord, Hitable};
use crate::math::*;

/// Decorator presenting a wrapped object rotated about the Y axis. Rays are
/// moved into the object's local space with the inverse rotation; the hit
/// point and normal are rotated back out to world space.
pub struct RotateY {
    inner: Arc<dyn Hitable + Send + Sync>,
    sin_theta: f64,
    cos_theta: f64,
}

impl RotateY {
    pub fn new(inner: Arc<dyn Hitable + Send + Sync>, degrees: f64) -> RotateY {
        let radians = degrees.to_radians();
        RotateY {
            inner,
            sin_theta: radians.sin(),
            cos_theta: radians.cos(),
        }
    }
}

impl Hitable for RotateY {
    fn hit(&self, ray: &Ray, min_distance: f64, max_distance: f64, rec: &mut HitRecord) -> bool {
        let origin = Point3::new(
            self.cos_theta * ray.origin.x - self.sin_theta * ray.origin.z,
            ray.origin.y,
            self.sin_theta * ray.origin.x + self.cos_theta * ray.origin.z,
        );
        let direction = Vec3::new(
            self.cos_theta * ray.direction.x - self.sin_theta * ray.direction.z,
            ray.direction.y,
            self.sin_theta * ray.direction.x + self.cos_theta * ray.direction.z,
        );
        let local_ray = Ray::new(origin, direction);

        if !self.inner.hit(&local_ray, min_distance, max_distance, rec) {
            return false;
        }

        let p = rec.point;
        rec.point = Point3::new(
            self.cos_theta * p.x + self.sin_theta * p.z,
            p.y,
            -self.sin_theta * p.x + self.cos_theta * p.z,
        );
        let n = rec.normal;
        rec.normal = Vec3::new(
            self.cos_theta * n.x + self.sin_theta * n.z,
            n.y,
            -self.sin_theta * n.x + self.cos_theta * n.z,
        );
        true
    }
}
