use std::sync::Arc;

use crate::hitable::{HitRecord, Hitable};
use crate::material::Material;
use crate::math::*;

/// Infinite plane through `origin` with a fixed normal.
pub struct Plane {
    origin: Point3,
    normal: Vec3,
    material: Arc<dyn Material + Send + Sync>,
}

impl Plane {
    pub fn new(origin: Point3, normal: Vec3, material: Arc<dyn Material + Send + Sync>) -> Plane {
        Plane {
            origin,
            normal,
            material,
        }
    }
}

impl Hitable for Plane {
    fn hit(&self, ray: &Ray, min_distance: f64, max_distance: f64, rec: &mut HitRecord) -> bool {
        // min_distance doubles as the cutoff for a near-parallel denominator
        let denom = vec3::dot(&self.normal, &ray.direction);
        if denom.abs() < min_distance {
            return false;
        }

        let v = point3::from_to(ray.origin, self.origin);
        let distance = vec3::dot(&v, &self.normal) / denom;

        if distance < min_distance || distance > max_distance {
            return false;
        }

        rec.material = Some(Arc::clone(&self.material));
        rec.distance = distance;
        rec.point = ray.point_at_parameter(distance);
        rec.normal = self.normal;
        true
    }
}
