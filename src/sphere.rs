use std::sync::Arc;

use crate::hitable::{HitRecord, Hitable};
use crate::material::Material;
use crate::math::*;

pub struct Sphere {
    center: Point3,
    radius_squared: f64,
    material: Arc<dyn Material + Send + Sync>,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, material: Arc<dyn Material + Send + Sync>) -> Sphere {
        Sphere {
            center,
            radius_squared: radius * radius,
            material,
        }
    }
}

impl Hitable for Sphere {
    fn hit(&self, ray: &Ray, min_distance: f64, max_distance: f64, rec: &mut HitRecord) -> bool {
        // geometric method: compare the perpendicular distance from the
        // center to the ray against the radius before solving for roots
        let l = point3::from_to(ray.origin, self.center);
        let adj = vec3::dot(&l, &ray.direction);
        let d2 = vec3::dot(&l, &l) - adj * adj;
        if d2 > self.radius_squared {
            return false;
        }
        let thc = (self.radius_squared - d2).sqrt();
        let t0 = adj - thc;
        let t1 = adj + thc;
        if t0 < 0.0 && t1 < 0.0 {
            return false;
        }

        // the smaller root wins; if it falls below min_distance the whole
        // test is rejected, so a ray starting inside reports no hit
        let distance = if t0 > t1 { t1 } else { t0 };
        if distance < min_distance || distance > max_distance {
            return false;
        }

        rec.material = Some(Arc::clone(&self.material));
        rec.distance = distance;
        rec.point = ray.point_at_parameter(distance);
        rec.normal = point3::from_to_normalized(self.center, rec.point);
        true
    }
}
