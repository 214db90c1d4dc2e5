use std::sync::Arc;

use crate::material::Material;
use crate::math::point3::Point3;
use crate::math::ray::Ray;
use crate::math::vec3::Vec3;

/// Distance given to a fresh record; any real intersection is nearer.
pub const INITIAL_HIT_DISTANCE: f64 = 999_999_999_999.0;

/// Scratch record threaded through one nearest-hit search. `distance`
/// holds the current best candidate and is handed back to every later
/// intersection test as its upper bound.
pub struct HitRecord {
    pub point: Point3,
    pub normal: Vec3,
    pub distance: f64,
    pub material: Option<Arc<dyn Material + Send + Sync>>,
}

impl HitRecord {
    pub fn new() -> HitRecord {
        HitRecord {
            point: Point3::new(0.0, 0.0, 0.0),
            normal: Vec3::new_zero_vector(),
            distance: INITIAL_HIT_DISTANCE,
            material: None,
        }
    }
}

pub trait Hitable {
    /// Accept only parametric distances in `[min_distance, max_distance]`;
    /// on a match overwrite `rec` and return true, otherwise leave `rec`
    /// untouched.
    fn hit(&self, ray: &Ray, min_distance: f64, max_distance: f64, rec: &mut HitRecord) -> bool;
}
