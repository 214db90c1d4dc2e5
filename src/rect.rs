use std::sync::Arc;

use crate::hitable::{HitRecord, Hitable};
use crate::material::Material;
use crate::math::*;

#[derive(Debug, Clone, Copy)]
pub enum RectAxis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy)]
enum NormalMode {
    /// Outward sign along the constrained axis, chosen at construction.
    Fixed(f64),
    /// Legacy form: face whichever side the ray arrives from.
    FromRay,
}

/// Rectangle lying in a plane perpendicular to one coordinate axis.
/// `a`/`b` are the two free coordinates in axis order (X: y/z, Y: x/z,
/// Z: x/y) and `c` the fixed coordinate.
pub struct AxisAlignedRect {
    material: Arc<dyn Material + Send + Sync>,
    a0: f64,
    a1: f64,
    b0: f64,
    b1: f64,
    c: f64,
    axis: RectAxis,
    normal: NormalMode,
}

impl AxisAlignedRect {
    pub fn new(
        a0: f64,
        a1: f64,
        b0: f64,
        b1: f64,
        c: f64,
        axis: RectAxis,
        normal_sign: f64,
        material: Arc<dyn Material + Send + Sync>,
    ) -> Self {
        Self {
            material,
            a0,
            a1,
            b0,
            b1,
            c,
            axis,
            normal: NormalMode::Fixed(normal_sign),
        }
    }

    pub fn with_inferred_normal(
        a0: f64,
        a1: f64,
        b0: f64,
        b1: f64,
        c: f64,
        axis: RectAxis,
        material: Arc<dyn Material + Send + Sync>,
    ) -> Self {
        Self {
            material,
            a0,
            a1,
            b0,
            b1,
            c,
            axis,
            normal: NormalMode::FromRay,
        }
    }

    fn plane_intersection(&self, ray: &Ray) -> f64 {
        // no zero check on the direction component: a 0 yields a non-finite
        // t that the range and bounds comparisons below throw out
        match self.axis {
            RectAxis::X => (self.c - ray.origin.x) / ray.direction.x,
            RectAxis::Y => (self.c - ray.origin.y) / ray.direction.y,
            RectAxis::Z => (self.c - ray.origin.z) / ray.direction.z,
        }
    }

    fn ab_intersection(&self, ray: &Ray, t: f64) -> (f64, f64) {
        let a = match self.axis {
            RectAxis::X => ray.origin.y + t * ray.direction.y,
            RectAxis::Y => ray.origin.x + t * ray.direction.x,
            RectAxis::Z => ray.origin.x + t * ray.direction.x,
        };

        let b = match self.axis {
            RectAxis::X => ray.origin.z + t * ray.direction.z,
            RectAxis::Y => ray.origin.z + t * ray.direction.z,
            RectAxis::Z => ray.origin.y + t * ray.direction.y,
        };

        (a, b)
    }

    fn plane_normal(&self, ray: &Ray) -> Vec3 {
        let sign = match self.normal {
            NormalMode::Fixed(sign) => sign,
            NormalMode::FromRay => {
                let component = match self.axis {
                    RectAxis::X => ray.direction.x,
                    RectAxis::Y => ray.direction.y,
                    RectAxis::Z => ray.direction.z,
                };
                if component > 0.0 {
                    -1.0
                } else {
                    1.0
                }
            }
        };

        match self.axis {
            RectAxis::X => Vec3::new(sign, 0.0, 0.0),
            RectAxis::Y => Vec3::new(0.0, sign, 0.0),
            RectAxis::Z => Vec3::new(0.0, 0.0, sign),
        }
    }
}

impl Hitable for AxisAlignedRect {
    fn hit(&self, ray: &Ray, min_distance: f64, max_distance: f64, rec: &mut HitRecord) -> bool {
        let t = self.plane_intersection(ray);
        if t < min_distance || t > max_distance {
            return false;
        }
        let (a, b) = self.ab_intersection(ray, t);
        if a < self.a0 || a > self.a1 || b < self.b0 || b > self.b1 {
            return false;
        }

        rec.distance = t;
        rec.normal = self.plane_normal(ray);
        rec.material = Some(Arc::clone(&self.material));
        rec.point = ray.point_at_parameter(t);
        true
    }
}
