use std::sync::Arc;

use crate::hitable::{HitRecord, Hitable};
use crate::material::Material;
use crate::math::*;
use crate::rect::{AxisAlignedRect, RectAxis};

/// Box assembled from six axis-aligned rectangles, two per axis at the
/// half-extents, each with its outward normal sign.
pub struct AxisAlignedBox {
    faces: [AxisAlignedRect; 6],
}

impl AxisAlignedBox {
    pub fn new(
        center: Point3,
        size_x: f64,
        size_y: f64,
        size_z: f64,
        material: Arc<dyn Material + Send + Sync>,
    ) -> AxisAlignedBox {
        let hx = size_x / 2.0;
        let hy = size_y / 2.0;
        let hz = size_z / 2.0;
        let (x0, x1) = (center.x - hx, center.x + hx);
        let (y0, y1) = (center.y - hy, center.y + hy);
        let (z0, z1) = (center.z - hz, center.z + hz);

        let faces = [
            AxisAlignedRect::new(y0, y1, z0, z1, x1, RectAxis::X, 1.0, material.clone()),
            AxisAlignedRect::new(y0, y1, z0, z1, x0, RectAxis::X, -1.0, material.clone()),
            AxisAlignedRect::new(x0, x1, z0, z1, y1, RectAxis::Y, 1.0, material.clone()),
            AxisAlignedRect::new(x0, x1, z0, z1, y0, RectAxis::Y, -1.0, material.clone()),
            AxisAlignedRect::new(x0, x1, y0, y1, z1, RectAxis::Z, 1.0, material.clone()),
            AxisAlignedRect::new(x0, x1, y0, y1, z0, RectAxis::Z, -1.0, material),
        ];

        AxisAlignedBox { faces }
    }
}

impl Hitable for AxisAlignedBox {
    fn hit(&self, ray: &Ray, min_distance: f64, max_distance: f64, rec: &mut HitRecord) -> bool {
        // every face is tried against the shared record, so each test sees
        // the bound left by the faces before it and the nearest face wins
        let mut matched = false;
        for face in &self.faces {
            if face.hit(ray, min_distance, rec.distance.min(max_distance), rec) {
                matched = true;
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::color::Color;
    use crate::material::Lambertian;

    fn grey() -> Arc<dyn Material + Send + Sync> {
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)))
    }

    #[test]
    fn axis_rays_through_the_center_hit_the_near_face() {
        let cube = AxisAlignedBox::new(Point3::new(0.0, 0.0, -5.0), 2.0, 4.0, 6.0, grey());

        // along -z: near face at z = -2, two units out
        let mut rec = HitRecord::new();
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(cube.hit(&ray, 0.0001, rec.distance, &mut rec));
        assert!((rec.distance - 2.0).abs() < 1e-12);
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));

        // along +x: near face at x = -1
        let mut rec = HitRecord::new();
        let ray = Ray::new(Point3::new(-10.0, 0.0, -5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(cube.hit(&ray, 0.0001, rec.distance, &mut rec));
        assert!((rec.distance - 9.0).abs() < 1e-12);
        assert_eq!(rec.normal, Vec3::new(-1.0, 0.0, 0.0));

        // along -y: near face at y = 2
        let mut rec = HitRecord::new();
        let ray = Ray::new(Point3::new(0.0, 10.0, -5.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(cube.hit(&ray, 0.0001, rec.distance, &mut rec));
        assert!((rec.distance - 8.0).abs() < 1e-12);
        assert_eq!(rec.normal, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn the_far_face_never_overwrites_the_near_face() {
        let cube = AxisAlignedBox::new(Point3::new(0.0, 0.0, -5.0), 2.0, 2.0, 2.0, grey());
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::new();
        assert!(cube.hit(&ray, 0.0001, rec.distance, &mut rec));
        // near face z = -4 at t = 4; the far face at t = 6 is culled by the
        // record's own distance
        assert!((rec.distance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn an_earlier_nearer_match_suppresses_the_box() {
        let cube = AxisAlignedBox::new(Point3::new(0.0, 0.0, -5.0), 2.0, 2.0, 2.0, grey());
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::new();
        rec.distance = 2.0;
        assert!(!cube.hit(&ray, 0.0001, rec.distance, &mut rec));
        assert_eq!(rec.distance, 2.0);
    }

    #[test]
    fn misses_beside_the_box() {
        let cube = AxisAlignedBox::new(Point3::new(0.0, 0.0, -5.0), 2.0, 2.0, 2.0, grey());
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::new();
        assert!(!cube.hit(&ray, 0.0001, rec.distance, &mut rec));
    }
}
