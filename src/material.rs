use rand::RngCore;

use crate::color::Color;
use crate::hitable::HitRecord;
use crate::math::random;
use crate::math::vec3;
use crate::math::vec3::Vec3;
use crate::math::ray::Ray;

/// Reflect `v` about `n` and normalize the result.
fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    let s = *n * (2.0 * vec3::dot(v, n));
    vec3::normalized_difference(&s, v)
}

pub trait Material {
    /// Decide the fate of a path at `rec`. Returning true hands back an
    /// attenuation and a follow-up ray; returning false ends the path,
    /// with whatever was written to `attenuation` as its final value.
    fn scatter(
        &self,
        ray: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
        attenuation: &mut Color,
        scattered: &mut Ray,
    ) -> bool;

    fn emitted(&self) -> Color;
}

/// Diffuse reflector: bounces along the jittered surface normal.
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Lambertian {
        Lambertian { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
        attenuation: &mut Color,
        scattered: &mut Ray,
    ) -> bool {
        *attenuation = self.albedo;
        scattered.origin = rec.point;
        scattered.direction = random::random_jitter(rng, &rec.normal);
        true
    }

    fn emitted(&self) -> Color {
        Color::black()
    }
}

/// Mirror reflector.
pub struct Metal {
    color: Color,
}

impl Metal {
    pub fn new(color: Color) -> Metal {
        Metal { color }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray: &Ray,
        rec: &HitRecord,
        _rng: &mut dyn RngCore,
        attenuation: &mut Color,
        scattered: &mut Ray,
    ) -> bool {
        let reflected = reflect(&ray.direction, &rec.normal);
        scattered.origin = rec.point;
        scattered.direction = reflected;
        *attenuation = self.color;
        // a reflection pointing back into the surface carries nothing
        vec3::dot(&scattered.direction, &rec.normal) > 0.0
    }

    fn emitted(&self) -> Color {
        Color::black()
    }
}

/// Emitter: never continues a path, but leaves its color in the
/// attenuation slot so the estimator picks it up as the path's value.
pub struct DiffuseLight {
    color: Color,
}

impl DiffuseLight {
    pub fn new(color: Color) -> DiffuseLight {
        DiffuseLight { color }
    }
}

impl Material for DiffuseLight {
    fn scatter(
        &self,
        _ray: &Ray,
        _rec: &HitRecord,
        _rng: &mut dyn RngCore,
        attenuation: &mut Color,
        _scattered: &mut Ray,
    ) -> bool {
        *attenuation = self.color;
        false
    }

    fn emitted(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::math::point3::Point3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record_at(point: Point3, normal: Vec3) -> HitRecord {
        let mut rec = HitRecord::new();
        rec.point = point;
        rec.normal = normal;
        rec.distance = 1.0;
        rec
    }

    #[test]
    fn lambertian_always_continues_with_its_albedo() {
        let mut rng = StdRng::seed_from_u64(1);
        let material = Lambertian::new(Color::new(0.6, 0.3, 0.1));
        let rec = record_at(Point3::new(0.0, -3.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, -0.5, -1.0));

        let mut attenuation = Color::black();
        let mut scattered = Ray::new_zero_ray();
        assert!(material.scatter(&ray, &rec, &mut rng, &mut attenuation, &mut scattered));
        assert_eq!(attenuation, Color::new(0.6, 0.3, 0.1));
        assert_eq!(scattered.origin, rec.point);
        // bounce leaves the surface on the normal's side
        assert!(vec3::dot(&scattered.direction, &rec.normal) > 0.0);
        assert_eq!(material.emitted(), Color::black());
    }

    #[test]
    fn metal_reflects_about_the_normal() {
        let mut rng = StdRng::seed_from_u64(1);
        let material = Metal::new(Color::new(0.95, 0.95, 0.95));
        let rec = record_at(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        // incoming at 45 degrees in the xz=0 plane
        let ray = Ray::new(Point3::new(-1.0, 1.0, 0.0), Vec3::normalized(1.0, -1.0, 0.0));

        let mut attenuation = Color::black();
        let mut scattered = Ray::new_zero_ray();
        assert!(material.scatter(&ray, &rec, &mut rng, &mut attenuation, &mut scattered));
        let expected = Vec3::normalized(1.0, 1.0, 0.0);
        assert!((scattered.direction.x - expected.x).abs() < 1e-12);
        assert!((scattered.direction.y - expected.y).abs() < 1e-12);
        assert!((scattered.direction.z - expected.z).abs() < 1e-12);
        assert!((scattered.direction.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn metal_declines_reflections_into_the_surface() {
        let mut rng = StdRng::seed_from_u64(1);
        let material = Metal::new(Color::new(0.95, 0.95, 0.95));
        let rec = record_at(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        // incoming from below the surface reflects back below it
        let ray = Ray::new(Point3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

        let mut attenuation = Color::black();
        let mut scattered = Ray::new_zero_ray();
        assert!(!material.scatter(&ray, &rec, &mut rng, &mut attenuation, &mut scattered));
        // the attenuation write happens regardless
        assert_eq!(attenuation, Color::new(0.95, 0.95, 0.95));
    }

    #[test]
    fn light_declines_but_leaves_its_color_behind() {
        let mut rng = StdRng::seed_from_u64(1);
        let material = DiffuseLight::new(Color::new(5.0, 5.0, 5.0));
        let rec = record_at(Point3::new(0.0, 9.99, -3.0), Vec3::new(0.0, -1.0, 0.0));
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

        let mut attenuation = Color::black();
        let mut scattered = Ray::new_zero_ray();
        assert!(!material.scatter(&ray, &rec, &mut rng, &mut attenuation, &mut scattered));
        assert_eq!(attenuation, Color::new(5.0, 5.0, 5.0));
        assert_eq!(material.emitted(), Color::new(5.0, 5.0, 5.0));
    }
}
