use rand::{Rng, RngCore};

use crate::math::vec3::Vec3;

/// Perturb `base` by a unit vector: three uniform draws in [-1, 1] are
/// normalized onto the sphere and added on. The sum is left unnormalized,
/// so the result is in general not unit length even for a unit `base`.
pub fn random_jitter(rng: &mut dyn RngCore, base: &Vec3) -> Vec3 {
    let x = rng.gen::<f64>() * 2.0 - 1.0;
    let y = rng.gen::<f64>() * 2.0 - 1.0;
    let z = rng.gen::<f64>() * 2.0 - 1.0;
    let norm = (x * x + y * y + z * z).sqrt();
    Vec3::new(base.x + x / norm, base.y + y / norm, base.z + z / norm)
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn jitter_offset_is_unit_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let base = Vec3::new(0.0, 1.0, 0.0);
        for _ in 0..16 {
            let jittered = random_jitter(&mut rng, &base);
            let offset = jittered - base;
            assert!((offset.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn jittered_sum_is_not_unit_length() {
        // scatter directions built from a unit normal come out non-unit;
        // downstream consumers must not assume normalized directions
        let mut rng = StdRng::seed_from_u64(7);
        let base = Vec3::new(0.0, 1.0, 0.0);
        let mut max_deviation = 0.0_f64;
        for _ in 0..16 {
            let jittered = random_jitter(&mut rng, &base);
            max_deviation = max_deviation.max((jittered.length() - 1.0).abs());
        }
        assert!(max_deviation > 0.01);
    }
}
