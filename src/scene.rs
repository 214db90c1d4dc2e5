use std::f64::consts::PI;
use std::sync::Arc;
use std::time::Instant;

use image::{Rgba, RgbaImage};
use indicatif::ProgressBar;
use log::info;
use rand::RngCore;

use crate::color::Color;
use crate::hitable::{HitRecord, Hitable};
use crate::material::Material;
use crate::math::*;

/// Lower parametric bound for every intersection test while rendering.
pub const MIN_DISTANCE: f64 = 0.0001;
/// Upper bound on bounces per primary ray.
pub const MAX_DEPTH: i32 = 5;

/// A fixed pinhole camera plus the objects it looks at. Mutated only while
/// objects are registered; rendering reads it.
pub struct Scene {
    width: u32,
    height: u32,
    objects: Vec<Arc<dyn Hitable + Send + Sync>>,
    camera_position: Point3,
    aspect_ratio: f64,
    fov_adjustment: f64,
    samples_per_pixel: u32,
}

impl Scene {
    pub fn new(width: u32, height: u32, samples_per_pixel: u32) -> Scene {
        Scene {
            width,
            height,
            objects: vec![],
            camera_position: Point3::new(0.0, 1.0, 10.0),
            aspect_ratio: width as f64 / height as f64,
            fov_adjustment: PI / 4.0,
            samples_per_pixel,
        }
    }

    pub fn add_object(&mut self, object: Arc<dyn Hitable + Send + Sync>) {
        self.objects.push(object);
    }

    /// Pinhole mapping from a pixel to its camera ray. Every sample of a
    /// pixel traces this same ray; variation only enters at scattering, so
    /// sample count buys smoother lighting rather than anti-aliasing.
    pub fn primary_ray(&self, x: f64, y: f64) -> Ray {
        let sensor_x = (((x + 0.5) / self.width as f64) * 2.0 - 1.0)
            * self.aspect_ratio
            * self.fov_adjustment;
        let sensor_y = 1.0 - ((y + 0.5) / self.height as f64) * 2.0 * self.fov_adjustment;

        Ray::new(
            self.camera_position,
            Vec3::normalized(sensor_x, sensor_y, -1.0),
        )
    }

    /// Linear scan over every object. Each test receives the record's
    /// current distance as its upper bound, so the record only ever moves
    /// nearer and no other best-hit bookkeeping exists.
    pub fn hit(&self, ray: &Ray, min_distance: f64, rec: &mut HitRecord) -> bool {
        let mut matched = false;
        for object in &self.objects {
            if object.hit(ray, min_distance, rec.distance, rec) {
                matched = true;
            }
        }
        matched
    }

    /// Recursive radiance estimate for one ray. Misses and exhausted depth
    /// are black; a scattering material contributes
    /// `attenuation * recurse + emitted`. A material that declines ends the
    /// path with whatever it wrote into the attenuation slot, which is how
    /// a light ends a path with its own color.
    pub fn color_of(&self, ray: &Ray, min_distance: f64, depth: i32, rng: &mut dyn RngCore) -> Color {
        if depth <= 0 {
            return Color::black();
        }

        let mut rec = HitRecord::new();
        if !self.hit(ray, min_distance, &mut rec) {
            return Color::black();
        }

        let material = match rec.material.clone() {
            Some(material) => material,
            None => return Color::black(),
        };

        let mut color = Color::black();
        let mut next_ray = Ray::new_zero_ray();
        if material.scatter(ray, &rec, rng, &mut color, &mut next_ray) {
            let next_color = self.color_of(&next_ray, min_distance, depth - 1, rng);
            color.times(next_color);
            color.add(material.emitted());
        }

        color
    }

    /// Average the samples, apply square-root gamma, clamp and quantize.
    fn set_color(&self, buffer: &mut RgbaImage, x: u32, y: u32, samples: &[Color]) {
        let mut red = 0.0;
        let mut green = 0.0;
        let mut blue = 0.0;
        for sample in samples {
            red += sample.red;
            green += sample.green;
            blue += sample.blue;
        }
        let count = samples.len() as f64;

        let quantize = |channel: f64| ((channel / count).sqrt().min(1.0).max(0.0) * 255.0) as u8;
        buffer.put_pixel(
            x,
            y,
            Rgba([quantize(red), quantize(green), quantize(blue), 255]),
        );
    }

    /// Trace the whole frame into a fresh RGBA buffer. The caller owns the
    /// random source, so a fixed seed reproduces the frame exactly.
    pub fn render(&self, rng: &mut dyn RngCore) -> RgbaImage {
        let mut buffer = RgbaImage::new(self.width, self.height);
        let mut samples = vec![Color::black(); self.samples_per_pixel as usize];

        let start = Instant::now();
        let progress = ProgressBar::new(u64::from(self.width));
        for x in 0..self.width {
            for y in 0..self.height {
                for sample in 0..self.samples_per_pixel as usize {
                    let ray = self.primary_ray(f64::from(x), f64::from(y));
                    samples[sample] = self.color_of(&ray, MIN_DISTANCE, MAX_DEPTH, rng);
                }
                self.set_color(&mut buffer, x, y, &samples);
            }
            progress.inc(1);
        }
        progress.finish();
        info!(
            "rendered {}x{} at {} samples per pixel in {:.2?}",
            self.width,
            self.height,
            self.samples_per_pixel,
            start.elapsed()
        );

        buffer
    }

    /// Repeated full-frame intersection scans against one reused record
    /// with fixed bounds, timing the hit path in isolation.
    pub fn run_bench(&self, iterations: u32) {
        let start = Instant::now();
        let mut rec = HitRecord::new();
        rec.distance = 999_999.0;
        let mut matched: u64 = 0;

        for _ in 0..iterations {
            for x in 0..self.width {
                for y in 0..self.height {
                    let ray = self.primary_ray(f64::from(x), f64::from(y));
                    for object in &self.objects {
                        if object.hit(&ray, 0.0, 99_999_999.0, &mut rec) {
                            matched += 1;
                        }
                    }
                }
            }
        }

        info!(
            "bench: {} iterations, {} intersections in {:.2?}",
            iterations,
            matched,
            start.elapsed()
        );
    }
}
