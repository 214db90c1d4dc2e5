use std::sync::Arc;

pub mod axis_aligned_box;
pub mod cli;
pub mod color;
pub mod hitable;
pub mod logger;
pub mod material;
pub mod math;
pub mod plane;
pub mod rect;
pub mod rotate;
pub mod scene;
pub mod sphere;

use failure::Error;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::axis_aligned_box::AxisAlignedBox;
use crate::cli::{Args, SceneKind};
use crate::color::Color;
use crate::material::{DiffuseLight, Lambertian, Material, Metal};
use crate::math::point3::Point3;
use crate::math::vec3::Vec3;
use crate::plane::Plane;
use crate::rect::{AxisAlignedRect, RectAxis};
use crate::rotate::RotateY;
use crate::scene::Scene;
use crate::sphere::Sphere;

pub fn run(args: &Args) -> Result<(), Error> {
    let scene = match args.scene {
        SceneKind::Room => room_scene(args.width, args.height, args.samples_per_pixel),
        SceneKind::Spheres => sphere_scene(args.width, args.height, args.samples_per_pixel),
        SceneKind::Box => box_scene(args.width, args.height, args.samples_per_pixel),
    };

    if let Some(iterations) = args.bench {
        scene.run_bench(iterations);
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let buffer = scene.render(&mut rng);
    buffer.save(&args.output)?;
    info!("wrote {}", args.output);

    Ok(())
}

fn solid(red: f64, green: f64, blue: f64) -> Arc<dyn Material + Send + Sync> {
    Arc::new(Lambertian::new(Color::new(red, green, blue)))
}

/// Walled room lit by a rectangle set into the ceiling: white floor, back
/// wall and ceiling, green and red side walls.
pub fn room_scene(width: u32, height: u32, samples_per_pixel: u32) -> Scene {
    let solid_red = solid(0.65, 0.05, 0.05);
    let solid_green = solid(0.12, 0.45, 0.15);
    let solid_white = solid(0.73, 0.73, 0.73);
    let light = Arc::new(DiffuseLight::new(Color::new(5.0, 5.0, 5.0)));

    let mut scene = Scene::new(width, height, samples_per_pixel);
    scene.add_object(Arc::new(Plane::new(
        Point3::new(0.0, -3.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        solid_white.clone(),
    )));
    // light panel faces down into the room
    scene.add_object(Arc::new(AxisAlignedRect::new(
        -2.0,
        2.0,
        -5.0,
        -1.0,
        9.99,
        RectAxis::Y,
        -1.0,
        light,
    )));
    scene.add_object(Arc::new(AxisAlignedRect::new(
        -3.0,
        10.0,
        -10.0,
        10.0,
        -7.0,
        RectAxis::X,
        1.0,
        solid_green,
    )));
    scene.add_object(Arc::new(AxisAlignedRect::new(
        -3.0,
        10.0,
        -10.0,
        10.0,
        7.0,
        RectAxis::X,
        -1.0,
        solid_red,
    )));
    scene.add_object(Arc::new(AxisAlignedRect::new(
        -10.0,
        10.0,
        -10.0,
        10.0,
        -10.0,
        RectAxis::Z,
        1.0,
        solid_white.clone(),
    )));
    scene.add_object(Arc::new(Plane::new(
        Point3::new(0.0, 10.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        solid_white,
    )));

    scene
}

/// The room plus four spheres, one of them a mirror.
pub fn sphere_scene(width: u32, height: u32, samples_per_pixel: u32) -> Scene {
    let mut scene = room_scene(width, height, samples_per_pixel);

    scene.add_object(Arc::new(Sphere::new(
        Point3::new(0.0, 5.0, -8.0),
        1.0,
        solid(0.1, 0.1, 0.1),
    )));
    scene.add_object(Arc::new(Sphere::new(
        Point3::new(7.0, 0.0, -5.0),
        2.0,
        solid(0.01, 0.49, 0.66),
    )));
    scene.add_object(Arc::new(Sphere::new(
        Point3::new(-6.0, 0.0, -1.0),
        2.0,
        solid(0.01, 0.01, 0.95),
    )));
    scene.add_object(Arc::new(Sphere::new(
        Point3::new(-3.0, 0.0, -5.0),
        3.0,
        Arc::new(Metal::new(Color::new(0.95, 0.95, 0.95))),
    )));

    scene
}

/// The room plus a rotated box standing on the floor and a sphere beside it.
pub fn box_scene(width: u32, height: u32, samples_per_pixel: u32) -> Scene {
    let mut scene = room_scene(width, height, samples_per_pixel);

    scene.add_object(Arc::new(RotateY::new(
        Arc::new(AxisAlignedBox::new(
            Point3::new(1.5, -1.0, -4.0),
            2.0,
            4.0,
            2.0,
            solid(0.73, 0.73, 0.73),
        )),
        35.0,
    )));
    scene.add_object(Arc::new(Sphere::new(
        Point3::new(-4.0, -1.0, -2.0),
        2.0,
        solid(0.01, 0.49, 0.66),
    )));

    scene
}
