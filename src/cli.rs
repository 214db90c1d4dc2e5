use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Which built-in scene the binary renders.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneKind {
    /// Walled room with a ceiling light
    Room,
    /// The room plus the four-sphere arrangement
    Spheres,
    /// The room plus a rotated box and a sphere
    Box,
}

#[derive(Parser)]
#[command(name = "ray_tracer")]
#[command(about = "A small offline Monte Carlo ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "500")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "500")]
    pub height: u32,

    /// Number of radiance samples per pixel
    #[arg(short, long, default_value = "50")]
    pub samples_per_pixel: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "image.png")]
    pub output: String,

    /// Scene to render
    #[arg(long, value_enum, default_value = "room")]
    pub scene: SceneKind,

    /// Seed for the scatter random source; a fixed seed reproduces a frame
    #[arg(long, default_value = "1")]
    pub seed: u64,

    /// Run N intersection-scan benchmark iterations instead of rendering
    #[arg(long)]
    pub bench: Option<u32>,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}
