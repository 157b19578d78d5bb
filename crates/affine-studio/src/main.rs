//! Headless driver for the transform tutorials.
//!
//! Builds both scenes with their default slider values, composes the
//! matrices a browser frame would upload and logs the clip-space "F".
//! Set `AFFINE_STUDIO_CANVAS=800x600` to change the canvas.

mod config;
mod geometry;
mod scene;
mod viewport;

use anyhow::{Context, Result};

use affine_math::logging::{init_logging, LoggingConfig};
use affine_math::{Mat3Uniform, Mat4Uniform};

use crate::config::StudioConfig;
use crate::geometry::{f_3d, F_2D};
use crate::scene::{Axis, Scene2d, Scene3d};

const BANNER: [&str; 3] = [
    "  ┌──────────────────────────────────────┐",
    "  │   AFFINE STUDIO  ·  pixel -> clip    │",
    "  └──────────────────────────────────────┘",
];

fn main() -> Result<()> {
    println!();
    for line in BANNER {
        println!("{line}");
    }
    println!();

    let config = StudioConfig::new()
        .depth(400.0)
        .logging(LoggingConfig::default().with_default_level(log::LevelFilter::Info))
        .with_env()
        .context("reading studio configuration")?;
    init_logging(config.logging.clone());

    log::info!(
        "canvas {}x{}, depth {}",
        config.canvas.width,
        config.canvas.height,
        config.depth
    );

    run_2d(&config).context("2D scene")?;
    run_3d(&config).context("3D scene")?;
    Ok(())
}

fn run_2d(config: &StudioConfig) -> Result<()> {
    let mut scene = Scene2d::default();
    scene.set_angle_slider(30.0);

    let matrix = scene.matrix(config.canvas)?;
    let uniform = Mat3Uniform::from(matrix);
    log::info!("mat3 {:?}", matrix.as_array());
    log::debug!("mat3 uniform: {} bytes", uniform.as_bytes().len());

    for (i, [x, y]) in scene.project(config.canvas, &F_2D)?.into_iter().enumerate() {
        log::debug!("2d v{i:02}: ({x:+.4}, {y:+.4})");
    }
    Ok(())
}

fn run_3d(config: &StudioConfig) -> Result<()> {
    let mut scene = Scene3d::default();

    // Sweep the Y slider the way a user dragging it would.
    for degrees in [0.0, 90.0, 180.0, 270.0] {
        scene.set_rotation_degrees(Axis::Y, degrees);
        let m = scene.matrix(config.canvas, config.depth)?;
        log::debug!("y = {degrees:>5}°: {:?}", m.as_array());
    }
    scene.set_rotation_degrees(Axis::Y, 25.0);

    let matrix = scene.matrix(config.canvas, config.depth)?;
    let uniform = Mat4Uniform::from(matrix);
    log::info!("mat4 {:?}", matrix.as_array());
    log::debug!("mat4 uniform: {} bytes", uniform.as_bytes().len());

    for (i, [x, y, z, w]) in scene
        .project(config.canvas, config.depth, &f_3d())?
        .into_iter()
        .enumerate()
    {
        log::debug!("3d v{i:02}: ({x:+.4}, {y:+.4}, {z:+.4}, {w:+.4})");
    }
    Ok(())
}
