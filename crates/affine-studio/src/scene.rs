//! Slider-driven transform state for the two tutorial scenes.
//!
//! Each scene owns plain parameters (what the sliders write) and composes a
//! fresh matrix per frame.

use anyhow::{ensure, Result};

use affine_math::angle::deg_to_rad;
use affine_math::{Mat3, Mat4};

use crate::geometry::F_CENTER;
use crate::viewport::Viewport;

// ── 2D ────────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scene2d {
    pub translation: [f32; 2],
    /// Radians.
    pub rotation: f32,
    pub scale: [f32; 2],
}

impl Default for Scene2d {
    fn default() -> Self {
        Self {
            translation: [100.0, 150.0],
            rotation: 0.0,
            scale: [1.0, 1.0],
        }
    }
}

impl Scene2d {
    /// Reads the angle slider (0..=360 degrees). The slider runs clockwise, so
    /// the stored rotation is `360 - value`.
    pub fn set_angle_slider(&mut self, degrees: f32) {
        self.rotation = deg_to_rad(360.0 - degrees);
    }

    /// `projection · translation · rotation · scale · move_origin`, where
    /// `move_origin` centers the shape on its pivot before rotating.
    pub fn matrix(&self, canvas: Viewport) -> Result<Mat3> {
        ensure!(canvas.is_valid(), "invalid canvas {canvas:?}");

        let [cx, cy] = F_CENTER;
        let mut m = Mat3::projection(canvas.width, canvas.height);
        m = Mat3::multiply(m, Mat3::translation(self.translation[0], self.translation[1]));
        m = Mat3::multiply(m, Mat3::rotation(self.rotation));
        m = Mat3::multiply(m, Mat3::scaling(self.scale[0], self.scale[1]));
        m = Mat3::multiply(m, Mat3::translation(-cx, -cy));
        log::trace!("scene2d matrix: {:?}", m.as_array());
        Ok(m)
    }

    /// Maps every vertex to clip space as the vertex shader would.
    pub fn project(&self, canvas: Viewport, vertices: &[[f32; 2]]) -> Result<Vec<[f32; 2]>> {
        let m = self.matrix(canvas)?;
        Ok(vertices
            .iter()
            .map(|&[x, y]| {
                let (cx, cy) = m.transform_point(x, y);
                [cx, cy]
            })
            .collect())
    }
}

// ── 3D ────────────────────────────────────────────────────────────────────

/// Rotation slider axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scene3d {
    pub translation: [f32; 3],
    /// Per-axis radians, applied X then Y then Z.
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for Scene3d {
    fn default() -> Self {
        Self {
            translation: [45.0, 150.0, 0.0],
            rotation: [deg_to_rad(40.0), deg_to_rad(25.0), deg_to_rad(325.0)],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

impl Scene3d {
    pub fn set_rotation_degrees(&mut self, axis: Axis, degrees: f32) {
        self.rotation[axis.index()] = deg_to_rad(degrees);
    }

    pub fn matrix(&self, canvas: Viewport, depth: f32) -> Result<Mat4> {
        ensure!(canvas.is_valid(), "invalid canvas {canvas:?}");
        ensure!(depth > 0.0 && depth.is_finite(), "invalid depth {depth}");

        let [tx, ty, tz] = self.translation;
        let [rx, ry, rz] = self.rotation;
        let [sx, sy, sz] = self.scale;
        let m = Mat4::projection(canvas.width, canvas.height, depth)
            .translate(tx, ty, tz)
            .x_rotate(rx)
            .y_rotate(ry)
            .z_rotate(rz)
            .scale(sx, sy, sz);
        log::trace!("scene3d matrix: {:?}", m.as_array());
        Ok(m)
    }

    /// Clip-space `(x, y, z, w)` per vertex.
    pub fn project(
        &self,
        canvas: Viewport,
        depth: f32,
        vertices: &[[f32; 3]],
    ) -> Result<Vec<[f32; 4]>> {
        let m = self.matrix(canvas, depth)?;
        Ok(vertices
            .iter()
            .map(|&[x, y, z]| {
                let (cx, cy, cz, cw) = m.transform_point(x, y, z);
                [cx, cy, cz, cw]
            })
            .collect())
    }
}
