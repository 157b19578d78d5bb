//! GPU uniform layouts.
//!
//! The row-major arrays are uploaded without transposition: a GL/WGSL
//! column-major reader sees each consecutive triple (or quad) as one column.
//! For `mat3x3<f32>` in a uniform buffer every column is padded to 16 bytes,
//! so `Mat3` needs an explicit padded copy; `Mat4` is already aligned.

use bytemuck::{Pod, Zeroable};

use crate::{Mat3, Mat4};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3Uniform {
    pub cols: [[f32; 4]; 3],
}

impl From<Mat3> for Mat3Uniform {
    fn from(m: Mat3) -> Self {
        let m = m.m;
        Self {
            cols: [
                [m[0], m[1], m[2], 0.0],
                [m[3], m[4], m[5], 0.0],
                [m[6], m[7], m[8], 0.0],
            ],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4Uniform {
    pub cols: [[f32; 4]; 4],
}

impl From<Mat4> for Mat4Uniform {
    fn from(m: Mat4) -> Self {
        let m = m.m;
        Self {
            cols: core::array::from_fn(|c| {
                let base = c * 4;
                [m[base], m[base + 1], m[base + 2], m[base + 3]]
            }),
        }
    }
}

impl Mat3Uniform {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Mat4Uniform {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
