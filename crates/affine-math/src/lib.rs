//! Affine transform algebra.
//!
//! Fixed-size row-major matrices for 2D (`Mat3`) and 3D (`Mat4`) scenes laid out
//! in pixel space (origin top-left, +Y down) and projected to clip space.
//! Arrays are uploaded to the GPU as-is; shaders multiply them as
//! `u_matrix * position`, which means `Mat3::multiply(a, b)` applies `b` first.

pub mod angle;
pub mod error;
pub mod logging;
pub mod uniform;

mod mat3;
mod mat4;

pub use error::MatrixError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use uniform::{Mat3Uniform, Mat4Uniform};
