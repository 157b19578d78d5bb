use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use crate::error::MatrixError;

/// 3×3 row-major matrix for 2D affine transforms.
///
/// Element `(row, col)` lives at `m[row * 3 + col]`. Translation occupies the
/// last row (indices 6 and 7), so the array can be handed to
/// `uniformMatrix3fv(loc, false, ..)` without transposing.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3 {
    pub m: [f32; 9],
}

impl Mat3 {
    pub const LEN: usize = 9;

    pub const IDENTITY: Mat3 = Mat3::new([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ]);

    #[inline]
    pub const fn new(m: [f32; 9]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Composes two transforms: the result applies `b`, then `a`.
    ///
    /// In row-major terms this is the product `b · a`; each output row `i` is
    /// row `i` of `b` times the columns of `a`. Chains therefore read outermost
    /// first: `multiply(multiply(projection, translation), rotation)` rotates,
    /// translates, then projects.
    pub fn multiply(a: Mat3, b: Mat3) -> Mat3 {
        let a = &a.m;
        let b = &b.m;
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = b[row * 3] * a[col]
                    + b[row * 3 + 1] * a[3 + col]
                    + b[row * 3 + 2] * a[6 + col];
            }
        }
        Mat3::new(out)
    }

    #[inline]
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            tx, ty, 1.0,
        ])
    }

    /// Rotation by `angle` radians.
    ///
    /// Positive angles carry +X toward -Y. In the Y-down pixel space used with
    /// `projection` that reads as counter-clockwise on screen.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, -s, 0.0, //
            s, c, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::new([
            sx, 0.0, 0.0, //
            0.0, sy, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Maps pixel space (origin top-left, +Y down, `width`×`height`) to clip
    /// space (`[-1, 1]` on both axes, +Y up).
    pub fn projection(width: f32, height: f32) -> Self {
        Self::new([
            2.0 / width, 0.0, 0.0, //
            0.0, -2.0 / height, 0.0, //
            -1.0, 1.0, 1.0,
        ])
    }

    /// Builds a matrix from an untyped slice of exactly nine elements.
    pub fn from_slice(values: &[f32]) -> Result<Self, MatrixError> {
        let m: [f32; 9] = values.try_into().map_err(|_| {
            log::debug!("rejecting mat3 slice of length {}", values.len());
            MatrixError::InvalidDimension {
                expected: Self::LEN,
                actual: values.len(),
            }
        })?;
        Ok(Self::new(m))
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not below 3. A flattened index alone would let
    /// `(0, 3)` alias `(1, 0)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < 3 && col < 3, "mat3 index ({row}, {col}) out of range");
        self.m[row * 3 + col]
    }

    /// Applies the transform to the point `(x, y, 1)` the way a shader does
    /// with `u_matrix * vec3(position, 1)` on the uploaded array.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.m;
        (
            x * m[0] + y * m[3] + m[6],
            x * m[1] + y * m[4] + m[7],
        )
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 9] {
        self.m
    }

    #[inline]
    pub const fn as_array(&self) -> &[f32; 9] {
        &self.m
    }

    /// Raw bytes for a tightly packed upload (36 bytes).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 9]> for Mat3 {
    #[inline]
    fn from(m: [f32; 9]) -> Self {
        Self::new(m)
    }
}

impl From<Mat3> for [f32; 9] {
    #[inline]
    fn from(m: Mat3) -> Self {
        m.m
    }
}

impl TryFrom<&[f32]> for Mat3 {
    type Error = MatrixError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl AsRef<[f32]> for Mat3 {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        &self.m
    }
}

/// `a * b` is `Mat3::multiply(a, b)`.
impl Mul for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        Mat3::multiply(self, rhs)
    }
}
