use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use crate::error::MatrixError;

/// 4×4 row-major matrix for 3D affine transforms.
///
/// Element `(row, col)` lives at `m[row * 4 + col]`; translation sits in the
/// last row (indices 12..=14) and the last column stays `[0, 0, 0, 1]`.
///
/// The `translate` / `*_rotate` / `scale` helpers post-multiply an existing
/// transform, so a chain is written outermost first:
///
/// ```
/// use affine_math::Mat4;
///
/// let m = Mat4::projection(400.0, 300.0, 400.0)
///     .translate(45.0, 150.0, 0.0)
///     .x_rotate(0.5)
///     .scale(1.0, 1.0, 1.0);
/// assert_eq!(m.transform_point(0.0, 0.0, 0.0).3, 1.0);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m: [f32; 16],
}

impl Mat4 {
    pub const LEN: usize = 16;

    pub const IDENTITY: Mat4 = Mat4::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    #[inline]
    pub const fn new(m: [f32; 16]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Composes two transforms: the result applies `b`, then `a`
    /// (row-major product `b · a`).
    pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
        let a = &a.m;
        let b = &b.m;
        let mut out = [0.0; 16];
        for row in 0..4 {
            let r = &b[row * 4..row * 4 + 4];
            for col in 0..4 {
                out[row * 4 + col] =
                    r[0] * a[col] + r[1] * a[4 + col] + r[2] * a[8 + col] + r[3] * a[12 + col];
            }
        }
        Mat4::new(out)
    }

    #[inline]
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            tx, ty, tz, 1.0,
        ])
    }

    pub fn x_rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn y_rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn z_rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[inline]
    pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Orthographic projection from pixel space to clip space.
    ///
    /// X/Y follow `Mat3::projection` (origin top-left, +Y down). Z in
    /// `[0, depth]` scales by `2 / depth` with no offset. No perspective divide
    /// is involved; `w` stays 1.
    pub fn projection(width: f32, height: f32, depth: f32) -> Self {
        Self::new([
            2.0 / width, 0.0, 0.0, 0.0, //
            0.0, -2.0 / height, 0.0, 0.0, //
            0.0, 0.0, 2.0 / depth, 0.0, //
            -1.0, 1.0, 0.0, 1.0,
        ])
    }

    // ── compose-and-apply ─────────────────────────────────────────────────

    #[inline]
    pub fn translate(self, tx: f32, ty: f32, tz: f32) -> Self {
        Self::multiply(self, Self::translation(tx, ty, tz))
    }

    #[inline]
    pub fn x_rotate(self, angle: f32) -> Self {
        Self::multiply(self, Self::x_rotation(angle))
    }

    #[inline]
    pub fn y_rotate(self, angle: f32) -> Self {
        Self::multiply(self, Self::y_rotation(angle))
    }

    #[inline]
    pub fn z_rotate(self, angle: f32) -> Self {
        Self::multiply(self, Self::z_rotation(angle))
    }

    #[inline]
    pub fn scale(self, sx: f32, sy: f32, sz: f32) -> Self {
        Self::multiply(self, Self::scaling(sx, sy, sz))
    }

    // ── access ────────────────────────────────────────────────────────────

    /// Builds a matrix from an untyped slice of exactly sixteen elements.
    pub fn from_slice(values: &[f32]) -> Result<Self, MatrixError> {
        let m: [f32; 16] = values.try_into().map_err(|_| {
            log::debug!("rejecting mat4 slice of length {}", values.len());
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
    /// If `row` or `col` is not below 4.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "mat4 index ({row}, {col}) out of range");
        self.m[row * 4 + col]
    }

    /// Applies the transform to `(x, y, z, 1)` as the vertex shader does and
    /// returns the homogeneous result `(x, y, z, w)`.
    pub fn transform_point(&self, x: f32, y: f32, z: f32) -> (f32, f32, f32, f32) {
        let m = &self.m;
        let col = |c: usize| x * m[c] + y * m[4 + c] + z * m[8 + c] + m[12 + c];
        (col(0), col(1), col(2), col(3))
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 16] {
        self.m
    }

    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Raw bytes for upload (64 bytes, already 16-byte aligned per column).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(m: [f32; 16]) -> Self {
        Self::new(m)
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.m
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MatrixError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl AsRef<[f32]> for Mat4 {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        &self.m
    }
}

/// `a * b` is `Mat4::multiply(a, b)`.
impl Mul for Mat4 {
    type Output = Mat4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::multiply(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::deg_to_rad;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn assert_close(a: Mat4, b: Mat4) {
        for (i, (x, y)) in a.m.iter().zip(b.m.iter()).enumerate() {
            assert!((x - y).abs() < EPS, "index {i}: {x} vs {y}\n{a:?}\n{b:?}");
        }
    }

    fn sample() -> Mat4 {
        Mat4::new([
            0.5, -1.0, 2.0, 0.0, //
            3.0, 0.25, -0.75, 0.0, //
            -2.0, 1.5, 1.0, 0.0, //
            12.0, -8.0, 4.0, 1.0,
        ])
    }

    // ── factories ─────────────────────────────────────────────────────────

    #[test]
    fn identity_is_four_by_four() {
        assert_eq!(
            Mat4::identity().to_array(),
            [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn translation_layout() {
        let t = Mat4::translation(5.0, -3.0, 2.0);
        assert_eq!(&t.m[12..15], &[5.0, -3.0, 2.0]);
        assert_eq!(t.m[15], 1.0);
        assert_eq!(&t.m[..12], &Mat4::IDENTITY.m[..12]);
    }

    #[test]
    fn zero_rotations_are_identity() {
        assert_eq!(Mat4::x_rotation(0.0), Mat4::identity());
        assert_eq!(Mat4::y_rotation(0.0), Mat4::identity());
        assert_eq!(Mat4::z_rotation(0.0), Mat4::identity());
    }

    #[test]
    fn rotations_leave_their_axis_alone() {
        let a = 1.1;
        let (x, y, z, _) = Mat4::x_rotation(a).transform_point(3.0, 0.0, 0.0);
        assert!((x - 3.0).abs() < EPS && y.abs() < EPS && z.abs() < EPS);
        let (x, y, z, _) = Mat4::y_rotation(a).transform_point(0.0, 3.0, 0.0);
        assert!(x.abs() < EPS && (y - 3.0).abs() < EPS && z.abs() < EPS);
        let (x, y, z, _) = Mat4::z_rotation(a).transform_point(0.0, 0.0, 3.0);
        assert!(x.abs() < EPS && y.abs() < EPS && (z - 3.0).abs() < EPS);
    }

    #[test]
    fn quarter_turns_follow_right_hand_rule() {
        // Row-vector convention: y -> z about X, z -> x about Y, x -> y about Z.
        let (_, y, z, _) = Mat4::x_rotation(FRAC_PI_2).transform_point(0.0, 1.0, 0.0);
        assert!(y.abs() < EPS && (z - 1.0).abs() < EPS);
        let (x, _, z, _) = Mat4::y_rotation(FRAC_PI_2).transform_point(0.0, 0.0, 1.0);
        assert!((x - 1.0).abs() < EPS && z.abs() < EPS);
        let (x, y, _, _) = Mat4::z_rotation(FRAC_PI_2).transform_point(1.0, 0.0, 0.0);
        assert!(x.abs() < EPS && (y - 1.0).abs() < EPS);
    }

    #[test]
    fn projection_layout() {
        assert_eq!(
            Mat4::projection(800.0, 600.0, 400.0).to_array(),
            [
                2.0 / 800.0, 0.0, 0.0, 0.0, //
                0.0, -2.0 / 600.0, 0.0, 0.0, //
                0.0, 0.0, 2.0 / 400.0, 0.0, //
                -1.0, 1.0, 0.0, 1.0,
            ]
        );
    }

    #[test]
    fn projection_maps_pixel_box_to_clip_space() {
        let p = Mat4::projection(800.0, 600.0, 400.0);
        assert_eq!(p.transform_point(0.0, 0.0, 0.0), (-1.0, 1.0, 0.0, 1.0));
        let (x, y, z, w) = p.transform_point(800.0, 600.0, 400.0);
        assert!((x - 1.0).abs() < EPS && (y + 1.0).abs() < EPS && (z - 2.0).abs() < EPS);
        assert_eq!(w, 1.0);
    }

    // ── multiply ──────────────────────────────────────────────────────────

    #[test]
    fn identity_is_two_sided_unit() {
        let m = sample();
        assert_eq!(Mat4::multiply(Mat4::identity(), m), m);
        assert_eq!(Mat4::multiply(m, Mat4::identity()), m);
    }

    #[test]
    fn multiply_is_b_times_a_row_major() {
        let a = Mat4::new(core::array::from_fn(|i| i as f32));
        let b = Mat4::translation(1.0, 2.0, 3.0);
        // Last row of b is [1, 2, 3, 1]; times column 0 of a [0, 4, 8, 12].
        let r = Mat4::multiply(a, b);
        assert_eq!(r.at(3, 0), 4.0 * 2.0 + 8.0 * 3.0 + 12.0 + 0.0);
        assert_eq!(&r.m[..12], &a.m[..12]);
    }

    #[test]
    fn mul_operator_matches_multiply() {
        let a = Mat4::y_rotation(0.4);
        let b = Mat4::scaling(2.0, 3.0, 4.0);
        assert_eq!(a * b, Mat4::multiply(a, b));
    }

    #[test]
    fn rotations_cancel_their_inverse() {
        for angle in [0.2_f32, -1.3, PI, 7.0] {
            assert_close(Mat4::x_rotation(angle) * Mat4::x_rotation(-angle), Mat4::IDENTITY);
            assert_close(Mat4::y_rotation(angle) * Mat4::y_rotation(-angle), Mat4::IDENTITY);
            assert_close(Mat4::z_rotation(angle) * Mat4::z_rotation(-angle), Mat4::IDENTITY);
        }
    }

    #[test]
    fn translation_and_scaling_cancel() {
        let t = Mat4::translation(9.0, -4.5, 2.0) * Mat4::translation(-9.0, 4.5, -2.0);
        assert_eq!(t, Mat4::IDENTITY);
        let s = Mat4::scaling(4.0, -0.5, 3.0) * Mat4::scaling(0.25, -2.0, 1.0 / 3.0);
        assert_close(s, Mat4::IDENTITY);
    }

    #[test]
    fn multiply_is_associative() {
        let a = Mat4::projection(640.0, 480.0, 400.0);
        let b = Mat4::z_rotation(0.9) * Mat4::x_rotation(-0.2);
        let c = sample();
        assert_close(a * (b * c), (a * b) * c);
    }

    // ── compose-and-apply ─────────────────────────────────────────────────

    #[test]
    fn translate_on_identity_is_translation() {
        assert_eq!(
            Mat4::identity().translate(5.0, -3.0, 2.0),
            Mat4::translation(5.0, -3.0, 2.0)
        );
    }

    #[test]
    fn helpers_delegate_to_multiply() {
        let m = sample();
        assert_eq!(m.translate(1.0, 2.0, 3.0), m * Mat4::translation(1.0, 2.0, 3.0));
        assert_eq!(m.x_rotate(0.3), m * Mat4::x_rotation(0.3));
        assert_eq!(m.y_rotate(0.3), m * Mat4::y_rotation(0.3));
        assert_eq!(m.z_rotate(0.3), m * Mat4::z_rotation(0.3));
        assert_eq!(m.scale(2.0, 3.0, 4.0), m * Mat4::scaling(2.0, 3.0, 4.0));
    }

    #[test]
    fn chain_applies_innermost_first() {
        // Scale by 2, then translate by (45, 150, 0), then project.
        let m = Mat4::projection(400.0, 300.0, 400.0)
            .translate(45.0, 150.0, 0.0)
            .scale(2.0, 2.0, 2.0);
        let (x, y, z, w) = m.transform_point(10.0, 15.0, 0.0);
        // Pixel (65, 180) in a 400x300 canvas.
        assert!((x - (65.0 / 200.0 - 1.0)).abs() < EPS, "{x}");
        assert!((y - (1.0 - 180.0 / 150.0)).abs() < EPS, "{y}");
        assert_eq!(z, 0.0);
        assert_eq!(w, 1.0);
    }

    #[test]
    fn orthographic_chain_keeps_last_column_affine() {
        let m = Mat4::projection(400.0, 300.0, 400.0)
            .translate(45.0, 150.0, 0.0)
            .x_rotate(deg_to_rad(40.0))
            .y_rotate(deg_to_rad(25.0))
            .z_rotate(deg_to_rad(325.0))
            .scale(1.0, 1.0, 1.0);
        assert_eq!([m.m[3], m.m[7], m.m[11], m.m[15]], [0.0, 0.0, 0.0, 1.0]);
    }

    // ── element access ────────────────────────────────────────────────────

    #[test]
    fn at_reads_translation_row() {
        let m = Mat4::translation(5.0, -3.0, 2.0);
        let row = [m.at(3, 0), m.at(3, 1), m.at(3, 2), m.at(3, 3)];
        assert_eq!(row, [5.0, -3.0, 2.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn at_rejects_column_past_row_end() {
        // (0, 4) would otherwise read (1, 0).
        Mat4::identity().at(0, 4);
    }

    // ── slices & bytes ────────────────────────────────────────────────────

    #[test]
    fn from_slice_checks_length() {
        let v: Vec<f32> = Mat4::translation(1.0, 2.0, 3.0).m.to_vec();
        assert_eq!(Mat4::from_slice(&v), Ok(Mat4::translation(1.0, 2.0, 3.0)));
        assert_eq!(
            Mat4::try_from(&v[..9]),
            Err(MatrixError::InvalidDimension { expected: 16, actual: 9 })
        );
    }

    #[test]
    fn bytes_are_row_major() {
        let m = Mat4::translation(7.0, 0.0, 0.0);
        let bytes = m.as_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[48..52], &7.0_f32.to_ne_bytes());
    }
}
