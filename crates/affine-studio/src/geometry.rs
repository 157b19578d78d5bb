//! The "F" test shape: a left column plus two rungs, 18 vertices of
//! `TRIANGLES`, laid out in pixels from the top-left corner.

pub const F_VERTEX_COUNT: usize = 18;

pub const F_2D: [[f32; 2]; F_VERTEX_COUNT] = [
    // left column
    [0.0, 0.0],
    [30.0, 0.0],
    [0.0, 150.0],
    [0.0, 150.0],
    [30.0, 0.0],
    [30.0, 150.0],
    // top rung
    [30.0, 0.0],
    [100.0, 0.0],
    [30.0, 30.0],
    [30.0, 30.0],
    [100.0, 0.0],
    [100.0, 30.0],
    // middle rung
    [30.0, 60.0],
    [67.0, 60.0],
    [30.0, 90.0],
    [30.0, 90.0],
    [67.0, 60.0],
    [67.0, 90.0],
];

/// `F_2D` lifted onto the `z = 0` plane.
pub fn f_3d() -> [[f32; 3]; F_VERTEX_COUNT] {
    F_2D.map(|[x, y]| [x, y, 0.0])
}

/// Pixel-space center of the shape's bounding box.
pub const F_CENTER: [f32; 2] = [50.0, 75.0];
