#[rustfmt::skip]
pub const QUAD: [f32; 16] = [
    // x, y, u, v
    -1.0, -1.0, 0.0, 0.0,
    1.0, -1.0, 1.0, 0.0,
    1.0, 1.0, 1.0, 1.0,
    -1.0, 1.0, 0.0, 1.0,
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

pub mod geometry;
pub mod program;
pub mod renderer;
pub mod texture;
