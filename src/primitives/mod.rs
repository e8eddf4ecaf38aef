//! Procedural mesh generators.
//!
//! - `shapes` contains closed and flat solids (sphere, circle, cylinder, cone, square, cube)
//! - `tiles` contains tiled grids, including the height-displaced strip
//!
//! Segment counts must be at least 1. They are not clamped: a zero count
//! yields NaN positions or dangling indices, which [`Mesh::validate`] reports.
//!
//! [`Mesh::validate`]: crate::data_structures::mesh::Mesh::validate

pub mod shapes;
pub mod tiles;

pub use shapes::{circle, cone, cube, cylinder, sphere, square};
pub use tiles::{square_strip, square_strip_displaced, square_triangles};

fn check_segments(shape: &str, segments: &[u32]) {
    if segments.contains(&0) {
        log::warn!(
            "{}: segment counts must be at least 1, got {:?}; the mesh will be degenerate",
            shape,
            segments
        );
    }
}
