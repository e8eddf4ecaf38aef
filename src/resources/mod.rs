/**
 * This module contains everything that touches data outside the crate:
 * height-field images and GPU buffers.
 */
pub mod height_field;
pub mod mesh;

pub use height_field::{HeightField, load_height_field, sample};
pub use mesh::{GpuMesh, upload};
