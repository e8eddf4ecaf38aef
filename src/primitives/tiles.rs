//! Tiled XZ grids: plain triangles, serpentine strips and height-displaced strips.
//!
//! All three share the same vertex order: rows along Z (`v`), columns along X
//! (`h`), row-major, centered at the origin. Vertices face `+Y`.

use super::check_segments;
use crate::{
    data_structures::{
        mesh::{Mesh, MeshBuilder, Topology},
        vertex::MeshVertex,
    },
    resources::height_field::{HeightField, sample},
};

const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Grid of `h_tiles` by `v_tiles` cells rendered as a triangle list.
pub fn square_triangles(h_tiles: u32, v_tiles: u32, tile_length: f32) -> Mesh {
    check_segments("square_triangles", &[h_tiles, v_tiles]);
    let stride = h_tiles + 1;
    let mut builder = MeshBuilder::with_capacity(
        Topology::TriangleList,
        ((v_tiles + 1) * stride) as usize,
        (6 * h_tiles * v_tiles) as usize,
    );
    for_each_grid_point(h_tiles, v_tiles, tile_length, |h, v, position, tex_coords| {
        builder.push_vertex(MeshVertex::new(position, UP, tex_coords));
        if h < h_tiles && v < v_tiles {
            push_grid_cell(&mut builder, h + stride * v, stride);
        }
    });
    builder.build()
}

/// Grid of `h_tiles` by `v_tiles` cells as one continuous zig-zag strip.
///
/// Each row contributes `h_tiles + 1` index pairs linking it to the next row.
/// Odd rows walk the columns backwards so consecutive rows join up without a
/// jump. Index count is `2 * (h_tiles + 1) * v_tiles`.
pub fn square_strip(h_tiles: u32, v_tiles: u32, tile_length: f32) -> Mesh {
    strip(h_tiles, v_tiles, tile_length, |_, _| 0.0)
}

/// [`square_strip`] with each vertex lifted by the height field.
///
/// The height is sampled at the vertex's texture coordinate and scaled by
/// `magnitude`.
pub fn square_strip_displaced<F: HeightField + ?Sized>(
    h_tiles: u32,
    v_tiles: u32,
    tile_length: f32,
    field: &F,
    magnitude: f32,
) -> Mesh {
    strip(h_tiles, v_tiles, tile_length, |u, v| {
        sample(field, magnitude, u, v)
    })
}

/// Two triangles for the cell whose first corner is `index`.
pub(crate) fn push_grid_cell(builder: &mut MeshBuilder, index: u32, stride: u32) {
    builder.push_triangle(index, index + stride, index + 1);
    builder.push_triangle(index + stride + 1, index + 1, index + stride);
}

fn strip(
    h_tiles: u32,
    v_tiles: u32,
    tile_length: f32,
    height: impl Fn(f32, f32) -> f32,
) -> Mesh {
    check_segments("square_strip", &[h_tiles, v_tiles]);
    let stride = h_tiles + 1;
    let mut builder = MeshBuilder::with_capacity(
        Topology::TriangleStrip,
        ((v_tiles + 1) * stride) as usize,
        (2 * stride * v_tiles) as usize,
    );
    for_each_grid_point(h_tiles, v_tiles, tile_length, |h, v, [x, _, z], tex_coords| {
        let y = height(tex_coords[0], tex_coords[1]);
        builder.push_vertex(MeshVertex::new([x, y, z], UP, tex_coords));
        if v < v_tiles {
            let column = if v % 2 != 0 { h_tiles - h } else { h };
            builder.push_pair(column + stride * v, column + stride * (v + 1));
        }
    });
    builder.build()
}

/// Visit every grid point in row-major order with its flat position and
/// texture coordinate.
fn for_each_grid_point(
    h_tiles: u32,
    v_tiles: u32,
    tile_length: f32,
    mut visit: impl FnMut(u32, u32, [f32; 3], [f32; 2]),
) {
    let v_offset = (v_tiles as f32 * tile_length) / 2.0;
    let h_offset = (h_tiles as f32 * tile_length) / 2.0;
    for v in 0..=v_tiles {
        for h in 0..=h_tiles {
            let position = [
                h as f32 * tile_length - h_offset,
                0.0,
                v as f32 * tile_length - v_offset,
            ];
            let tex_coords = [
                h as f32 * (1.0 / h_tiles as f32),
                v as f32 * (1.0 / v_tiles as f32),
            ];
            visit(h, v, position, tex_coords);
        }
    }
}
