//! Parametric solids: sphere, circle, cylinder, cone, square and cube.
//!
//! Every generator is a pure function of its arguments. Triangles are wound
//! counter-clockwise when seen from outside the surface.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Vector3};

use super::{check_segments, tiles::push_grid_cell};
use crate::data_structures::{
    mesh::{Mesh, MeshBuilder, Topology, Winding},
    vertex::MeshVertex,
};

const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Unit sphere centered at the origin.
///
/// Produces `(y_segments + 1) * (x_segments + 1)` vertices on a latitude /
/// longitude grid; the seam column and both pole rows are duplicated so that
/// texture coordinates stay continuous.
pub fn sphere(y_segments: u32, x_segments: u32) -> Mesh {
    check_segments("sphere", &[y_segments, x_segments]);
    let stride = x_segments + 1;
    let mut builder = MeshBuilder::with_capacity(
        Topology::TriangleList,
        ((y_segments + 1) * stride) as usize,
        (6 * x_segments * y_segments) as usize,
    );

    for y in 0..=y_segments {
        for x in 0..=x_segments {
            let x_segment = x as f32 / x_segments as f32;
            let y_segment = y as f32 / y_segments as f32;
            let theta = x_segment * PI * 2.0;
            let phi = y_segment * PI;

            let position = Vector3::new(theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
            builder.push_vertex(MeshVertex::new(
                position,
                position.normalize(),
                [x_segment, y_segment],
            ));
        }
    }

    // Rows run from the north pole downwards.
    for i in 0..y_segments {
        for j in 0..x_segments {
            let top_left = i * stride + j;
            let bottom_left = (i + 1) * stride + j;
            builder.push_triangle(top_left, bottom_left + 1, bottom_left);
            builder.push_triangle(top_left, top_left + 1, bottom_left + 1);
        }
    }
    builder.build()
}

/// Flat unit disc in the XZ plane facing `+Y`.
///
/// One center vertex followed by `z_segments` rings of `x_segments + 1`
/// vertices each. The first ring is joined to the center by a triangle fan,
/// the others by quad strips. Index count is `3 * x * (2 * z - 1)`.
pub fn circle(x_segments: u32, z_segments: u32) -> Mesh {
    check_segments("circle", &[x_segments, z_segments]);
    let stride = x_segments + 1;
    let mut builder = MeshBuilder::with_capacity(
        Topology::TriangleList,
        (1 + z_segments * stride) as usize,
        (3 * x_segments * (2 * z_segments).saturating_sub(1)) as usize,
    );

    builder.push_vertex(MeshVertex::new([0.0, 0.0, 0.0], UP, [0.0, 0.0]));
    for x in 1..=x_segments {
        builder.push_triangle(0, x + 1, x);
    }

    for z in 1..=z_segments {
        for x in 0..=x_segments {
            let x_segment = x as f32 / x_segments as f32;
            let z_segment = z as f32 / z_segments as f32;
            let theta = x_segment * PI * 2.0;

            builder.push_vertex(MeshVertex::new(
                [theta.cos() * z_segment, 0.0, theta.sin() * z_segment],
                UP,
                [x_segment, z_segment],
            ));

            if x < x_segments && z < z_segments {
                let inner = x + 1 + (z - 1) * stride;
                let outer = x + 1 + z * stride;
                builder.push_triangle(inner, inner + 1, outer);
                builder.push_triangle(outer + 1, outer, inner + 1);
            }
        }
    }
    builder.build()
}

/// Closed unit cylinder standing on the XZ plane, from `y = 0` to `y = 1`.
///
/// Layout: bottom cap, side wall, top cap. The top cap reuses the bottom
/// cap's vertices lifted to `y = 1` and walks its index list in reverse.
/// Texture space is split into three V bands: top cap `[0, k]`, wall
/// `[k, 1 - k]`, bottom cap `[1 - k, 1]` with `k = z / (y + 2z)`.
pub fn cylinder(y_segments: u32, x_segments: u32, z_segments: u32) -> Mesh {
    check_segments("cylinder", &[y_segments, x_segments, z_segments]);
    let v_span = (y_segments + 2 * z_segments) as f32;
    let band = z_segments as f32 / v_span;

    let bottom = bottom_cap(x_segments, z_segments, band);
    let wall = side_wall(y_segments, x_segments, |x_segment, y| {
        let theta = x_segment * PI * 2.0;
        let y_segment = y as f32 / y_segments as f32;
        let position = Vector3::new(theta.cos(), y_segment, theta.sin());
        let normal = Vector3::new(position.x, 0.0, position.z).normalize();
        let v = (y as f32 + z_segments as f32) / v_span;
        MeshVertex::new(position, normal, [x_segment, 1.0 - v])
    });
    let top = top_cap(&bottom);

    let mut builder = MeshBuilder::with_capacity(
        Topology::TriangleList,
        bottom.vertex_count() * 2 + wall.vertex_count(),
        bottom.index_count() * 2 + wall.index_count(),
    );
    builder.append(&bottom, Winding::Keep);
    builder.append(&wall, Winding::Keep);
    builder.append(&top, Winding::Reverse);
    builder.build()
}

/// Unit cone with its base on the XZ plane and its apex at `(0, 1, 0)`.
///
/// Side normals are `(x, 1, z)` of the wall position and are left
/// unnormalized. V bands: wall `[0, 1 - k]`, base `[1 - k, 1]` with
/// `k = z / (y + z)`.
pub fn cone(y_segments: u32, x_segments: u32, z_segments: u32) -> Mesh {
    check_segments("cone", &[y_segments, x_segments, z_segments]);
    let v_span = (y_segments + z_segments) as f32;
    let band = z_segments as f32 / v_span;

    let bottom = bottom_cap(x_segments, z_segments, band);
    let wall = side_wall(y_segments, x_segments, |x_segment, y| {
        let theta = x_segment * PI * 2.0;
        let y_segment = y as f32 / y_segments as f32;
        let radius = 1.0 - y_segment;
        let position = Vector3::new(theta.cos() * radius, y_segment, theta.sin() * radius);
        let normal = Vector3::new(position.x, 1.0, position.z);
        let v = (y as f32 + z_segments as f32) / v_span;
        MeshVertex::new(position, normal, [x_segment, 1.0 - v])
    });

    let mut builder = MeshBuilder::with_capacity(
        Topology::TriangleList,
        bottom.vertex_count() + wall.vertex_count(),
        bottom.index_count() + wall.index_count(),
    );
    builder.append(&bottom, Winding::Keep);
    builder.append(&wall, Winding::Keep);
    builder.build()
}

/// Flat grid in the XZ plane, centered at the origin, facing `+Y`.
///
/// `x_segments` cells along X and `y_segments` cells along Z, each
/// `segment_length` wide. The U coordinate is scaled by `1 / y_segments` and
/// V by `1 / x_segments`; on non-square grids the texture is stretched
/// accordingly.
pub fn square(y_segments: u32, x_segments: u32, segment_length: f32) -> Mesh {
    check_segments("square", &[y_segments, x_segments]);
    let y_offset = (y_segments as f32 * segment_length) / 2.0;
    let x_offset = (x_segments as f32 * segment_length) / 2.0;
    let stride = x_segments + 1;
    let mut builder = MeshBuilder::with_capacity(
        Topology::TriangleList,
        ((y_segments + 1) * stride) as usize,
        (6 * x_segments * y_segments) as usize,
    );

    for v in 0..=y_segments {
        for h in 0..=x_segments {
            builder.push_vertex(MeshVertex::new(
                [
                    h as f32 * segment_length - x_offset,
                    0.0,
                    v as f32 * segment_length - y_offset,
                ],
                UP,
                [
                    h as f32 * (1.0 / y_segments as f32),
                    v as f32 * (1.0 / x_segments as f32),
                ],
            ));
            if h < x_segments && v < y_segments {
                push_grid_cell(&mut builder, h + stride * v, stride);
            }
        }
    }
    builder.build()
}

/// Axis-aligned box of size `x` by `y` by `z`, centered at the origin.
///
/// Each face owns its four vertices so normals stay flat and every face maps
/// the full texture. Faces are emitted front, back, right, left, top, bottom.
pub fn cube(x: f32, y: f32, z: f32) -> Mesh {
    let (hx, hy, hz) = (x / 2.0, y / 2.0, z / 2.0);
    // Corners per face as seen from outside: bottom-left, bottom-right,
    // top-left, top-right.
    let faces: [([[f32; 3]; 4], [f32; 3]); 6] = [
        (
            [[-hx, -hy, hz], [hx, -hy, hz], [-hx, hy, hz], [hx, hy, hz]],
            [0.0, 0.0, 1.0],
        ),
        (
            [[hx, -hy, -hz], [-hx, -hy, -hz], [hx, hy, -hz], [-hx, hy, -hz]],
            [0.0, 0.0, -1.0],
        ),
        (
            [[hx, -hy, hz], [hx, -hy, -hz], [hx, hy, hz], [hx, hy, -hz]],
            [1.0, 0.0, 0.0],
        ),
        (
            [[-hx, -hy, -hz], [-hx, -hy, hz], [-hx, hy, -hz], [-hx, hy, hz]],
            [-1.0, 0.0, 0.0],
        ),
        (
            [[-hx, hy, hz], [hx, hy, hz], [-hx, hy, -hz], [hx, hy, -hz]],
            [0.0, 1.0, 0.0],
        ),
        (
            [[-hx, -hy, -hz], [hx, -hy, -hz], [-hx, -hy, hz], [hx, -hy, hz]],
            [0.0, -1.0, 0.0],
        ),
    ];
    const FACE_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [0.0, 0.0], [1.0, 0.0]];

    let mut builder = MeshBuilder::with_capacity(Topology::TriangleList, 24, 36);
    for (corners, normal) in faces {
        let first = builder.vertex_offset();
        for (corner, uv) in corners.into_iter().zip(FACE_UVS) {
            builder.push_vertex(MeshVertex::new(corner, normal, uv));
        }
        builder.push_triangle(first, first + 1, first + 2);
        builder.push_triangle(first + 3, first + 2, first + 1);
    }
    builder.build()
}

/// The circle turned to face `-Y`, with V squeezed into `[1 - band, 1]`.
fn bottom_cap(x_segments: u32, z_segments: u32, band: f32) -> Mesh {
    let mut cap = circle(x_segments, z_segments).flipped();
    for vertex in cap.vertices.iter_mut() {
        vertex.tex_coords[1] = 1.0 - band * vertex.tex_coords[1];
    }
    cap
}

/// The bottom cap lifted to `y = 1`, facing `+Y`, with V in `[0, band]`.
///
/// Indices are kept as-is; the caller appends them reversed.
fn top_cap(bottom: &Mesh) -> Mesh {
    let vertices = bottom
        .vertices
        .iter()
        .map(|v| MeshVertex {
            position: [v.position[0], 1.0, v.position[2]],
            normal: v.normal.map(|n| -n),
            tex_coords: [v.tex_coords[0], 1.0 - v.tex_coords[1]],
        })
        .collect();
    Mesh {
        vertices,
        indices: bottom.indices.clone(),
        topology: Topology::TriangleList,
    }
}

/// A `(y_segments + 1) x (x_segments + 1)` wall swept upwards around the Y axis.
///
/// `vertex` receives the normalized angle and the row; rows go bottom to top.
fn side_wall(
    y_segments: u32,
    x_segments: u32,
    vertex: impl Fn(f32, u32) -> MeshVertex,
) -> Mesh {
    let stride = x_segments + 1;
    let mut builder = MeshBuilder::with_capacity(
        Topology::TriangleList,
        ((y_segments + 1) * stride) as usize,
        (6 * x_segments * y_segments) as usize,
    );
    for y in 0..=y_segments {
        for x in 0..=x_segments {
            builder.push_vertex(vertex(x as f32 / x_segments as f32, y));
        }
    }
    for i in 0..y_segments {
        for j in 0..x_segments {
            let low = i * stride + j;
            let high = (i + 1) * stride + j;
            builder.push_triangle(low, high, high + 1);
            builder.push_triangle(low, high + 1, low + 1);
        }
    }
    builder.build()
}
