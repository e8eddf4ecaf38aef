//! Vertex types shared by every generated mesh.

/// Anything that can describe its own GPU vertex buffer layout.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// A single mesh vertex: position, normal and texture coordinates.
///
/// The struct is `#[repr(C)]` and `Pod`, so a `&[MeshVertex]` can be cast
/// straight into the bytes of an interleaved vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl MeshVertex {
    pub fn new(
        position: impl Into<[f32; 3]>,
        normal: impl Into<[f32; 3]>,
        tex_coords: impl Into<[f32; 2]>,
    ) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            tex_coords: tex_coords.into(),
        }
    }

    pub fn position(&self) -> cgmath::Vector3<f32> {
        self.position.into()
    }

    pub fn normal(&self) -> cgmath::Vector3<f32> {
        self.normal.into()
    }
}

/**
 * Interleaved layout:
 *
 * location 0: position (3 x f32)
 * location 1: normal (3 x f32)
 * location 2: tex_coords (2 x f32)
 */
impl Vertex for MeshVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}
