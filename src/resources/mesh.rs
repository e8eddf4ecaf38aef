use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::data_structures::mesh::{Mesh, Topology};

/// A mesh living in GPU buffers, ready for `draw_indexed`.
///
/// Buffer lifetime is the caller's business; dropping the `GpuMesh` drops the
/// buffers.
#[derive(Debug)]
pub struct GpuMesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
    pub topology: Topology,
}

impl GpuMesh {
    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;
}

/**
 * Validates `mesh` and copies its interleaved vertices and `u32` indices into
 * freshly created GPU buffers.
 */
pub fn upload(mesh: &Mesh, device: &wgpu::Device, label: &str) -> Result<GpuMesh> {
    mesh.validate()?;

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Vertex Buffer", label)),
        contents: mesh.vertex_bytes(),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Index Buffer", label)),
        contents: mesh.index_bytes(),
        usage: wgpu::BufferUsages::INDEX,
    });

    log::debug!(
        "uploaded {}: {} vertices, {} indices",
        label,
        mesh.vertex_count(),
        mesh.index_count()
    );

    Ok(GpuMesh {
        name: label.to_string(),
        vertex_buffer,
        index_buffer,
        num_elements: mesh.index_count() as u32,
        topology: mesh.topology,
    })
}
