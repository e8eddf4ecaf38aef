//! CPU-side mesh buffers and the builder that assembles them.
//!
//! A [`Mesh`] is an array of [`MeshVertex`] plus a `u32` index list. Composite
//! shapes are stitched together with [`MeshBuilder::append`], which re-bases
//! the indices of the appended part by the number of vertices already present
//! and can traverse them in reverse to flip the facing of a part.

use anyhow::{Result, bail};

use crate::data_structures::vertex::MeshVertex;

/// How the index list groups vertices into primitives.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Every three indices form one triangle.
    #[default]
    TriangleList,
    /// Serpentine index pairs meant for strip rendering.
    TriangleStrip,
}

impl Topology {
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            Topology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
        }
    }
}

/// Index order used when appending one mesh onto another.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winding {
    Keep,
    /// Walk the appended index list back to front, flipping every triangle.
    Reverse,
}

/// Generated geometry ready to be handed to a presenter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Flat `x, y, z` positions, three floats per vertex.
    pub fn positions(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.position).collect()
    }

    /// Flat `x, y, z` normals, three floats per vertex.
    pub fn normals(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.normal).collect()
    }

    /// Flat `u, v` texture coordinates, two floats per vertex.
    pub fn tex_coords(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.tex_coords).collect()
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Interleaved vertex bytes, the layout described by `MeshVertex::desc`.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Iterate over the index triples of a triangle list.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Turn the mesh around: every normal is negated and the index list is
    /// reversed, so each triangle keeps its vertices but swaps its front face.
    pub fn flipped(mut self) -> Self {
        for vertex in self.vertices.iter_mut() {
            vertex.normal = vertex.normal.map(|n| -n);
        }
        self.indices.reverse();
        self
    }

    /// Check the structural invariants a presenter relies on.
    ///
    /// Generators don't validate their segment counts; a zero count shows up
    /// here as out-of-range indices or non-finite positions.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        if let Some(position) = self.indices.iter().position(|&i| i as usize >= vertex_count) {
            bail!(
                "index {} at position {} is out of range for {} vertices",
                self.indices[position],
                position,
                vertex_count
            );
        }
        if self.topology == Topology::TriangleList && self.indices.len() % 3 != 0 {
            bail!(
                "triangle list has {} indices, which is not a multiple of 3",
                self.indices.len()
            );
        }
        if let Some(position) = self
            .vertices
            .iter()
            .position(|v| v.position.iter().any(|c| !c.is_finite()))
        {
            bail!("vertex {} has a non-finite position", position);
        }
        Ok(())
    }
}

/// Incrementally assembles a [`Mesh`] while tracking the running vertex count.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: Mesh,
}

impl MeshBuilder {
    pub fn new(topology: Topology) -> Self {
        Self {
            mesh: Mesh {
                topology,
                ..Default::default()
            },
        }
    }

    pub fn with_capacity(topology: Topology, vertices: usize, indices: usize) -> Self {
        Self {
            mesh: Mesh {
                vertices: Vec::with_capacity(vertices),
                indices: Vec::with_capacity(indices),
                topology,
            },
        }
    }

    /// The index the next pushed vertex will get.
    pub fn vertex_offset(&self) -> u32 {
        self.mesh.vertices.len() as u32
    }

    /// Add a vertex and return its index.
    pub fn push_vertex(&mut self, vertex: MeshVertex) -> u32 {
        let index = self.vertex_offset();
        self.mesh.vertices.push(vertex);
        index
    }

    pub fn push_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.mesh.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Push a pair of strip indices.
    pub fn push_pair(&mut self, i0: u32, i1: u32) {
        self.mesh.indices.extend_from_slice(&[i0, i1]);
    }

    /// Concatenate `other` onto the mesh under construction.
    ///
    /// Indices of `other` are shifted by the current vertex count. With
    /// [`Winding::Reverse`] they are also emitted back to front.
    pub fn append(&mut self, other: &Mesh, winding: Winding) {
        let offset = self.vertex_offset();
        self.mesh.vertices.extend_from_slice(&other.vertices);
        match winding {
            Winding::Keep => self
                .mesh
                .indices
                .extend(other.indices.iter().map(|i| i + offset)),
            Winding::Reverse => self
                .mesh
                .indices
                .extend(other.indices.iter().rev().map(|i| i + offset)),
        }
    }

    pub fn build(self) -> Mesh {
        self.mesh
    }
}
