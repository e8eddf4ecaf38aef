//! Engine data structures: vertices and meshes.
//!
//! - `vertex` contains the interleaved [`vertex::MeshVertex`] and its GPU layout
//! - `mesh` contains [`mesh::Mesh`] and the [`mesh::MeshBuilder`] used by every generator

pub mod mesh;
pub mod vertex;
