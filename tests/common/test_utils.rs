#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use flow_prims::{
    InnerSpace, Vector3,
    data_structures::mesh::{Mesh, Topology},
};

/// Triangles with a cross product shorter than this are treated as degenerate
/// (pole and apex triangles).
pub const DEGENERATE: f32 = 1e-5;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

/// Panics with a readable message when the mesh breaks a structural invariant.
pub fn assert_well_formed(mesh: &Mesh) {
    if let Err(e) = mesh.validate() {
        panic!("mesh is malformed: {}", e);
    }
    let count = mesh.vertex_count() as u32;
    for (i, index) in mesh.indices.iter().enumerate() {
        assert!(*index < count, "index {} at {} out of range", index, i);
    }
    if mesh.topology == Topology::TriangleList {
        assert_eq!(mesh.index_count() % 3, 0);
    }
}

/// Unnormalized geometric normal `(b - a) x (c - a)` of a triangle.
pub fn cross(mesh: &Mesh, [a, b, c]: [u32; 3]) -> Vector3<f32> {
    let a = mesh.vertices[a as usize].position();
    let b = mesh.vertices[b as usize].position();
    let c = mesh.vertices[c as usize].position();
    (b - a).cross(c - a)
}

pub fn centroid(mesh: &Mesh, [a, b, c]: [u32; 3]) -> Vector3<f32> {
    (mesh.vertices[a as usize].position()
        + mesh.vertices[b as usize].position()
        + mesh.vertices[c as usize].position())
        / 3.0
}

/// Asserts that every non-degenerate triangle in `triangles` is wound
/// counter-clockwise when seen from `outward(centroid)`.
pub fn assert_faces_outward(
    mesh: &Mesh,
    triangles: &[[u32; 3]],
    outward: impl Fn(Vector3<f32>) -> Vector3<f32>,
) {
    let mut checked = 0;
    for &triangle in triangles {
        let normal = cross(mesh, triangle);
        if normal.magnitude() < DEGENERATE {
            continue;
        }
        let facing = normal.dot(outward(centroid(mesh, triangle)));
        assert!(
            facing > 0.0,
            "triangle {:?} faces inwards (normal {:?})",
            triangle,
            normal
        );
        checked += 1;
    }
    assert!(checked > 0, "no triangle was checked");
}

/// Shared log of progress values handed to a discrete animation.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<f32>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends every `t` it receives.
    pub fn animation(&self) -> impl FnMut(f32) + 'static {
        let calls = Rc::clone(&self.calls);
        move |t| calls.borrow_mut().push(t)
    }

    pub fn calls(&self) -> Vec<f32> {
        self.calls.borrow().clone()
    }
}

/// Shared counter for continuous animations.
#[derive(Clone, Default)]
pub struct Counter {
    count: Rc<RefCell<u32>>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animation(&self) -> impl FnMut() + 'static {
        let count = Rc::clone(&self.count);
        move || *count.borrow_mut() += 1
    }

    pub fn count(&self) -> u32 {
        *self.count.borrow()
    }
}
