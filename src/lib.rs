//! flow-prims
//!
//! Procedural mesh primitives and a clock-driven animation timeline. Meshes
//! come out as tightly packed vertex/index buffers that can be handed to a GPU
//! as-is, and the timeline turns raw clock readings into normalized progress
//! for a chain of timed animations plus a set of per-tick callbacks.
//!
//! High-level modules
//! - `animation`: the [`animation::AnimationTimeline`] and its injectable clocks
//! - `data_structures`: vertex and mesh types, and the mesh builder
//! - `primitives`: sphere, circle, cylinder, cone, square, cube and grid generators
//! - `resources`: height-field sampling and GPU buffer upload
//!

pub mod animation;
pub mod data_structures;
pub mod primitives;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;

/// Install the platform logger.
///
/// Native builds log through `env_logger` (configure with `RUST_LOG`), wasm
/// builds log to the browser console.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::UnwrapThrowExt;
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }
}
