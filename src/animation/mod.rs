//! Clock-driven animation sequencing.
//!
//! - `clock` contains the [`clock::Clock`] trait plus a wall clock and a manual clock
//! - `timeline` contains the [`timeline::AnimationTimeline`]

pub mod clock;
pub mod timeline;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timeline::{AnimationTimeline, TimelineState};
