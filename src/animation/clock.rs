//! Time sources for the [`AnimationTimeline`](super::timeline::AnimationTimeline).

use std::{cell::Cell, rc::Rc};

use instant::Instant;

/// A monotonic, non-decreasing time source reporting seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Wall-clock seconds since the clock was created.
///
/// Backed by `instant::Instant` so it also works on wasm32.
#[derive(Clone, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to.
///
/// Share it with a timeline through `&ManualClock` or `Rc<ManualClock>` and
/// step it between updates to replay exact frame timings.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `seconds`. Negative steps are ignored.
    pub fn advance(&self, seconds: f64) {
        if seconds < 0.0 {
            log::warn!("ManualClock cannot run backwards, ignoring a step of {}s", seconds);
            return;
        }
        self.now.set(self.now.get() + seconds);
    }

    /// Jump to `seconds`. Times before the current reading are ignored.
    pub fn set(&self, seconds: f64) {
        if seconds < self.now.get() {
            log::warn!(
                "ManualClock cannot run backwards, ignoring a jump from {}s to {}s",
                self.now.get(),
                seconds
            );
            return;
        }
        self.now.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
