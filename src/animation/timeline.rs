//! Sequenced animation playback.
//!
//! An [`AnimationTimeline`] holds two kinds of callbacks:
//!
//! - discrete animations, each with a duration, played one after the other and
//!   fed a normalized progress `t` in `[0, 1]`
//! - continuous animations, called on every tick for as long as the timeline lives
//!
//! The timeline does not own a loop. Call [`AnimationTimeline::update`] once per
//! rendered frame from a single thread.

use std::fmt;

use super::clock::{Clock, SystemClock};

type Discrete = Box<dyn FnMut(f32)>;
type Continuous = Box<dyn FnMut()>;

struct Animation {
    duration: f64,
    callback: Discrete,
}

/// Where the discrete queue currently stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimelineState {
    /// `init` has not been called yet.
    Idle,
    /// The animation at this queue position is current.
    Running(usize),
    /// Every discrete animation has completed; continuous ones keep running.
    Drained,
}

pub struct AnimationTimeline<C: Clock = SystemClock> {
    clock: C,
    initialized: bool,
    previous_time: f64,
    total_elapsed: f64,
    elapsed: f64,
    angle: f64,
    active: usize,
    animations: Vec<Animation>,
    continuous: Vec<Continuous>,
}

impl<C: Clock> fmt::Debug for AnimationTimeline<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationTimeline")
            .field("state", &self.state())
            .field("elapsed", &self.elapsed)
            .field("angle", &self.angle)
            .field("total_elapsed", &self.total_elapsed)
            .field("animations", &self.animations.len())
            .field("continuous", &self.continuous.len())
            .finish_non_exhaustive()
    }
}

impl Default for AnimationTimeline<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> AnimationTimeline<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            initialized: false,
            previous_time: 0.0,
            total_elapsed: 0.0,
            elapsed: 0.0,
            angle: 0.0,
            active: 0,
            animations: Vec::new(),
            continuous: Vec::new(),
        }
    }

    /// Take the current clock reading as the baseline for the first tick.
    pub fn init(&mut self) {
        self.previous_time = self.clock.now();
        self.initialized = true;
    }

    /// Queue a discrete animation lasting `duration` seconds.
    ///
    /// A duration of zero (or less) completes on the first tick the animation
    /// is current, with a single call at `t = 1.0`.
    ///
    /// Progress starts counting from the first tick the animation is current.
    /// Ticks spent with a drained queue are not credited to animations added
    /// afterwards.
    pub fn add_animation(&mut self, animation: impl FnMut(f32) + 'static, duration: f64) {
        if duration < 0.0 {
            log::warn!(
                "animation {} has a negative duration ({}s) and will complete immediately",
                self.animations.len(),
                duration
            );
        }
        self.animations.push(Animation {
            duration,
            callback: Box::new(animation),
        });
    }

    /// Register a callback that runs on every tick.
    pub fn add_continuous_animation(&mut self, animation: impl FnMut() + 'static) {
        self.continuous.push(Box::new(animation));
    }

    /// Advance by one tick.
    ///
    /// The current discrete animation gets `t = total / duration` while its
    /// accumulated time is below the duration. Once it is reached the
    /// animation gets exactly `t = 1.0` and the next one becomes current from
    /// the following tick on. Continuous animations run afterwards in
    /// registration order.
    pub fn update(&mut self) {
        if !self.initialized {
            log::warn!("AnimationTimeline::update called before init, initializing now");
            self.init();
        }
        let now = self.clock.now();
        self.elapsed = now - self.previous_time;
        self.previous_time = now;
        self.angle += self.elapsed;

        if let Some(animation) = self.animations.get_mut(self.active) {
            self.total_elapsed += self.elapsed;
            // A total just below the duration can still round to 1.0 as f32.
            let t = (self.total_elapsed / animation.duration) as f32;
            if self.total_elapsed < animation.duration && t < 1.0 {
                (animation.callback)(t);
            } else {
                (animation.callback)(1.0);
                log::debug!(
                    "animation {} completed after {}s",
                    self.active,
                    self.total_elapsed
                );
                self.total_elapsed = 0.0;
                self.active += 1;
                if self.active == self.animations.len() {
                    log::debug!("all {} animations completed", self.animations.len());
                }
            }
        }

        for animation in self.continuous.iter_mut() {
            animation();
        }
    }

    /// Seconds between the last two ticks.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total seconds accumulated over all ticks, usable as a phase.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Queue position of the current discrete animation.
    ///
    /// Equals the number of queued animations once the queue is drained.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn state(&self) -> TimelineState {
        if !self.initialized {
            TimelineState::Idle
        } else if self.active < self.animations.len() {
            TimelineState::Running(self.active)
        } else {
            TimelineState::Drained
        }
    }

    pub fn is_drained(&self) -> bool {
        self.state() == TimelineState::Drained
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
