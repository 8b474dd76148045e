//! Easing curves and fixed-duration tweens driven by the frame clock.
//!
//! A [`Tween`] interpolates a whole value (a camera pose, a set of view
//! channels) with one clock and one easing, so every channel finishes on the
//! same tick.

use glam::Vec3;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic in-out.
    #[default]
    InOutQuad,
    /// Cubic in-out (GSAP's `power2.inOut`).
    InOutCubic,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Values that can be blended linearly.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec3::lerp(self, to, t)
    }
}

#[derive(Clone, Debug)]
pub struct Tween<T: Lerp> {
    pub from: T,
    pub to: T,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance the clock by `dt` seconds and return the value at the new time.
    pub fn advance(&mut self, dt: f32) -> T {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(self.progress()))
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// One-shot countdown.
#[derive(Clone, Copy, Debug)]
pub struct Delay {
    remaining: f32,
}

impl Delay {
    pub fn new(secs: f32) -> Self {
        Self {
            remaining: secs.max(0.0),
        }
    }

    /// Returns true on the tick the delay runs out, and on every tick after.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        self.elapsed()
    }

    pub fn elapsed(&self) -> bool {
        self.remaining <= 0.0
    }
}
