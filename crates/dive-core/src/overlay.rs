//! Opacity model of the handoff overlay.
//!
//! The overlay itself is a write-only sink; this mirrors what was last asked
//! of it so the coordinator can tell when a fade has landed.

use crate::surface::OverlaySink;
use crate::tween::{Easing, Tween};

#[derive(Clone, Debug, Default)]
pub struct Overlay {
    opacity: f32,
    fade: Option<Tween<f32>>,
}

impl Overlay {
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_opaque(&self) -> bool {
        self.fade.is_none() && self.opacity >= 1.0
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Send a fade toward `target` to the sink. A zero duration lands at once.
    pub fn drive(&mut self, target: f32, fade_secs: f32, sink: &mut dyn OverlaySink) {
        let target = target.clamp(0.0, 1.0);
        sink.set_opacity(target, fade_secs.max(0.0));
        if fade_secs <= 0.0 {
            self.opacity = target;
            self.fade = None;
        } else {
            self.fade = Some(Tween::new(self.opacity, target, fade_secs, Easing::InOutQuad));
        }
    }

    /// Returns true on the tick a fade completes.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(fade) = self.fade.as_mut() else {
            return false;
        };
        self.opacity = fade.advance(dt);
        if fade.is_finished() {
            self.fade = None;
            return true;
        }
        false
    }
}
