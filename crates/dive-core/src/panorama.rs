//! Intro/outro animation of the panorama viewer's view parameters.
//!
//! The intro starts from the asteroid view (a tiny, fisheyed planet seen from
//! above) and straightens out; the outro runs from wherever the user left the
//! view back to the asteroid. All five channels share one tween.

use crate::config::PanoramaConfig;
use crate::constants::*;
use crate::surface::PanoramaViewer;
use crate::tween::{Lerp, Tween};
use serde::Deserialize;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ViewParams {
    pub pitch: f32,
    pub yaw: f32,
    pub zoom: f32,
    pub max_fov: f32,
    pub fisheye: f32,
}

impl ViewParams {
    pub const fn asteroid() -> Self {
        Self {
            pitch: ASTEROID_PITCH,
            yaw: ASTEROID_YAW,
            zoom: ASTEROID_ZOOM,
            max_fov: ASTEROID_MAX_FOV,
            fisheye: ASTEROID_FISHEYE,
        }
    }

    pub const fn straight() -> Self {
        Self {
            pitch: STRAIGHT_PITCH,
            yaw: STRAIGHT_YAW,
            zoom: STRAIGHT_ZOOM,
            max_fov: STRAIGHT_MAX_FOV,
            fisheye: STRAIGHT_FISHEYE,
        }
    }
}

impl Lerp for ViewParams {
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            pitch: Lerp::lerp(self.pitch, to.pitch, t),
            yaw: Lerp::lerp(self.yaw, to.yaw, t),
            zoom: Lerp::lerp(self.zoom, to.zoom, t),
            max_fov: Lerp::lerp(self.max_fov, to.max_fov, t),
            fisheye: Lerp::lerp(self.fisheye, to.fisheye, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Intro,
    Outro,
}

#[derive(Default)]
pub struct PanoramaAnimator {
    running: Option<(Direction, Tween<ViewParams>)>,
}

impl PanoramaAnimator {
    pub fn running(&self) -> Option<Direction> {
        self.running.as_ref().map(|(d, _)| *d)
    }

    /// Start values of the running animation, if any.
    pub fn start_values(&self) -> Option<ViewParams> {
        self.running.as_ref().map(|(_, t)| t.from)
    }

    pub fn start_intro(&mut self, viewer: &mut dyn PanoramaViewer, cfg: &PanoramaConfig) {
        viewer.hide_controls();
        viewer.set_input_enabled(false);
        viewer.set_view_params(&cfg.asteroid);
        let tween = Tween::new(cfg.asteroid, cfg.straight, cfg.intro_secs, cfg.easing);
        self.running = Some((Direction::Intro, tween));
    }

    /// Start the outro from the viewer's live view. Returns false when the
    /// viewer has nothing to animate (not mounted or not ready).
    pub fn start_outro(&mut self, viewer: &mut dyn PanoramaViewer, cfg: &PanoramaConfig) -> bool {
        let Some(live) = viewer.current_view_params() else {
            return false;
        };
        viewer.stop_auto_rotate();
        viewer.hide_controls();
        viewer.set_input_enabled(false);
        let mut to = cfg.asteroid;
        to.yaw = nearest_turn(live.yaw, to.yaw);
        let tween = Tween::new(live, to, cfg.outro_secs, cfg.easing);
        self.running = Some((Direction::Outro, tween));
        true
    }

    pub fn cancel(&mut self) {
        self.running = None;
    }

    /// Write the next frame into the viewer. Returns the direction that
    /// finished on this tick, after its completion side effects ran.
    pub fn tick(&mut self, dt: f32, viewer: &mut dyn PanoramaViewer) -> Option<Direction> {
        let (dir, tween) = self.running.as_mut()?;
        let params = tween.advance(dt);
        viewer.set_view_params(&params);
        if !tween.is_finished() {
            return None;
        }
        let dir = *dir;
        self.running = None;
        if dir == Direction::Intro {
            viewer.start_auto_rotate();
            viewer.show_controls();
            viewer.set_input_enabled(true);
        }
        Some(dir)
    }
}

/// `target` shifted by whole turns to lie within half a turn of `from`.
fn nearest_turn(from: f32, target: f32) -> f32 {
    let delta = (target - from + PI).rem_euclid(TAU) - PI;
    from + delta
}
