//! Globe orientation and local-to-world resolution.
//!
//! The earth group spins continuously while idle, so a marker's world
//! position has to be resolved from the orientation at the moment it is
//! needed. Nothing here caches a transform across frames.

use crate::config::GlobeConfig;
use glam::{Affine3A, Vec3};

/// Rotation angles (radians about +Y) of the earth group and the cloud shell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlobeOrientation {
    pub spin: f32,
    pub clouds: f32,
}

impl GlobeOrientation {
    /// Advance the idle spin by `dt` seconds.
    pub fn advance(&mut self, dt: f32, cfg: &GlobeConfig) {
        self.spin = wrap_angle(self.spin + cfg.spin_rate * dt);
        self.clouds = wrap_angle(self.clouds + cfg.cloud_spin_rate * dt);
    }

    /// Local-to-world transform of the earth group under `parent`.
    #[inline]
    pub fn world_transform(&self, parent: &Affine3A) -> Affine3A {
        *parent * Affine3A::from_rotation_y(self.spin)
    }
}

/// Express `local` in world space through `transform`.
#[inline]
pub fn to_world(local: Vec3, transform: &Affine3A) -> Vec3 {
    transform.transform_point3(local)
}

#[inline]
fn wrap_angle(a: f32) -> f32 {
    a.rem_euclid(std::f32::consts::TAU)
}
