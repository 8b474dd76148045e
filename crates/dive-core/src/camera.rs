//! Orbit camera state and the fly-to / reset flight controller.

use crate::config::FlightConfig;
use crate::constants::{CAMERA_FOV_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_PITCH_LIMIT};
use crate::error::TransitionError;
use crate::geo::MarkerId;
use crate::tween::{Lerp, Tween};
use glam::{Mat4, Vec3};

/// Eye position and look-at target, animated as one value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl Lerp for CameraPose {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(to.position, t),
            target: self.target.lerp(to.target, t),
        }
    }
}

/// Right-handed perspective camera orbiting the globe.
#[derive(Clone, Debug)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub interaction_enabled: bool,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraState {
    pub fn at_home(orbit_distance: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, orbit_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            interaction_enabled: true,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
        }
    }

    fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.target = pose.target;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightEvent {
    /// Hovering above the marker; interaction stays locked.
    Arrived(MarkerId),
    /// Back at the default orbit; interaction unlocked.
    Homed,
}

#[derive(Clone, Copy, Debug)]
enum Leg {
    Dive(MarkerId),
    Home,
}

#[derive(Clone, Debug)]
struct Flight {
    leg: Leg,
    tween: Tween<CameraPose>,
}

pub struct FlightController {
    camera: CameraState,
    flight: Option<Flight>,
    cfg: FlightConfig,
    radius: f32,
}

impl FlightController {
    pub fn new(cfg: FlightConfig, radius: f32) -> Self {
        Self {
            camera: CameraState::at_home(cfg.orbit_distance),
            flight: None,
            cfg,
            radius,
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.aspect = aspect.max(1e-3);
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Camera position that hovers `standoff` above `world_target`.
    #[inline]
    pub fn destination_for(&self, world_target: Vec3) -> Vec3 {
        world_target.normalize_or_zero() * (self.radius + self.cfg.standoff)
    }

    /// Start the dive toward `world_target`. Returns the destination eye
    /// position. A second call while any flight runs is rejected.
    pub fn fly_to(&mut self, world_target: Vec3, marker: MarkerId) -> Result<Vec3, TransitionError> {
        if self.flight.is_some() {
            log::warn!("[flight] fly_to({marker}) rejected: flight in progress");
            return Err(TransitionError::FlightInProgress);
        }
        let destination = self.destination_for(world_target);
        self.camera.interaction_enabled = false;
        self.start(
            Leg::Dive(marker),
            CameraPose {
                position: destination,
                target: world_target,
            },
        );
        log::debug!(
            "[flight] dive to marker {marker} eye=({:.2},{:.2},{:.2})",
            destination.x,
            destination.y,
            destination.z
        );
        Ok(destination)
    }

    /// Fly back to the default orbit with the target re-homed on the globe
    /// center.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        if self.flight.is_some() {
            log::warn!("[flight] reset rejected: flight in progress");
            return Err(TransitionError::FlightInProgress);
        }
        self.camera.interaction_enabled = false;
        self.start(
            Leg::Home,
            CameraPose {
                position: Vec3::new(0.0, 0.0, self.cfg.orbit_distance),
                target: Vec3::ZERO,
            },
        );
        Ok(())
    }

    fn start(&mut self, leg: Leg, to: CameraPose) {
        let tween = Tween::new(self.camera.pose(), to, self.cfg.duration, self.cfg.easing);
        self.flight = Some(Flight { leg, tween });
    }

    pub fn tick(&mut self, dt: f32) -> Option<FlightEvent> {
        let flight = self.flight.as_mut()?;
        let pose = flight.tween.advance(dt);
        self.camera.set_pose(pose);
        if !flight.tween.is_finished() {
            return None;
        }
        let leg = flight.leg;
        self.flight = None;
        Some(match leg {
            Leg::Dive(id) => FlightEvent::Arrived(id),
            Leg::Home => {
                self.camera.interaction_enabled = true;
                FlightEvent::Homed
            }
        })
    }

    /// User orbit input: yaw/pitch deltas in radians and a multiplicative
    /// zoom factor. Pan is not supported.
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32, zoom: f32) -> Result<(), TransitionError> {
        if !self.camera.interaction_enabled || self.flight.is_some() {
            return Err(TransitionError::InteractionLocked);
        }
        let offset = self.camera.position - self.camera.target;
        let distance = offset.length().max(1e-4);
        let yaw = offset.x.atan2(offset.z) + d_yaw;
        let pitch = ((offset.y / distance).clamp(-1.0, 1.0).asin() + d_pitch)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        let distance = (distance * zoom.max(1e-3)).clamp(self.cfg.min_distance, self.cfg.max_distance);
        self.camera.position = self.camera.target
            + distance * Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos());
        Ok(())
    }
}
