//! Runtime tuning for the transition. Every field defaults to the values in
//! [`crate::constants`]; a JSON document only needs to name what it changes.

use crate::constants::*;
use crate::panorama::ViewParams;
use crate::tween::Easing;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub globe: GlobeConfig,
    pub flight: FlightConfig,
    pub handoff: HandoffConfig,
    pub panorama: PanoramaConfig,
}

impl TransitionConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub radius: f32,
    pub spin_rate: f32,
    pub cloud_spin_rate: f32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: GLOBE_RADIUS,
            spin_rate: GLOBE_SPIN_RATE,
            cloud_spin_rate: CLOUD_SPIN_RATE,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub standoff: f32,
    pub duration: f32,
    pub easing: Easing,
    pub orbit_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            standoff: STANDOFF_DISTANCE,
            duration: FLIGHT_SECS,
            easing: Easing::InOutCubic,
            orbit_distance: ORBIT_DISTANCE,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// Longest wait for the viewer's ready signal before the overlay lifts.
    pub settle_secs: f32,
    pub fade_out_secs: f32,
    pub close_fade_secs: f32,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            settle_secs: HANDOFF_SETTLE_SECS,
            fade_out_secs: OVERLAY_FADE_SECS,
            close_fade_secs: CLOSE_FADE_SECS,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PanoramaConfig {
    pub intro_secs: f32,
    pub outro_secs: f32,
    pub easing: Easing,
    pub asteroid: ViewParams,
    pub straight: ViewParams,
}

impl Default for PanoramaConfig {
    fn default() -> Self {
        Self {
            intro_secs: INTRO_SECS,
            outro_secs: OUTRO_SECS,
            easing: Easing::InOutQuad,
            asteroid: ViewParams::asteroid(),
            straight: ViewParams::straight(),
        }
    }
}
