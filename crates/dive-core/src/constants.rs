// Shared tuning constants for the globe and the transition timeline.
// All durations are in seconds, all angles in radians unless noted.

// Globe layout
pub const GLOBE_RADIUS: f32 = 2.5;
pub const GLOBE_SPIN_RATE: f32 = 1.0 / 20.0; // earth group, rad/s
pub const CLOUD_SPIN_RATE: f32 = 1.0 / 15.0; // cloud shell, rad/s

// Orbit camera
pub const ORBIT_DISTANCE: f32 = 8.0; // default eye distance on +Z
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 15.0;
pub const ORBIT_PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.017; // stay off the poles

// Flight
pub const STANDOFF_DISTANCE: f32 = 0.5; // hover height above the surface
pub const FLIGHT_SECS: f32 = 1.5;

// Handoff overlay
pub const HANDOFF_SETTLE_SECS: f32 = 0.8; // upper bound on viewer mount + first frame
pub const OVERLAY_FADE_SECS: f32 = 0.8;
pub const CLOSE_FADE_SECS: f32 = 0.5;

// Panorama intro/outro
pub const INTRO_SECS: f32 = 2.5;
pub const OUTRO_SECS: f32 = 1.5;

// Asteroid (tiny sphere) view
pub const ASTEROID_PITCH: f32 = -std::f32::consts::FRAC_PI_2;
pub const ASTEROID_YAW: f32 = std::f32::consts::FRAC_PI_2;
pub const ASTEROID_ZOOM: f32 = 0.0;
pub const ASTEROID_MAX_FOV: f32 = 130.0; // degrees
pub const ASTEROID_FISHEYE: f32 = 2.0;

// Straight-ahead view
pub const STRAIGHT_PITCH: f32 = 0.0;
pub const STRAIGHT_YAW: f32 = 0.0;
pub const STRAIGHT_ZOOM: f32 = 50.0;
pub const STRAIGHT_MAX_FOV: f32 = 90.0; // degrees
pub const STRAIGHT_FISHEYE: f32 = 0.0;
