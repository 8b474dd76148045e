pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod orchestrator;
pub mod overlay;
pub mod panorama;
pub mod surface;
pub mod tween;
pub mod world;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use geo::*;
pub use orchestrator::*;
pub use overlay::*;
pub use panorama::*;
pub use surface::*;
pub use tween::*;
pub use world::*;
