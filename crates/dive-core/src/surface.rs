//! Collaborators the orchestrator drives. Front ends implement these over the
//! DOM/JS (web) or over plain logging (native runner, tests).

use crate::geo::Marker;
use crate::panorama::ViewParams;

/// The globe renderer's mount point.
pub trait GlobeSurface {
    /// Pause/resume idle rendering work and accept/reject pointer input.
    fn set_active(&mut self, active: bool);
}

/// Full-screen compositing layer. Write-only.
pub trait OverlaySink {
    fn set_opacity(&mut self, opacity: f32, fade_secs: f32);
}

/// Control interface of the 360° panorama viewer.
pub trait PanoramaViewer {
    fn mount(&mut self, marker: &Marker, initial: &ViewParams, input_enabled: bool);
    fn set_view_params(&mut self, params: &ViewParams);
    /// Live view parameters, or `None` when no viewer is mounted and ready.
    fn current_view_params(&self) -> Option<ViewParams>;
    fn start_auto_rotate(&mut self);
    fn stop_auto_rotate(&mut self);
    fn show_controls(&mut self);
    fn hide_controls(&mut self);
    fn set_input_enabled(&mut self, enabled: bool);
    fn unmount(&mut self);
}

/// Borrowed collaborators for one `tick` or `handle` call.
pub struct Surfaces<'a> {
    pub globe: &'a mut dyn GlobeSurface,
    pub overlay: &'a mut dyn OverlaySink,
    pub viewer: &'a mut dyn PanoramaViewer,
}
