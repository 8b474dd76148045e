use crate::geo::MarkerId;
use crate::orchestrator::TransitionPhase;
use thiserror::Error;

/// Contract violations reported by the orchestrator. None of these change
/// state: the rejected call is a no-op.
///
/// Callers get these as `Err` and [`crate::Orchestrator::handle`] logs each
/// at `warn`. Internal steps that cannot legitimately fail `debug_assert!`
/// instead.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("a camera flight is already in progress")]
    FlightInProgress,
    #[error("camera interaction is locked")]
    InteractionLocked,
    #[error("unknown marker id {0}")]
    UnknownMarker(MarkerId),
    #[error("{event} ignored while {phase:?}")]
    Ignored {
        event: &'static str,
        phase: TransitionPhase,
    },
    #[error("panorama intro is still running")]
    IntroRunning,
}
