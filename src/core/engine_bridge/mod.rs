//=========================================================================
// Engine Bridge
//=========================================================================
//
// Contract between the shim and the native engine.
//
// Components:
// - `interface`: the `EngineBoundary` call surface and its value form
// - `recorder`: in-order call recording
// - `logging`: tracing decorator
//
//=========================================================================

//=== Module Declarations =================================================

pub mod interface;
mod logging;
mod recorder;

//=== Public API ==========================================================

pub use interface::{EngineBoundary, EngineCall, TouchPoints};
pub use logging::LoggingBoundary;
pub use recorder::RecordingBoundary;
