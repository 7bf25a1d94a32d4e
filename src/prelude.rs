//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use loax_shim::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Activity lifecycle
pub use crate::activity::{Activity, ActivityBuilder, ActivityConfig, LifecycleState};

// Engine boundary
pub use crate::core::engine_bridge::{EngineBoundary, EngineCall, LoggingBoundary, RecordingBoundary};

// Input
pub use crate::core::input::{Disposition, EventNormalizer, GenericMotion, KeyInput, Pointer, TouchEvent};

// Host capabilities
pub use crate::core::host::{
    DisplayRotation, FixedRotation, LocationFix, LocationService, NullLocationService, NullRenderSurface,
    NullSensorService, RenderSurface, Rotation, SamplingRate, SensorId, SensorKind,
    SensorSample, SensorService, ServiceError,
};

// Bridges and commands
pub use crate::core::command::{Command, CommandDispatcher, CommandSender};
pub use crate::core::sensors::{LocationBridge, LocationOutcome, SensorBridge};
