//=========================================================================
// Host Capabilities
//=========================================================================
//
// What the shim needs from the host platform, expressed as traits.
//
// Components:
// - `interface`: service traits, value types and `ServiceError`
// - `null`: stand-ins for hosts lacking a capability
//
//=========================================================================

//=== Module Declarations =================================================

pub mod interface;
mod null;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use interface::{
    DisplayRotation, FixedRotation, LocationFix, LocationService, RenderSurface, Rotation,
    SamplingRate, SensorId, SensorKind, SensorSample, SensorService, ServiceError, GPS_PROVIDER,
};
pub use null::{NullLocationService, NullRenderSurface, NullSensorService};
