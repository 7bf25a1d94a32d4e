//=========================================================================
// Sensor and Location Bridges
//=========================================================================
//
// Components owning the enable/disable lifecycle of one host capability
// each: motion sensors (`SensorBridge`) and GPS (`LocationBridge`).
//
// Both are UI-thread only and are driven by the command dispatcher and by
// the activity's pause/destroy teardown.
//
//=========================================================================

//=== Module Declarations =================================================

mod location_bridge;
mod sensor_bridge;

//=== Public API ==========================================================

pub use location_bridge::{LocationBridge, LocationOutcome};
pub use sensor_bridge::SensorBridge;
