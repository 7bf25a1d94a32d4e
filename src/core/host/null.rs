//=========================================================================
// Null Host Services
//=========================================================================
//
// Capability stand-ins for hosts without motion sensors, GPS or a native
// render thread (desktop). They report absent hardware, so the bridges
// degrade to silent no-ops.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::interface::{
    LocationFix, LocationService, RenderSurface, SamplingRate, SensorId, SensorKind,
    SensorService, ServiceError,
};

//=== NullSensorService ===================================================

/// A device with no motion sensors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSensorService;

impl SensorService for NullSensorService {
    fn default_sensor(&mut self, _kind: SensorKind) -> Option<SensorId> {
        None
    }

    fn register_listener(&mut self, _sensor: SensorId, _rate: SamplingRate) {}

    fn unregister_listener(&mut self, _sensor: SensorId) {}
}

//=== NullLocationService =================================================

/// A device whose GPS provider is always disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLocationService;

impl LocationService for NullLocationService {
    fn is_provider_enabled(&self, _provider: &str) -> Result<bool, ServiceError> {
        Ok(false)
    }

    fn request_updates(
        &mut self,
        _provider: &str,
        _min_time_ms: u64,
        _min_distance_m: f32,
    ) -> Result<(), ServiceError> {
        Ok(())
    }

    fn last_known_fix(&self, _provider: &str) -> Result<Option<LocationFix>, ServiceError> {
        Ok(None)
    }

    fn remove_updates(&mut self) -> Result<(), ServiceError> {
        Ok(())
    }
}

//=== NullRenderSurface ===================================================

/// Render-surface controller with no render thread behind it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderSurface;

impl RenderSurface for NullRenderSurface {
    fn resume(&mut self) {
        debug!(target: "shim", "Render surface resume (headless)");
    }

    fn pause(&mut self) {
        debug!(target: "shim", "Render surface pause (headless)");
    }

    fn stop(&mut self) {
        debug!(target: "shim", "Render surface stop (headless)");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
