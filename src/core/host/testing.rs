//=========================================================================
// Host Test Doubles
//=========================================================================
//
// Scriptable host services that log every call into a shared journal,
// so tests can assert call order after the service has been boxed and
// moved into a bridge.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;

use super::interface::{
    DisplayRotation, LocationFix, LocationService, RenderSurface, Rotation, SamplingRate,
    SensorId, SensorKind, SensorService, ServiceError,
};

//=== HostOp ==============================================================

/// One observed host-service call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostOp {
    Register(SensorKind, SamplingRate),
    Unregister(SensorKind),
    RequestUpdates { provider: String, min_time_ms: u64, min_distance_m: f32 },
    RemoveUpdates,
    SurfaceResume,
    SurfacePause,
    SurfaceStop,
}

pub(crate) type Journal = Rc<RefCell<Vec<HostOp>>>;

pub(crate) fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

fn kind_of(sensor: SensorId) -> SensorKind {
    SensorKind::ALL[sensor.0 as usize]
}

//=== MockSensors =========================================================

pub(crate) struct MockSensors {
    pub journal: Journal,
    pub available: Vec<SensorKind>,
}

impl MockSensors {
    pub fn all(journal: &Journal) -> Self {
        Self { journal: journal.clone(), available: SensorKind::ALL.to_vec() }
    }

    pub fn only(journal: &Journal, available: &[SensorKind]) -> Self {
        Self { journal: journal.clone(), available: available.to_vec() }
    }
}

impl SensorService for MockSensors {
    fn default_sensor(&mut self, kind: SensorKind) -> Option<SensorId> {
        self.available
            .contains(&kind)
            .then(|| SensorId(kind.index() as u32))
    }

    fn register_listener(&mut self, sensor: SensorId, rate: SamplingRate) {
        self.journal.borrow_mut().push(HostOp::Register(kind_of(sensor), rate));
    }

    fn unregister_listener(&mut self, sensor: SensorId) {
        self.journal.borrow_mut().push(HostOp::Unregister(kind_of(sensor)));
    }
}

//=== MockLocation ========================================================

pub(crate) struct MockLocation {
    pub journal: Journal,
    pub enabled: Result<bool, ServiceError>,
    pub request_result: Result<(), ServiceError>,
    pub last_known: Result<Option<LocationFix>, ServiceError>,
    pub remove_result: Result<(), ServiceError>,
}

impl MockLocation {
    pub fn enabled(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            enabled: Ok(true),
            request_result: Ok(()),
            last_known: Ok(None),
            remove_result: Ok(()),
        }
    }
}

impl LocationService for MockLocation {
    fn is_provider_enabled(&self, _provider: &str) -> Result<bool, ServiceError> {
        self.enabled.clone()
    }

    fn request_updates(
        &mut self,
        provider: &str,
        min_time_ms: u64,
        min_distance_m: f32,
    ) -> Result<(), ServiceError> {
        self.journal.borrow_mut().push(HostOp::RequestUpdates {
            provider: provider.to_string(),
            min_time_ms,
            min_distance_m,
        });
        self.request_result.clone()
    }

    fn last_known_fix(&self, _provider: &str) -> Result<Option<LocationFix>, ServiceError> {
        self.last_known.clone()
    }

    fn remove_updates(&mut self) -> Result<(), ServiceError> {
        self.journal.borrow_mut().push(HostOp::RemoveUpdates);
        self.remove_result.clone()
    }
}

//=== MockSurface / MockDisplay ===========================================

pub(crate) struct MockSurface {
    pub journal: Journal,
}

impl RenderSurface for MockSurface {
    fn resume(&mut self) {
        self.journal.borrow_mut().push(HostOp::SurfaceResume);
    }

    fn pause(&mut self) {
        self.journal.borrow_mut().push(HostOp::SurfacePause);
    }

    fn stop(&mut self) {
        self.journal.borrow_mut().push(HostOp::SurfaceStop);
    }
}

/// Display whose rotation tests can change after boxing.
pub(crate) struct MockDisplay {
    pub rotation: Rc<RefCell<Rotation>>,
}

impl DisplayRotation for MockDisplay {
    fn rotation(&self) -> Rotation {
        *self.rotation.borrow()
    }
}

pub(crate) fn fix() -> LocationFix {
    LocationFix {
        latitude: 37.7749,
        longitude: -122.4194,
        accuracy: 4.5,
        altitude: 16.0,
        speed: 1.25,
        bearing: 90.0,
    }
}
