//=========================================================================
// Sensor Bridge
//=========================================================================
//
// Registration lifecycle of the accelerometer, magnetic-field and
// gyroscope listeners, plus forwarding of their samples.
//
// Architecture:
//   enable(kind)  → default_sensor() → register_listener() → bound
//   disable(kind) → unregister_listener()                  → unbound
//   host delivery → on_sensor_changed() → EngineBoundary
//
// UI thread only. At most one registration per kind; enable on a bound
// kind and disable on an unbound kind are no-ops. A device without the
// sensor simply stays unbound.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::engine_bridge::EngineBoundary;
use crate::core::host::{
    DisplayRotation, SamplingRate, SensorId, SensorKind, SensorSample, SensorService,
};

//=== SensorBridge ========================================================

/// Owns one optional registration per [`SensorKind`].
pub struct SensorBridge {
    service: Box<dyn SensorService>,
    display: Box<dyn DisplayRotation>,
    rate: SamplingRate,
    bound: [Option<SensorId>; 3],
}

impl SensorBridge {
    //--- Construction -----------------------------------------------------

    pub fn new(
        service: Box<dyn SensorService>,
        display: Box<dyn DisplayRotation>,
        rate: SamplingRate,
    ) -> Self {
        Self {
            service,
            display,
            rate,
            bound: [None; 3],
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Registers the default sensor of `kind` unless already bound.
    pub fn enable(&mut self, kind: SensorKind) {
        if self.is_bound(kind) {
            trace!(target: "shim::sensors", "{:?} already enabled", kind);
            return;
        }

        match self.service.default_sensor(kind) {
            Some(sensor) => {
                self.service.register_listener(sensor, self.rate);
                self.bound[kind.index()] = Some(sensor);
                debug!(target: "shim::sensors", "{:?} enabled ({:?})", kind, self.rate);
            }
            None => {
                debug!(target: "shim::sensors", "No {:?} on this device", kind);
            }
        }
    }

    /// Unregisters `kind` if bound.
    pub fn disable(&mut self, kind: SensorKind) {
        if let Some(sensor) = self.bound[kind.index()].take() {
            self.service.unregister_listener(sensor);
            debug!(target: "shim::sensors", "{:?} disabled", kind);
        }
    }

    /// Unregisters every bound kind.
    pub fn disable_all(&mut self) {
        for kind in SensorKind::ALL {
            self.disable(kind);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_bound(&self, kind: SensorKind) -> bool {
        self.bound[kind.index()].is_some()
    }

    pub fn any_bound(&self) -> bool {
        self.bound.iter().any(Option::is_some)
    }

    //--- Delivery ---------------------------------------------------------

    /// Forwards one sample. Accelerometer samples carry the current
    /// display rotation in degrees.
    pub fn on_sensor_changed<E: EngineBoundary + ?Sized>(
        &self,
        sample: &SensorSample,
        engine: &mut E,
    ) {
        let [x, y, z] = sample.values;
        match sample.kind {
            SensorKind::Accelerometer => {
                let rotation = self.display.rotation().degrees();
                engine.accelerometer(x, y, z, rotation);
            }
            SensorKind::MagneticField => engine.magnetometer(x, y, z),
            SensorKind::Gyroscope => engine.gyroscope(x, y, z),
        }
    }

    /// Accuracy changes are not forwarded.
    pub fn on_accuracy_changed(&self, _kind: SensorKind, _accuracy: i32) {}
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::engine_bridge::{EngineCall, RecordingBoundary};
    use crate::core::host::testing::{journal, HostOp, Journal, MockDisplay, MockSensors};
    use crate::core::host::{FixedRotation, Rotation};

    fn bridge(journal: &Journal) -> SensorBridge {
        SensorBridge::new(
            Box::new(MockSensors::all(journal)),
            Box::new(FixedRotation(Rotation::Deg0)),
            SamplingRate::Game,
        )
    }

    #[test]
    fn enable_twice_registers_once() {
        let journal = journal();
        let mut sensors = bridge(&journal);

        sensors.enable(SensorKind::Gyroscope);
        sensors.enable(SensorKind::Gyroscope);

        assert!(sensors.is_bound(SensorKind::Gyroscope));
        assert_eq!(
            *journal.borrow(),
            vec![HostOp::Register(SensorKind::Gyroscope, SamplingRate::Game)]
        );
    }

    #[test]
    fn disable_unbound_does_nothing() {
        let journal = journal();
        let mut sensors = bridge(&journal);

        sensors.disable(SensorKind::MagneticField);

        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn enable_then_disable_unbinds() {
        let journal = journal();
        let mut sensors = bridge(&journal);

        sensors.enable(SensorKind::Accelerometer);
        sensors.disable(SensorKind::Accelerometer);
        sensors.disable(SensorKind::Accelerometer);

        assert!(!sensors.is_bound(SensorKind::Accelerometer));
        assert_eq!(
            *journal.borrow(),
            vec![
                HostOp::Register(SensorKind::Accelerometer, SamplingRate::Game),
                HostOp::Unregister(SensorKind::Accelerometer),
            ]
        );
    }

    #[test]
    fn missing_hardware_stays_unbound() {
        let journal = journal();
        let mut sensors = SensorBridge::new(
            Box::new(MockSensors::only(&journal, &[SensorKind::Accelerometer])),
            Box::new(FixedRotation(Rotation::Deg0)),
            SamplingRate::Game,
        );

        sensors.enable(SensorKind::Gyroscope);
        sensors.disable(SensorKind::Gyroscope);

        assert!(!sensors.is_bound(SensorKind::Gyroscope));
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn configured_rate_is_used() {
        let journal = journal();
        let mut sensors = SensorBridge::new(
            Box::new(MockSensors::all(&journal)),
            Box::new(FixedRotation(Rotation::Deg0)),
            SamplingRate::Fastest,
        );

        sensors.enable(SensorKind::MagneticField);

        assert_eq!(
            *journal.borrow(),
            vec![HostOp::Register(SensorKind::MagneticField, SamplingRate::Fastest)]
        );
    }

    #[test]
    fn disable_all_clears_every_kind() {
        let journal = journal();
        let mut sensors = bridge(&journal);
        sensors.enable(SensorKind::Accelerometer);
        sensors.enable(SensorKind::Gyroscope);

        sensors.disable_all();
        sensors.disable_all();

        assert!(!sensors.any_bound());
        let unregisters = journal
            .borrow()
            .iter()
            .filter(|op| matches!(op, HostOp::Unregister(_)))
            .count();
        assert_eq!(unregisters, 2);
    }

    #[test]
    fn accelerometer_sample_carries_rotation() {
        let rotation = Rc::new(RefCell::new(Rotation::Deg90));
        let sensors = SensorBridge::new(
            Box::new(MockSensors::all(&journal())),
            Box::new(MockDisplay { rotation: rotation.clone() }),
            SamplingRate::Game,
        );
        let mut engine = RecordingBoundary::new();

        sensors.on_sensor_changed(
            &SensorSample::new(SensorKind::Accelerometer, 0.1, 9.8, 0.2),
            &mut engine,
        );
        *rotation.borrow_mut() = Rotation::Deg270;
        sensors.on_sensor_changed(
            &SensorSample::new(SensorKind::Accelerometer, 0.0, 0.0, 9.8),
            &mut engine,
        );

        assert_eq!(
            engine.calls(),
            &[
                EngineCall::Accelerometer { ax: 0.1, ay: 9.8, az: 0.2, rotation: 90 },
                EngineCall::Accelerometer { ax: 0.0, ay: 0.0, az: 9.8, rotation: 270 },
            ]
        );
    }

    #[test]
    fn magnetic_and_gyro_samples_forward_unmodified() {
        let sensors = bridge(&journal());
        let mut engine = RecordingBoundary::new();

        sensors.on_sensor_changed(
            &SensorSample::new(SensorKind::MagneticField, 22.0, -5.0, 40.0),
            &mut engine,
        );
        sensors.on_sensor_changed(
            &SensorSample::new(SensorKind::Gyroscope, 0.01, 0.02, 0.03),
            &mut engine,
        );
        sensors.on_accuracy_changed(SensorKind::Gyroscope, 3);

        assert_eq!(
            engine.calls(),
            &[
                EngineCall::Magnetometer { mx: 22.0, my: -5.0, mz: 40.0 },
                EngineCall::Gyroscope { ax: 0.01, ay: 0.02, az: 0.03 },
            ]
        );
    }
}
