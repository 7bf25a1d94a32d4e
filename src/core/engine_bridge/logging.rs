//=========================================================================
// Logging Boundary
//=========================================================================
//
// EngineBoundary decorator that traces each outbound call on the
// `shim::engine` target before forwarding it to the wrapped engine.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::interface::{EngineBoundary, TouchPoints};

//=== LoggingBoundary =====================================================

/// Logs every engine call at debug level, then forwards it.
#[derive(Debug, Default)]
pub struct LoggingBoundary<E> {
    inner: E,
}

impl<E: EngineBoundary> LoggingBoundary<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: EngineBoundary> EngineBoundary for LoggingBoundary<E> {
    fn key_down(&mut self, ascii: u8, meta: i32) {
        debug!(target: "shim::engine", "key_down ascii=0x{:X}, meta=0x{:X}", ascii, meta);
        self.inner.key_down(ascii, meta);
    }

    fn key_up(&mut self, ascii: u8, meta: i32) {
        debug!(target: "shim::engine", "key_up ascii=0x{:X}, meta=0x{:X}", ascii, meta);
        self.inner.key_up(ascii, meta);
    }

    fn button_down(&mut self, device_id: i32, keycode: i32) {
        debug!(target: "shim::engine", "button_down id={}, keycode=0x{:X}", device_id, keycode);
        self.inner.button_down(device_id, keycode);
    }

    fn button_up(&mut self, device_id: i32, keycode: i32) {
        debug!(target: "shim::engine", "button_up id={}, keycode=0x{:X}", device_id, keycode);
        self.inner.button_up(device_id, keycode);
    }

    fn axis_move(&mut self, device_id: i32, axis: i32, value: f32) {
        debug!(
            target: "shim::engine",
            "axis_move id={}, axis=0x{:X}, value={}",
            device_id,
            axis,
            value
        );
        self.inner.axis_move(device_id, axis, value);
    }

    fn touch(&mut self, action: i32, count: i32, points: &TouchPoints) {
        debug!(
            target: "shim::engine",
            "touch action=0x{:X}, count={}, points={:?}",
            action,
            count,
            points
        );
        self.inner.touch(action, count, points);
    }

    fn accelerometer(&mut self, ax: f32, ay: f32, az: f32, rotation: i32) {
        debug!(
            target: "shim::engine",
            "accelerometer ax={}, ay={}, az={}, rotation={}",
            ax,
            ay,
            az,
            rotation
        );
        self.inner.accelerometer(ax, ay, az, rotation);
    }

    fn gyroscope(&mut self, ax: f32, ay: f32, az: f32) {
        debug!(target: "shim::engine", "gyroscope ax={}, ay={}, az={}", ax, ay, az);
        self.inner.gyroscope(ax, ay, az);
    }

    fn magnetometer(&mut self, mx: f32, my: f32, mz: f32) {
        debug!(target: "shim::engine", "magnetometer mx={}, my={}, mz={}", mx, my, mz);
        self.inner.magnetometer(mx, my, mz);
    }

    fn gps(
        &mut self,
        latitude: f64,
        longitude: f64,
        accuracy: f32,
        altitude: f32,
        speed: f32,
        bearing: f32,
    ) {
        debug!(target: "shim::engine", "gps lat={}, lon={}", latitude, longitude);
        debug!(
            target: "shim::engine",
            "gps accuracy={}, altitude={}, speed={}, bearing={}",
            accuracy,
            altitude,
            speed,
            bearing
        );
        self.inner.gps(latitude, longitude, accuracy, altitude, speed, bearing);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine_bridge::{EngineCall, RecordingBoundary};

    #[test]
    fn forwards_every_call_unchanged() {
        let mut engine = LoggingBoundary::new(RecordingBoundary::new());

        engine.key_up(b'z', 0x1);
        engine.touch(0, 1, &[(1.0, 2.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
        engine.gps(48.85, 2.35, 5.0, 35.0, 1.5, 270.0);

        let calls = engine.into_inner().take();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], EngineCall::KeyUp { ascii: b'z', meta: 0x1 });
        assert!(matches!(calls[1], EngineCall::Touch { action: 0, count: 1, .. }));
        assert!(matches!(calls[2], EngineCall::Gps { bearing, .. } if bearing == 270.0));
    }
}
