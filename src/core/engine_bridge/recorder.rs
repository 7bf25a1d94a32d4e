//=========================================================================
// Recording Boundary
//=========================================================================
//
// EngineBoundary implementation that stores every call in order.
//
// Used by tests and by hosts that want to batch engine calls and replay
// them elsewhere (see `EngineCall::apply`).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::interface::{EngineBoundary, EngineCall, TouchPoints};

//=== RecordingBoundary ===================================================

/// Records outbound engine calls in emission order.
#[derive(Debug, Default, Clone)]
pub struct RecordingBoundary {
    calls: Vec<EngineCall>,
}

impl RecordingBoundary {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// All calls recorded so far.
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Takes the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<EngineCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Replays every recorded call into `engine`, then clears.
    pub fn flush_into<E: EngineBoundary + ?Sized>(&mut self, engine: &mut E) {
        for call in self.calls.drain(..) {
            call.apply(engine);
        }
    }
}

impl EngineBoundary for RecordingBoundary {
    fn key_down(&mut self, ascii: u8, meta: i32) {
        self.calls.push(EngineCall::KeyDown { ascii, meta });
    }

    fn key_up(&mut self, ascii: u8, meta: i32) {
        self.calls.push(EngineCall::KeyUp { ascii, meta });
    }

    fn button_down(&mut self, device_id: i32, keycode: i32) {
        self.calls.push(EngineCall::ButtonDown { device_id, keycode });
    }

    fn button_up(&mut self, device_id: i32, keycode: i32) {
        self.calls.push(EngineCall::ButtonUp { device_id, keycode });
    }

    fn axis_move(&mut self, device_id: i32, axis: i32, value: f32) {
        self.calls.push(EngineCall::AxisMove { device_id, axis, value });
    }

    fn touch(&mut self, action: i32, count: i32, points: &TouchPoints) {
        self.calls.push(EngineCall::Touch { action, count, points: *points });
    }

    fn accelerometer(&mut self, ax: f32, ay: f32, az: f32, rotation: i32) {
        self.calls.push(EngineCall::Accelerometer { ax, ay, az, rotation });
    }

    fn gyroscope(&mut self, ax: f32, ay: f32, az: f32) {
        self.calls.push(EngineCall::Gyroscope { ax, ay, az });
    }

    fn magnetometer(&mut self, mx: f32, my: f32, mz: f32) {
        self.calls.push(EngineCall::Magnetometer { mx, my, mz });
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
        self.calls.push(EngineCall::Gps {
            latitude,
            longitude,
            accuracy,
            altitude,
            speed,
            bearing,
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
