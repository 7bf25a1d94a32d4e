//=========================================================================
// Engine Boundary Interface
//=========================================================================
//
// The fixed set of outbound calls into the native engine.
//
// Every call is fire-and-forget: nothing is returned and nothing the
// engine does can fail back into the shim. The touch and axis shapes are
// a wire contract with the engine (exactly four coordinate pairs, four
// stick axes) and must not change.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::MAX_POINTERS;

//=== TouchPoints =========================================================

/// Four `(x, y)` pairs; slots past the live pointer count are `(0.0, 0.0)`.
pub type TouchPoints = [(f32, f32); MAX_POINTERS];

//=== EngineBoundary ======================================================

/// Outbound call surface of the native engine.
///
/// Implementations are driven from the UI thread only; the trait is not
/// required to be `Send`.
pub trait EngineBoundary {
    /// Printable key pressed (`ascii` in `1..=127`).
    fn key_down(&mut self, ascii: u8, meta: i32);

    /// Printable key released.
    fn key_up(&mut self, ascii: u8, meta: i32);

    /// Directional or gamepad button pressed.
    fn button_down(&mut self, device_id: i32, keycode: i32);

    /// Directional or gamepad button released.
    fn button_up(&mut self, device_id: i32, keycode: i32);

    /// One joystick axis changed value.
    fn axis_move(&mut self, device_id: i32, axis: i32, value: f32);

    /// Multi-touch sample. `count` is the live pointer count and may
    /// exceed the four populated slots.
    fn touch(&mut self, action: i32, count: i32, points: &TouchPoints);

    /// Accelerometer sample with display rotation in degrees.
    fn accelerometer(&mut self, ax: f32, ay: f32, az: f32, rotation: i32);

    fn gyroscope(&mut self, ax: f32, ay: f32, az: f32);

    fn magnetometer(&mut self, mx: f32, my: f32, mz: f32);

    fn gps(
        &mut self,
        latitude: f64,
        longitude: f64,
        accuracy: f32,
        altitude: f32,
        speed: f32,
        bearing: f32,
    );
}

//=== EngineCall ==========================================================

/// Value form of one [`EngineBoundary`] call.
///
/// Used to record call sequences (see `RecordingBoundary`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCall {
    KeyDown { ascii: u8, meta: i32 },
    KeyUp { ascii: u8, meta: i32 },
    ButtonDown { device_id: i32, keycode: i32 },
    ButtonUp { device_id: i32, keycode: i32 },
    AxisMove { device_id: i32, axis: i32, value: f32 },
    Touch { action: i32, count: i32, points: TouchPoints },
    Accelerometer { ax: f32, ay: f32, az: f32, rotation: i32 },
    Gyroscope { ax: f32, ay: f32, az: f32 },
    Magnetometer { mx: f32, my: f32, mz: f32 },
    Gps {
        latitude: f64,
        longitude: f64,
        accuracy: f32,
        altitude: f32,
        speed: f32,
        bearing: f32,
    },
}

impl EngineCall {
    /// Replays this call against an engine.
    pub fn apply<E: EngineBoundary + ?Sized>(&self, engine: &mut E) {
        match *self {
            Self::KeyDown { ascii, meta } => engine.key_down(ascii, meta),
            Self::KeyUp { ascii, meta } => engine.key_up(ascii, meta),
            Self::ButtonDown { device_id, keycode } => engine.button_down(device_id, keycode),
            Self::ButtonUp { device_id, keycode } => engine.button_up(device_id, keycode),
            Self::AxisMove { device_id, axis, value } => engine.axis_move(device_id, axis, value),
            Self::Touch { action, count, points } => engine.touch(action, count, &points),
            Self::Accelerometer { ax, ay, az, rotation } => {
                engine.accelerometer(ax, ay, az, rotation)
            }
            Self::Gyroscope { ax, ay, az } => engine.gyroscope(ax, ay, az),
            Self::Magnetometer { mx, my, mz } => engine.magnetometer(mx, my, mz),
            Self::Gps { latitude, longitude, accuracy, altitude, speed, bearing } => {
                engine.gps(latitude, longitude, accuracy, altitude, speed, bearing)
            }
        }
    }
}
