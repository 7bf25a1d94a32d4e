//=========================================================================
// Event Normalizer
//=========================================================================
//
// Translates host input into canonical engine calls.
//
// Architecture:
//   KeyInput      → classify() → key_down/key_up | button_down/button_up
//   GenericMotion → AxisState  → axis_move (changed axes only)
//   TouchEvent    → slot map   → touch (exactly one call)
//
// Runs synchronously on the UI thread inside the host's input callback
// and never blocks. Emission happens before the handler returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::axis_state::{AxisState, JOYSTICK_AXES};
use super::event::{is_game_key, Disposition, GenericMotion, KeyInput, TouchEvent, MAX_POINTERS};
use crate::core::engine_bridge::{EngineBoundary, TouchPoints};

//=== KeyRoute ============================================================

/// Where a key event goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    /// Printable key: forwarded as (ascii, meta).
    Ascii(u8),

    /// D-pad or gamepad button: forwarded as (device id, keycode).
    Button,

    /// Neither; consumed without an engine call.
    Ignored,
}

impl KeyRoute {
    /// Printable ASCII wins over button classification.
    pub fn classify(event: &KeyInput) -> Self {
        if let Some(ascii) = event.printable_ascii() {
            Self::Ascii(ascii)
        } else if is_game_key(event.keycode) {
            Self::Button
        } else {
            Self::Ignored
        }
    }
}

//=== EventNormalizer =====================================================

/// Converts host key, joystick and touch events into engine calls.
///
/// Owns the per-axis state used to suppress unchanged joystick values.
pub struct EventNormalizer {
    axes: AxisState,
    filter_key_repeat: bool,
}

impl EventNormalizer {
    //--- Construction -----------------------------------------------------

    /// `filter_key_repeat` drops auto-repeated key-downs (repeat count > 0).
    pub fn new(filter_key_repeat: bool) -> Self {
        Self {
            axes: AxisState::new(),
            filter_key_repeat,
        }
    }

    pub fn axis_state(&self) -> &AxisState {
        &self.axes
    }

    //--- Keys -------------------------------------------------------------

    /// Handles a key-down. Always consumed.
    pub fn key_down<E: EngineBoundary + ?Sized>(
        &mut self,
        event: &KeyInput,
        engine: &mut E,
    ) -> Disposition {
        if self.filter_key_repeat && event.is_repeat() {
            trace!(
                target: "shim::input",
                "Key repeat filtered (keycode={}, repeat={})",
                event.keycode,
                event.repeat_count
            );
            return Disposition::Consumed;
        }

        match KeyRoute::classify(event) {
            KeyRoute::Ascii(ascii) => engine.key_down(ascii, event.meta_state),
            KeyRoute::Button => engine.button_down(event.device_id, event.keycode),
            KeyRoute::Ignored => {
                trace!(target: "shim::input", "Unmapped key {} ignored", event.keycode)
            }
        }
        Disposition::Consumed
    }

    /// Handles a key-up. Always consumed; never repeat-filtered.
    pub fn key_up<E: EngineBoundary + ?Sized>(
        &mut self,
        event: &KeyInput,
        engine: &mut E,
    ) -> Disposition {
        match KeyRoute::classify(event) {
            KeyRoute::Ascii(ascii) => engine.key_up(ascii, event.meta_state),
            KeyRoute::Button => engine.button_up(event.device_id, event.keycode),
            KeyRoute::Ignored => {
                trace!(target: "shim::input", "Unmapped key {} ignored", event.keycode)
            }
        }
        Disposition::Consumed
    }

    //--- Joystick ---------------------------------------------------------

    /// Handles a generic motion event.
    ///
    /// Joystick moves are consumed and emit one `axis_move` per axis whose
    /// value changed. Anything else is left to the host.
    pub fn generic_motion<E: EngineBoundary + ?Sized>(
        &mut self,
        event: &GenericMotion,
        engine: &mut E,
    ) -> Disposition {
        if !event.is_joystick() || !event.is_move() {
            return Disposition::Unhandled;
        }

        for (slot, (&axis, &value)) in JOYSTICK_AXES.iter().zip(event.axes.iter()).enumerate() {
            if self.axes.update(slot, value) {
                engine.axis_move(event.device_id, axis, value);
            }
        }
        Disposition::Consumed
    }

    //--- Touch ------------------------------------------------------------

    /// Handles a touch event with exactly one `touch` call.
    ///
    /// Zero pointers or a failed pointer lookup leaves the event unhandled
    /// and makes no call.
    pub fn touch<E: EngineBoundary + ?Sized>(
        &self,
        event: &TouchEvent<'_>,
        engine: &mut E,
    ) -> Disposition {
        let count = event.pointer_count();
        if count == 0 {
            return Disposition::Unhandled;
        }

        match Self::touch_points(event) {
            Some(points) => {
                engine.touch(event.action, count as i32, &points);
                Disposition::Consumed
            }
            None => {
                trace!(
                    target: "shim::input",
                    "Touch dropped: pointer lookup failed (action=0x{:X}, count={})",
                    event.action,
                    count
                );
                Disposition::Unhandled
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Maps pointer ids 0..4 to the fixed slots, zero-padding the rest.
    ///
    /// A single pointer is read by index; with several, each slot looks up
    /// pointer id `slot`, and a missing id fails the whole event.
    fn touch_points(event: &TouchEvent<'_>) -> Option<TouchPoints> {
        let mut points: TouchPoints = [(0.0, 0.0); MAX_POINTERS];
        let count = event.pointer_count();

        if count == 1 {
            points[0] = event.coords(0)?;
            return Some(points);
        }

        for (slot, point) in points.iter_mut().enumerate().take(count.min(MAX_POINTERS)) {
            let index = event.find_pointer_index(slot as i32)?;
            *point = event.coords(index)?;
        }
        Some(points)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
