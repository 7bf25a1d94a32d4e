//=========================================================================
// Input
//
// Normalization of host input into the engine's call ABI.
//
// Responsibilities:
// - Describe host key, generic-motion and touch events (`event`)
// - Track last-emitted joystick axis values (`axis_state`)
// - Classify and forward events to the engine (`normalizer`)
//
// Notes:
// All of this runs on the host UI thread, inside the host's input
// callback. Nothing here blocks or allocates per event.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod axis_state;
pub mod event;
mod normalizer;

//=== Public API ==========================================================

pub use axis_state::{AxisState, JOYSTICK_AXES};
pub use event::{
    action, axis, is_game_key, is_gamepad_button, keycode, meta, source, Disposition,
    GenericMotion, KeyInput, Pointer, TouchEvent, MAX_POINTERS,
};
pub use normalizer::{EventNormalizer, KeyRoute};
