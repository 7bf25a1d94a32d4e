//=========================================================================
// Host Input Event Types
//
// Portable representation of the input events a mobile host delivers on
// its UI thread: key presses, generic (joystick) motion and multi-touch.
//
// Responsibilities:
// - Carry host event payloads with host numbering (key codes, axis ids,
//   action codes, meta bits) so they can be forwarded verbatim
// - Classify keys (printable ASCII, directional, gamepad)
// - Expose pointer lookup for touch events, which may fail
//
// Design:
// All numeric constants follow the host platform's numbering because
// the engine receives them unchanged across the boundary.
//
//=========================================================================

//=== Constants ===========================================================

/// Number of pointer slots carried by a touch call.
pub const MAX_POINTERS: usize = 4;

/// Host key codes used by the shim.
pub mod keycode {
    pub const DIGIT_0: i32 = 7;
    pub const DIGIT_9: i32 = 16;
    pub const DPAD_UP: i32 = 19;
    pub const DPAD_DOWN: i32 = 20;
    pub const DPAD_LEFT: i32 = 21;
    pub const DPAD_RIGHT: i32 = 22;
    pub const DPAD_CENTER: i32 = 23;
    pub const A: i32 = 29;
    pub const Z: i32 = 54;
    pub const COMMA: i32 = 55;
    pub const PERIOD: i32 = 56;
    pub const TAB: i32 = 61;
    pub const SPACE: i32 = 62;
    pub const ENTER: i32 = 66;
    pub const DEL: i32 = 67;
    pub const GRAVE: i32 = 68;
    pub const MINUS: i32 = 69;
    pub const EQUALS: i32 = 70;
    pub const LEFT_BRACKET: i32 = 71;
    pub const RIGHT_BRACKET: i32 = 72;
    pub const BACKSLASH: i32 = 73;
    pub const SEMICOLON: i32 = 74;
    pub const APOSTROPHE: i32 = 75;
    pub const SLASH: i32 = 76;
    pub const BUTTON_A: i32 = 96;
    pub const BUTTON_MODE: i32 = 110;
    pub const ESCAPE: i32 = 111;
    pub const FORWARD_DEL: i32 = 112;
    pub const BUTTON_1: i32 = 188;
    pub const BUTTON_16: i32 = 203;
}

/// Host meta-state bits.
pub mod meta {
    pub const SHIFT_ON: i32 = 0x1;
    pub const ALT_ON: i32 = 0x2;
    pub const CTRL_ON: i32 = 0x1000;
    pub const META_ON: i32 = 0x10000;
}

/// Host input-source classes.
pub mod source {
    pub const CLASS_JOYSTICK: i32 = 0x10;
}

/// Host motion action codes.
pub mod action {
    pub const DOWN: i32 = 0;
    pub const UP: i32 = 1;
    pub const MOVE: i32 = 2;
    pub const CANCEL: i32 = 3;
    pub const POINTER_DOWN: i32 = 5;
    pub const POINTER_UP: i32 = 6;
    pub const POINTER_INDEX_SHIFT: u32 = 8;

    /// Combines a pointer action with the index of the pointer it concerns.
    pub fn with_pointer_index(action: i32, index: usize) -> i32 {
        action | ((index as i32) << POINTER_INDEX_SHIFT)
    }
}

/// Host joystick axis ids.
pub mod axis {
    pub const X: i32 = 0;
    pub const Y: i32 = 1;
    pub const Z: i32 = 11;
    pub const RZ: i32 = 14;
}

//=== Key Classification ==================================================

/// Returns `true` for keys the host classifies as gamepad buttons.
pub fn is_gamepad_button(code: i32) -> bool {
    (keycode::BUTTON_A..=keycode::BUTTON_MODE).contains(&code)
        || (keycode::BUTTON_1..=keycode::BUTTON_16).contains(&code)
}

/// Returns `true` for D-pad keys and gamepad buttons.
pub fn is_game_key(code: i32) -> bool {
    matches!(
        code,
        keycode::DPAD_CENTER
            | keycode::DPAD_UP
            | keycode::DPAD_DOWN
            | keycode::DPAD_LEFT
            | keycode::DPAD_RIGHT
    ) || is_gamepad_button(code)
}

//=== KeyInput ============================================================

/// One key-down or key-up as delivered by the host.
///
/// `unicode_char` is the character the key produces with an empty meta
/// state (0 when the key produces none). The active modifiers travel
/// separately in `meta_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub keycode: i32,
    pub unicode_char: i32,
    pub meta_state: i32,
    pub device_id: i32,
    pub repeat_count: i32,
}

impl KeyInput {
    pub fn new(keycode: i32, unicode_char: i32) -> Self {
        Self {
            keycode,
            unicode_char,
            meta_state: 0,
            device_id: 0,
            repeat_count: 0,
        }
    }

    pub fn with_meta(mut self, meta_state: i32) -> Self {
        self.meta_state = meta_state;
        self
    }

    pub fn with_device(mut self, device_id: i32) -> Self {
        self.device_id = device_id;
        self
    }

    pub fn with_repeat(mut self, repeat_count: i32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// The printable ASCII code of this key, if it has one (1..=127).
    pub fn printable_ascii(&self) -> Option<u8> {
        if (1..128).contains(&self.unicode_char) {
            Some(self.unicode_char as u8)
        } else {
            None
        }
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat_count > 0
    }
}

//=== GenericMotion =======================================================

/// A generic motion event (joystick, trackball, etc.).
///
/// Only the four stick axes the engine consumes are carried, in the order
/// X, Y, Z, RZ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenericMotion {
    pub source: i32,
    pub action: i32,
    pub device_id: i32,
    pub axes: [f32; 4],
}

impl GenericMotion {
    /// Joystick move with the given stick values.
    pub fn joystick(device_id: i32, x: f32, y: f32, z: f32, rz: f32) -> Self {
        Self {
            source: source::CLASS_JOYSTICK,
            action: action::MOVE,
            device_id,
            axes: [x, y, z, rz],
        }
    }

    pub fn is_joystick(&self) -> bool {
        self.source & source::CLASS_JOYSTICK != 0
    }

    pub fn is_move(&self) -> bool {
        self.action == action::MOVE
    }
}

//=== Touch ===============================================================

/// One live pointer of a touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

/// A multi-touch event borrowed from the host for the duration of one
/// callback.
#[derive(Debug, Clone, Copy)]
pub struct TouchEvent<'a> {
    pub action: i32,
    pub pointers: &'a [Pointer],
}

impl<'a> TouchEvent<'a> {
    pub fn new(action: i32, pointers: &'a [Pointer]) -> Self {
        Self { action, pointers }
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Index of the pointer with the given id, if it is live.
    pub fn find_pointer_index(&self, pointer_id: i32) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == pointer_id)
    }

    /// Coordinates of the pointer at `index`.
    pub fn coords(&self, index: usize) -> Option<(f32, f32)> {
        self.pointers.get(index).map(|p| (p.x, p.y))
    }
}

//=== Disposition =========================================================

/// Result of handing an input event to the shim.
///
/// `Unhandled` tells the host to run its default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Consumed,
    Unhandled,
}

impl Disposition {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
