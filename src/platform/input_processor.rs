//=========================================================================
// Key Translator
//=========================================================================
//
// Converts Winit keyboard events into host-numbered `KeyInput`s.
//
// Architecture:
//   Winit KeyEvent → KeyTranslator → KeyInput (host numbering) → Activity
//
// Stateful modifier tracking: caches modifier state from ModifiersChanged
// events and applies it as a host meta mask to every subsequent key.
// `unicode_char` is always the unmodified character, so Shift+A still
// reaches the engine as 'a' with SHIFT_ON set. Keys without a host
// counterpart are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey};

//=== Internal Dependencies ===============================================

use crate::core::input::{keycode, meta, KeyInput};

//=== KeyTranslator =======================================================

/// Converts Winit physical keys to host key events with cached modifiers.
pub(crate) struct KeyTranslator {
    meta_state: i32,
    device_id: i32,
}

impl KeyTranslator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(device_id: i32) -> Self {
        Self { meta_state: 0, device_id }
    }

    //--- Modifier State Management ----------------------------------------

    /// Updates cached modifier state (applied to subsequent keys).
    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.meta_state = meta_mask(state);
    }

    //--- Event Processing -------------------------------------------------

    /// Translates one physical key. Winit repeats become repeat count 1.
    pub(crate) fn translate(&self, key: PhysicalKey, repeat: bool) -> Option<KeyInput> {
        let PhysicalKey::Code(code) = key else {
            return None;
        };
        let (host_code, unicode) = host_key(code)?;

        Some(
            KeyInput::new(host_code, unicode)
                .with_meta(self.meta_state)
                .with_device(self.device_id)
                .with_repeat(i32::from(repeat)),
        )
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit modifier state to a host meta mask.
///
/// Winit normalizes platform keys (macOS Cmd → Super, Option → Alt).
pub(crate) fn meta_mask(state: ModifiersState) -> i32 {
    let mut mask = 0;
    if state.shift_key() {
        mask |= meta::SHIFT_ON;
    }
    if state.alt_key() {
        mask |= meta::ALT_ON;
    }
    if state.control_key() {
        mask |= meta::CTRL_ON;
    }
    if state.super_key() {
        mask |= meta::META_ON;
    }
    mask
}

/// Maps a Winit key code to `(host keycode, unmodified character)`.
///
/// Keys that produce no character map to character 0.
fn host_key(code: WinitKeyCode) -> Option<(i32, i32)> {
    use WinitKeyCode::*;

    let digit = |n: i32| (keycode::DIGIT_0 + n, '0' as i32 + n);
    let letter = |n: i32| (keycode::A + n, 'a' as i32 + n);

    let mapped = match code {
        //--- Digits -------------------------------------------------------

        Digit0 => digit(0),
        Digit1 => digit(1),
        Digit2 => digit(2),
        Digit3 => digit(3),
        Digit4 => digit(4),
        Digit5 => digit(5),
        Digit6 => digit(6),
        Digit7 => digit(7),
        Digit8 => digit(8),
        Digit9 => digit(9),

        //--- Letters ------------------------------------------------------

        KeyA => letter(0),
        KeyB => letter(1),
        KeyC => letter(2),
        KeyD => letter(3),
        KeyE => letter(4),
        KeyF => letter(5),
        KeyG => letter(6),
        KeyH => letter(7),
        KeyI => letter(8),
        KeyJ => letter(9),
        KeyK => letter(10),
        KeyL => letter(11),
        KeyM => letter(12),
        KeyN => letter(13),
        KeyO => letter(14),
        KeyP => letter(15),
        KeyQ => letter(16),
        KeyR => letter(17),
        KeyS => letter(18),
        KeyT => letter(19),
        KeyU => letter(20),
        KeyV => letter(21),
        KeyW => letter(22),
        KeyX => letter(23),
        KeyY => letter(24),
        KeyZ => letter(25),

        //--- Punctuation --------------------------------------------------

        Comma => (keycode::COMMA, ',' as i32),
        Period => (keycode::PERIOD, '.' as i32),
        Backquote => (keycode::GRAVE, '`' as i32),
        Minus => (keycode::MINUS, '-' as i32),
        Equal => (keycode::EQUALS, '=' as i32),
        BracketLeft => (keycode::LEFT_BRACKET, '[' as i32),
        BracketRight => (keycode::RIGHT_BRACKET, ']' as i32),
        Backslash => (keycode::BACKSLASH, '\\' as i32),
        Semicolon => (keycode::SEMICOLON, ';' as i32),
        Quote => (keycode::APOSTROPHE, '\'' as i32),
        Slash => (keycode::SLASH, '/' as i32),

        //--- Whitespace ---------------------------------------------------

        Space => (keycode::SPACE, ' ' as i32),
        Enter => (keycode::ENTER, '\n' as i32),
        Tab => (keycode::TAB, '\t' as i32),

        //--- Arrows (D-pad) -----------------------------------------------

        ArrowUp => (keycode::DPAD_UP, 0),
        ArrowDown => (keycode::DPAD_DOWN, 0),
        ArrowLeft => (keycode::DPAD_LEFT, 0),
        ArrowRight => (keycode::DPAD_RIGHT, 0),

        //--- Editing ------------------------------------------------------

        Escape => (keycode::ESCAPE, 0),
        Backspace => (keycode::DEL, 0),
        Delete => (keycode::FORWARD_DEL, 0),

        _ => return None,
    };

    Some(mapped)
}

//=========================================================================
// Unit Tests
//=========================================================================
