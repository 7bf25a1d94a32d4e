//=========================================================================
// Axis State
//=========================================================================
//
// Last-emitted value of each joystick axis the engine consumes.
//
// Architecture:
//   GenericMotion.axes → update(slot, value) → changed? → axis_move()
//
// Change detection is exact float inequality per axis, not thresholded
// and not per event.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::axis;

//=== Constants ===========================================================

/// Host axis ids of the four tracked slots: left stick X/Y, right stick Z/RZ.
pub const JOYSTICK_AXES: [i32; 4] = [axis::X, axis::Y, axis::Z, axis::RZ];

//=== AxisState ===========================================================

/// Two 2-axis sticks worth of last-emitted values. Starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisState {
    values: [f32; 4],
}

impl AxisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last emitted value for `slot` (index into [`JOYSTICK_AXES`]).
    pub fn value(&self, slot: usize) -> f32 {
        self.values[slot]
    }

    pub fn values(&self) -> [f32; 4] {
        self.values
    }

    /// Stores `value` for `slot` if it differs from the stored one.
    ///
    /// Returns `true` when the value changed and must be emitted.
    pub fn update(&mut self, slot: usize, value: f32) -> bool {
        if value != self.values[slot] {
            self.values[slot] = value;
            true
        } else {
            false
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(AxisState::new().values(), [0.0; 4]);
    }

    #[test]
    fn update_reports_change_only_once() {
        let mut state = AxisState::new();

        assert!(state.update(2, 0.75));
        assert!(!state.update(2, 0.75));
        assert_eq!(state.value(2), 0.75);
    }

    #[test]
    fn zero_is_not_a_change_from_initial_state() {
        let mut state = AxisState::new();
        assert!(!state.update(0, 0.0));
        assert!(!state.update(0, -0.0));
    }

    #[test]
    fn slots_are_independent() {
        let mut state = AxisState::new();
        state.update(0, 1.0);

        assert_eq!(state.values(), [1.0, 0.0, 0.0, 0.0]);
    }
}
