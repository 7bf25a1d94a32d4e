//=========================================================================
// Touch Tracker
//
// Aggregates Winit's per-finger touch phases into host-style multi-touch
// events: one event per phase change, carrying every live pointer.
//
// Responsibilities:
// - Assign each finger the lowest free pointer id (ids are reused)
// - Produce DOWN / POINTER_DOWN / MOVE / POINTER_UP / UP / CANCEL
//   action codes with the pointer index in the high byte
// - Keep a lifted pointer in the event that reports it, then retire it
//
// Notes:
// The returned `TouchEvent` borrows the tracker's pointer list, so it
// must be handed to the activity before the next `process` call.
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::event::TouchPhase;

//=== Internal Dependencies ===============================================

use crate::core::input::{action, Pointer, TouchEvent};

//=== TouchTracker ========================================================

pub(crate) struct TouchTracker {
    /// Live pointers, in the order they went down.
    pointers: Vec<Pointer>,

    /// Winit finger id for each entry of `pointers`.
    fingers: Vec<u64>,

    /// Finger reported as lifted by the previous event.
    lifted: Option<u64>,
}

impl TouchTracker {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            pointers: Vec::with_capacity(4),
            fingers: Vec::with_capacity(4),
            lifted: None,
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Records one finger phase and returns the resulting touch event.
    ///
    /// Returns `None` for moves or lifts of fingers never seen going down.
    pub(crate) fn process(
        &mut self,
        finger: u64,
        phase: TouchPhase,
        x: f32,
        y: f32,
    ) -> Option<TouchEvent<'_>> {
        self.retire_lifted();

        let action = match phase {
            TouchPhase::Started => self.press(finger, x, y),
            TouchPhase::Moved => {
                let index = self.index_of(finger)?;
                self.pointers[index].x = x;
                self.pointers[index].y = y;
                action::MOVE
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let index = self.index_of(finger)?;
                self.pointers[index].x = x;
                self.pointers[index].y = y;
                self.lifted = Some(finger);
                match (phase, self.pointers.len()) {
                    (TouchPhase::Cancelled, 1) => action::CANCEL,
                    (_, 1) => action::UP,
                    _ => action::with_pointer_index(action::POINTER_UP, index),
                }
            }
        };

        trace!(
            target: "shim::desktop",
            "Touch finger {} {:?} -> action {:#x} ({} pointers)",
            finger,
            phase,
            action,
            self.pointers.len()
        );
        Some(TouchEvent::new(action, &self.pointers))
    }

    //--- Internal Helpers -------------------------------------------------

    fn press(&mut self, finger: u64, x: f32, y: f32) -> i32 {
        if let Some(index) = self.index_of(finger) {
            // Winit repeated a start for a live finger
            self.pointers[index].x = x;
            self.pointers[index].y = y;
            return action::MOVE;
        }

        let id = self.lowest_free_id();
        self.pointers.push(Pointer { id, x, y });
        self.fingers.push(finger);

        match self.pointers.len() {
            1 => action::DOWN,
            n => action::with_pointer_index(action::POINTER_DOWN, n - 1),
        }
    }

    fn retire_lifted(&mut self) {
        if let Some(finger) = self.lifted.take() {
            if let Some(index) = self.index_of(finger) {
                self.pointers.remove(index);
                self.fingers.remove(index);
            }
        }
    }

    fn index_of(&self, finger: u64) -> Option<usize> {
        self.fingers.iter().position(|&f| f == finger)
    }

    fn lowest_free_id(&self) -> i32 {
        (0..)
            .find(|id| self.pointers.iter().all(|p| p.id != *id))
            .unwrap_or(0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(event: Option<TouchEvent<'_>>) -> (i32, Vec<(i32, f32, f32)>) {
        let event = event.expect("touch event");
        (event.action, event.pointers.iter().map(|p| (p.id, p.x, p.y)).collect())
    }

    #[test]
    fn single_finger_gesture() {
        let mut tracker = TouchTracker::new();

        assert_eq!(
            summary(tracker.process(10, TouchPhase::Started, 1.0, 2.0)),
            (action::DOWN, vec![(0, 1.0, 2.0)])
        );
        assert_eq!(
            summary(tracker.process(10, TouchPhase::Moved, 3.0, 4.0)),
            (action::MOVE, vec![(0, 3.0, 4.0)])
        );
        assert_eq!(
            summary(tracker.process(10, TouchPhase::Ended, 5.0, 6.0)),
            (action::UP, vec![(0, 5.0, 6.0)])
        );

        // The lifted finger is gone: the next press starts a fresh gesture
        let event = tracker.process(11, TouchPhase::Started, 7.0, 8.0).unwrap();
        assert_eq!(event.action, action::DOWN);
        assert_eq!(event.pointer_count(), 1);
    }

    #[test]
    fn second_finger_reports_pointer_index() {
        let mut tracker = TouchTracker::new();

        tracker.process(1, TouchPhase::Started, 0.0, 0.0);
        let (action, pointers) = summary(tracker.process(2, TouchPhase::Started, 9.0, 9.0));

        assert_eq!(action, action::with_pointer_index(action::POINTER_DOWN, 1));
        assert_eq!(pointers.len(), 2);
        assert_eq!(pointers[1].0, 1);
    }

    #[test]
    fn lifting_first_of_two_fingers() {
        let mut tracker = TouchTracker::new();
        tracker.process(1, TouchPhase::Started, 0.0, 0.0);
        tracker.process(2, TouchPhase::Started, 9.0, 9.0);

        let (action, pointers) = summary(tracker.process(1, TouchPhase::Ended, 0.0, 0.0));
        assert_eq!(action, action::with_pointer_index(action::POINTER_UP, 0));
        assert_eq!(pointers.len(), 2);

        let (action, pointers) = summary(tracker.process(2, TouchPhase::Moved, 8.0, 8.0));
        assert_eq!(action, action::MOVE);
        assert_eq!(pointers, vec![(1, 8.0, 8.0)]);
    }

    #[test]
    fn freed_ids_are_reused_lowest_first() {
        let mut tracker = TouchTracker::new();
        tracker.process(1, TouchPhase::Started, 0.0, 0.0);
        tracker.process(2, TouchPhase::Started, 0.0, 0.0);
        tracker.process(1, TouchPhase::Ended, 0.0, 0.0);

        let (_, pointers) = summary(tracker.process(3, TouchPhase::Started, 5.0, 5.0));

        let ids: Vec<i32> = pointers.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![1, 0]);
    }

    #[test]
    fn cancel_of_last_finger() {
        let mut tracker = TouchTracker::new();
        tracker.process(4, TouchPhase::Started, 0.0, 0.0);

        let (action, _) = summary(tracker.process(4, TouchPhase::Cancelled, 0.0, 0.0));

        assert_eq!(action, action::CANCEL);
    }

    #[test]
    fn unknown_finger_is_ignored() {
        let mut tracker = TouchTracker::new();

        assert!(tracker.process(99, TouchPhase::Moved, 0.0, 0.0).is_none());
        assert!(tracker.process(99, TouchPhase::Ended, 0.0, 0.0).is_none());
    }
}
