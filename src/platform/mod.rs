//=========================================================================
// Desktop Host
//
// Runs an `Activity` inside a Winit event loop so the shim can be driven
// on a desktop machine.
//
// Architecture:
// ```text
//  Main (UI) Thread:                         Engine Thread(s):
//  ┌─────────────────────────────────┐      ┌──────────────────┐
//  │  Winit Event Loop               │      │  Game Logic      │
//  │   ├─ resumed    → on_resume     │      │   ↓              │
//  │   ├─ suspended  → on_pause      │      │  CommandSender   │
//  │   ├─ Keyboard   → KeyTranslator │      │   .post(cmd)     │
//  │   │               → on_key_*    │      └────────┬─────────┘
//  │   ├─ Touch      → TouchTracker  │               │
//  │   │               → on_touch    │               │
//  │   └─ about_to_wait              │               │
//  │       → drain_commands() ◄──────┼───────────────┘
//  │       → WaitUntil(+16ms)        │
//  └─────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Polled command pickup**: the loop wakes at least every
//   `COMMAND_POLL_INTERVAL`, so posted commands run within one interval
//   without the engine thread needing a handle to the event loop
// - **Sticky modifiers**: modifier state persists across key events
//   until Winit reports a change
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `DesktopHost::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod touch_tracker;

//=== External Crates =====================================================

use std::time::{Duration, Instant};

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::activity::{Activity, LifecycleState};
use crate::core::engine_bridge::EngineBoundary;
use input_processor::KeyTranslator;
use touch_tracker::TouchTracker;

//=== Constants ===========================================================

/// Upper bound on the delay between posting a command and executing it.
pub const COMMAND_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Device id reported for the desktop keyboard.
pub const DESKTOP_KEYBOARD_ID: i32 = 0;

//=== HostError ===========================================================

/// Desktop host initialization and runtime errors.
///
/// These are fatal: without an event loop the activity cannot run.
#[derive(Debug)]
pub enum HostError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=== DesktopHost =========================================================

/// Winit application that owns and drives one [`Activity`].
///
/// # Lifecycle
///
/// 1. **Construction**: `DesktopHost::new(activity)`
/// 2. **Execution**: `host.run()` blocks in the event loop
/// 3. **Shutdown**: window close → `on_pause`, `on_destroy`, loop exit
///
/// # Thread Safety
///
/// Not `Send`: it stays on the main thread. Engine threads reach it only
/// through the activity's `CommandSender`.
pub struct DesktopHost<E: EngineBoundary> {
    activity: Activity<E>,

    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    keys: KeyTranslator,
    touches: TouchTracker,
    title: String,
}

impl<E: EngineBoundary> DesktopHost<E> {
    //--- Construction -----------------------------------------------------

    /// Wraps an activity. The window is created lazily in `resumed()`.
    pub fn new(activity: Activity<E>) -> Self {
        info!(target: "shim::desktop", "Desktop host initialized");
        Self {
            activity,
            window: None,
            keys: KeyTranslator::new(DESKTOP_KEYBOARD_ID),
            touches: TouchTracker::new(),
            title: String::from("LOAX"),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn activity(&self) -> &Activity<E> {
        &self.activity
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the event loop cannot be created or
    /// terminates abnormally.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), HostError> {
        debug!(target: "shim::desktop", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(HostError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(HostError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        if self.activity.state() == LifecycleState::Resumed {
            self.activity.on_pause();
        }
        self.activity.on_destroy();
        self.window = None;
        event_loop.exit();
    }

    fn dispatch_key(&mut self, event: &winit::event::KeyEvent) {
        let Some(key) = self.keys.translate(event.physical_key, event.repeat) else {
            trace!(target: "shim::desktop", "Unmapped key ignored");
            return;
        };

        let disposition = match event.state {
            ElementState::Pressed => self.activity.on_key_down(&key),
            ElementState::Released => self.activity.on_key_up(&key),
        };
        trace!(target: "shim::desktop", "Key {} {:?}", key.keycode, disposition);
    }
}

//=== Winit Integration ===================================================

impl<E: EngineBoundary> ApplicationHandler for DesktopHost<E> {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title(self.title.clone())
                .with_inner_size(LogicalSize::new(800, 600));

            match event_loop.create_window(attrs) {
                Ok(window) => {
                    info!(
                        target: "shim::desktop",
                        "Window created: {}x{} @ {}x DPI",
                        window.inner_size().width,
                        window.inner_size().height,
                        window.scale_factor()
                    );
                    self.window = Some(window);
                }
                Err(e) => {
                    error!(target: "shim::desktop", "Window creation failed: {}", e);
                    self.shut_down(event_loop);
                    return;
                }
            }
        }

        self.activity.on_resume();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.activity.on_pause();
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "shim::desktop", "Window close requested");
                self.shut_down(event_loop);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "shim::desktop", "Modifiers changed: {:?}", modifiers);
                self.keys.update_modifiers(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, .. } => self.dispatch_key(&event),

            WindowEvent::Touch(touch) => {
                let x = touch.location.x as f32;
                let y = touch.location.y as f32;
                if let Some(event) = self.touches.process(touch.id, touch.phase, x, y) {
                    self.activity.on_touch(&event);
                }
            }

            _ => {
                // Ignore: Resized, Focused, CursorMoved, etc.
            }
        }
    }

    /// Executes queued engine commands once per loop iteration.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let executed = self.activity.drain_commands();
        if executed > 0 {
            trace!(target: "shim::desktop", "Executed {} commands", executed);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + COMMAND_POLL_INTERVAL));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityBuilder;
    use crate::core::engine_bridge::RecordingBoundary;
    use crate::core::host::NullRenderSurface;

    //=====================================================================
    // DesktopHost Tests
    //=====================================================================

    #[test]
    fn host_creation_is_lazy() {
        let activity = ActivityBuilder::new(RecordingBoundary::new(), Box::new(NullRenderSurface)).build();
        let host = DesktopHost::new(activity).with_title("test");

        assert!(host.window.is_none(), "Window should be created lazily");
        assert_eq!(host.title, "test");
        assert_eq!(host.activity().state(), LifecycleState::Created);
    }

    #[test]
    fn poll_interval_is_one_frame() {
        assert_eq!(COMMAND_POLL_INTERVAL, Duration::from_millis(16));
    }

    //=====================================================================
    // HostError Tests
    //=====================================================================

    #[test]
    fn host_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<HostError>();
    }
}
