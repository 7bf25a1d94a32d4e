//=========================================================================
// LOAX Shim: Library Root
//
// Platform-integration layer between a host UI thread and an external
// native rendering/simulation engine.
//
// Responsibilities:
// - Normalize host input (keys, multi-touch, joystick axes) into the
//   engine's fixed call ABI (`EngineBoundary`)
// - Own the enable/disable lifecycle of motion sensors and GPS
// - Carry engine-issued sensor/GPS commands across threads and execute
//   them on the UI thread
//
// Typical usage:
// ```no_run
// use loax_shim::prelude::*;
//
// # fn surface() -> Box<dyn RenderSurface> { Box::new(NullRenderSurface) }
// let mut activity = ActivityBuilder::new(RecordingBoundary::new(), surface())
//     .with_key_repeat_filter(true)
//     .build();
//
// let commands = activity.command_sender();
// std::thread::spawn(move || commands.post(Command::GpsEnable));
//
// activity.on_resume();
// activity.drain_commands();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the host-independent state machines: input normalization,
// sensor/location bridges, the command dispatcher and the engine
// boundary contract.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` drives the core from a winit event loop (desktop host).
// `activity` composes the core into one host-facing lifecycle object.
//
mod activity;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use activity::{Activity, ActivityBuilder, ActivityConfig, LifecycleState};
pub use platform::{DesktopHost, HostError};
