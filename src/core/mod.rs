//=========================================================================
// Core Systems
//
// Host-independent state machines of the shim.
//
// Architecture:
// ```text
//  UI Thread                                   Engine Thread
//  ┌─────────────────────────────────────┐    ┌──────────────────┐
//  │ host input ─► EventNormalizer ──────┼──► │ EngineBoundary   │
//  │                                     │    │                  │
//  │ CommandDispatcher ◄─── channel ─────┼─── │ CommandSender    │
//  │   ↓ drain()                         │    └──────────────────┘
//  │ SensorBridge / LocationBridge       │
//  │   ↓ host callbacks                  │
//  │ EngineBoundary (samples)            │
//  └─────────────────────────────────────┘
// ```
//
// Notes:
// Everything except `CommandSender` lives on the UI thread. The command
// channel is the only cross-thread boundary; bridge state needs no lock
// because it is mutated from that single thread only.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod command;
pub mod engine_bridge;
pub mod host;
pub mod input;
pub mod sensors;
