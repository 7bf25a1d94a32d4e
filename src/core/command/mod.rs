//=========================================================================
// Command Dispatch
//=========================================================================
//
// Engine-issued sensor/GPS requests and the channel that carries them to
// the UI thread.
//
// Components:
// - `request`: the closed command set and its wire tags
// - `dispatcher`: sender/consumer endpoints of the channel
//
//=========================================================================

//=== Module Declarations =================================================

mod request;
mod dispatcher;

//=== Public API ==========================================================

pub use request::{Capability, Command};
pub use dispatcher::{CommandDispatcher, CommandSender, MAX_COMMANDS_PER_DRAIN};
