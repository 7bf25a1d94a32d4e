//=========================================================================
// Command Dispatcher
//=========================================================================
//
// Cross-thread command channel from the engine thread to the UI thread.
//
// Architecture:
//   Engine thread(s): CommandSender::post() ──► crossbeam channel
//                                                    ↓
//   UI thread:        CommandDispatcher::drain(execute) → bridges
//
// `post` never blocks and never fails past its boundary: a full bounded
// queue or a torn-down dispatcher drops the command with a log line.
// Draining is FIFO and bounded per call to avoid starving the UI thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TryRecvError, TrySendError};
use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::request::Command;

//=== Constants ===========================================================

/// Upper bound on commands executed per `drain` call.
pub const MAX_COMMANDS_PER_DRAIN: usize = 64;

//=== CommandSender =======================================================

/// Engine-side endpoint. Cheap to clone and safe to use from any thread.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    /// Queues `command` for execution on the UI thread.
    pub fn post(&self, command: Command) {
        match self.tx.try_send(command) {
            Ok(()) => trace!(target: "shim::command", "Posted {:?}", command),
            Err(TrySendError::Full(cmd)) => {
                warn!(target: "shim::command", "Command queue full, dropping {:?}", cmd)
            }
            Err(TrySendError::Disconnected(cmd)) => {
                debug!(target: "shim::command", "Dispatcher torn down, dropping {:?}", cmd)
            }
        }
    }

    /// Queues a command given by its integer wire value.
    ///
    /// Unknown tags are logged and dropped.
    pub fn post_tag(&self, tag: i32) {
        match Command::from_tag(tag) {
            Some(command) => self.post(command),
            None => warn!(target: "shim::command", "Unknown command tag 0x{:08X} ignored", tag),
        }
    }
}

//=== CommandDispatcher ===================================================

/// UI-side endpoint: single consumer of the command channel.
pub struct CommandDispatcher {
    sender: CommandSender,
    receiver: Option<Receiver<Command>>,
}

impl CommandDispatcher {
    //--- Construction -----------------------------------------------------

    /// Creates the channel. `capacity` of `None` means unbounded.
    pub fn new(capacity: Option<usize>) -> Self {
        let (tx, rx) = match capacity {
            Some(cap) => bounded(cap),
            None => unbounded(),
        };
        Self {
            sender: CommandSender { tx },
            receiver: Some(rx),
        }
    }

    /// A new engine-side endpoint for this dispatcher.
    pub fn sender(&self) -> CommandSender {
        self.sender.clone()
    }

    //--- Delivery ---------------------------------------------------------

    /// Executes queued commands in posting order, at most
    /// [`MAX_COMMANDS_PER_DRAIN`] per call. Returns how many ran.
    ///
    /// After teardown this is a no-op.
    pub fn drain<F: FnMut(Command)>(&mut self, mut execute: F) -> usize {
        let Some(receiver) = &self.receiver else {
            return 0;
        };

        let mut drained = 0;
        while drained < MAX_COMMANDS_PER_DRAIN {
            match receiver.try_recv() {
                Ok(command) => {
                    trace!(target: "shim::command", "Executing {:?}", command);
                    execute(command);
                    drained += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if drained >= MAX_COMMANDS_PER_DRAIN && !receiver.is_empty() {
            warn!(
                target: "shim::command",
                "Command backlog: drained {} commands, {} still queued",
                drained,
                receiver.len()
            );
        }

        drained
    }

    //--- Lifecycle --------------------------------------------------------

    /// Drops the receiving end. Queued and future commands are discarded.
    pub fn teardown(&mut self) {
        if let Some(receiver) = self.receiver.take() {
            let discarded = receiver.len();
            info!(
                target: "shim::command",
                "Dispatcher torn down ({} pending commands discarded)",
                discarded
            );
        }
    }

    pub fn is_active(&self) -> bool {
        self.receiver.is_some()
    }

    /// Number of commands waiting to be drained.
    pub fn pending(&self) -> usize {
        self.receiver.as_ref().map_or(0, Receiver::len)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn drain_all(dispatcher: &mut CommandDispatcher) -> Vec<Command> {
        let mut seen = Vec::new();
        while dispatcher.drain(|cmd| seen.push(cmd)) > 0 {}
        seen
    }

    #[test]
    fn drain_empty_queue() {
        let mut dispatcher = CommandDispatcher::new(None);
        assert_eq!(dispatcher.drain(|_| panic!("nothing queued")), 0);
    }

    #[test]
    fn commands_execute_in_posting_order() {
        let mut dispatcher = CommandDispatcher::new(None);
        let sender = dispatcher.sender();

        sender.post(Command::GpsEnable);
        sender.post(Command::AccelerometerEnable);
        sender.post(Command::AccelerometerEnable);
        sender.post(Command::GpsDisable);

        assert_eq!(
            drain_all(&mut dispatcher),
            vec![
                Command::GpsEnable,
                Command::AccelerometerEnable,
                Command::AccelerometerEnable,
                Command::GpsDisable,
            ]
        );
    }

    #[test]
    fn post_from_engine_thread() {
        let mut dispatcher = CommandDispatcher::new(None);
        let sender = dispatcher.sender();

        thread::spawn(move || {
            sender.post(Command::AccelerometerEnable);
            sender.post(Command::AccelerometerDisable);
        })
        .join()
        .unwrap();

        assert_eq!(
            drain_all(&mut dispatcher),
            vec![Command::AccelerometerEnable, Command::AccelerometerDisable]
        );
    }

    #[test]
    fn concurrent_producers_keep_per_thread_order() {
        let mut dispatcher = CommandDispatcher::new(None);
        // Producer i owns the pair ALL[2i] / ALL[2i + 1] and alternates it
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sender = dispatcher.sender();
                thread::spawn(move || {
                    for _ in 0..50 {
                        sender.post(Command::ALL[2 * i]);
                        sender.post(Command::ALL[2 * i + 1]);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let seen = drain_all(&mut dispatcher);
        assert_eq!(seen.len(), 400);
        for i in 0..4 {
            let own = [Command::ALL[2 * i], Command::ALL[2 * i + 1]];
            let subsequence: Vec<Command> =
                seen.iter().copied().filter(|c| own.contains(c)).collect();
            let expected: Vec<Command> = own.iter().copied().cycle().take(100).collect();
            assert_eq!(subsequence, expected, "Producer {} reordered", i);
        }
    }

    #[test]
    fn drain_is_bounded_per_call() {
        let mut dispatcher = CommandDispatcher::new(None);
        let sender = dispatcher.sender();
        for _ in 0..(MAX_COMMANDS_PER_DRAIN + 10) {
            sender.post(Command::MagnetometerEnable);
        }

        assert_eq!(dispatcher.drain(|_| {}), MAX_COMMANDS_PER_DRAIN);
        assert_eq!(dispatcher.pending(), 10);
        assert_eq!(dispatcher.drain(|_| {}), 10);
    }

    #[test]
    fn post_tag_parses_and_ignores_unknown() {
        let mut dispatcher = CommandDispatcher::new(None);
        let sender = dispatcher.sender();

        sender.post_tag(0x0001_0006);
        sender.post_tag(0x0BAD_0000);

        assert_eq!(drain_all(&mut dispatcher), vec![Command::GyroscopeEnable]);
    }

    #[test]
    fn full_bounded_queue_drops_without_blocking() {
        let mut dispatcher = CommandDispatcher::new(Some(2));
        let sender = dispatcher.sender();

        sender.post(Command::GpsEnable);
        sender.post(Command::GpsDisable);
        sender.post(Command::AccelerometerEnable);

        assert_eq!(
            drain_all(&mut dispatcher),
            vec![Command::GpsEnable, Command::GpsDisable]
        );
    }

    #[test]
    fn post_after_teardown_is_dropped() {
        let mut dispatcher = CommandDispatcher::new(None);
        let sender = dispatcher.sender();
        sender.post(Command::GpsEnable);

        dispatcher.teardown();
        sender.post(Command::GpsDisable);
        dispatcher.sender().post(Command::GpsEnable);

        assert!(!dispatcher.is_active());
        assert_eq!(dispatcher.pending(), 0);
        assert_eq!(dispatcher.drain(|_| panic!("torn down")), 0);
    }

    #[test]
    fn teardown_from_other_thread_race_is_safe() {
        let mut dispatcher = CommandDispatcher::new(None);
        let sender = dispatcher.sender();

        let producer = thread::spawn(move || {
            for _ in 0..1000 {
                sender.post(Command::GpsEnable);
            }
        });
        dispatcher.drain(|_| {});
        dispatcher.teardown();

        assert!(producer.join().is_ok());
    }
}
