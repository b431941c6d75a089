//! Optimistic transactions
//!
//! A [`Batch`] collects watched keys and commands; [`Facade::pipeline`] sends
//! `WATCH <keys>`, `MULTI`, every command in order, then `EXEC`, on a single
//! connection that nothing else uses until `EXEC` has been answered. If a
//! watched key changed in the meantime the store discards the whole batch
//! and the call returns [`TxnOutcome::Aborted`].
//!
//! ```ignore
//! let batch = Batch::new()
//!     .watch("balance")
//!     .add(Command::new("SET").key("balance").arg(90))
//!     .add(Command::new("INCR").key("audit"));
//! match facade.pipeline(batch)? {
//!     TxnOutcome::Committed(replies) => { /* one reply per command */ }
//!     TxnOutcome::Aborted => { /* retry from the read */ }
//! }
//! ```

use keyfront_core::{Command, CommandExecutor, Result, TxnOutcome};
use tracing::debug;

use super::Facade;

/// An ordered group of commands applied all-or-nothing.
///
/// Keys in both the watch list and the commands are logical keys; they are
/// resolved when the batch is submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    watch: Vec<String>,
    commands: Vec<Command>,
}

impl Batch {
    /// Empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the batch if `key` changes before it runs
    pub fn watch(mut self, key: impl Into<String>) -> Self {
        self.watch.push(key.into());
        self
    }

    /// Queue a command
    pub fn add(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Queue a command in place
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Watched keys, in order
    pub fn watched(&self) -> &[String] {
        &self.watch
    }

    /// Queued commands, in order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is queued
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<E: CommandExecutor> Facade<E> {
    /// Run `batch` as one transaction.
    ///
    /// # Errors
    ///
    /// Connectivity and server errors are returned as-is. A conflict on a
    /// watched key is not an error; it yields [`TxnOutcome::Aborted`].
    pub fn pipeline(&self, batch: Batch) -> Result<TxnOutcome> {
        let keys = self.key_resolver();
        let watch: Vec<String> = batch.watch.iter().map(|k| keys.resolve_key(k)).collect();
        let commands: Vec<Command> = batch
            .commands
            .into_iter()
            .map(|c| c.resolve_keys(keys))
            .collect();

        debug!(
            target: "keyfront::facade",
            watched = watch.len(),
            commands = commands.len(),
            "Dispatching pipeline"
        );
        self.executor().execute_transaction(&watch, &commands)
    }
}
