//! Core traits for command execution
//!
//! This module defines the [`CommandExecutor`] seam between the facade and
//! whatever actually talks to the store. The pooled Redis executor implements
//! it for production; tests implement it with an in-memory recorder.

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::error::Result;
use crate::reply::Reply;

/// Executes fully resolved commands against the store.
///
/// Keys inside the commands handed to an executor are already effective
/// keys. Executors never rewrite them.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait CommandExecutor: Send + Sync {
    /// Send one command and return its reply.
    ///
    /// # Errors
    ///
    /// Returns the driver's connectivity error or the server's error reply
    /// verbatim. No retries are attempted.
    fn execute(&self, command: &Command) -> Result<Reply>;

    /// Run `WATCH <keys>`, `MULTI`, every command, `EXEC` on one connection.
    ///
    /// Nothing else may be interleaved on that connection until `EXEC` has
    /// been answered. A transaction whose watched keys changed is reported
    /// as [`TxnOutcome::Aborted`], not as an error.
    fn execute_transaction(&self, watch: &[String], commands: &[Command]) -> Result<TxnOutcome>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for std::sync::Arc<E> {
    fn execute(&self, command: &Command) -> Result<Reply> {
        (**self).execute(command)
    }

    fn execute_transaction(&self, watch: &[String], commands: &[Command]) -> Result<TxnOutcome> {
        (**self).execute_transaction(watch, commands)
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for Box<E> {
    fn execute(&self, command: &Command) -> Result<Reply> {
        (**self).execute(command)
    }

    fn execute_transaction(&self, watch: &[String], commands: &[Command]) -> Result<TxnOutcome> {
        (**self).execute_transaction(watch, commands)
    }
}

/// Result of an optimistic transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TxnOutcome {
    /// `EXEC` ran every queued command; replies are in submission order
    Committed(Vec<Reply>),
    /// A watched key changed before `EXEC`; nothing was applied
    Aborted,
}

impl TxnOutcome {
    /// Whether the transaction was applied
    pub fn is_committed(&self) -> bool {
        matches!(self, TxnOutcome::Committed(_))
    }

    /// Replies of a committed transaction, `None` if it aborted
    pub fn into_replies(self) -> Option<Vec<Reply>> {
        match self {
            TxnOutcome::Committed(replies) => Some(replies),
            TxnOutcome::Aborted => None,
        }
    }
}
