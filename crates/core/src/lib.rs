//! Core types and traits for Keyfront
//!
//! This crate defines the foundational types shared by the executor and the facade:
//! - KeyResolver: prefixes logical keys into effective store keys
//! - HasIdentifier: opt-in capability for objects that derive their own key
//! - Command / Arg: a command name plus key-tagged positional arguments
//! - Reply: driver-neutral reply with typed decoders
//! - CommandExecutor: the seam between facade and store
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod error;
pub mod key;
pub mod reply;
pub mod traits;

pub use command::{names, Arg, Command};
pub use error::{Error, Result};
pub use key::{short_type_name, HasIdentifier, KeyResolver};
pub use reply::Reply;
pub use traits::{CommandExecutor, TxnOutcome};
