//! Public API layer for Keyfront
//!
//! This crate provides the Command Facade: one typed method per store
//! operation, each of which
//! 1. resolves its key(s) through the facade's [`KeyResolver`](keyfront_core::KeyResolver),
//! 2. lays out the positional arguments the store's protocol expects,
//! 3. hands the [`Command`](keyfront_core::Command) to a
//!    [`CommandExecutor`](keyfront_core::CommandExecutor),
//! 4. decodes the [`Reply`](keyfront_core::Reply) into the declared return type.
//!
//! ## Architectural Invariant
//!
//! Every facade call **desugars to exactly one command** (or, for the
//! structured hash write with a TTL, one command followed by `EXPIRE`), and
//! keys are prefixed exactly once, at dispatch.
//!
//! ## Quick Start
//!
//! ```ignore
//! use keyfront_api::{Facade, SetOptions};
//! use keyfront_core::KeyResolver;
//!
//! let facade = Facade::new(executor, KeyResolver::new("app:"));
//! facade.set("greeting", "hello", SetOptions::new().ex(60))?;
//! let value = facade.get("greeting")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod facade;

pub use facade::{Batch, DataOptions, ExpiryUnit, Facade, ScoreLimit, SetOptions};
