//! Keyfront - typed, namespaced command facade for Redis
//!
//! Keyfront wraps a pooled Redis connection in one typed method per command.
//! Every key passes through a namespace prefix fixed at construction, and
//! serializable values can be stored as JSON strings or as hash fields.
//!
//! # Quick Start
//!
//! ```ignore
//! use keyfront::{ClientConfig, SetOptions};
//!
//! let client = keyfront::connect(&ClientConfig::default().with_prefix("app:"))?;
//!
//! client.set("greeting", "hello", SetOptions::new().ex(60))?;   // SETEX app:greeting 60 hello
//! let count = client.incr("visits", None)?;                      // INCR app:visits
//! let top = client.zrevrange("board", 0, 9)?;                    // ZREVRANGE app:board 0 9
//! ```
//!
//! # Architecture
//!
//! | Crate | Provides |
//! |-------|----------|
//! | `keyfront-core` | `KeyResolver`, `Command`, `Reply`, `Error`, the `CommandExecutor` trait |
//! | `keyfront-executor` | `ClientConfig` and the pooled `RedisExecutor` |
//! | `keyfront-api` | The `Facade` and its option types |
//!
//! Tests and alternative transports plug in by implementing
//! [`CommandExecutor`] and wrapping it in a [`Facade`].

pub use keyfront_api::{Batch, DataOptions, ExpiryUnit, Facade, ScoreLimit, SetOptions};
pub use keyfront_core::{
    names, short_type_name, Arg, Command, CommandExecutor, Error, HasIdentifier, KeyResolver,
    Reply, Result, TxnOutcome,
};
pub use keyfront_executor::{ClientConfig, PoolConfig, PoolStatus, RedisExecutor, CONFIG_FILE_NAME};

/// A facade over the pooled Redis executor
pub type Client = Facade<RedisExecutor>;

/// Build a [`Client`] from `config`.
///
/// The pool dials lazily; an unreachable server surfaces on the first call.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] for settings the pool rejects.
pub fn connect(config: &ClientConfig) -> Result<Client> {
    let executor = RedisExecutor::connect(config)?;
    Ok(Facade::with_prefix(executor, config.prefix.clone()))
}
