//! # Keyfront Executor
//!
//! The production [`CommandExecutor`](keyfront_core::CommandExecutor) for
//! Keyfront: a bounded pool of authenticated Redis connections and the
//! plumbing that moves [`Command`](keyfront_core::Command)s and
//! [`Reply`](keyfront_core::Reply)s across it.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`ClientConfig`] | Address, credentials, database, timeout, prefix, pool settings |
//! | [`RedisExecutor`] | Checks out a connection per call; runs transactions on one connection |
//! | [`StoreConnectionManager`] | Dials, probes and recycles pooled connections |

#![warn(missing_docs)]

mod config;
mod convert;
mod executor;
mod pool;

pub use config::{ClientConfig, PoolConfig, CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT};
pub use executor::RedisExecutor;
pub use pool::{build_pool, LoggingErrorHandler, PoolStatus, StoreConnection, StoreConnectionManager};
