//! Facade API - typed, namespaced command surface
//!
//! The facade is syntactic sugar over a [`CommandExecutor`](keyfront_core::CommandExecutor):
//! - Keys are logical; the configured prefix is applied at dispatch
//! - Arguments are laid out in the order the store's protocol documents
//! - Replies are narrowed into typed results; mismatches are errors
//!
//! ## Module Structure
//!
//! - `types`: option types (`SetOptions`, `DataOptions`, `ScoreLimit`)
//! - `keys`: key management (`KEYS`, `DEL`, `EXPIRE`, `TTL`, ...)
//! - `string`: string values and counters
//! - `data`: structured values stored as JSON or as hash fields
//! - `list`, `hash`, `set`, `zset`: per-type commands
//! - `pipeline`: optimistic transactions (`WATCH`/`MULTI`/`EXEC`)
//! - `server`: connection and server administration
//!
//! ## Desugaring Examples
//!
//! | Facade Call | Command Sent (prefix `p:`) |
//! |-------------|----------------------------|
//! | `get("k")` | `GET p:k` |
//! | `incr("n", None)` | `INCR p:n` |
//! | `incr("n", Some(2))` | `INCRBY p:n 2` |
//! | `set("k", v, SetOptions::new().px(60))` | `PSETEX p:k 60 v` |
//! | `zrevrangebyscore("z", 0, 100, None)` | `ZREVRANGEBYSCORE p:z 100 0 LIMIT 0 -1` |

mod impl_;
pub mod types;

mod data;
mod hash;
mod keys;
mod list;
mod pipeline;
mod server;
mod set;
mod string;
mod zset;

pub use impl_::Facade;
pub use pipeline::Batch;
pub use types::{DataOptions, ExpiryUnit, ScoreLimit, SetOptions};
