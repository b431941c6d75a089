//! Facade integration tests
//!
//! These tests drive the public `keyfront` API end to end against an
//! in-memory store:
//! - Strings and counters with expiry
//! - Structured data as JSON and as hashes
//! - Sorted sets and set algebra
//! - Namespaces shared by several facades
//! - Transactions with watched keys
//! - Configuration and pooled client construction
//! - A live server, when one is configured (ignored by default)

mod common;

mod config;
mod data;
mod live;
mod namespaces;
mod pipeline;
