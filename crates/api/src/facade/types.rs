//! Facade option types
//!
//! These replace positional, type-inspected optional arguments with explicit
//! values, so an integer can never be mistaken for a key.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unit a TTL is sent in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryUnit {
    /// Whole seconds (`SETEX`, `EXPIRE`)
    #[default]
    Seconds,
    /// Milliseconds (`PSETEX`, `PEXPIRE`)
    Milliseconds,
}

impl ExpiryUnit {
    /// `ttl` expressed in this unit
    pub fn amount(self, ttl: Duration) -> u64 {
        match self {
            ExpiryUnit::Seconds => ttl.as_secs(),
            ExpiryUnit::Milliseconds => u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Options for SET operations
///
/// | Options | Command |
/// |---------|---------|
/// | `SetOptions::new()` | `SET key value` |
/// | `.ex(60)` | `SETEX key 60 value` |
/// | `.px(60)` | `PSETEX key 60 value` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOptions {
    /// Time to live; `None` sets without expiry
    pub ttl: Option<Duration>,

    /// Unit the TTL is sent in
    pub unit: ExpiryUnit,
}

impl SetOptions {
    /// Create default options (no expiry)
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire after `seconds`
    pub fn ex(mut self, seconds: u64) -> Self {
        self.ttl = Some(Duration::from_secs(seconds));
        self.unit = ExpiryUnit::Seconds;
        self
    }

    /// Expire after `millis`
    pub fn px(mut self, millis: u64) -> Self {
        self.ttl = Some(Duration::from_millis(millis));
        self.unit = ExpiryUnit::Milliseconds;
        self
    }

    /// Expire after `ttl`, in seconds when it is a whole number of seconds
    /// and in milliseconds otherwise
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.unit = if ttl.subsec_nanos() == 0 {
            ExpiryUnit::Seconds
        } else {
            ExpiryUnit::Milliseconds
        };
        self.ttl = Some(ttl);
        self
    }

    /// Build options from positional integers.
    ///
    /// - `[]`: no expiry
    /// - `[ttl]`: `ttl` seconds
    /// - `[ttl, 1]`: `ttl` milliseconds
    /// - `[ttl, n]` for any `n != 1`: `ttl` seconds
    ///
    /// The unit switch is an exact comparison with `1`, not a truthiness test.
    /// Extra trailing values are ignored.
    pub fn from_args(args: &[u64]) -> Self {
        match args {
            [] => Self::new(),
            [ttl, 1, ..] => Self::new().px(*ttl),
            [ttl, ..] => Self::new().ex(*ttl),
        }
    }

    /// TTL amount and unit, if an expiry is set.
    ///
    /// A TTL that rounds to zero in its unit counts as no expiry.
    pub fn expiry(&self) -> Option<(u64, ExpiryUnit)> {
        self.ttl
            .map(|ttl| self.unit.amount(ttl))
            .filter(|amount| *amount > 0)
            .map(|amount| (amount, self.unit))
    }
}

/// Options for structured (serialized) writes
///
/// When `key` is `None` the key is derived from the object's identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataOptions {
    /// Explicit logical key
    pub key: Option<String>,

    /// Time to live
    pub ttl: Option<Duration>,
}

impl DataOptions {
    /// Create default options (derived key, no expiry)
    pub fn new() -> Self {
        Self::default()
    }

    /// Store under an explicit logical key
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Expire after `ttl`
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// `LIMIT offset count` clause of the range-by-score commands
///
/// The default is offset `0`, count `-1`, which the store reads as "no limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLimit {
    /// Members to skip
    pub offset: i64,

    /// Members to return; negative means all
    pub count: i64,
}

impl Default for ScoreLimit {
    fn default() -> Self {
        ScoreLimit {
            offset: 0,
            count: -1,
        }
    }
}

impl ScoreLimit {
    /// Limit with both values given
    pub fn new(offset: i64, count: i64) -> Self {
        ScoreLimit { offset, count }
    }

    /// Skip `offset` members, return the rest
    pub fn offset(offset: i64) -> Self {
        ScoreLimit {
            offset,
            ..Self::default()
        }
    }
}
