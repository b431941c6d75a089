//! String values and counters
//!
//! | Facade | Command |
//! |--------|---------|
//! | `set(k, v, SetOptions::new())` | `SET k v` |
//! | `set(k, v, SetOptions::new().ex(60))` | `SETEX k 60 v` |
//! | `set(k, v, SetOptions::new().px(60))` | `PSETEX k 60 v` |
//! | `get(k)` | `GET k` |
//! | `incr(k, None)` / `incr(k, Some(1))` | `INCR k` |
//! | `incr(k, Some(n))` | `INCRBY k n` |
//! | `decr(k, Some(n))` | `DECRBY k n` |
//!
//! A step of exactly one always uses the unit command; any other step uses
//! the `*BY` command.

use keyfront_core::{names, Arg, Command, CommandExecutor, Result};

use super::keys::amount_arg;
use super::types::{ExpiryUnit, SetOptions};
use super::Facade;

impl<E: CommandExecutor> Facade<E> {
    /// Set `key` to `value`, with the expiry described by `options`
    pub fn set(&self, key: &str, value: impl Into<Arg>, options: SetOptions) -> Result<()> {
        let command = match options.expiry() {
            None => Command::new(names::SET).key(key).arg(value),
            Some((amount, ExpiryUnit::Seconds)) => Command::new(names::SETEX)
                .key(key)
                .arg(amount_arg(amount))
                .arg(value),
            Some((amount, ExpiryUnit::Milliseconds)) => Command::new(names::PSETEX)
                .key(key)
                .arg(amount_arg(amount))
                .arg(value),
        };
        self.dispatch(command)?.into_unit()
    }

    /// Set `key` only if it does not exist. Returns whether it was set.
    pub fn setnx(&self, key: &str, value: impl Into<Arg>) -> Result<bool> {
        self.dispatch(Command::new(names::SETNX).key(key).arg(value))?
            .into_bool()
    }

    /// Overwrite part of the string at `offset`. Returns the new length.
    pub fn setrange(&self, key: &str, offset: i64, value: impl Into<Arg>) -> Result<i64> {
        self.dispatch(Command::new(names::SETRANGE).key(key).arg(offset).arg(value))?
            .into_i64()
    }

    /// Append to the string at `key`. Returns the new length.
    pub fn append(&self, key: &str, value: impl Into<Arg>) -> Result<i64> {
        self.dispatch(Command::new(names::APPEND).key(key).arg(value))?
            .into_i64()
    }

    /// Value at `key`, `None` if missing
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.dispatch(Command::new(names::GET).key(key))?
            .into_opt_bytes()
    }

    /// Value at `key` as UTF-8 text, `None` if missing
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        self.dispatch(Command::new(names::GET).key(key))?
            .into_opt_string()
    }

    /// Set `key` and return its previous value
    pub fn getset(&self, key: &str, value: impl Into<Arg>) -> Result<Option<Vec<u8>>> {
        self.dispatch(Command::new(names::GETSET).key(key).arg(value))?
            .into_opt_bytes()
    }

    /// Substring between `start` and `end` (inclusive, negative from the end)
    pub fn getrange(&self, key: &str, start: i64, end: i64) -> Result<Vec<u8>> {
        self.dispatch(Command::new(names::GETRANGE).key(key).arg(start).arg(end))?
            .into_bytes()
    }

    /// Length of the string at `key`
    pub fn strlen(&self, key: &str) -> Result<i64> {
        self.dispatch(Command::new(names::STRLEN).key(key))?
            .into_i64()
    }

    /// Increment by `step` (default 1). Returns the new value.
    pub fn incr(&self, key: &str, step: Option<i64>) -> Result<i64> {
        let command = match step.unwrap_or(1) {
            1 => Command::new(names::INCR).key(key),
            n => Command::new(names::INCRBY).key(key).arg(n),
        };
        self.dispatch(command)?.into_i64()
    }

    /// Decrement by `step` (default 1). Returns the new value.
    pub fn decr(&self, key: &str, step: Option<i64>) -> Result<i64> {
        let command = match step.unwrap_or(1) {
            1 => Command::new(names::DECR).key(key),
            n => Command::new(names::DECRBY).key(key).arg(n),
        };
        self.dispatch(command)?.into_i64()
    }

    /// Increment by a float. Returns the new value.
    pub fn incrbyfloat(&self, key: &str, delta: f64) -> Result<f64> {
        self.dispatch(Command::new(names::INCRBYFLOAT).key(key).arg(delta))?
            .into_f64()
    }
}
