//! Lists
//!
//! | Facade | Command |
//! |--------|---------|
//! | `lpush(k, [a, b])` | `LPUSH k a b` |
//! | `lrange(k, 0, -1)` | `LRANGE k 0 -1` |
//! | `lrem(k, v, None)` | `LREM k 1 v` |

use keyfront_core::{names, Arg, Command, CommandExecutor, Result};

use super::Facade;

impl<E: CommandExecutor> Facade<E> {
    /// Prepend values. Returns the new length.
    pub fn lpush<I, V>(&self, key: &str, values: I) -> Result<i64>
    where
        I: IntoIterator<Item = V>,
        V: Into<Arg>,
    {
        self.dispatch(Command::new(names::LPUSH).key(key).args(values))?
            .into_i64()
    }

    /// Append values. Returns the new length.
    pub fn rpush<I, V>(&self, key: &str, values: I) -> Result<i64>
    where
        I: IntoIterator<Item = V>,
        V: Into<Arg>,
    {
        self.dispatch(Command::new(names::RPUSH).key(key).args(values))?
            .into_i64()
    }

    /// Remove and return the first element, `None` if the list is empty
    pub fn lpop(&self, key: &str) -> Result<Option<String>> {
        self.dispatch(Command::new(names::LPOP).key(key))?
            .into_opt_string()
    }

    /// Elements between `start` and `end` inclusive
    pub fn lrange(&self, key: &str, start: i64, end: i64) -> Result<Vec<String>> {
        self.dispatch(Command::new(names::LRANGE).key(key).arg(start).arg(end))?
            .into_strings()
    }

    /// Element at `index`, `None` if out of range
    pub fn lindex(&self, key: &str, index: i64) -> Result<Option<String>> {
        self.dispatch(Command::new(names::LINDEX).key(key).arg(index))?
            .into_opt_string()
    }

    /// Overwrite the element at `index`
    pub fn lset(&self, key: &str, index: i64, value: impl Into<Arg>) -> Result<()> {
        self.dispatch(Command::new(names::LSET).key(key).arg(index).arg(value))?
            .into_unit()
    }

    /// Remove up to `count` (default 1) occurrences of `value`.
    /// Returns how many were removed.
    pub fn lrem(&self, key: &str, value: impl Into<Arg>, count: Option<i64>) -> Result<i64> {
        let count = count.unwrap_or(1);
        self.dispatch(Command::new(names::LREM).key(key).arg(count).arg(value))?
            .into_i64()
    }

    /// Keep only the elements between `start` and `end`
    pub fn ltrim(&self, key: &str, start: i64, end: i64) -> Result<()> {
        self.dispatch(Command::new(names::LTRIM).key(key).arg(start).arg(end))?
            .into_unit()
    }

    /// Length of the list
    pub fn llen(&self, key: &str) -> Result<i64> {
        self.dispatch(Command::new(names::LLEN).key(key))?.into_i64()
    }
}
