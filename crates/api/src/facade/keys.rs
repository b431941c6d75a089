//! Key management
//!
//! | Facade | Command |
//! |--------|---------|
//! | `keys(None)` | `KEYS <prefix>*` |
//! | `exists(k)` | `EXISTS k` |
//! | `rename(a, b)` | `RENAME a b` |
//! | `del([a, b])` | `DEL a b` |
//! | `expire(k, s)` | `EXPIRE k s` |
//! | `ttl(k)` | `TTL k` |
//!
//! Keys reported back by `keys` have the prefix stripped, so they can be fed
//! straight into any other facade method.

use keyfront_core::{names, Command, CommandExecutor, Result};

use super::Facade;

impl<E: CommandExecutor> Facade<E> {
    /// Logical keys matching `pattern` (default `*`) inside this namespace.
    pub fn keys(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        let pattern = pattern.unwrap_or("*");
        let found = self
            .dispatch(Command::new(names::KEYS).key(pattern))?
            .into_strings()?;
        Ok(found
            .iter()
            .map(|k| self.key_resolver().strip_prefix(k).to_string())
            .collect())
    }

    /// Whether `key` exists
    pub fn exists(&self, key: &str) -> Result<bool> {
        self.dispatch(Command::new(names::EXISTS).key(key))?
            .into_bool()
    }

    /// Rename `old_key` to `new_key`, overwriting the destination
    pub fn rename(&self, old_key: &str, new_key: &str) -> Result<()> {
        self.dispatch(Command::new(names::RENAME).key(old_key).key(new_key))?
            .into_unit()
    }

    /// Rename only if `new_key` does not exist. Returns whether it was renamed.
    pub fn renamenx(&self, old_key: &str, new_key: &str) -> Result<bool> {
        self.dispatch(Command::new(names::RENAMENX).key(old_key).key(new_key))?
            .into_bool()
    }

    /// Delete keys. Returns how many existed.
    pub fn del<I, K>(&self, keys: I) -> Result<i64>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::DEL).keys(keys))?
            .into_i64()
    }

    /// Expire `key` after `seconds`. Returns whether a timeout was set.
    pub fn expire(&self, key: &str, seconds: u64) -> Result<bool> {
        self.dispatch(Command::new(names::EXPIRE).key(key).arg(amount_arg(seconds)))?
            .into_bool()
    }

    /// Expire `key` after `millis`
    pub fn pexpire(&self, key: &str, millis: u64) -> Result<bool> {
        self.dispatch(Command::new(names::PEXPIRE).key(key).arg(amount_arg(millis)))?
            .into_bool()
    }

    /// Expire `key` at a Unix time in seconds
    pub fn expireat(&self, key: &str, unix_secs: i64) -> Result<bool> {
        self.dispatch(Command::new(names::EXPIREAT).key(key).arg(unix_secs))?
            .into_bool()
    }

    /// Expire `key` at a Unix time in milliseconds
    pub fn pexpireat(&self, key: &str, unix_millis: i64) -> Result<bool> {
        self.dispatch(Command::new(names::PEXPIREAT).key(key).arg(unix_millis))?
            .into_bool()
    }

    /// Remove the timeout on `key`. Returns whether one was removed.
    pub fn persist(&self, key: &str) -> Result<bool> {
        self.dispatch(Command::new(names::PERSIST).key(key))?
            .into_bool()
    }

    /// Remaining time to live in seconds; `-1` without expiry, `-2` if missing
    pub fn ttl(&self, key: &str) -> Result<i64> {
        self.dispatch(Command::new(names::TTL).key(key))?.into_i64()
    }

    /// Remaining time to live in milliseconds; `-1` without expiry, `-2` if missing
    pub fn pttl(&self, key: &str) -> Result<i64> {
        self.dispatch(Command::new(names::PTTL).key(key))?.into_i64()
    }

    /// Type of the value at `key` (`string`, `list`, ..., or `none`)
    pub fn key_type(&self, key: &str) -> Result<String> {
        self.dispatch(Command::new(names::TYPE).key(key))?
            .into_string()
    }

    /// Serialized form of the value at `key`, `None` if missing
    pub fn dump(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.dispatch(Command::new(names::DUMP).key(key))?
            .into_opt_bytes()
    }
}

/// Amounts above `i64::MAX` are clamped; the store rejects them anyway.
pub(crate) fn amount_arg(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}
