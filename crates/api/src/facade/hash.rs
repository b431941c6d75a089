//! Hashes
//!
//! | Facade | Command |
//! |--------|---------|
//! | `hset(k, f, v)` | `HSET k f v` |
//! | `hmset(k, [(f, v)])` | `HMSET k f v` |
//! | `hmget(k, [f, g])` | `HMGET k f g` |

use keyfront_core::{names, Arg, Command, CommandExecutor, Result};

use super::Facade;

impl<E: CommandExecutor> Facade<E> {
    /// Set one field. Returns whether the field is new.
    pub fn hset(&self, key: &str, field: &str, value: impl Into<Arg>) -> Result<bool> {
        self.dispatch(Command::new(names::HSET).key(key).arg(field).arg(value))?
            .into_bool()
    }

    /// Set a field only if it does not exist. Returns whether it was set.
    pub fn hsetnx(&self, key: &str, field: &str, value: impl Into<Arg>) -> Result<bool> {
        self.dispatch(Command::new(names::HSETNX).key(key).arg(field).arg(value))?
            .into_bool()
    }

    /// Set several fields at once
    pub fn hmset<I, F, V>(&self, key: &str, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = (F, V)>,
        F: Into<Arg>,
        V: Into<Arg>,
    {
        let mut command = Command::new(names::HMSET).key(key);
        for (field, value) in fields {
            command = command.arg(field).arg(value);
        }
        self.dispatch(command)?.into_unit()
    }

    /// Value of a field, `None` if missing
    pub fn hget(&self, key: &str, field: &str) -> Result<Option<String>> {
        self.dispatch(Command::new(names::HGET).key(key).arg(field))?
            .into_opt_string()
    }

    /// Values of several fields, in request order; missing fields are `None`
    pub fn hmget<I, F>(&self, key: &str, fields: I) -> Result<Vec<Option<String>>>
    where
        I: IntoIterator<Item = F>,
        F: Into<Arg>,
    {
        self.dispatch(Command::new(names::HMGET).key(key).args(fields))?
            .into_opt_strings()
    }

    /// All field names
    pub fn hkeys(&self, key: &str) -> Result<Vec<String>> {
        self.dispatch(Command::new(names::HKEYS).key(key))?
            .into_strings()
    }

    /// All field values
    pub fn hvals(&self, key: &str) -> Result<Vec<String>> {
        self.dispatch(Command::new(names::HVALS).key(key))?
            .into_strings()
    }

    /// Increment a field by an integer. Returns the new value.
    pub fn hincrby(&self, key: &str, field: &str, delta: i64) -> Result<i64> {
        self.dispatch(Command::new(names::HINCRBY).key(key).arg(field).arg(delta))?
            .into_i64()
    }

    /// Increment a field by a float. Returns the new value.
    pub fn hincrbyfloat(&self, key: &str, field: &str, delta: f64) -> Result<f64> {
        self.dispatch(Command::new(names::HINCRBYFLOAT).key(key).arg(field).arg(delta))?
            .into_f64()
    }

    /// Number of fields
    pub fn hlen(&self, key: &str) -> Result<i64> {
        self.dispatch(Command::new(names::HLEN).key(key))?.into_i64()
    }

    /// Length of a field's value
    pub fn hstrlen(&self, key: &str, field: &str) -> Result<i64> {
        self.dispatch(Command::new(names::HSTRLEN).key(key).arg(field))?
            .into_i64()
    }

    /// Whether a field exists
    pub fn hexists(&self, key: &str, field: &str) -> Result<bool> {
        self.dispatch(Command::new(names::HEXISTS).key(key).arg(field))?
            .into_bool()
    }

    /// Delete fields. Returns how many existed.
    pub fn hdel<I, F>(&self, key: &str, fields: I) -> Result<i64>
    where
        I: IntoIterator<Item = F>,
        F: Into<Arg>,
    {
        self.dispatch(Command::new(names::HDEL).key(key).args(fields))?
            .into_i64()
    }
}
