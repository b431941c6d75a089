//! Structured values
//!
//! Serializable values are stored either as one JSON string (`set_data`) or
//! spread over the fields of a hash (`hset_data`). When no explicit key is
//! given the key is derived from the value's identifier; a value without an
//! identifier is rejected with [`Error::MissingIdentifier`] rather than being
//! written under an empty key.
//!
//! ## Hash layout
//!
//! Each top-level field of the value becomes one hash field. Strings are
//! stored as-is unless the text would itself parse as JSON (`"42"`,
//! `"true"`, ...), in which case it is stored JSON-quoted; every other value
//! is stored as JSON text. Reading parses each field as JSON and falls back
//! to the raw string, which recovers exactly what was written.

use std::time::Duration;

use keyfront_core::{names, Command, CommandExecutor, Error, HasIdentifier, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::keys::amount_arg;
use super::types::{DataOptions, ExpiryUnit, SetOptions};
use super::Facade;

impl<E: CommandExecutor> Facade<E> {
    // =========================================================================
    // JSON string
    // =========================================================================

    /// Store `value` as JSON under `options.key` or its derived key
    pub fn set_data<T>(&self, value: &T, options: DataOptions) -> Result<()>
    where
        T: Serialize + HasIdentifier,
    {
        let key = match options.key {
            Some(key) => key,
            None => self.derived_key(value)?,
        };
        self.set_data_at(&key, value, options.ttl)
    }

    /// Store `value` as JSON under `key`. A zero TTL means no expiry.
    pub fn set_data_at<T>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value)?;
        let options = match ttl.filter(|ttl| !ttl.is_zero()) {
            Some(ttl) => SetOptions::new().ttl(ttl),
            None => SetOptions::new(),
        };
        self.set(key, json, options)
    }

    /// Decode the JSON stored at `key`, `None` if missing
    pub fn get_data<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Decode the JSON stored under the key derived from `probe`
    pub fn get_data_for<T>(&self, probe: &T) -> Result<Option<T>>
    where
        T: DeserializeOwned + HasIdentifier,
    {
        let key = self.derived_key(probe)?;
        self.get_data(&key)
    }

    // =========================================================================
    // Hash fields
    // =========================================================================

    /// Store the top-level fields of `value` in a hash
    pub fn hset_data<T>(&self, value: &T, options: DataOptions) -> Result<()>
    where
        T: Serialize + HasIdentifier,
    {
        let key = match options.key {
            Some(key) => key,
            None => self.derived_key(value)?,
        };
        self.hset_data_at(&key, value, options.ttl)
    }

    /// Store the top-level fields of `value` in the hash at `key`.
    ///
    /// With a non-zero TTL, `EXPIRE` (or `PEXPIRE` for sub-second TTLs)
    /// follows `HMSET`.
    pub fn hset_data_at<T>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let fields = flatten_fields(value)?;
        if fields.is_empty() {
            return Err(Error::Serialization {
                reason: "cannot store a value with no fields as a hash".to_string(),
            });
        }

        let mut command = Command::new(names::HMSET).key(key);
        for (field, text) in fields {
            command = command.arg(field).arg(text);
        }
        self.dispatch(command)?.into_unit()?;

        let expiry = ttl
            .filter(|ttl| !ttl.is_zero())
            .and_then(|ttl| SetOptions::new().ttl(ttl).expiry());
        if let Some((amount, unit)) = expiry {
            let name = match unit {
                ExpiryUnit::Seconds => names::EXPIRE,
                ExpiryUnit::Milliseconds => names::PEXPIRE,
            };
            self.dispatch(Command::new(name).key(key).arg(amount_arg(amount)))?
                .into_unit()?;
        }
        Ok(())
    }

    /// Rebuild a value from the hash at `key`, `None` if the hash is empty
    pub fn hget_data<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let fields = self
            .dispatch(Command::new(names::HGETALL).key(key))?
            .into_string_map()?;
        if fields.is_empty() {
            return Ok(None);
        }
        let object: Map<String, Value> = fields
            .into_iter()
            .map(|(field, text)| (field, decode_field(text)))
            .collect();
        Ok(Some(serde_json::from_value(Value::Object(object))?))
    }

    /// Rebuild a value from the hash under the key derived from `probe`
    pub fn hget_data_for<T>(&self, probe: &T) -> Result<Option<T>>
    where
        T: DeserializeOwned + HasIdentifier,
    {
        let key = self.derived_key(probe)?;
        self.hget_data(&key)
    }
}

/// Top-level fields of `value` as `(field, text)` pairs, in serialization order.
fn flatten_fields<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(field, v)| Ok((field, encode_field(v)?)))
            .collect(),
        other => Err(Error::Serialization {
            reason: format!("hash storage needs a struct or map, got {}", json_kind(&other)),
        }),
    }
}

fn encode_field(value: Value) -> Result<String> {
    match value {
        Value::String(s) if serde_json::from_str::<Value>(&s).is_err() => Ok(s),
        other => Ok(serde_json::to_string(&other)?),
    }
}

fn decode_field(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
