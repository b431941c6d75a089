//! Replies and typed decoding.
//!
//! A [`Reply`] is the driver-neutral shape of whatever the store answered.
//! The facade narrows it into the type each operation declares; a reply that
//! does not fit is reported as [`Error::WrongType`], never coerced silently.
//!
//! | Decoder | Accepts |
//! |---------|---------|
//! | `into_bool` | `Int` (non-zero), `Bool`, `Status("OK")`, bulk `"0"`/`"1"` |
//! | `into_i64` | `Int`, numeric `Bulk`/`Status` |
//! | `into_f64` | `Double`, `Int`, numeric `Bulk`/`Status` |
//! | `into_string` | `Bulk` (UTF-8), `Status`, `Int`, `Double` |
//! | `into_bytes` | `Bulk`, `Status` |
//! | `into_strings` | `Array` of string-like items, `Nil` as empty |
//! | `into_parsed::<T>` | `Array` of items parseable as `T` |
//! | `into_score_map` | flat `Array` of member/score pairs |
//!
//! The `into_opt_*` variants map `Nil` to `None` first.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Reply from the store, after the driver has parsed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reply {
    /// Missing value
    Nil,
    /// Status line such as `OK` or `QUEUED`
    Status(String),
    /// Integer reply
    Int(i64),
    /// Double reply
    Double(f64),
    /// Boolean reply
    Bool(bool),
    /// Binary-safe string
    Bulk(Vec<u8>),
    /// Multi-bulk reply (map replies arrive flattened)
    Array(Vec<Reply>),
}

impl Reply {
    /// Short human description, used in decode errors
    pub fn describe(&self) -> String {
        match self {
            Reply::Nil => "nil".to_string(),
            Reply::Status(s) => format!("status {:?}", s),
            Reply::Int(i) => format!("integer {}", i),
            Reply::Double(d) => format!("double {}", d),
            Reply::Bool(b) => format!("boolean {}", b),
            Reply::Bulk(b) => format!("bulk string {:?}", String::from_utf8_lossy(b)),
            Reply::Array(items) => format!("array of {}", items.len()),
        }
    }

    /// Whether the reply is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Nil)
    }

    /// Status or bulk contents as text, if the reply is textual
    fn text(&self) -> Option<std::borrow::Cow<'_, str>> {
        match self {
            Reply::Status(s) => Some(std::borrow::Cow::Borrowed(s.as_str())),
            Reply::Bulk(b) => std::str::from_utf8(b).ok().map(std::borrow::Cow::Borrowed),
            _ => None,
        }
    }

    // =========================================================================
    // Scalars
    // =========================================================================

    /// Ignore the payload; only error replies fail, and those never get here
    pub fn into_unit(self) -> Result<()> {
        Ok(())
    }

    /// Decode as a boolean
    pub fn into_bool(self) -> Result<bool> {
        match &self {
            Reply::Int(i) => Ok(*i != 0),
            Reply::Bool(b) => Ok(*b),
            Reply::Status(s) if s == "OK" => Ok(true),
            _ => match self.text().as_deref() {
                Some("1") | Some("true") => Ok(true),
                Some("0") | Some("false") => Ok(false),
                _ => Err(Error::wrong_type("boolean", self.describe())),
            },
        }
    }

    /// Decode as a signed integer
    pub fn into_i64(self) -> Result<i64> {
        match &self {
            Reply::Int(i) => Ok(*i),
            _ => self
                .text()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| Error::wrong_type("integer", self.describe())),
        }
    }

    /// Decode as a float
    pub fn into_f64(self) -> Result<f64> {
        match &self {
            Reply::Double(d) => Ok(*d),
            Reply::Int(i) => Ok(*i as f64),
            _ => self
                .text()
                .and_then(|s| parse_float(&s))
                .ok_or_else(|| Error::wrong_type("float", self.describe())),
        }
    }

    /// Decode as UTF-8 text
    pub fn into_string(self) -> Result<String> {
        match self {
            Reply::Status(s) => Ok(s),
            Reply::Int(i) => Ok(i.to_string()),
            Reply::Double(d) => Ok(d.to_string()),
            Reply::Bulk(b) => String::from_utf8(b).map_err(|e| {
                Error::wrong_type("UTF-8 string", format!("bulk string ({})", e))
            }),
            other => Err(Error::wrong_type("string", other.describe())),
        }
    }

    /// Decode as raw bytes
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Reply::Bulk(b) => Ok(b),
            Reply::Status(s) => Ok(s.into_bytes()),
            other => Err(Error::wrong_type("bytes", other.describe())),
        }
    }

    /// `None` for nil, otherwise [`into_i64`](Self::into_i64)
    pub fn into_opt_i64(self) -> Result<Option<i64>> {
        if self.is_nil() {
            return Ok(None);
        }
        self.into_i64().map(Some)
    }

    /// `None` for nil, otherwise [`into_f64`](Self::into_f64)
    pub fn into_opt_f64(self) -> Result<Option<f64>> {
        if self.is_nil() {
            return Ok(None);
        }
        self.into_f64().map(Some)
    }

    /// `None` for nil, otherwise [`into_string`](Self::into_string)
    pub fn into_opt_string(self) -> Result<Option<String>> {
        if self.is_nil() {
            return Ok(None);
        }
        self.into_string().map(Some)
    }

    /// `None` for nil, otherwise [`into_bytes`](Self::into_bytes)
    pub fn into_opt_bytes(self) -> Result<Option<Vec<u8>>> {
        if self.is_nil() {
            return Ok(None);
        }
        self.into_bytes().map(Some)
    }

    // =========================================================================
    // Collections
    // =========================================================================

    /// Items of a multi-bulk reply. Nil counts as empty.
    pub fn into_array(self) -> Result<Vec<Reply>> {
        match self {
            Reply::Array(items) => Ok(items),
            Reply::Nil => Ok(Vec::new()),
            other => Err(Error::wrong_type("array", other.describe())),
        }
    }

    /// Decode as a sequence of strings
    pub fn into_strings(self) -> Result<Vec<String>> {
        self.into_array()?
            .into_iter()
            .map(Reply::into_string)
            .collect()
    }

    /// Decode as a sequence of optional strings (nil items kept as `None`)
    pub fn into_opt_strings(self) -> Result<Vec<Option<String>>> {
        self.into_array()?
            .into_iter()
            .map(Reply::into_opt_string)
            .collect()
    }

    /// Decode as a sequence of values parsed from their text form
    pub fn into_parsed<T: FromStr>(self) -> Result<Vec<T>> {
        self.into_array()?
            .into_iter()
            .map(|item| {
                let text = item.clone().into_string()?;
                text.parse::<T>().map_err(|_| {
                    Error::wrong_type(crate::key::short_type_name::<T>(), item.describe())
                })
            })
            .collect()
    }

    /// Decode a flat `member, score, member, score, ...` reply
    pub fn into_score_map(self) -> Result<HashMap<String, i64>> {
        let items = self.into_array()?;
        if items.len() % 2 != 0 {
            return Err(Error::wrong_type(
                "member/score pairs",
                format!("array of {}", items.len()),
            ));
        }
        let mut map = HashMap::with_capacity(items.len() / 2);
        let mut iter = items.into_iter();
        while let (Some(member), Some(score)) = (iter.next(), iter.next()) {
            map.insert(member.into_string()?, score.into_i64()?);
        }
        Ok(map)
    }

    /// Decode a flat `field, value, field, value, ...` reply
    pub fn into_string_map(self) -> Result<HashMap<String, String>> {
        let items = self.into_array()?;
        if items.len() % 2 != 0 {
            return Err(Error::wrong_type(
                "field/value pairs",
                format!("array of {}", items.len()),
            ));
        }
        let mut map = HashMap::with_capacity(items.len() / 2);
        let mut iter = items.into_iter();
        while let (Some(field), Some(value)) = (iter.next(), iter.next()) {
            map.insert(field.into_string()?, value.into_string()?);
        }
        Ok(map)
    }
}

fn parse_float(s: &str) -> Option<f64> {
    match s {
        "inf" | "+inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        _ => s.parse::<f64>().ok(),
    }
}

impl From<&str> for Reply {
    fn from(s: &str) -> Self {
        Reply::Bulk(s.as_bytes().to_vec())
    }
}

impl From<i64> for Reply {
    fn from(i: i64) -> Self {
        Reply::Int(i)
    }
}

impl From<Vec<Reply>> for Reply {
    fn from(items: Vec<Reply>) -> Self {
        Reply::Array(items)
    }
}
