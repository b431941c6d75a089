//! Conversions between the driver's types and Keyfront's.
//!
//! Both sides are foreign to this crate, so these are plain functions rather
//! than `From` impls. Server error replies and driver failures are carried
//! over verbatim; nothing here retries or reinterprets them.

use keyfront_core::{Command, Error, Reply, Result};

/// Build the driver command for a fully resolved [`Command`].
pub(crate) fn to_redis_cmd(command: &Command) -> redis::Cmd {
    let mut cmd = redis::cmd(command.name());
    for arg in command.arg_list() {
        cmd.arg(arg.to_wire_bytes());
    }
    cmd
}

/// Convert a driver reply into a [`Reply`].
///
/// RESP3 maps are flattened into `key, value, ...` arrays so that callers
/// see the same shape under either protocol version.
pub(crate) fn to_reply(value: redis::Value) -> Result<Reply> {
    match value {
        redis::Value::Nil => Ok(Reply::Nil),
        redis::Value::Int(i) => Ok(Reply::Int(i)),
        redis::Value::BulkString(bytes) => Ok(Reply::Bulk(bytes)),
        redis::Value::SimpleString(s) => Ok(Reply::Status(s)),
        redis::Value::Okay => Ok(Reply::Status("OK".to_string())),
        redis::Value::Double(d) => Ok(Reply::Double(d)),
        redis::Value::Boolean(b) => Ok(Reply::Bool(b)),
        redis::Value::VerbatimString { text, .. } => Ok(Reply::Bulk(text.into_bytes())),
        redis::Value::Array(items) | redis::Value::Set(items) => items
            .into_iter()
            .map(to_reply)
            .collect::<Result<Vec<_>>>()
            .map(Reply::Array),
        redis::Value::Map(pairs) => {
            let mut flat = Vec::with_capacity(pairs.len() * 2);
            for (k, v) in pairs {
                flat.push(to_reply(k)?);
                flat.push(to_reply(v)?);
            }
            Ok(Reply::Array(flat))
        }
        redis::Value::Attribute { data, .. } => to_reply(*data),
        other => Err(Error::Server {
            code: None,
            reason: format!("unsupported reply: {:?}", other),
        }),
    }
}

/// Classify a driver error.
pub(crate) fn from_redis_error(err: redis::RedisError) -> Error {
    if err.is_io_error()
        || err.is_timeout()
        || err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.kind() == redis::ErrorKind::AuthenticationFailed
    {
        return Error::Connection {
            reason: err.to_string(),
        };
    }
    if err.kind() == redis::ErrorKind::TypeError {
        return Error::wrong_type("reply of the requested type", err.to_string());
    }
    Error::Server {
        code: err.code().map(str::to_string),
        reason: err.to_string(),
    }
}

/// Classify a pool error (checkout timeout or failed construction).
pub(crate) fn from_pool_error(err: r2d2::Error) -> Error {
    Error::Pool {
        reason: err.to_string(),
    }
}
