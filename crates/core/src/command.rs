//! Command invocations.
//!
//! A [`Command`] is the unit handed to a [`CommandExecutor`](crate::CommandExecutor):
//! a command name plus positional arguments in the order the store's protocol
//! documents. Commands are:
//! - **Self-contained**: every argument needed on the wire is in `args`
//! - **Key-aware**: arguments that are keys are tagged with [`Arg::Key`], so
//!   key resolution happens in exactly one place
//! - **Pure data**: constructed fresh per call, never persisted

use serde::{Deserialize, Serialize};

use crate::key::KeyResolver;

/// One positional argument of a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Arg {
    /// A store key; rewritten by [`Command::resolve_keys`]
    Key(String),
    /// UTF-8 text (values, field names, keywords such as `LIMIT`)
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
}

impl Arg {
    /// Bytes as they go on the wire
    pub fn to_wire_bytes(&self) -> Vec<u8> {
        match self {
            Arg::Key(s) | Arg::Str(s) => s.as_bytes().to_vec(),
            Arg::Bytes(b) => b.clone(),
            Arg::Int(i) => i.to_string().into_bytes(),
            Arg::Float(f) => format_float(*f).into_bytes(),
        }
    }

    /// Whether this argument is a key
    pub fn is_key(&self) -> bool {
        matches!(self, Arg::Key(_))
    }
}

// Infinities use the spelling the store parses in score ranges.
fn format_float(f: f64) -> String {
    if f == f64::INFINITY {
        "+inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        f.to_string()
    }
}

impl std::fmt::Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Key(s) | Arg::Str(s) => f.write_str(s),
            Arg::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

// ============================================================================
// From implementations for ergonomic argument passing
// ============================================================================

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<Vec<u8>> for Arg {
    fn from(b: Vec<u8>) -> Self {
        Arg::Bytes(b)
    }
}

impl From<&[u8]> for Arg {
    fn from(b: &[u8]) -> Self {
        Arg::Bytes(b.to_vec())
    }
}

impl From<i64> for Arg {
    fn from(i: i64) -> Self {
        Arg::Int(i)
    }
}

impl From<i32> for Arg {
    fn from(i: i32) -> Self {
        Arg::Int(i as i64)
    }
}

impl From<u32> for Arg {
    fn from(i: u32) -> Self {
        Arg::Int(i as i64)
    }
}

impl From<usize> for Arg {
    fn from(i: usize) -> Self {
        Arg::Int(i as i64)
    }
}

impl From<f64> for Arg {
    fn from(f: f64) -> Self {
        Arg::Float(f)
    }
}

impl From<f32> for Arg {
    fn from(f: f32) -> Self {
        Arg::Float(f as f64)
    }
}

/// A command name with its positional arguments.
///
/// # Example
///
/// ```
/// use keyfront_core::{Arg, Command, KeyResolver};
///
/// let cmd = Command::new("SET").key("greeting").arg("hello");
/// let resolved = cmd.resolve_keys(&KeyResolver::new("app:"));
///
/// assert_eq!(resolved.name(), "SET");
/// assert_eq!(resolved.arg_list()[0], Arg::Key("app:greeting".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    name: String,
    args: Vec<Arg>,
}

impl Command {
    /// Start a command with no arguments
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append a key argument
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.args.push(Arg::Key(key.into()));
        self
    }

    /// Append several key arguments in order
    pub fn keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.args.extend(keys.into_iter().map(|k| Arg::Key(k.into())));
        self
    }

    /// Append a non-key argument
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several non-key arguments in order
    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Command name as sent on the wire
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional arguments
    pub fn arg_list(&self) -> &[Arg] {
        &self.args
    }

    /// Key arguments, in order
    pub fn key_args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().filter_map(|a| match a {
            Arg::Key(k) => Some(k.as_str()),
            _ => None,
        })
    }

    /// Rewrite every [`Arg::Key`] into its effective form.
    ///
    /// Must be applied exactly once per command; resolving twice prefixes twice.
    pub fn resolve_keys(mut self, keys: &KeyResolver) -> Self {
        for arg in &mut self.args {
            if let Arg::Key(k) = arg {
                *k = keys.resolve_key(k);
            }
        }
        self
    }

    /// Arguments rendered as text, for assertions and diagnostics
    pub fn to_strings(&self) -> Vec<String> {
        self.args.iter().map(|a| a.to_string()).collect()
    }
}

/// Command names used by the facade.
pub mod names {
    #![allow(missing_docs)]

    // Keys
    pub const KEYS: &str = "KEYS";
    pub const EXISTS: &str = "EXISTS";
    pub const RENAME: &str = "RENAME";
    pub const RENAMENX: &str = "RENAMENX";
    pub const DEL: &str = "DEL";
    pub const EXPIRE: &str = "EXPIRE";
    pub const PEXPIRE: &str = "PEXPIRE";
    pub const EXPIREAT: &str = "EXPIREAT";
    pub const PEXPIREAT: &str = "PEXPIREAT";
    pub const PERSIST: &str = "PERSIST";
    pub const TTL: &str = "TTL";
    pub const PTTL: &str = "PTTL";
    pub const TYPE: &str = "TYPE";
    pub const DUMP: &str = "DUMP";

    // Strings
    pub const SET: &str = "SET";
    pub const SETEX: &str = "SETEX";
    pub const PSETEX: &str = "PSETEX";
    pub const SETNX: &str = "SETNX";
    pub const SETRANGE: &str = "SETRANGE";
    pub const APPEND: &str = "APPEND";
    pub const GET: &str = "GET";
    pub const GETSET: &str = "GETSET";
    pub const GETRANGE: &str = "GETRANGE";
    pub const STRLEN: &str = "STRLEN";
    pub const INCR: &str = "INCR";
    pub const INCRBY: &str = "INCRBY";
    pub const INCRBYFLOAT: &str = "INCRBYFLOAT";
    pub const DECR: &str = "DECR";
    pub const DECRBY: &str = "DECRBY";

    // Lists
    pub const LPUSH: &str = "LPUSH";
    pub const RPUSH: &str = "RPUSH";
    pub const LPOP: &str = "LPOP";
    pub const LRANGE: &str = "LRANGE";
    pub const LINDEX: &str = "LINDEX";
    pub const LSET: &str = "LSET";
    pub const LREM: &str = "LREM";
    pub const LTRIM: &str = "LTRIM";
    pub const LLEN: &str = "LLEN";

    // Hashes
    pub const HSET: &str = "HSET";
    pub const HSETNX: &str = "HSETNX";
    pub const HMSET: &str = "HMSET";
    pub const HGET: &str = "HGET";
    pub const HMGET: &str = "HMGET";
    pub const HGETALL: &str = "HGETALL";
    pub const HKEYS: &str = "HKEYS";
    pub const HVALS: &str = "HVALS";
    pub const HINCRBY: &str = "HINCRBY";
    pub const HINCRBYFLOAT: &str = "HINCRBYFLOAT";
    pub const HLEN: &str = "HLEN";
    pub const HSTRLEN: &str = "HSTRLEN";
    pub const HEXISTS: &str = "HEXISTS";
    pub const HDEL: &str = "HDEL";

    // Sets
    pub const SADD: &str = "SADD";
    pub const SMOVE: &str = "SMOVE";
    pub const SPOP: &str = "SPOP";
    pub const SREM: &str = "SREM";
    pub const SCARD: &str = "SCARD";
    pub const SISMEMBER: &str = "SISMEMBER";
    pub const SMEMBERS: &str = "SMEMBERS";
    pub const SRANDMEMBER: &str = "SRANDMEMBER";
    pub const SUNION: &str = "SUNION";
    pub const SINTER: &str = "SINTER";
    pub const SDIFF: &str = "SDIFF";

    // Sorted sets
    pub const ZADD: &str = "ZADD";
    pub const ZRANGE: &str = "ZRANGE";
    pub const ZRANGEBYSCORE: &str = "ZRANGEBYSCORE";
    pub const ZREVRANGE: &str = "ZREVRANGE";
    pub const ZREVRANGEBYSCORE: &str = "ZREVRANGEBYSCORE";
    pub const ZREM: &str = "ZREM";
    pub const ZREMRANGEBYSCORE: &str = "ZREMRANGEBYSCORE";
    pub const ZREMRANGEBYRANK: &str = "ZREMRANGEBYRANK";
    pub const ZCARD: &str = "ZCARD";
    pub const ZSCORE: &str = "ZSCORE";
    pub const ZRANK: &str = "ZRANK";
    pub const ZREVRANK: &str = "ZREVRANK";
    pub const ZCOUNT: &str = "ZCOUNT";

    // Transactions
    pub const WATCH: &str = "WATCH";
    pub const MULTI: &str = "MULTI";
    pub const EXEC: &str = "EXEC";

    // Server
    pub const PING: &str = "PING";
    pub const INFO: &str = "INFO";
    pub const SELECT: &str = "SELECT";
    pub const BGSAVE: &str = "BGSAVE";
    pub const FLUSHDB: &str = "FLUSHDB";
    pub const FLUSHALL: &str = "FLUSHALL";

    // Keywords
    pub const LIMIT: &str = "LIMIT";
    pub const WITHSCORES: &str = "WITHSCORES";
}
