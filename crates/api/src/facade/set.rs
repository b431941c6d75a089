//! Sets
//!
//! | Facade | Command |
//! |--------|---------|
//! | `sadd(k, [a, b])` | `SADD k a b` |
//! | `spop(k, None)` | `SPOP k 1` |
//! | `sunion([a, b])` | `SUNION a b` |
//!
//! The `_i64`/`_f64` variants read the same reply as their string
//! counterparts and parse each member.

use keyfront_core::{names, Arg, Command, CommandExecutor, Result};

use super::Facade;

impl<E: CommandExecutor> Facade<E> {
    /// Add members. Returns how many were new.
    pub fn sadd<I, V>(&self, key: &str, members: I) -> Result<i64>
    where
        I: IntoIterator<Item = V>,
        V: Into<Arg>,
    {
        self.dispatch(Command::new(names::SADD).key(key).args(members))?
            .into_i64()
    }

    /// Move `member` from `source` to `destination`. Returns whether it moved.
    pub fn smove(&self, source: &str, destination: &str, member: impl Into<Arg>) -> Result<bool> {
        self.dispatch(
            Command::new(names::SMOVE)
                .key(source)
                .key(destination)
                .arg(member),
        )?
        .into_bool()
    }

    /// Remove and return up to `count` (default 1) random members
    pub fn spop(&self, key: &str, count: Option<i64>) -> Result<Vec<String>> {
        self.dispatch(Command::new(names::SPOP).key(key).arg(count.unwrap_or(1)))?
            .into_strings()
    }

    /// Remove members. Returns how many existed.
    pub fn srem<I, V>(&self, key: &str, members: I) -> Result<i64>
    where
        I: IntoIterator<Item = V>,
        V: Into<Arg>,
    {
        self.dispatch(Command::new(names::SREM).key(key).args(members))?
            .into_i64()
    }

    /// Number of members
    pub fn scard(&self, key: &str) -> Result<i64> {
        self.dispatch(Command::new(names::SCARD).key(key))?.into_i64()
    }

    /// Whether `member` is in the set
    pub fn sismember(&self, key: &str, member: impl Into<Arg>) -> Result<bool> {
        self.dispatch(Command::new(names::SISMEMBER).key(key).arg(member))?
            .into_bool()
    }

    /// All members
    pub fn smembers(&self, key: &str) -> Result<Vec<String>> {
        self.smembers_reply(key)?.into_strings()
    }

    /// All members, parsed as integers
    pub fn smembers_i64(&self, key: &str) -> Result<Vec<i64>> {
        self.smembers_reply(key)?.into_parsed()
    }

    /// All members, parsed as floats
    pub fn smembers_f64(&self, key: &str) -> Result<Vec<f64>> {
        self.smembers_reply(key)?.into_parsed()
    }

    /// Up to `count` (default 1) random members, without removing them
    pub fn srandmember(&self, key: &str, count: Option<i64>) -> Result<Vec<String>> {
        self.srandmember_reply(key, count)?.into_strings()
    }

    /// Up to `count` (default 1) random members, parsed as integers
    pub fn srandmember_i64(&self, key: &str, count: Option<i64>) -> Result<Vec<i64>> {
        self.srandmember_reply(key, count)?.into_parsed()
    }

    /// Up to `count` (default 1) random members, parsed as floats
    pub fn srandmember_f64(&self, key: &str, count: Option<i64>) -> Result<Vec<f64>> {
        self.srandmember_reply(key, count)?.into_parsed()
    }

    /// Union of the sets at `keys`
    pub fn sunion<I, K>(&self, keys: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::SUNION).keys(keys))?
            .into_strings()
    }

    /// Union of the sets at `keys`, parsed as integers
    pub fn sunion_i64<I, K>(&self, keys: I) -> Result<Vec<i64>>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::SUNION).keys(keys))?
            .into_parsed()
    }

    /// Union of the sets at `keys`, parsed as floats
    pub fn sunion_f64<I, K>(&self, keys: I) -> Result<Vec<f64>>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::SUNION).keys(keys))?
            .into_parsed()
    }

    /// Intersection of the sets at `keys`
    pub fn sinter<I, K>(&self, keys: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::SINTER).keys(keys))?
            .into_strings()
    }

    /// Intersection of the sets at `keys`, parsed as integers
    pub fn sinter_i64<I, K>(&self, keys: I) -> Result<Vec<i64>>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::SINTER).keys(keys))?
            .into_parsed()
    }

    /// Intersection of the sets at `keys`, parsed as floats
    pub fn sinter_f64<I, K>(&self, keys: I) -> Result<Vec<f64>>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::SINTER).keys(keys))?
            .into_parsed()
    }

    /// Members of the first set absent from all the others
    pub fn sdiff<I, K>(&self, keys: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::SDIFF).keys(keys))?
            .into_strings()
    }

    /// Difference of the sets at `keys`, parsed as integers
    pub fn sdiff_i64<I, K>(&self, keys: I) -> Result<Vec<i64>>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::SDIFF).keys(keys))?
            .into_parsed()
    }

    /// Difference of the sets at `keys`, parsed as floats
    pub fn sdiff_f64<I, K>(&self, keys: I) -> Result<Vec<f64>>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.dispatch(Command::new(names::SDIFF).keys(keys))?
            .into_parsed()
    }

    fn smembers_reply(&self, key: &str) -> Result<keyfront_core::Reply> {
        self.dispatch(Command::new(names::SMEMBERS).key(key))
    }

    fn srandmember_reply(&self, key: &str, count: Option<i64>) -> Result<keyfront_core::Reply> {
        self.dispatch(
            Command::new(names::SRANDMEMBER)
                .key(key)
                .arg(count.unwrap_or(1)),
        )
    }
}
