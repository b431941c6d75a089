//! Sorted sets
//!
//! | Facade | Command |
//! |--------|---------|
//! | `zadd(k, [(1.0, a)])` | `ZADD k 1 a` |
//! | `zrange_with_scores(k, 0, -1)` | `ZRANGE k 0 -1 WITHSCORES` |
//! | `zrangebyscore(k, 0, 100, None)` | `ZRANGEBYSCORE k 0 100 LIMIT 0 -1` |
//! | `zrevrangebyscore(k, 0, 100, None)` | `ZREVRANGEBYSCORE k 100 0 LIMIT 0 -1` |
//!
//! The descending range-by-score takes its bounds in the same `(min, max)`
//! order as the ascending one and sends them as `max, min`, which is the
//! order the store expects. The `LIMIT` clause is always sent.

use std::collections::HashMap;

use keyfront_core::{names, Arg, Command, CommandExecutor, Result};

use super::types::ScoreLimit;
use super::Facade;

impl<E: CommandExecutor> Facade<E> {
    /// Add `(score, member)` pairs. Returns how many members were new.
    pub fn zadd<I, V>(&self, key: &str, members: I) -> Result<i64>
    where
        I: IntoIterator<Item = (f64, V)>,
        V: Into<Arg>,
    {
        let mut command = Command::new(names::ZADD).key(key);
        for (score, member) in members {
            command = command.arg(score).arg(member);
        }
        self.dispatch(command)?.into_i64()
    }

    /// Members by rank, ascending
    pub fn zrange(&self, key: &str, start: i64, end: i64) -> Result<Vec<String>> {
        self.dispatch(Command::new(names::ZRANGE).key(key).arg(start).arg(end))?
            .into_strings()
    }

    /// Members by rank with their scores. Scores must be integral.
    pub fn zrange_with_scores(
        &self,
        key: &str,
        start: i64,
        end: i64,
    ) -> Result<HashMap<String, i64>> {
        self.dispatch(
            Command::new(names::ZRANGE)
                .key(key)
                .arg(start)
                .arg(end)
                .arg(names::WITHSCORES),
        )?
        .into_score_map()
    }

    /// Members with scores in `[min, max]`, ascending
    pub fn zrangebyscore(
        &self,
        key: &str,
        min: impl Into<Arg>,
        max: impl Into<Arg>,
        limit: Option<ScoreLimit>,
    ) -> Result<Vec<String>> {
        let limit = limit.unwrap_or_default();
        self.dispatch(
            Command::new(names::ZRANGEBYSCORE)
                .key(key)
                .arg(min)
                .arg(max)
                .arg(names::LIMIT)
                .arg(limit.offset)
                .arg(limit.count),
        )?
        .into_strings()
    }

    /// Members by rank, descending
    pub fn zrevrange(&self, key: &str, start: i64, end: i64) -> Result<Vec<String>> {
        self.dispatch(Command::new(names::ZREVRANGE).key(key).arg(start).arg(end))?
            .into_strings()
    }

    /// Members with scores in `[min, max]`, descending
    pub fn zrevrangebyscore(
        &self,
        key: &str,
        min: impl Into<Arg>,
        max: impl Into<Arg>,
        limit: Option<ScoreLimit>,
    ) -> Result<Vec<String>> {
        let limit = limit.unwrap_or_default();
        self.dispatch(
            Command::new(names::ZREVRANGEBYSCORE)
                .key(key)
                .arg(max)
                .arg(min)
                .arg(names::LIMIT)
                .arg(limit.offset)
                .arg(limit.count),
        )?
        .into_strings()
    }

    /// Remove members. Returns how many existed.
    pub fn zrem<I, V>(&self, key: &str, members: I) -> Result<i64>
    where
        I: IntoIterator<Item = V>,
        V: Into<Arg>,
    {
        self.dispatch(Command::new(names::ZREM).key(key).args(members))?
            .into_i64()
    }

    /// Remove members with scores in `[min, max]`. Returns how many.
    pub fn zremrangebyscore(
        &self,
        key: &str,
        min: impl Into<Arg>,
        max: impl Into<Arg>,
    ) -> Result<i64> {
        self.dispatch(Command::new(names::ZREMRANGEBYSCORE).key(key).arg(min).arg(max))?
            .into_i64()
    }

    /// Remove members ranked `start..=end`. Returns how many.
    pub fn zremrangebyrank(&self, key: &str, start: i64, end: i64) -> Result<i64> {
        self.dispatch(Command::new(names::ZREMRANGEBYRANK).key(key).arg(start).arg(end))?
            .into_i64()
    }

    /// Number of members
    pub fn zcard(&self, key: &str) -> Result<i64> {
        self.dispatch(Command::new(names::ZCARD).key(key))?.into_i64()
    }

    /// Score of `member`, `None` if absent
    pub fn zscore(&self, key: &str, member: impl Into<Arg>) -> Result<Option<f64>> {
        self.dispatch(Command::new(names::ZSCORE).key(key).arg(member))?
            .into_opt_f64()
    }

    /// Ascending rank of `member`, `None` if absent
    pub fn zrank(&self, key: &str, member: impl Into<Arg>) -> Result<Option<i64>> {
        self.dispatch(Command::new(names::ZRANK).key(key).arg(member))?
            .into_opt_i64()
    }

    /// Descending rank of `member`, `None` if absent
    pub fn zrevrank(&self, key: &str, member: impl Into<Arg>) -> Result<Option<i64>> {
        self.dispatch(Command::new(names::ZREVRANK).key(key).arg(member))?
            .into_opt_i64()
    }

    /// Number of members with scores in `[min, max]`
    pub fn zcount(&self, key: &str, min: impl Into<Arg>, max: impl Into<Arg>) -> Result<i64> {
        self.dispatch(Command::new(names::ZCOUNT).key(key).arg(min).arg(max))?
            .into_i64()
    }
}
