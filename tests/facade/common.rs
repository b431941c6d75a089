//! Common test utilities for facade tests
//!
//! [`MemoryStore`] is a small in-process stand-in for the store: enough of
//! the command set to run the facade end to end, with per-key versions so
//! `WATCH` conflicts can be provoked deterministically.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use keyfront::{Command, CommandExecutor, Error, Facade, Reply, Result, TxnOutcome};
use parking_lot::Mutex;

#[derive(Debug, Clone)]
enum Entry {
    Str(Vec<u8>),
    Hash(BTreeMap<String, String>),
    Set(BTreeSet<String>),
    ZSet(Vec<(f64, String)>),
}

impl Entry {
    fn type_name(&self) -> &'static str {
        match self {
            Entry::Str(_) => "string",
            Entry::Hash(_) => "hash",
            Entry::Set(_) => "set",
            Entry::ZSet(_) => "zset",
        }
    }
}

#[derive(Default)]
struct State {
    data: HashMap<String, Entry>,
    versions: HashMap<String, u64>,
    ttls: HashMap<String, i64>,
    clock: u64,
}

impl State {
    fn bump(&mut self, key: &str) {
        self.clock += 1;
        self.versions.insert(key.to_string(), self.clock);
    }

    fn version(&self, key: &str) -> u64 {
        self.versions.get(key).copied().unwrap_or(0)
    }
}

/// In-memory store implementing [`CommandExecutor`].
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    interfere: Mutex<Option<(String, String)>>,
}

impl MemoryStore {
    /// Before the next `EXEC`, overwrite `key` as a concurrent client would
    pub fn interfere_next_transaction(&self, key: &str, value: &str) {
        *self.interfere.lock() = Some((key.to_string(), value.to_string()));
    }

    /// Raw string value at an effective key
    pub fn raw(&self, effective_key: &str) -> Option<String> {
        match self.state.lock().data.get(effective_key) {
            Some(Entry::Str(b)) => Some(String::from_utf8_lossy(b).into_owned()),
            _ => None,
        }
    }

    /// TTL recorded for an effective key
    pub fn ttl_of(&self, effective_key: &str) -> Option<i64> {
        self.state.lock().ttls.get(effective_key).copied()
    }

    /// Every effective key currently stored
    pub fn effective_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.state.lock().data.keys().cloned().collect();
        keys.sort();
        keys
    }
}

fn server_err(code: &str, reason: &str) -> Error {
    Error::Server {
        code: Some(code.to_string()),
        reason: format!("{} {}", code, reason),
    }
}

fn wrong_kind() -> Error {
    server_err(
        "WRONGTYPE",
        "Operation against a key holding the wrong kind of value",
    )
}

fn int_arg(args: &[String], i: usize) -> Result<i64> {
    args.get(i)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| server_err("ERR", "value is not an integer or out of range"))
}

fn score_arg(args: &[String], i: usize) -> Result<f64> {
    match args.get(i).map(String::as_str) {
        Some("-inf") => Ok(f64::NEG_INFINITY),
        Some("+inf") | Some("inf") => Ok(f64::INFINITY),
        Some(s) => s
            .parse()
            .map_err(|_| server_err("ERR", "min or max is not a float")),
        None => Err(server_err("ERR", "wrong number of arguments")),
    }
}

fn bulk(s: &str) -> Reply {
    Reply::Bulk(s.as_bytes().to_vec())
}

fn apply(state: &mut State, name: &str, args: &[String], raw: &[Vec<u8>]) -> Result<Reply> {
    let key = args.first().cloned().unwrap_or_default();
    match name {
        "PING" => Ok(Reply::Status("PONG".to_string())),
        "SET" => {
            state.data.insert(key.clone(), Entry::Str(raw[1].clone()));
            state.ttls.remove(&key);
            state.bump(&key);
            Ok(Reply::Status("OK".to_string()))
        }
        "SETEX" | "PSETEX" => {
            let ttl = int_arg(args, 1)?;
            state.data.insert(key.clone(), Entry::Str(raw[2].clone()));
            state.ttls.insert(key.clone(), ttl);
            state.bump(&key);
            Ok(Reply::Status("OK".to_string()))
        }
        "GET" => match state.data.get(&key) {
            None => Ok(Reply::Nil),
            Some(Entry::Str(b)) => Ok(Reply::Bulk(b.clone())),
            Some(_) => Err(wrong_kind()),
        },
        "INCR" | "INCRBY" | "DECR" | "DECRBY" => {
            let step = match name {
                "INCR" => 1,
                "DECR" => -1,
                "INCRBY" => int_arg(args, 1)?,
                _ => -int_arg(args, 1)?,
            };
            let current = match state.data.get(&key) {
                None => 0,
                Some(Entry::Str(b)) => String::from_utf8_lossy(b)
                    .parse::<i64>()
                    .map_err(|_| server_err("ERR", "value is not an integer or out of range"))?,
                Some(_) => return Err(wrong_kind()),
            };
            let next = current + step;
            state
                .data
                .insert(key.clone(), Entry::Str(next.to_string().into_bytes()));
            state.bump(&key);
            Ok(Reply::Int(next))
        }
        "DEL" => {
            let mut removed = 0;
            for k in args {
                if state.data.remove(k).is_some() {
                    removed += 1;
                    state.bump(k);
                }
            }
            Ok(Reply::Int(removed))
        }
        "EXISTS" => Ok(Reply::Int(state.data.contains_key(&key) as i64)),
        "TYPE" => Ok(Reply::Status(
            state
                .data
                .get(&key)
                .map(Entry::type_name)
                .unwrap_or("none")
                .to_string(),
        )),
        "KEYS" => {
            let prefix = key.trim_end_matches('*');
            let mut found: Vec<&String> =
                state.data.keys().filter(|k| k.starts_with(prefix)).collect();
            found.sort();
            Ok(Reply::Array(found.into_iter().map(|k| bulk(k)).collect()))
        }
        "EXPIRE" => {
            let secs = int_arg(args, 1)?;
            if state.data.contains_key(&key) {
                state.ttls.insert(key, secs);
                Ok(Reply::Int(1))
            } else {
                Ok(Reply::Int(0))
            }
        }
        "HMSET" => {
            let entry = state
                .data
                .entry(key.clone())
                .or_insert_with(|| Entry::Hash(BTreeMap::new()));
            let Entry::Hash(fields) = entry else {
                return Err(wrong_kind());
            };
            for pair in args[1..].chunks(2) {
                if let [field, value] = pair {
                    fields.insert(field.clone(), value.clone());
                }
            }
            state.bump(&key);
            Ok(Reply::Status("OK".to_string()))
        }
        "HGETALL" => match state.data.get(&key) {
            None => Ok(Reply::Array(vec![])),
            Some(Entry::Hash(fields)) => Ok(Reply::Array(
                fields
                    .iter()
                    .flat_map(|(f, v)| [bulk(f), bulk(v)])
                    .collect(),
            )),
            Some(_) => Err(wrong_kind()),
        },
        "SADD" => {
            let entry = state
                .data
                .entry(key.clone())
                .or_insert_with(|| Entry::Set(BTreeSet::new()));
            let Entry::Set(members) = entry else {
                return Err(wrong_kind());
            };
            let added = args[1..]
                .iter()
                .filter(|m| members.insert((*m).clone()))
                .count();
            state.bump(&key);
            Ok(Reply::Int(added as i64))
        }
        "SMEMBERS" => match state.data.get(&key) {
            None => Ok(Reply::Array(vec![])),
            Some(Entry::Set(members)) => Ok(Reply::Array(members.iter().map(|m| bulk(m)).collect())),
            Some(_) => Err(wrong_kind()),
        },
        "SUNION" => {
            let mut union = BTreeSet::new();
            for k in args {
                match state.data.get(k) {
                    None => {}
                    Some(Entry::Set(members)) => union.extend(members.iter().cloned()),
                    Some(_) => return Err(wrong_kind()),
                }
            }
            Ok(Reply::Array(union.iter().map(|m| bulk(m)).collect()))
        }
        "ZADD" => {
            let entry = state
                .data
                .entry(key.clone())
                .or_insert_with(|| Entry::ZSet(Vec::new()));
            let Entry::ZSet(members) = entry else {
                return Err(wrong_kind());
            };
            let mut added = 0;
            for pair in args[1..].chunks(2) {
                if let [score, member] = pair {
                    let score: f64 = score
                        .parse()
                        .map_err(|_| server_err("ERR", "value is not a valid float"))?;
                    match members.iter_mut().find(|(_, m)| m == member) {
                        Some(existing) => existing.0 = score,
                        None => {
                            members.push((score, member.clone()));
                            added += 1;
                        }
                    }
                }
            }
            members.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
            state.bump(&key);
            Ok(Reply::Int(added))
        }
        "ZSCORE" => match state.data.get(&key) {
            None => Ok(Reply::Nil),
            Some(Entry::ZSet(members)) => Ok(members
                .iter()
                .find(|(_, m)| Some(m) == args.get(1))
                .map(|(s, _)| bulk(&s.to_string()))
                .unwrap_or(Reply::Nil)),
            Some(_) => Err(wrong_kind()),
        },
        "ZRANGEBYSCORE" | "ZREVRANGEBYSCORE" => {
            let (lo, hi) = if name == "ZRANGEBYSCORE" {
                (score_arg(args, 1)?, score_arg(args, 2)?)
            } else {
                (score_arg(args, 2)?, score_arg(args, 1)?)
            };
            let (offset, count) = match args.get(3).map(String::as_str) {
                Some("LIMIT") => (int_arg(args, 4)?, int_arg(args, 5)?),
                _ => (0, -1),
            };
            let mut hits: Vec<String> = match state.data.get(&key) {
                None => Vec::new(),
                Some(Entry::ZSet(members)) => members
                    .iter()
                    .filter(|(s, _)| *s >= lo && *s <= hi)
                    .map(|(_, m)| m.clone())
                    .collect(),
                Some(_) => return Err(wrong_kind()),
            };
            if name == "ZREVRANGEBYSCORE" {
                hits.reverse();
            }
            let hits = hits.into_iter().skip(offset.max(0) as usize);
            let hits: Vec<String> = if count < 0 {
                hits.collect()
            } else {
                hits.take(count as usize).collect()
            };
            Ok(Reply::Array(hits.iter().map(|m| bulk(m)).collect()))
        }
        other => Err(server_err("ERR", &format!("unknown command '{}'", other))),
    }
}

fn split(command: &Command) -> (Vec<String>, Vec<Vec<u8>>) {
    let raw: Vec<Vec<u8>> = command.arg_list().iter().map(|a| a.to_wire_bytes()).collect();
    (command.to_strings(), raw)
}

impl CommandExecutor for MemoryStore {
    fn execute(&self, command: &Command) -> Result<Reply> {
        let (args, raw) = split(command);
        apply(&mut self.state.lock(), command.name(), &args, &raw)
    }

    fn execute_transaction(&self, watch: &[String], commands: &[Command]) -> Result<TxnOutcome> {
        let mut state = self.state.lock();
        let watched: Vec<(String, u64)> = watch
            .iter()
            .map(|k| (k.clone(), state.version(k)))
            .collect();

        if let Some((key, value)) = self.interfere.lock().take() {
            apply(
                &mut state,
                "SET",
                &[key.clone(), value.clone()],
                &[key.into_bytes(), value.into_bytes()],
            )?;
        }

        if watched.iter().any(|(k, v)| state.version(k) != *v) {
            return Ok(TxnOutcome::Aborted);
        }

        let mut replies = Vec::with_capacity(commands.len());
        for command in commands {
            let (args, raw) = split(command);
            replies.push(apply(&mut state, command.name(), &args, &raw)?);
        }
        Ok(TxnOutcome::Committed(replies))
    }
}

/// Route facade logs to the test harness output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Facade with `prefix` over a fresh store
pub fn create_facade(prefix: &str) -> (Facade<Arc<MemoryStore>>, Arc<MemoryStore>) {
    init_tracing();
    let store = Arc::new(MemoryStore::default());
    (Facade::with_prefix(Arc::clone(&store), prefix), store)
}

/// Second facade with another prefix over the same store
pub fn share_store(store: &Arc<MemoryStore>, prefix: &str) -> Facade<Arc<MemoryStore>> {
    Facade::with_prefix(Arc::clone(store), prefix)
}
