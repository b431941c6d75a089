//! Bounded connection pool.
//!
//! Connections are dialled with the configured timeout, authenticated and
//! switched to the configured database before they join the pool. Reuse is
//! gated by a staleness-aware liveness check: a connection that has been idle
//! for at least `probe_after` is PINGed on checkout, fresher ones are handed
//! out without a round trip. Idle connections past `idle_timeout` are closed
//! by the pool's reaper.

use std::time::{Duration, Instant};

use keyfront_core::Result;
use redis::ConnectionLike;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::convert::{from_pool_error, from_redis_error};

/// A pooled connection and the time it was last returned to the pool.
pub struct StoreConnection {
    conn: redis::Connection,
    last_used: Instant,
    broken: bool,
}

impl StoreConnection {
    /// Driver connection
    pub fn inner(&mut self) -> &mut redis::Connection {
        &mut self.conn
    }

    /// Time since the connection was last used
    pub fn idle_for(&self) -> Duration {
        self.last_used.elapsed()
    }

    /// Keep the connection out of the pool once it is returned.
    ///
    /// Used when a transaction failed partway and the connection may still
    /// be inside `MULTI` or holding a `WATCH`.
    pub fn mark_broken(&mut self) {
        self.broken = true;
    }
}

/// Dials, validates and recycles [`StoreConnection`]s for `r2d2`.
#[derive(Debug)]
pub struct StoreConnectionManager {
    client: redis::Client,
    timeout: Duration,
    probe_after: Duration,
}

impl StoreConnectionManager {
    /// Manager for the store described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let info = redis::ConnectionInfo {
            addr: redis::ConnectionAddr::Tcp(config.host.clone(), config.port),
            redis: redis::RedisConnectionInfo {
                db: config.database,
                password: config.password.clone(),
                ..Default::default()
            },
        };
        let client = redis::Client::open(info).map_err(from_redis_error)?;
        Ok(Self {
            client,
            timeout: config.timeout(),
            probe_after: config.pool.probe_after(),
        })
    }
}

impl r2d2::ManageConnection for StoreConnectionManager {
    type Connection = StoreConnection;
    type Error = redis::RedisError;

    fn connect(&self) -> std::result::Result<StoreConnection, redis::RedisError> {
        let conn = self.client.get_connection_with_timeout(self.timeout)?;
        conn.set_read_timeout(Some(self.timeout))?;
        conn.set_write_timeout(Some(self.timeout))?;
        Ok(StoreConnection {
            conn,
            last_used: Instant::now(),
            broken: false,
        })
    }

    fn is_valid(&self, conn: &mut StoreConnection) -> std::result::Result<(), redis::RedisError> {
        if conn.idle_for() < self.probe_after {
            return Ok(());
        }
        redis::cmd("PING").query::<String>(&mut conn.conn)?;
        conn.last_used = Instant::now();
        Ok(())
    }

    // Called by the pool whenever a connection is returned.
    fn has_broken(&self, conn: &mut StoreConnection) -> bool {
        conn.last_used = Instant::now();
        conn.broken || !conn.conn.is_open()
    }
}

/// Routes pool-internal errors (failed dials, failed probes) to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingErrorHandler;

impl r2d2::HandleError<redis::RedisError> for LoggingErrorHandler {
    fn handle_error(&self, error: redis::RedisError) {
        warn!(target: "keyfront::pool", error = %error, "Connection check failed");
    }
}

/// Point-in-time pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// Connections currently open (idle and checked out)
    pub connections: u32,
    /// Connections waiting in the pool
    pub idle: u32,
}

/// Build the pool for `config`.
///
/// The pool starts empty and dials lazily, so an unreachable server is
/// reported by the first command rather than here.
pub fn build_pool(config: &ClientConfig) -> Result<r2d2::Pool<StoreConnectionManager>> {
    config.validate()?;
    let manager = StoreConnectionManager::new(config)?;
    let pool = r2d2::Pool::builder()
        .max_size(config.pool.max_size)
        .min_idle(Some(0))
        .idle_timeout(Some(config.pool.idle_timeout()))
        .connection_timeout(config.timeout())
        .test_on_check_out(true)
        .error_handler(Box::new(LoggingErrorHandler))
        .build(manager)
        .map_err(from_pool_error)?;

    info!(
        target: "keyfront::pool",
        address = %config.address(),
        database = config.database,
        max_size = config.pool.max_size,
        "Connection pool ready"
    );
    Ok(pool)
}
