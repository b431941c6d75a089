//! The pooled Redis executor.
//!
//! [`RedisExecutor`] is the production [`CommandExecutor`]. Every call checks a
//! connection out of the pool, uses it exclusively, and returns it when done,
//! so concurrent callers never share a connection mid-command.

use keyfront_core::{names, Command, CommandExecutor, Reply, Result, TxnOutcome};
use r2d2::{Pool, PooledConnection};
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::convert::{from_pool_error, from_redis_error, to_redis_cmd, to_reply};
use crate::pool::{build_pool, PoolStatus, StoreConnectionManager};

/// Executes commands on connections drawn from a bounded pool.
///
/// # Thread Safety
///
/// `RedisExecutor` is `Send + Sync`; the pool handle is shared and each call
/// holds its own checked-out connection.
///
/// # Example
///
/// ```ignore
/// use keyfront_core::{Command, CommandExecutor};
/// use keyfront_executor::{ClientConfig, RedisExecutor};
///
/// let executor = RedisExecutor::connect(&ClientConfig::default())?;
/// let reply = executor.execute(&Command::new("PING"))?;
/// ```
pub struct RedisExecutor {
    pool: Pool<StoreConnectionManager>,
    address: String,
}

impl RedisExecutor {
    /// Build the pool for `config`. No connection is dialled yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](keyfront_core::Error::InvalidConfig)
    /// for settings the pool rejects.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let pool = build_pool(config)?;
        Ok(Self {
            pool,
            address: config.address(),
        })
    }

    /// `host:port` this executor talks to
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Current pool occupancy
    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle: state.idle_connections,
        }
    }

    fn checkout(&self) -> Result<PooledConnection<StoreConnectionManager>> {
        self.pool.get().map_err(|e| {
            warn!(target: "keyfront::pool", address = %self.address, error = %e, "Checkout failed");
            from_pool_error(e)
        })
    }
}

impl CommandExecutor for RedisExecutor {
    fn execute(&self, command: &Command) -> Result<Reply> {
        let mut conn = self.checkout()?;
        trace!(target: "keyfront::executor", command = command.name(), "Sending");
        let value = to_redis_cmd(command)
            .query::<redis::Value>(conn.inner())
            .map_err(from_redis_error)?;
        to_reply(value)
    }

    fn execute_transaction(&self, watch: &[String], commands: &[Command]) -> Result<TxnOutcome> {
        let mut conn = self.checkout()?;

        let mut pipe = redis::pipe();
        if !watch.is_empty() {
            pipe.cmd(names::WATCH);
            for key in watch {
                pipe.arg(key.as_bytes());
            }
        }
        pipe.cmd(names::MULTI);
        for command in commands {
            pipe.add_command(to_redis_cmd(command));
        }
        pipe.cmd(names::EXEC);

        let replies = match pipe.query::<Vec<redis::Value>>(conn.inner()) {
            Ok(replies) => replies,
            Err(e) => {
                conn.mark_broken();
                return Err(from_redis_error(e));
            }
        };

        match replies.into_iter().last() {
            Some(redis::Value::Array(items)) => {
                debug!(
                    target: "keyfront::executor",
                    watched = watch.len(),
                    commands = commands.len(),
                    "Transaction committed"
                );
                items
                    .into_iter()
                    .map(to_reply)
                    .collect::<Result<Vec<_>>>()
                    .map(TxnOutcome::Committed)
            }
            Some(redis::Value::Nil) | None => {
                warn!(
                    target: "keyfront::executor",
                    watched = watch.len(),
                    "Transaction aborted by a watched key"
                );
                Ok(TxnOutcome::Aborted)
            }
            Some(other) => {
                conn.mark_broken();
                Err(keyfront_core::Error::Server {
                    code: None,
                    reason: format!("unexpected EXEC reply: {:?}", other),
                })
            }
        }
    }
}

impl std::fmt::Debug for RedisExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisExecutor")
            .field("address", &self.address)
            .field("pool", &self.pool_status())
            .finish()
    }
}
