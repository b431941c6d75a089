//! Connection and server administration

use keyfront_core::{names, Command, CommandExecutor, Result};

use super::Facade;

impl<E: CommandExecutor> Facade<E> {
    /// Round-trip check. Returns the server's answer (`PONG`).
    pub fn ping(&self) -> Result<String> {
        self.dispatch(Command::new(names::PING))?.into_string()
    }

    /// The server's `INFO` report
    pub fn info(&self) -> Result<String> {
        self.dispatch(Command::new(names::INFO))?.into_string()
    }

    /// Switch the logical database of whichever pooled connection serves
    /// this call.
    ///
    /// Other pooled connections keep their database, so later calls may land
    /// on either. Configure the database at construction instead; this is
    /// kept for parity with the store's command set.
    pub fn select_db(&self, index: i64) -> Result<()> {
        self.dispatch(Command::new(names::SELECT).arg(index))?
            .into_unit()
    }

    /// Start a background save
    pub fn bgsave(&self) -> Result<()> {
        self.dispatch(Command::new(names::BGSAVE))?.into_unit()
    }

    /// Delete every key in the current database, including keys outside
    /// this facade's namespace
    pub fn flushdb(&self) -> Result<()> {
        self.dispatch(Command::new(names::FLUSHDB))?.into_unit()
    }

    /// Delete every key in every database
    pub fn flushall(&self) -> Result<()> {
        self.dispatch(Command::new(names::FLUSHALL))?.into_unit()
    }
}
