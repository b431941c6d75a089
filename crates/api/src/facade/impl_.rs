//! Facade implementation
//!
//! `Facade` owns a [`CommandExecutor`] and a [`KeyResolver`]. Every public
//! operation builds a [`Command`] with logical keys and funnels it through
//! [`Facade::dispatch`], the single place where keys are resolved.

use keyfront_core::{
    short_type_name, Command, CommandExecutor, Error, HasIdentifier, KeyResolver, Reply, Result,
};
use tracing::debug;

// =============================================================================
// Facade
// =============================================================================

/// Typed, namespaced command facade.
///
/// The namespace prefix is fixed at construction. The executor owns the
/// connection pool, so independently configured facades never share state.
///
/// # Thread Safety
///
/// `Facade<E>` is `Send + Sync` whenever `E` is, and every method takes
/// `&self`; share it behind an `Arc` to call it from several threads.
pub struct Facade<E: CommandExecutor> {
    executor: E,
    keys: KeyResolver,
}

impl<E: CommandExecutor> Facade<E> {
    /// Create a facade over `executor` using `keys` for key resolution
    pub fn new(executor: E, keys: KeyResolver) -> Self {
        Facade { executor, keys }
    }

    /// Create a facade whose keys are prefixed with `prefix`
    pub fn with_prefix(executor: E, prefix: impl Into<String>) -> Self {
        Facade::new(executor, KeyResolver::new(prefix))
    }

    /// Get a reference to the underlying executor
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Get the key resolver
    pub fn key_resolver(&self) -> &KeyResolver {
        &self.keys
    }

    /// The namespace prefix
    pub fn prefix(&self) -> &str {
        self.keys.prefix()
    }

    /// Resolve the keys of `command` and send it.
    ///
    /// This is the escape hatch for commands without a dedicated method.
    /// Key arguments must be logical keys.
    pub fn dispatch(&self, command: Command) -> Result<Reply> {
        let command = command.resolve_keys(&self.keys);
        debug!(
            target: "keyfront::facade",
            command = command.name(),
            args = command.arg_list().len(),
            "Dispatching"
        );
        self.executor.execute(&command)
    }

    /// Logical key derived from an object's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingIdentifier`] when the object has no identifier.
    pub(crate) fn derived_key<T: HasIdentifier + ?Sized>(&self, object: &T) -> Result<String> {
        self.keys
            .object_key(object)
            .ok_or_else(|| Error::MissingIdentifier {
                type_name: short_type_name::<T>().to_string(),
            })
    }
}

impl<E: CommandExecutor + std::fmt::Debug> std::fmt::Debug for Facade<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Facade")
            .field("executor", &self.executor)
            .field("prefix", &self.keys.prefix())
            .finish()
    }
}
