//! Key resolution for Keyfront
//!
//! Every key a caller hands to the facade is a *logical* key. Before it reaches
//! the store it is rewritten into an *effective* key by prepending the
//! namespace prefix configured at construction:
//!
//! ```text
//! effective_key = prefix + logical_key
//! ```
//!
//! The prefix is immutable for the lifetime of a [`KeyResolver`], and the
//! effective key is the only form ever sent to a command executor.
//!
//! Domain objects can also provide their own key through [`HasIdentifier`]:
//! the key is `<namespace><id>` and goes through the same prefixing.

use std::fmt;

/// Computes effective store keys from logical keys.
///
/// # Examples
///
/// ```
/// use keyfront_core::KeyResolver;
///
/// let keys = KeyResolver::new("app:");
/// assert_eq!(keys.resolve_key("user:1"), "app:user:1");
///
/// let bare = KeyResolver::default();
/// assert_eq!(bare.resolve_key("user:1"), "user:1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyResolver {
    prefix: String,
}

impl KeyResolver {
    /// Create a resolver with the given namespace prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        KeyResolver {
            prefix: prefix.into(),
        }
    }

    /// The configured namespace prefix (possibly empty)
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Effective key for a logical key. Never fails.
    pub fn resolve_key(&self, logical_key: &str) -> String {
        let mut key = String::with_capacity(self.prefix.len() + logical_key.len());
        key.push_str(&self.prefix);
        key.push_str(logical_key);
        key
    }

    /// Logical key derived from a domain object, before prefixing.
    ///
    /// Returns `None` when the object has no identifier, so a missing
    /// identifier can never be confused with a legitimately empty key.
    pub fn object_key<T: HasIdentifier + ?Sized>(&self, object: &T) -> Option<String> {
        object
            .identifier()
            .map(|id| format!("{}{}", object.key_namespace(), id))
    }

    /// Effective key derived from a domain object.
    pub fn resolve_object_key<T: HasIdentifier + ?Sized>(&self, object: &T) -> Option<String> {
        self.object_key(object).map(|key| self.resolve_key(&key))
    }

    /// Inverse of [`resolve_key`](Self::resolve_key) for keys reported back by the store.
    ///
    /// Keys outside the namespace are returned unchanged.
    pub fn strip_prefix<'a>(&self, effective_key: &'a str) -> &'a str {
        effective_key
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(effective_key)
    }
}

impl fmt::Display for KeyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyResolver({:?})", self.prefix)
    }
}

/// Capability for domain objects that carry a 64-bit identifier.
///
/// Types implement this deliberately to opt in to key derivation for the
/// structured get/set operations.
///
/// # Examples
///
/// ```
/// use keyfront_core::{HasIdentifier, KeyResolver};
///
/// struct User { id: i64 }
///
/// impl HasIdentifier for User {
///     fn identifier(&self) -> Option<i64> { Some(self.id) }
///     fn key_namespace(&self) -> String { "user:".to_string() }
/// }
///
/// let keys = KeyResolver::new("app:");
/// assert_eq!(keys.resolve_object_key(&User { id: 7 }).as_deref(), Some("app:user:7"));
/// ```
pub trait HasIdentifier {
    /// The identifier, or `None` if this object has none yet.
    fn identifier(&self) -> Option<i64>;

    /// Namespace token placed in front of the identifier.
    ///
    /// Defaults to the unqualified type name followed by `:`.
    fn key_namespace(&self) -> String {
        format!("{}:", short_type_name::<Self>())
    }
}

/// Last path segment of a type name, generics included (`app::User` -> `User`).
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    let start = base.rfind("::").map(|idx| idx + 2).unwrap_or(0);
    &full[start..]
}
