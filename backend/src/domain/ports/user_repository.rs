//! Port abstraction for the user store and its errors.
//!
//! Identifiers are passed as raw strings: any path segment is a legal lookup
//! key and simply misses when no record carries it.

use async_trait::async_trait;

use crate::domain::{User, UserDraft};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserPersistenceError {
        /// A writer panicked while holding the store and left it unusable.
        Poisoned { message: String } => "user store poisoned: {message}",
    }
}

/// Owned collection of user records.
///
/// Implementations must make each method atomic with respect to the others:
/// `update` and `remove` locate and mutate under a single critical section.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a new record.
    async fn insert(&self, user: User) -> Result<(), UserPersistenceError>;

    /// Fetch the record whose identifier equals `id` exactly.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Replace `name` and `email` of the matching record in place.
    ///
    /// Returns the updated record, or `None` when no record matches.
    async fn update(
        &self,
        id: &str,
        draft: UserDraft,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove the matching record, returning it when present.
    async fn remove(&self, id: &str) -> Result<Option<User>, UserPersistenceError>;
}
