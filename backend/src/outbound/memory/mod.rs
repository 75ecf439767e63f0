//! Process-memory user store.
//!
//! Records live in insertion order inside a single mutex. The store is shared
//! by every server worker, so each port method takes the lock once and never
//! holds it across an await point.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft};

/// In-memory implementation of [`UserRepository`].
///
/// # Examples
/// ```
/// use user_service::outbound::memory::InMemoryUserRepository;
///
/// let store = InMemoryUserRepository::new();
/// assert!(store.snapshot().unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored record in insertion order.
    ///
    /// # Errors
    /// Returns [`UserPersistenceError::Poisoned`] when the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users
            .lock()
            .map_err(|err| UserPersistenceError::poisoned(err.to_string()))
    }
}

fn position(users: &[User], id: &str) -> Option<usize> {
    users.iter().position(|user| user.id().matches(id))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<(), UserPersistenceError> {
        self.lock()?.push(user);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UserPersistenceError> {
        let users = self.lock()?;
        Ok(users.iter().find(|user| user.id().matches(id)).cloned())
    }

    async fn update(
        &self,
        id: &str,
        draft: UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.lock()?;
        let Some(slot) = users.iter_mut().find(|user| user.id().matches(id)) else {
            return Ok(None);
        };
        let updated = slot.clone().with_draft(draft);
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn remove(&self, id: &str) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.lock()?;
        Ok(position(&users, id).map(|index| users.remove(index)))
    }
}
