//! User use-cases: create, fetch, update, and delete.
//!
//! The service owns no state of its own; it drives a [`UserRepository`] and
//! translates store outcomes into domain [`Error`]s. Callers validate input
//! into a [`UserDraft`] first, so validation failures always surface before
//! any existence check.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserDraft};

/// Message returned for every lookup miss.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Message returned when `name` or `email` fails validation.
pub const REQUIRED_FIELDS_MESSAGE: &str = "name and email are required";

fn map_persistence_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user store failure");
    Error::internal(err.to_string())
}

fn not_found(id: &str) -> Error {
    debug!(user_id = id, "user lookup missed");
    Error::not_found(USER_NOT_FOUND_MESSAGE)
}

/// Domain service handling user lifecycle operations.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_service::domain::{UserDraft, UserService};
/// use user_service::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
/// let draft = UserDraft::try_from_parts(Some("Ann"), Some("a@x.com")).unwrap();
/// let user = service.create(draft).await.unwrap();
/// assert_eq!(service.fetch(user.id().as_ref()).await.unwrap(), user);
/// # });
/// ```
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Build the service over a shared store.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Store a new user built from `draft`.
    ///
    /// # Errors
    /// Returns an internal error when the store is unusable.
    pub async fn create(&self, draft: UserDraft) -> Result<User, Error> {
        let user = User::create(draft);
        self.repository
            .insert(user.clone())
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    /// Fetch the user whose identifier equals `id`.
    ///
    /// # Errors
    /// Returns a not-found error when no record matches.
    pub async fn fetch(&self, id: &str) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| not_found(id))
    }

    /// Replace `name` and `email` of an existing user.
    ///
    /// # Errors
    /// Returns a not-found error when no record matches.
    pub async fn update(&self, id: &str, draft: UserDraft) -> Result<User, Error> {
        let user = self
            .repository
            .update(id, draft)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| not_found(id))?;
        info!(user_id = %user.id(), "user updated");
        Ok(user)
    }

    /// Remove an existing user.
    ///
    /// # Errors
    /// Returns a not-found error when no record matches.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let removed = self
            .repository
            .remove(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| not_found(id))?;
        info!(user_id = %removed.id(), "user deleted");
        Ok(())
    }
}
