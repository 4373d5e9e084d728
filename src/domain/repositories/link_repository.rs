//! Repository trait for link registry access.

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the useful-links registry.
///
/// Identifiers are assigned by the repository, grow monotonically and are
/// never reused after a delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns every stored link, ordered by ascending id.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Finds a link by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Stores a new link under the next free id and returns it.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Stores `link` under `id`, overwriting any existing record or inserting
    /// a new one.
    async fn replace(&self, id: i64, link: NewLink) -> Result<Link, AppError>;

    /// Merges `patch` into the link stored under `id`.
    ///
    /// Returns `Ok(None)` without mutating anything if no link has that id.
    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Option<Link>, AppError>;

    /// Removes the link stored under `id`.
    ///
    /// Returns `Ok(true)` if a link was removed, `Ok(false)` if none existed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
