//! In-memory implementation of link repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Links present in a freshly started registry.
pub fn default_links() -> Vec<Link> {
    vec![
        Link::new(
            1,
            Some("GitHub".to_string()),
            Some("https://github.com".to_string()),
        ),
        Link::new(
            2,
            Some("Stack Overflow".to_string()),
            Some("https://stackoverflow.com".to_string()),
        ),
    ]
}

struct Registry {
    links: BTreeMap<i64, Link>,
    next_id: i64,
}

impl Registry {
    /// Keeps `next_id` ahead of every id ever stored.
    ///
    /// Fails without touching the registry when `id` has no successor.
    fn reserve(&mut self, id: i64) -> Result<(), AppError> {
        if id >= self.next_id {
            self.next_id = id
                .checked_add(1)
                .ok_or_else(|| AppError::bad_request("Link id out of range", json!({ "id": id })))?;
        }
        Ok(())
    }
}

/// Process-local link registry.
///
/// The map and the id counter share one lock, so every operation is atomic
/// with respect to the others. Contents are lost when the repository is dropped.
pub struct InMemoryLinkRepository {
    inner: RwLock<Registry>,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry whose first id is 1.
    pub fn new() -> Self {
        Self::with_links(Vec::new())
    }

    /// Creates a registry holding [`default_links`].
    pub fn seeded() -> Self {
        Self::with_links(default_links())
    }

    /// Creates a registry holding `links`, keyed by their own ids.
    ///
    /// The next assigned id is one past the highest seeded id. A seed at
    /// `i64::MAX` leaves the counter there, and `create` then refuses.
    pub fn with_links(links: impl IntoIterator<Item = Link>) -> Self {
        let mut registry = Registry {
            links: BTreeMap::new(),
            next_id: 1,
        };
        for link in links {
            registry.next_id = registry.next_id.max(link.id.saturating_add(1));
            registry.links.insert(link.id, link);
        }

        Self {
            inner: RwLock::new(registry),
        }
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let registry = self.inner.read().await;
        Ok(registry.links.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let registry = self.inner.read().await;
        Ok(registry.links.get(&id).cloned())
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut registry = self.inner.write().await;

        let id = registry.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::internal("Link ids exhausted", json!({ "next_id": id })))?;

        let link = new_link.with_id(id);
        registry.links.insert(id, link.clone());
        registry.next_id = next_id;

        debug!(id, next_id = registry.next_id, "Link stored");
        Ok(link)
    }

    async fn replace(&self, id: i64, new_link: NewLink) -> Result<Link, AppError> {
        let mut registry = self.inner.write().await;

        registry.reserve(id)?;

        let link = new_link.with_id(id);
        let previous = registry.links.insert(id, link.clone());

        debug!(id, inserted = previous.is_none(), "Link replaced");
        Ok(link)
    }

    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        let mut registry = self.inner.write().await;

        let Some(existing) = registry.links.get(&id) else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(existing.clone()));
        }

        let merged = existing.merged(patch);
        registry.links.insert(id, merged.clone());
        Ok(Some(merged))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut registry = self.inner.write().await;
        Ok(registry.links.remove(&id).is_some())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.inner.read().await.links.len())
    }
}
