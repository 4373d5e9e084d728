//! Link registry service.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Builds the confirmation returned by a delete.
pub fn removal_message(id: i64) -> String {
    format!("Link {id} removido")
}

/// Service exposing CRUD operations over the useful-links registry.
///
/// "Not found" is reported as `Ok(None)`; deciding how that surfaces over HTTP
/// is left to the handlers.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns all links, each once, ordered by id.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Looks a link up by id.
    pub async fn get_link(&self, id: i64) -> Result<Option<Link>, AppError> {
        self.link_repository.find_by_id(id).await
    }

    /// Stores a new link under the next free id.
    ///
    /// No validation is performed: absent fields are stored as absent.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = self.link_repository.create(new_link).await?;
        info!(id = link.id, "Link created");
        Ok(link)
    }

    /// Overwrites the link at `id`, inserting it if no link had that id.
    pub async fn replace_link(&self, id: i64, new_link: NewLink) -> Result<Link, AppError> {
        let link = self.link_repository.replace(id, new_link).await?;
        info!(id, "Link replaced");
        Ok(link)
    }

    /// Applies a partial update.
    ///
    /// Returns `Ok(None)` and changes nothing when no link has that id.
    pub async fn patch_link(&self, id: i64, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        let updated = self.link_repository.update(id, patch).await?;
        match &updated {
            Some(_) => info!(id, "Link patched"),
            None => info!(id, "Patch skipped, link not found"),
        }
        Ok(updated)
    }

    /// Removes the link at `id` if present and returns the confirmation text.
    ///
    /// The message is the same whether or not a link existed.
    pub async fn delete_link(&self, id: i64) -> Result<String, AppError> {
        let removed = self.link_repository.delete(id).await?;
        info!(id, removed, "Link delete requested");
        Ok(removal_message(id))
    }

    /// Number of stored links.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldUpdate;
    use crate::domain::repositories::MockLinkRepository;
    use serde_json::json;

    fn github() -> Link {
        Link::new(
            1,
            Some("GitHub".to_string()),
            Some("https://github.com".to_string()),
        )
    }

    #[tokio::test]
    async fn test_get_link_found() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(github())));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service.get_link(1).await.unwrap().unwrap();
        assert_eq!(link.title.as_deref(), Some("GitHub"));
        assert_eq!(link.url.as_deref(), Some("https://github.com"));
    }

    #[tokio::test]
    async fn test_get_link_missing_is_none() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(service.get_link(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_link_passes_input_through() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_create()
            .withf(|new_link| {
                new_link.title.as_deref() == Some("Google")
                    && new_link.url.as_deref() == Some("https://google.com")
            })
            .times(1)
            .returning(|new_link| Ok(new_link.with_id(3)));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service
            .create_link(NewLink {
                title: Some("Google".to_string()),
                url: Some("https://google.com".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(link.id, 3);
    }

    #[tokio::test]
    async fn test_patch_link_forwards_patch() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_update()
            .withf(|id, patch| {
                *id == 2
                    && patch.title == FieldUpdate::Set("Novo".to_string())
                    && patch.url.is_unchanged()
            })
            .times(1)
            .returning(|id, _| {
                Ok(Some(Link::new(
                    id,
                    Some("Novo".to_string()),
                    Some("https://stackoverflow.com".to_string()),
                )))
            });

        let service = LinkService::new(Arc::new(mock_link_repo));

        let patch = LinkPatch {
            title: FieldUpdate::Set("Novo".to_string()),
            ..LinkPatch::default()
        };
        let link = service.patch_link(2, patch).await.unwrap().unwrap();

        assert_eq!(link.url.as_deref(), Some("https://stackoverflow.com"));
    }

    #[tokio::test]
    async fn test_delete_link_message_ignores_existence() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_delete()
            .times(2)
            .returning(|id| Ok(id == 1));

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert_eq!(service.delete_link(1).await.unwrap(), "Link 1 removido");
        assert_eq!(service.delete_link(999).await.unwrap(), "Link 999 removido");
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_list()
            .times(1)
            .returning(|| Err(AppError::internal("Registry unavailable", json!({}))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.list_links().await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
