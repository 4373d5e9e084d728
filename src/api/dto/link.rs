//! DTOs for the useful-links endpoints.
//!
//! The title travels as `titulo` and the id as a JSON string, matching the
//! existing API contract.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{Link, LinkPatch, NewLink};

/// A link as returned by every endpoint that yields a record.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkResponse {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    pub url: Option<String>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
        }
    }
}

/// Request body for `POST /api/links` and `PUT /api/links/{id}`.
///
/// Missing fields are accepted and stored as absent.
#[derive(Debug, Default, Deserialize)]
pub struct LinkRequest {
    #[serde(default, rename = "titulo")]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<LinkRequest> for NewLink {
    fn from(request: LinkRequest) -> Self {
        Self {
            title: request.title,
            url: request.url,
        }
    }
}

/// Request body for `PATCH /api/links/{id}`.
///
/// # Field semantics
///
/// - **Absent** or **`null`** → leave existing value unchanged
/// - **String** (including `""`) → set new value
#[derive(Debug, Default, Deserialize)]
pub struct PatchLinkRequest {
    #[serde(default, rename = "titulo")]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<PatchLinkRequest> for LinkPatch {
    fn from(request: PatchLinkRequest) -> Self {
        Self {
            title: request.title.into(),
            url: request.url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldUpdate;
    use serde_json::json;

    #[test]
    fn test_response_uses_wire_names() {
        let response = LinkResponse::from(Link::new(
            1,
            Some("GitHub".to_string()),
            Some("https://github.com".to_string()),
        ));

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({ "id": "1", "titulo": "GitHub", "url": "https://github.com" })
        );
    }

    #[test]
    fn test_response_absent_fields_are_null() {
        let value = serde_json::to_value(LinkResponse::from(Link::new(5, None, None))).unwrap();

        assert_eq!(value, json!({ "id": "5", "titulo": null, "url": null }));
    }

    #[test]
    fn test_link_request_allows_missing_fields() {
        let request: LinkRequest = serde_json::from_value(json!({ "url": "https://a.b" })).unwrap();
        let new_link = NewLink::from(request);

        assert!(new_link.title.is_none());
        assert_eq!(new_link.url.as_deref(), Some("https://a.b"));
    }

    #[test]
    fn test_patch_request_null_is_unchanged_and_empty_string_is_set() {
        let request: PatchLinkRequest =
            serde_json::from_value(json!({ "titulo": null, "url": "" })).unwrap();
        let patch = LinkPatch::from(request);

        assert_eq!(patch.title, FieldUpdate::Unchanged);
        assert_eq!(patch.url, FieldUpdate::Set(String::new()));

        let request: PatchLinkRequest = serde_json::from_value(json!({})).unwrap();
        assert!(LinkPatch::from(request).is_empty());

        let request: PatchLinkRequest =
            serde_json::from_value(json!({ "titulo": "Novo" })).unwrap();
        let patch = LinkPatch::from(request);

        assert_eq!(patch.title, FieldUpdate::Set("Novo".to_string()));
        assert_eq!(patch.url, FieldUpdate::Unchanged);
    }
}
