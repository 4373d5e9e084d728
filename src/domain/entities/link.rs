//! Link entity representing a useful link stored in the registry.

/// A useful link with its registry identifier.
///
/// `title` and `url` are stored verbatim from the request, so either may be
/// absent when a client omits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, title: Option<String>, url: Option<String>) -> Self {
        Self { id, title, url }
    }

    /// Returns a copy of this link with `patch` applied.
    ///
    /// The identifier is never touched by a patch.
    pub fn merged(&self, patch: LinkPatch) -> Self {
        Self {
            id: self.id,
            title: patch.title.apply(self.title.clone()),
            url: patch.url.apply(self.url.clone()),
        }
    }
}

/// Input data for creating or fully replacing a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLink {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl NewLink {
    /// Attaches an identifier, producing the stored record.
    pub fn with_id(self, id: i64) -> Link {
        Link::new(id, self.title, self.url)
    }
}

/// Change requested for a single optional field of a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Field absent or `null`; keep the current value.
    #[default]
    Unchanged,
    /// Field set to a new value, empty string included.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Resolves the update against the current value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Unchanged => current,
            Self::Set(value) => Some(value),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Self::Unchanged,
            Some(v) => Self::Set(v),
        }
    }
}

/// Partial update for an existing link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub title: FieldUpdate<String>,
    pub url: FieldUpdate<String>,
}

impl LinkPatch {
    /// Returns true if applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_unchanged() && self.url.is_unchanged()
    }
}
