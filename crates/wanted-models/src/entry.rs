use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat task entry handed to the acquisition pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub title: String,
    /// Placeholder; wanted-list entries never carry a download URL
    pub url: String,
    pub imdb_id: Option<String>,
    pub tmdb_id: Option<String>,
    /// Space-separated quality requirement, empty when none is known
    pub quality_req: String,
}

impl NormalizedEntry {
    pub fn new(
        title: impl Into<String>,
        imdb_id: Option<String>,
        tmdb_id: Option<String>,
        quality_req: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: String::new(),
            imdb_id,
            tmdb_id,
            quality_req: quality_req.into(),
        }
    }
}

impl fmt::Display for NormalizedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry(title={:?}, url={:?}, imdb_id={}, tmdb_id={}, quality_req={:?})",
            self.title,
            self.url,
            self.imdb_id.as_deref().unwrap_or("-"),
            self.tmdb_id.as_deref().unwrap_or("-"),
            self.quality_req,
        )
    }
}

/// Decides whether an entry is acceptable to the consuming pipeline
pub trait EntryValidator: Send + Sync {
    fn is_valid(&self, entry: &NormalizedEntry) -> bool;
}

/// The pipeline's default rule: an entry needs a non-empty title.
///
/// `url` is always present on a [`NormalizedEntry`] (even when empty), so it
/// never disqualifies one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEntryValidator;

impl EntryValidator for StandardEntryValidator {
    fn is_valid(&self, entry: &NormalizedEntry) -> bool {
        !entry.title.is_empty()
    }
}

impl<F> EntryValidator for F
where
    F: Fn(&NormalizedEntry) -> bool + Send + Sync,
{
    fn is_valid(&self, entry: &NormalizedEntry) -> bool {
        self(entry)
    }
}
