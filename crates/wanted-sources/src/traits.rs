use async_trait::async_trait;
use wanted_models::NormalizedEntry;
use crate::error::SourceError;

/// Per-run flags supplied by the host pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchContext {
    /// Log every produced entry at info level. Has no effect on the result.
    pub test_mode: bool,
}

impl FetchContext {
    pub fn test_mode() -> Self {
        Self { test_mode: true }
    }
}

/// A remote list that can be turned into pipeline entries
#[async_trait]
pub trait WantedSource: Send + Sync {
    fn source_name(&self) -> &str;

    /// Fetch the remote list and map it into entries, preserving remote order.
    /// Each call performs a fresh fetch.
    async fn fetch_entries(&self, ctx: &FetchContext) -> Result<Vec<NormalizedEntry>, SourceError>;
}
