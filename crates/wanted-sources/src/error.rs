use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// A request to the remote service failed or returned something unusable.
    /// The message names the endpoint root but never the API key.
    #[error("{message}")]
    Connectivity { message: String },

    #[error("Invalid source configuration: {0}")]
    InvalidConfig(String),
}

impl SourceError {
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity { message: message.into() }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity { .. })
    }
}
