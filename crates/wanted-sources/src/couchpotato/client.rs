use crate::couchpotato::api::{self, Endpoint};
use crate::couchpotato::quality;
use crate::error::SourceError;
use crate::traits::{FetchContext, WantedSource};
use crate::transport::{HttpTransport, ReqwestTransport};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use wanted_config::ConnectionConfig;
use wanted_models::{EntryValidator, NormalizedEntry, RemoteMovie, RemoteQualityProfile, StandardEntryValidator};

/// Reads the CouchPotato wanted list and turns it into pipeline entries
#[derive(Clone)]
pub struct CouchPotatoClient {
    endpoint: Endpoint,
    include_data: bool,
    transport: Arc<dyn HttpTransport>,
    validator: Arc<dyn EntryValidator>,
}

impl CouchPotatoClient {
    pub fn new(config: &ConnectionConfig) -> Result<Self, SourceError> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: &ConnectionConfig, transport: Arc<dyn HttpTransport>) -> Result<Self, SourceError> {
        Ok(Self {
            endpoint: Endpoint::from_config(config)?,
            include_data: config.include_data,
            transport,
            validator: Arc::new(StandardEntryValidator),
        })
    }

    /// Replace the entry validity rule (defaults to [`StandardEntryValidator`])
    pub fn with_validator(mut self, validator: Arc<dyn EntryValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub async fn fetch_entries(&self, ctx: &FetchContext) -> Result<Vec<NormalizedEntry>, SourceError> {
        let movies = api::get_movie_list(self.transport.as_ref(), &self.endpoint).await?;

        // A failing profile request aborts the whole fetch, even with the movie list in hand
        let profiles = if self.include_data {
            Some(api::get_profile_list(self.transport.as_ref(), &self.endpoint).await?)
        } else {
            None
        };

        let entries = build_entries(&movies, profiles.as_deref(), self.validator.as_ref(), ctx.test_mode);
        info!("Produced {} entries from the CouchPotato wanted list", entries.len());
        Ok(entries)
    }
}

/// Map active movies to entries in remote order, skipping ones the validator rejects.
/// With `profiles` present, the matching profile's quality is attached; if several
/// profiles share the id, the last one wins.
fn build_entries(
    movies: &[RemoteMovie],
    profiles: Option<&[RemoteQualityProfile]>,
    validator: &dyn EntryValidator,
    test_mode: bool,
) -> Vec<NormalizedEntry> {
    let mut entries = Vec::new();

    for movie in movies.iter().filter(|m| m.is_active()) {
        let quality_req = profiles
            .and_then(|profiles| profiles.iter().rev().find(|p| p.matches(movie.profile_id.as_deref())))
            .map(quality::translate)
            .unwrap_or_default();

        let entry = NormalizedEntry::new(
            movie.title.clone(),
            movie.info.imdb.clone(),
            movie.info.tmdb_id.clone(),
            quality_req,
        );

        if !validator.is_valid(&entry) {
            error!("Invalid entry created? {}", entry);
            continue;
        }

        if test_mode {
            log_entry(&entry);
        }
        entries.push(entry);
    }

    entries
}

fn log_entry(entry: &NormalizedEntry) {
    info!("Test mode. Entry includes:");
    info!("    Title: {}", entry.title);
    info!("    URL: {}", entry.url);
    info!("    IMDB ID: {}", entry.imdb_id.as_deref().unwrap_or("None"));
    info!("    TMDB ID: {}", entry.tmdb_id.as_deref().unwrap_or("None"));
    info!("    Quality: {}", entry.quality_req);
}

#[async_trait]
impl WantedSource for CouchPotatoClient {
    fn source_name(&self) -> &str {
        "couchpotato"
    }

    async fn fetch_entries(&self, ctx: &FetchContext) -> Result<Vec<NormalizedEntry>, SourceError> {
        CouchPotatoClient::fetch_entries(self, ctx).await
    }
}
