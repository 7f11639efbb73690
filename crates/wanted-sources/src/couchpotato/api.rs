use reqwest::Url;
use serde::Deserialize;
use std::fmt;
use tracing::debug;
use wanted_config::ConnectionConfig;
use wanted_models::{RemoteMovie, RemoteQualityProfile};
use crate::error::SourceError;
use crate::transport::HttpTransport;

#[derive(Debug, Deserialize)]
struct MovieListResponse {
    movies: Vec<RemoteMovie>,
}

#[derive(Debug, Deserialize)]
struct ProfileListResponse {
    list: Vec<RemoteQualityProfile>,
}

/// Location of the remote API, split the way request URLs are assembled.
///
/// `Debug` and [`Endpoint::root`] never show the API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    host: String,
    port: u16,
    path: String,
    api_key: String,
}

impl Endpoint {
    pub fn from_config(config: &ConnectionConfig) -> Result<Self, SourceError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| SourceError::InvalidConfig(format!("base_url {:?} is not a valid URL: {}", config.base_url, e)))?;
        let host = base_url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| SourceError::InvalidConfig(format!("base_url {:?} has no host", config.base_url)))?;

        Ok(Self {
            scheme: base_url.scheme().to_string(),
            host: host.to_string(),
            port: config.port,
            path: base_url.path().trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// `{scheme}://{host}:{port}{path}`, safe to show in messages
    pub fn root(&self) -> String {
        format!("{}://{}:{}{}", self.scheme, self.host, self.port, self.path)
    }

    fn api_url(&self, call: &str) -> String {
        format!("{}/api/{}/{}", self.root(), urlencoding::encode(&self.api_key), call)
    }

    pub fn movie_list_url(&self) -> String {
        self.api_url("movie.list?status=active")
    }

    pub fn profile_list_url(&self) -> String {
        self.api_url("profile.list")
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("root", &self.root())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Fetch the active entries of the wanted list
pub async fn get_movie_list<T>(transport: &T, endpoint: &Endpoint) -> Result<Vec<RemoteMovie>, SourceError>
where
    T: HttpTransport + ?Sized,
{
    let connect_error = || SourceError::connectivity(format!("Unable to connect to CouchPotato at {}.", endpoint.root()));

    let json = transport.get_json(&endpoint.movie_list_url()).await.map_err(|e| {
        debug!(error = %e, "movie.list request failed");
        connect_error()
    })?;
    let response: MovieListResponse = serde_json::from_value(json).map_err(|e| {
        debug!(error = %e, "movie.list response has unexpected shape");
        connect_error()
    })?;

    debug!("Fetched {} movies from {}", response.movies.len(), endpoint.root());
    Ok(response.movies)
}

/// Fetch every quality profile defined on the remote service
pub async fn get_profile_list<T>(transport: &T, endpoint: &Endpoint) -> Result<Vec<RemoteQualityProfile>, SourceError>
where
    T: HttpTransport + ?Sized,
{
    let connect_error = |cause: &dyn fmt::Display| {
        SourceError::connectivity(format!(
            "Unable to connect to CouchPotato at {}. Error: {}",
            endpoint.root(),
            cause
        ))
    };

    let json = transport
        .get_json(&endpoint.profile_list_url())
        .await
        .map_err(|e| connect_error(&e))?;
    let response: ProfileListResponse = serde_json::from_value(json).map_err(|e| connect_error(&e))?;

    debug!("Fetched {} quality profiles from {}", response.list.len(), endpoint.root());
    Ok(response.list)
}
