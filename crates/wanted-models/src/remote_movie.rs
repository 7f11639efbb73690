use serde::{Deserialize, Serialize};
use crate::ids::{deserialize_null_default, deserialize_optional_id};

/// Status value the wanted list uses for movies that are still being searched for
pub const ACTIVE_STATUS: &str = "active";

/// A movie record as returned by the remote `movie.list` endpoint.
///
/// Only the fields needed to build an entry are decoded; everything else in
/// the remote payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteMovie {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub profile_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub info: RemoteMovieInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RemoteMovieInfo {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub imdb: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub tmdb_id: Option<String>,
}

impl RemoteMovie {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}
