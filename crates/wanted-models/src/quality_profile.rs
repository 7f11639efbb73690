use serde::{Deserialize, Serialize};
use crate::ids::{deserialize_null_default, deserialize_optional_id};

/// A named bundle of acceptable quality tags on the remote service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteQualityProfile {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub qualities: Vec<String>,
}

impl RemoteQualityProfile {
    pub fn new(id: impl Into<String>, qualities: &[&str]) -> Self {
        Self {
            id: Some(id.into()),
            qualities: qualities.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// Whether this profile is the one a movie points at through `profile_id`
    pub fn matches(&self, profile_id: Option<&str>) -> bool {
        match (self.id.as_deref(), profile_id) {
            (Some(id), Some(wanted)) => id == wanted,
            _ => false,
        }
    }
}
