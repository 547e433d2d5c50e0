use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// A player profile as the remote API returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntity {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub realm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faction: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub skill_rating: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub professions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attunements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
}

/// Body of `POST /api/players` and `PUT /api/players/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPayload {
    pub name: String,
    pub realm: String,
    pub faction: String,
    pub language: String,
    pub class_name: String,
    pub spec: String,
    pub role: String,
    pub skill_rating: i64,
    pub professions: Vec<String>,
    pub attunements: Vec<String>,
    pub availability: Vec<String>,
    pub logs_url: String,
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerCreated {
    pub player: PlayerEntity,
    pub edit_token: String,
}
