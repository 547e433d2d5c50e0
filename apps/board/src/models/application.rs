use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// Body of `POST /api/applications`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPayload {
    pub guild_id: i64,
    pub player_id: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationEntity {
    pub id: i64,
    pub guild_id: i64,
    pub player_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// ISO-8601 as sent by the server; displayed, never parsed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}
