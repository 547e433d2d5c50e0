//! Recruit API client. The only code that talks to the remote recruitment API.
//!
//! Handlers depend on the `RecruitApi` trait; `HttpRecruitApi` is the reqwest
//! implementation wired in `main`. There are no retries: a failed call is
//! reported once and the user decides whether to try again.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::board::filters::FilterParams;
use crate::models::application::{ApplicationEntity, ApplicationPayload};
use crate::models::guild::{GuildCreated, GuildEntity, GuildPayload};
use crate::models::player::{PlayerCreated, PlayerEntity, PlayerPayload};
use crate::models::{Deleted, UpstreamHealth};

pub const EDIT_TOKEN_HEADER: &str = "X-Edit-Token";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status. `message` is the response body verbatim.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// The text a user sees after "Error: ".
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Api { status, .. } => format!("request failed with status {status}"),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Client(_) => None,
        }
    }
}

/// Everything the board asks of the remote API.
#[async_trait]
pub trait RecruitApi: Send + Sync {
    async fn health(&self) -> Result<bool, ApiError>;

    async fn list_guilds(&self, params: &FilterParams) -> Result<Vec<GuildEntity>, ApiError>;
    async fn get_guild(&self, id: i64) -> Result<GuildEntity, ApiError>;
    async fn create_guild(&self, payload: &GuildPayload) -> Result<GuildCreated, ApiError>;
    async fn update_guild(
        &self,
        id: i64,
        edit_token: &str,
        payload: &GuildPayload,
    ) -> Result<GuildEntity, ApiError>;
    async fn delete_guild(&self, id: i64, edit_token: &str) -> Result<bool, ApiError>;

    async fn list_players(&self, params: &FilterParams) -> Result<Vec<PlayerEntity>, ApiError>;
    async fn get_player(&self, id: i64) -> Result<PlayerEntity, ApiError>;
    async fn create_player(&self, payload: &PlayerPayload) -> Result<PlayerCreated, ApiError>;
    async fn update_player(
        &self,
        id: i64,
        edit_token: &str,
        payload: &PlayerPayload,
    ) -> Result<PlayerEntity, ApiError>;
    async fn delete_player(&self, id: i64, edit_token: &str) -> Result<bool, ApiError>;

    async fn apply(&self, payload: &ApplicationPayload) -> Result<ApplicationEntity, ApiError>;
    async fn guild_applications(
        &self,
        guild_id: i64,
        edit_token: &str,
    ) -> Result<Vec<ApplicationEntity>, ApiError>;
}

#[derive(Clone)]
pub struct HttpRecruitApi {
    client: Client,
    base_url: String,
}

impl HttpRecruitApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and decodes a success body. Any other status becomes
    /// `ApiError::Api` carrying the body text.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("Recruit API unreachable: {e}");
            ApiError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Recruit API returned {status}: {message}");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl RecruitApi for HttpRecruitApi {
    async fn health(&self) -> Result<bool, ApiError> {
        let health: UpstreamHealth = self.send(self.client.get(self.url("/api/health"))).await?;
        Ok(health.ok)
    }

    async fn list_guilds(&self, params: &FilterParams) -> Result<Vec<GuildEntity>, ApiError> {
        debug!("GET /api/guilds {params:?}");
        self.send(self.client.get(self.url("/api/guilds")).query(params))
            .await
    }

    async fn get_guild(&self, id: i64) -> Result<GuildEntity, ApiError> {
        self.send(self.client.get(self.url(&format!("/api/guilds/{id}"))))
            .await
    }

    async fn create_guild(&self, payload: &GuildPayload) -> Result<GuildCreated, ApiError> {
        debug!("POST /api/guilds name={}", payload.name);
        self.send(self.client.post(self.url("/api/guilds")).json(payload))
            .await
    }

    async fn update_guild(
        &self,
        id: i64,
        edit_token: &str,
        payload: &GuildPayload,
    ) -> Result<GuildEntity, ApiError> {
        debug!("PUT /api/guilds/{id}");
        self.send(
            self.client
                .put(self.url(&format!("/api/guilds/{id}")))
                .header(EDIT_TOKEN_HEADER, edit_token)
                .json(payload),
        )
        .await
    }

    async fn delete_guild(&self, id: i64, edit_token: &str) -> Result<bool, ApiError> {
        debug!("DELETE /api/guilds/{id}");
        let deleted: Deleted = self
            .send(
                self.client
                    .delete(self.url(&format!("/api/guilds/{id}")))
                    .header(EDIT_TOKEN_HEADER, edit_token),
            )
            .await?;
        Ok(deleted.deleted)
    }

    async fn list_players(&self, params: &FilterParams) -> Result<Vec<PlayerEntity>, ApiError> {
        debug!("GET /api/players {params:?}");
        self.send(self.client.get(self.url("/api/players")).query(params))
            .await
    }

    async fn get_player(&self, id: i64) -> Result<PlayerEntity, ApiError> {
        self.send(self.client.get(self.url(&format!("/api/players/{id}"))))
            .await
    }

    async fn create_player(&self, payload: &PlayerPayload) -> Result<PlayerCreated, ApiError> {
        debug!("POST /api/players name={}", payload.name);
        self.send(self.client.post(self.url("/api/players")).json(payload))
            .await
    }

    async fn update_player(
        &self,
        id: i64,
        edit_token: &str,
        payload: &PlayerPayload,
    ) -> Result<PlayerEntity, ApiError> {
        debug!("PUT /api/players/{id}");
        self.send(
            self.client
                .put(self.url(&format!("/api/players/{id}")))
                .header(EDIT_TOKEN_HEADER, edit_token)
                .json(payload),
        )
        .await
    }

    async fn delete_player(&self, id: i64, edit_token: &str) -> Result<bool, ApiError> {
        debug!("DELETE /api/players/{id}");
        let deleted: Deleted = self
            .send(
                self.client
                    .delete(self.url(&format!("/api/players/{id}")))
                    .header(EDIT_TOKEN_HEADER, edit_token),
            )
            .await?;
        Ok(deleted.deleted)
    }

    async fn apply(&self, payload: &ApplicationPayload) -> Result<ApplicationEntity, ApiError> {
        debug!(
            "POST /api/applications guild={} player={}",
            payload.guild_id, payload.player_id
        );
        self.send(self.client.post(self.url("/api/applications")).json(payload))
            .await
    }

    async fn guild_applications(
        &self,
        guild_id: i64,
        edit_token: &str,
    ) -> Result<Vec<ApplicationEntity>, ApiError> {
        self.send(
            self.client
                .get(self.url(&format!("/api/guilds/{guild_id}/applications")))
                .header(EDIT_TOKEN_HEADER, edit_token),
        )
        .await
    }
}
