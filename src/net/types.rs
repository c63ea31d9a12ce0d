//! Wire types for the Briefly API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::persona::Persona;

/// Authenticated user identity from `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Token payload returned by login and signup.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
}

/// One generated audio briefing. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Briefing {
    pub id: String,
    #[serde(default)]
    pub search_history_id: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Narration transcript.
    pub script: String,
    #[serde(default)]
    pub audio_filename: Option<String>,
    /// Topic query the briefing was generated from.
    pub query: String,
    pub persona: Persona,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Playable audio location.
    pub audio_url: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// List envelope from `GET /users/{id}/briefings`.
#[derive(Clone, Debug, Deserialize)]
pub struct BriefingsResponse {
    pub briefings: Vec<Briefing>,
}

/// Body for `POST /breakdown/narration`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateBriefingRequest {
    pub query: String,
    pub persona: Persona,
}
