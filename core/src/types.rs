//! Domain DTOs for the drafts API.
//!
//! # Design
//! `Draft` is the caller's input and keeps required fields as plain
//! `String`s; an empty string counts as missing and is rejected by the
//! validator. `DraftPayload` is the whitelisted body actually sent, where
//! optional fields are skipped rather than serialized as `null`.

use serde::{Deserialize, Serialize};

/// A draft as supplied by the caller for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            mime_type: mime_type.into(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_origin_url(mut self, origin_url: impl Into<String>) -> Self {
        self.origin_url = Some(origin_url.into());
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Credentials handed to the requester. At least one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthOptions {
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            private_key: None,
            token: Some(token.into()),
        }
    }

    pub fn private_key(private_key: impl Into<String>) -> Self {
        Self {
            private_key: Some(private_key.into()),
            token: None,
        }
    }
}

/// The whitelisted draft fields sent to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPayload {
    pub title: String,
    pub content: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Request body envelope: the API expects `{"payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestData {
    pub payload: DraftPayload,
}
