//! The request-helper seam.
//!
//! `DraftClient` never performs I/O itself. It hands a `RequestOptions` to a
//! `Requester`, which owns transport, signing, retries and everything else
//! that happens on the wire.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{AuthOptions, RequestData};

/// Everything the request helper needs to perform one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub host: String,
    pub method: HttpMethod,
    /// Path relative to `host`, e.g. `/drafts/123`.
    pub path: String,
    pub data: Option<RequestData>,
    pub debug: bool,
    pub auth_opts: AuthOptions,
}

impl RequestOptions {
    /// Describe these options as a bearer-authenticated `HttpRequest`.
    ///
    /// A token takes precedence when both credentials are present. Options
    /// carrying only a private key fail with `SigningRequired`.
    pub fn to_http_request(&self) -> Result<HttpRequest, ApiError> {
        let token = self
            .auth_opts
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::SigningRequired)?;

        let mut headers = vec![("authorization".to_string(), format!("Bearer {token}"))];
        let body = match &self.data {
            Some(data) => {
                headers.push(("content-type".to_string(), "application/json".to_string()));
                Some(
                    serde_json::to_string(data)
                        .map_err(|e| ApiError::Serialization(e.to_string()))?,
                )
            }
            None => None,
        };

        Ok(HttpRequest {
            method: self.method,
            url: format!("{}{}", self.host.trim_end_matches('/'), self.path),
            headers,
            body,
        })
    }
}

/// Performs the network call for a `RequestOptions`.
#[async_trait]
pub trait Requester: Send + Sync {
    async fn request(&self, options: RequestOptions) -> Result<Value, ApiError>;
}

#[async_trait]
impl<T: Requester + ?Sized> Requester for Arc<T> {
    async fn request(&self, options: RequestOptions) -> Result<Value, ApiError> {
        (**self).request(options).await
    }
}
