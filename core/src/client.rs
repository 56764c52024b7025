//! The drafts resource client.
//!
//! # Design
//! Every operation is split the way the rest of the crate is: a synchronous
//! `build_*` method validates the inputs and produces `RequestOptions`, and
//! the async method of the same name hands those options to the injected
//! `Requester`. Validation therefore fails before the requester is ever
//! called, and whatever the requester returns reaches the caller unchanged.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ValidationError};
use crate::http::HttpMethod;
use crate::request::{RequestOptions, Requester};
use crate::types::{AuthOptions, Draft, DraftPayload, RequestData};
use crate::validator::{non_empty, require, require_credentials};

const COLLECTION: &str = "/drafts";

/// Client for the `/drafts` collection.
#[derive(Debug, Clone)]
pub struct DraftClient<R> {
    config: ClientConfig,
    requester: R,
}

impl<R> DraftClient<R> {
    pub fn new(config: ClientConfig, requester: R) -> Self {
        Self { config, requester }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn requester(&self) -> &R {
        &self.requester
    }

    pub fn build_create(
        &self,
        draft: &Draft,
        auth: &AuthOptions,
    ) -> Result<RequestOptions, ValidationError> {
        let payload = draft_payload(draft)?;
        require_credentials(auth)?;
        Ok(self.options(HttpMethod::Post, COLLECTION.to_string(), Some(payload), auth))
    }

    pub fn build_update(
        &self,
        id: &str,
        draft: &Draft,
        auth: &AuthOptions,
    ) -> Result<RequestOptions, ValidationError> {
        let id = require(id, "id")?;
        let payload = draft_payload(draft)?;
        require_credentials(auth)?;
        Ok(self.options(HttpMethod::Put, item_path(id), Some(payload), auth))
    }

    pub fn build_delete(
        &self,
        id: &str,
        auth: &AuthOptions,
    ) -> Result<RequestOptions, ValidationError> {
        let id = require(id, "id")?;
        require_credentials(auth)?;
        Ok(self.options(HttpMethod::Delete, item_path(id), None, auth))
    }

    pub fn build_get_draft(
        &self,
        id: &str,
        auth: &AuthOptions,
    ) -> Result<RequestOptions, ValidationError> {
        let id = require(id, "id")?;
        require_credentials(auth)?;
        Ok(self.options(HttpMethod::Get, item_path(id), None, auth))
    }

    pub fn build_list(&self, auth: &AuthOptions) -> Result<RequestOptions, ValidationError> {
        require_credentials(auth)?;
        Ok(self.options(HttpMethod::Get, COLLECTION.to_string(), None, auth))
    }

    fn options(
        &self,
        method: HttpMethod,
        path: String,
        payload: Option<DraftPayload>,
        auth: &AuthOptions,
    ) -> RequestOptions {
        RequestOptions {
            host: self.config.host(),
            method,
            path,
            data: payload.map(|payload| RequestData { payload }),
            debug: self.config.is_debug(),
            auth_opts: auth.clone(),
        }
    }
}

impl<R: Requester> DraftClient<R> {
    /// `POST /drafts`
    pub async fn create(&self, draft: &Draft, auth: &AuthOptions) -> Result<Value, ApiError> {
        let options = checked(self.build_create(draft, auth))?;
        self.send(options).await
    }

    /// `PUT /drafts/{id}`
    pub async fn update(
        &self,
        id: &str,
        draft: &Draft,
        auth: &AuthOptions,
    ) -> Result<Value, ApiError> {
        let options = checked(self.build_update(id, draft, auth))?;
        self.send(options).await
    }

    /// `DELETE /drafts/{id}`
    pub async fn delete(&self, id: &str, auth: &AuthOptions) -> Result<Value, ApiError> {
        let options = checked(self.build_delete(id, auth))?;
        self.send(options).await
    }

    /// `GET /drafts/{id}`
    pub async fn get_draft(&self, id: &str, auth: &AuthOptions) -> Result<Value, ApiError> {
        let options = checked(self.build_get_draft(id, auth))?;
        self.send(options).await
    }

    /// `GET /drafts`
    pub async fn list(&self, auth: &AuthOptions) -> Result<Value, ApiError> {
        let options = checked(self.build_list(auth))?;
        self.send(options).await
    }

    async fn send(&self, options: RequestOptions) -> Result<Value, ApiError> {
        if options.debug {
            debug!(
                method = %options.method,
                host = %options.host,
                path = %options.path,
                data = ?options.data,
                "draft request"
            );
        } else {
            debug!(method = %options.method, path = %options.path, "draft request");
        }
        self.requester.request(options).await
    }
}

fn checked(result: Result<RequestOptions, ValidationError>) -> Result<RequestOptions, ApiError> {
    result.map_err(|err| {
        warn!(field = err.field(), error = %err, "draft request rejected");
        ApiError::Validation(err)
    })
}

/// Validate the required draft fields and copy the whitelisted ones.
fn draft_payload(draft: &Draft) -> Result<DraftPayload, ValidationError> {
    let title = require(&draft.title, "draft.title")?;
    let content = require(&draft.content, "draft.content")?;
    let mime_type = require(&draft.mime_type, "draft.mimeType")?;
    Ok(DraftPayload {
        title: title.to_string(),
        content: content.to_string(),
        mime_type: mime_type.to_string(),
        source: non_empty(&draft.source),
        origin_url: non_empty(&draft.origin_url),
        project_id: non_empty(&draft.project_id),
    })
}

fn item_path(id: &str) -> String {
    format!("{COLLECTION}/{id}")
}
