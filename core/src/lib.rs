//! Client core for the drafts API.
//!
//! # Overview
//! `DraftClient` exposes create / update / delete / get / list over the
//! `/drafts` collection. It validates inputs locally, shapes the JSON
//! payload, and delegates the call to a caller-supplied `Requester`.
//!
//! # Design
//! - The client holds only an immutable `ClientConfig` and its requester.
//! - Each operation has a synchronous `build_*` counterpart returning the
//!   `RequestOptions` that would be sent, so the I/O boundary is explicit.
//! - Transport, signing and retries live behind `Requester`; the `http`
//!   module offers plain-data helpers for implementing one.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod types;
pub mod validator;

pub use client::DraftClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, ValidationError};
pub use http::{parse_response, HttpMethod, HttpRequest, HttpResponse};
pub use request::{RequestOptions, Requester};
pub use types::{AuthOptions, Draft, DraftPayload, RequestData};
