//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. A
//! `Requester` implementation can turn `RequestOptions` into an
//! `HttpRequest` with `RequestOptions::to_http_request`, execute it with any
//! HTTP library, and hand the result to `parse_response`. The core crate
//! itself never touches the network.

use std::fmt;

use serde_json::Value;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Lowercase name, as passed to the request helper.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Map an `HttpResponse` to the JSON the API returned.
///
/// Any 2xx is success; an empty body yields `Value::Null`. 404 becomes
/// `NotFound`, every other status `HttpError` with the raw body.
pub fn parse_response(response: HttpResponse) -> Result<Value, ApiError> {
    match response.status {
        200..=299 => {
            if response.body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&response.body)
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        }
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn method_names_are_lowercase() {
        assert_eq!(HttpMethod::Post.as_str(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn parse_success_body() {
        let value = parse_response(response(201, r#"{"id":"1","title":"T"}"#)).unwrap();
        assert_eq!(value["id"], "1");
    }

    #[test]
    fn parse_empty_body_is_null() {
        assert_eq!(parse_response(response(204, "")).unwrap(), Value::Null);
    }

    #[test]
    fn parse_not_found() {
        let err = parse_response(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_unauthorized_keeps_status_and_body() {
        let err = parse_response(response(401, "missing token")).unwrap_err();
        match err {
            ApiError::HttpError { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "missing token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_bad_json() {
        let err = parse_response(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
