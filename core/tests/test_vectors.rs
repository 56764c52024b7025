//! Verify `build_*` methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs and either the expected request options
//! or the field an expected validation error names. Request data is compared
//! as parsed JSON so field ordering never matters.

use draft_core::{
    AuthOptions, ClientConfig, Draft, DraftClient, HttpMethod, RequestOptions, ValidationError,
};
use serde_json::Value;

const HOST: &str = "http://localhost:3000";

fn client() -> DraftClient<()> {
    DraftClient::new(ClientConfig::new(HOST), ())
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "get" => HttpMethod::Get,
        "post" => HttpMethod::Post,
        "put" => HttpMethod::Put,
        "delete" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn auth(case: &Value) -> AuthOptions {
    serde_json::from_value(case["auth"].clone()).unwrap()
}

fn draft(case: &Value) -> Draft {
    serde_json::from_value(case["input"].clone()).unwrap()
}

/// Compare a build result against `expected_request` or `expected_error`.
fn check(case: &Value, result: Result<RequestOptions, ValidationError>) {
    let name = case["name"].as_str().unwrap();

    if let Some(expected_field) = case.get("expected_error") {
        let err = result.expect_err(name);
        assert_eq!(err.field(), expected_field.as_str().unwrap(), "{name}: field");
        return;
    }

    let options = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
    let expected = &case["expected_request"];
    assert_eq!(
        options.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(options.path, expected["path"].as_str().unwrap(), "{name}: path");
    assert_eq!(options.host, HOST, "{name}: host");
    assert_eq!(options.auth_opts, auth(case), "{name}: auth passed through");

    let data = serde_json::to_value(&options.data).unwrap();
    assert_eq!(data, expected["data"], "{name}: data");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        check(&case, c.build_create(&draft(&case), &auth(&case)));
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update.json")) {
        let id = case["input_id"].as_str().unwrap();
        check(&case, c.build_update(id, &draft(&case), &auth(&case)));
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let id = case["input_id"].as_str().unwrap();
        check(&case, c.build_delete(id, &auth(&case)));
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/get.json")) {
        let id = case["input_id"].as_str().unwrap();
        check(&case, c.build_get_draft(id, &auth(&case)));
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list.json")) {
        check(&case, c.build_list(&auth(&case)));
    }
}
