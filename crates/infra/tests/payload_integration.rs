//! Integration tests for the payload governor
//!
//! Drives request and response payloads through the governor the way a web
//! framework adapter would, checking options, body kinds and receipts.

use std::sync::mpsc;

use indexmap::IndexMap;
use serde_json::json;
use tork_core::{GovernanceEngine, GovernanceError, ReceiptSink};
use tork_domain::{Action, GovernanceConfig, GovernanceReceipt, MiddlewareOptions};
use tork_infra::{Body, GovernanceReport, PayloadGovernor, RequestPayload, ResponsePayload};

fn governor_with(config: GovernanceConfig, options: MiddlewareOptions) -> PayloadGovernor {
    PayloadGovernor::new(GovernanceEngine::new(config).expect("engine builds"), options)
}

fn governor() -> PayloadGovernor {
    governor_with(GovernanceConfig::default(), MiddlewareOptions::default())
}

fn form(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

/// Validates query and JSON body governing for a typical API request.
///
/// # Test Steps
/// 1. Build a request with a PII query value and a nested JSON body
/// 2. Govern it with default options
/// 3. Confirm query and body leaves are redacted and non-strings untouched
/// 4. Confirm one receipt per governed string
#[test]
fn test_json_request_is_governed() {
    let mut sink: Vec<GovernanceReceipt> = Vec::new();
    let mut request = RequestPayload::new()
        .with_content_type("application/json; charset=utf-8")
        .with_query("q", "call 555-123-4567")
        .with_query("page", "2")
        .with_body(Body::Json(json!({
            "customer": {"name": "Jane", "ssn": "123-45-6789"},
            "items": [{"sku": 42, "note": "ship to 10.0.0.8"}],
            "gift": false
        })));

    let report = governor().govern_request(&mut request, &mut sink).unwrap();

    assert_eq!(request.query["q"], "call [PHONE_REDACTED]");
    assert_eq!(request.query["page"], "2");
    assert_eq!(
        request.body,
        Body::Json(json!({
            "customer": {"name": "Jane", "ssn": "[SSN_REDACTED]"},
            "items": [{"sku": 42, "note": "ship to [IP_ADDRESS_REDACTED]"}],
            "gift": false
        }))
    );
    assert_eq!(report, GovernanceReport { receipts_recorded: 5, redacted: 3, denied: false });
    assert_eq!(sink.len(), 5);
}

/// Validates that a request body declared as JSON but truncated is still
/// governed, as one text value, instead of passing through unchecked.
///
/// # Test Steps
/// 1. Send a truncated JSON body holding an SSN
/// 2. Confirm the SSN is redacted in the raw text
/// 3. Confirm one receipt reached the sink and the report counts it
#[test]
fn test_unparseable_json_request_body_is_governed_as_text() {
    let mut sink: Vec<GovernanceReceipt> = Vec::new();
    let mut request = RequestPayload::new()
        .with_content_type("application/json")
        .with_body(Body::Text(r#"{"ssn": "123-45-6789""#.into()));

    let report = governor().govern_request(&mut request, &mut sink).unwrap();

    assert_eq!(request.body, Body::Text(r#"{"ssn": "[SSN_REDACTED]""#.into()));
    assert_eq!(report, GovernanceReport { receipts_recorded: 1, redacted: 1, denied: false });
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].pii_types_detected(), ["SSN"]);
}

/// Validates that form bodies are governed only for form content types.
#[test]
fn test_form_body_requires_form_content_type() {
    let mut sink: Vec<GovernanceReceipt> = Vec::new();
    let fields = form(&[("email", "jane@example.com"), ("plan", "pro")]);

    let mut urlencoded = RequestPayload::new()
        .with_content_type("application/x-www-form-urlencoded")
        .with_body(Body::Form(fields.clone()));
    governor().govern_request(&mut urlencoded, &mut sink).unwrap();
    assert_eq!(
        urlencoded.body,
        Body::Form(form(&[("email", "[EMAIL_REDACTED]"), ("plan", "pro")]))
    );

    let mut octet = RequestPayload::new()
        .with_content_type("application/octet-stream")
        .with_body(Body::Form(fields.clone()));
    let report = governor().govern_request(&mut octet, &mut sink).unwrap();
    assert_eq!(octet.body, Body::Form(fields));
    assert_eq!(report.receipts_recorded, 0);
}

/// Validates that each option switches off its part of the exchange.
#[test]
fn test_options_are_honoured() {
    let body = Body::Json(json!({"ssn": "123-45-6789"}));
    let mut sink: Vec<GovernanceReceipt> = Vec::new();

    let no_body = governor_with(
        GovernanceConfig::default(),
        MiddlewareOptions { govern_body: false, ..MiddlewareOptions::default() },
    );
    let mut request = RequestPayload::new()
        .with_content_type("application/json")
        .with_query("q", "123-45-6789")
        .with_body(body.clone());
    no_body.govern_request(&mut request, &mut sink).unwrap();
    assert_eq!(request.query["q"], "[SSN_REDACTED]");
    assert_eq!(request.body, body);

    let no_input = governor_with(
        GovernanceConfig::default(),
        MiddlewareOptions { govern_input: false, ..MiddlewareOptions::default() },
    );
    let mut request = RequestPayload::new()
        .with_content_type("application/json")
        .with_query("q", "123-45-6789")
        .with_body(body.clone());
    let report = no_input.govern_request(&mut request, &mut sink).unwrap();
    assert_eq!(request.query["q"], "123-45-6789");
    assert_eq!(request.body, body);
    assert_eq!(report, GovernanceReport::default());

    let no_output = governor_with(
        GovernanceConfig::default(),
        MiddlewareOptions { govern_output: false, ..MiddlewareOptions::default() },
    );
    let mut response = ResponsePayload::new("text/plain", Body::Text("ssn 123-45-6789".into()));
    no_output.govern_response(&mut response, &mut sink).unwrap();
    assert_eq!(response.body, Body::Text("ssn 123-45-6789".into()));
}

/// Validates response governing for JSON documents, JSON text and plain
/// text, and that other content types pass through.
#[test]
fn test_response_bodies() {
    let governor = governor();
    let mut sink: Vec<GovernanceReceipt> = Vec::new();

    let mut text = ResponsePayload::new("text/html", Body::Text("<p>jane@example.com</p>".into()));
    governor.govern_response(&mut text, &mut sink).unwrap();
    assert_eq!(text.body, Body::Text("<p>[EMAIL_REDACTED]</p>".into()));

    let mut raw_json =
        ResponsePayload::new("application/json", Body::Text(r#"{"contact":"jane@example.com","n":1}"#.into()));
    governor.govern_response(&mut raw_json, &mut sink).unwrap();
    assert_eq!(raw_json.body, Body::Text(r#"{"contact":"[EMAIL_REDACTED]","n":1}"#.into()));

    let mut doc = ResponsePayload::new("application/vnd.api+json", Body::Json(json!(["123-45-6789"])));
    governor.govern_response(&mut doc, &mut sink).unwrap();
    assert_eq!(doc.body, Body::Json(json!(["[SSN_REDACTED]"])));

    let mut binary = ResponsePayload::new("image/png", Body::Text("123-45-6789".into()));
    governor.govern_response(&mut binary, &mut sink).unwrap();
    assert_eq!(binary.body, Body::Text("123-45-6789".into()));

    assert_eq!(sink.len(), 3);
}

/// Validates that deny is surfaced in the report without altering values.
#[test]
fn test_deny_is_reported() {
    let governor = governor_with(
        GovernanceConfig::default().with_default_action(Action::Deny),
        MiddlewareOptions::default(),
    );
    let mut sink: Vec<GovernanceReceipt> = Vec::new();
    let mut doc = json!({"a": "clean", "b": "ssn 123-45-6789"});

    let report = governor.govern_value(&mut doc, &mut sink).unwrap();

    assert!(report.denied);
    assert_eq!(report.redacted, 0);
    assert_eq!(doc["b"], "ssn 123-45-6789");
    let actions: Vec<Action> = sink.iter().map(GovernanceReceipt::action).collect();
    assert_eq!(actions, vec![Action::Allow, Action::Deny]);
}

/// Validates that a failing sink aborts the walk with an error.
#[test]
fn test_sink_failure_aborts_walk() {
    let (mut tx, rx) = mpsc::channel::<GovernanceReceipt>();
    drop(rx);

    let mut text = String::from("jane@example.com");
    let sink: &mut dyn ReceiptSink = &mut tx;
    let err = governor().govern_text(&mut text, sink).unwrap_err();

    assert!(matches!(err, GovernanceError::ReceiptSink(_)));
    assert_eq!(text, "jane@example.com");
}
