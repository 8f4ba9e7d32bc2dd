//! Payload governor
//!
//! Walks query strings, form fields, JSON documents and text bodies and
//! governs every string value once. A value is rewritten only when its
//! action is `redact`; `deny` is surfaced through [`GovernanceReport`] so the
//! adapter can reject the exchange. Every governed value produces one
//! receipt in the caller's sink.

use indexmap::IndexMap;
use serde_json::Value;
use tork_core::{GovernanceEngine, ReceiptSink, Result};
use tork_domain::{Action, MiddlewareOptions, TorkSettings};

/// Request or response body, as far as governing is concerned.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    /// No body.
    #[default]
    Empty,
    /// Parsed JSON document.
    Json(Value),
    /// Decoded `x-www-form-urlencoded` or `multipart/form-data` text fields.
    Form(IndexMap<String, String>),
    /// Raw text; parsed first when the content type says JSON, and governed
    /// whole when that parse fails.
    Text(String),
}

/// Inbound HTTP payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestPayload {
    /// `Content-Type` header value, if any.
    pub content_type: Option<String>,
    /// Decoded query parameters.
    pub query: IndexMap<String, String>,
    /// Request body.
    pub body: Body,
}

impl RequestPayload {
    /// Empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `Content-Type` header value.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Replace the body.
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }
}

/// Outbound HTTP payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponsePayload {
    /// `Content-Type` header value, if any.
    pub content_type: Option<String>,
    /// Response body.
    pub body: Body,
}

impl ResponsePayload {
    /// Response with a content type and body.
    pub fn new(content_type: impl Into<String>, body: Body) -> Self {
        Self { content_type: Some(content_type.into()), body }
    }
}

/// Summary of one governing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GovernanceReport {
    /// Receipts handed to the sink (one per governed string).
    pub receipts_recorded: usize,
    /// Values rewritten by redaction.
    pub redacted: usize,
    /// At least one value was denied.
    pub denied: bool,
}

impl GovernanceReport {
    fn absorb(&mut self, other: GovernanceReport) {
        self.receipts_recorded += other.receipts_recorded;
        self.redacted += other.redacted;
        self.denied |= other.denied;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Json,
    Form,
    Text,
    Other,
}

impl ContentKind {
    fn of(content_type: Option<&str>) -> Self {
        let content_type = content_type.unwrap_or_default().to_ascii_lowercase();
        if content_type.contains("application/json") {
            Self::Json
        } else if content_type.contains("application/x-www-form-urlencoded")
            || content_type.contains("multipart/form-data")
        {
            Self::Form
        } else if content_type.contains("text/") {
            Self::Text
        } else {
            Self::Other
        }
    }
}

/// Single traversal with its sink and running report.
struct Walk<'e, 's> {
    engine: &'e GovernanceEngine,
    sink: &'s mut dyn ReceiptSink,
    report: GovernanceReport,
}

impl<'e, 's> Walk<'e, 's> {
    fn new(engine: &'e GovernanceEngine, sink: &'s mut dyn ReceiptSink) -> Self {
        Self { engine, sink, report: GovernanceReport::default() }
    }

    fn string(&mut self, text: &mut String) -> Result<()> {
        let result = self.engine.govern_into(text.as_str(), &mut *self.sink)?;
        self.report.receipts_recorded += 1;
        match result.action {
            Action::Redact => {
                *text = result.output;
                self.report.redacted += 1;
            }
            Action::Deny => self.report.denied = true,
            Action::Allow => {}
        }
        Ok(())
    }

    fn value(&mut self, value: &mut Value) -> Result<()> {
        match value {
            Value::String(text) => self.string(text),
            Value::Array(items) => items.iter_mut().try_for_each(|item| self.value(item)),
            Value::Object(map) => map.values_mut().try_for_each(|item| self.value(item)),
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(()),
        }
    }

    fn fields(&mut self, fields: &mut IndexMap<String, String>) -> Result<()> {
        fields.values_mut().try_for_each(|value| self.string(value))
    }

    /// Govern a JSON document held as text. Text that does not parse is
    /// governed whole, like a `text/*` body.
    fn json_text(&mut self, raw: &mut String) -> Result<()> {
        let Ok(mut document) = serde_json::from_str::<Value>(raw) else {
            tracing::debug!("Body declared as JSON did not parse, governing it as text");
            return self.string(raw);
        };
        let before = self.report.redacted;
        self.value(&mut document)?;
        if self.report.redacted > before {
            *raw = serde_json::to_string(&document)?;
        }
        Ok(())
    }

    fn finish(self) -> GovernanceReport {
        self.report
    }
}

/// Applies one engine to HTTP payloads under [`MiddlewareOptions`]
#[derive(Debug, Clone)]
pub struct PayloadGovernor {
    engine: GovernanceEngine,
    options: MiddlewareOptions,
}

impl PayloadGovernor {
    /// Governor applying `engine` under `options`.
    pub fn new(engine: GovernanceEngine, options: MiddlewareOptions) -> Self {
        Self { engine, options }
    }

    /// Build the engine and options from loaded settings.
    ///
    /// # Errors
    /// Fails if a custom pattern is rejected by the engine.
    pub fn from_settings(settings: &TorkSettings) -> Result<Self> {
        let engine = GovernanceEngine::new(settings.governance())?;
        Ok(Self::new(engine, settings.middleware()))
    }

    /// Engine applied to every value.
    pub fn engine(&self) -> &GovernanceEngine {
        &self.engine
    }

    /// Which parts of the exchange are governed.
    pub fn options(&self) -> MiddlewareOptions {
        self.options
    }

    /// Govern every string leaf of a JSON document in place.
    pub fn govern_value(&self, value: &mut Value, sink: &mut dyn ReceiptSink) -> Result<GovernanceReport> {
        let mut walk = Walk::new(&self.engine, sink);
        walk.value(value)?;
        Ok(walk.finish())
    }

    /// Govern query or form fields in place.
    pub fn govern_fields(
        &self,
        fields: &mut IndexMap<String, String>,
        sink: &mut dyn ReceiptSink,
    ) -> Result<GovernanceReport> {
        let mut walk = Walk::new(&self.engine, sink);
        walk.fields(fields)?;
        Ok(walk.finish())
    }

    /// Govern one text value in place.
    pub fn govern_text(&self, text: &mut String, sink: &mut dyn ReceiptSink) -> Result<GovernanceReport> {
        let mut walk = Walk::new(&self.engine, sink);
        walk.string(text)?;
        Ok(walk.finish())
    }

    /// Govern query fields (with `govern_input`) and the body (with
    /// `govern_input` and `govern_body`).
    ///
    /// Bodies are governed when the content type is JSON or a form
    /// encoding; anything else passes through untouched.
    pub fn govern_request(
        &self,
        request: &mut RequestPayload,
        sink: &mut dyn ReceiptSink,
    ) -> Result<GovernanceReport> {
        let mut report = GovernanceReport::default();
        if !self.options.govern_input {
            return Ok(report);
        }

        report.absorb(self.govern_fields(&mut request.query, sink)?);

        if self.options.govern_body {
            let mut walk = Walk::new(&self.engine, sink);
            match (ContentKind::of(request.content_type.as_deref()), &mut request.body) {
                (ContentKind::Json, Body::Json(document)) => walk.value(document)?,
                (ContentKind::Json, Body::Text(raw)) => walk.json_text(raw)?,
                (ContentKind::Form, Body::Form(fields)) => walk.fields(fields)?,
                _ => {}
            }
            report.absorb(walk.finish());
        }

        tracing::debug!(
            receipts = report.receipts_recorded,
            redacted = report.redacted,
            denied = report.denied,
            "Governed request payload"
        );
        Ok(report)
    }

    /// Govern the response body (with `govern_output`).
    ///
    /// JSON documents are walked; `text/*` bodies are governed whole.
    pub fn govern_response(
        &self,
        response: &mut ResponsePayload,
        sink: &mut dyn ReceiptSink,
    ) -> Result<GovernanceReport> {
        if !self.options.govern_output {
            return Ok(GovernanceReport::default());
        }

        let mut walk = Walk::new(&self.engine, sink);
        match (ContentKind::of(response.content_type.as_deref()), &mut response.body) {
            (_, Body::Json(document)) => walk.value(document)?,
            (ContentKind::Json, Body::Text(raw)) => walk.json_text(raw)?,
            (ContentKind::Text, Body::Text(text)) => walk.string(text)?,
            _ => {}
        }
        let report = walk.finish();

        tracing::debug!(
            receipts = report.receipts_recorded,
            redacted = report.redacted,
            denied = report.denied,
            "Governed response payload"
        );
        Ok(report)
    }
}
