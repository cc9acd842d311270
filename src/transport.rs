//! Submission requests and their outcomes
//!
//! The widget never talks to the network itself. It describes what should be
//! sent as a [`FormRequest`] and learns how it went through a
//! [`TransportOutcome`] delivered back as a message.

use std::fmt;

use serde::Serialize;

use crate::model::bundle::{DeleteAction, FormMethod, TriggerBundle};

/// Hidden charset marker every form carries
pub const UTF8_FIELD: (&str, &str) = ("utf8", "\u{2713}");
/// Method override field name
pub const METHOD_FIELD: &str = "_method";
/// Authenticity token field name (non-remote submissions only)
pub const AUTHENTICITY_FIELD: &str = "authenticity_token";

/// Correlates a remote submission with its completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req#{}", self.0)
    }
}

/// Which form inside the editor was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Update,
    Delete,
}

/// A fully-described form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormRequest {
    pub kind: FormKind,
    /// Verb the server should treat this as (sent as `_method`)
    pub method: FormMethod,
    pub path: String,
    /// Asynchronous request instead of page navigation
    pub remote: bool,
    /// Response content-type hint (remote only)
    pub content_type: Option<String>,
    /// Form fields in document order
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    /// Update form carrying the edited value under `{class}[{attribute}]`
    pub fn update(bundle: &TriggerBundle, value: &str, csrf_token: Option<&str>) -> Self {
        let mut fields = hidden_fields(bundle.method, bundle.remote, csrf_token);
        fields.push((bundle.field_names().name, value.to_string()));
        Self {
            kind: FormKind::Update,
            method: bundle.method,
            path: bundle.path.clone(),
            remote: bundle.remote,
            content_type: bundle.content_type.clone(),
            fields,
        }
    }

    /// Delete request for the trigger's backing record
    pub fn delete(bundle: &TriggerBundle, action: &DeleteAction, csrf_token: Option<&str>) -> Self {
        Self {
            kind: FormKind::Delete,
            method: FormMethod::Delete,
            path: action.path.clone(),
            remote: bundle.remote,
            content_type: action.content_type.clone(),
            fields: hidden_fields(FormMethod::Delete, bundle.remote, csrf_token),
        }
    }

    /// Verb on the wire: forms always POST and carry the real verb in
    /// `_method`; remote requests use it directly
    pub fn http_verb(&self) -> &'static str {
        if self.remote {
            match self.method {
                FormMethod::Post => "POST",
                FormMethod::Put => "PUT",
                FormMethod::Patch => "PATCH",
                FormMethod::Delete => "DELETE",
            }
        } else {
            "POST"
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encoded_body(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn hidden_fields(method: FormMethod, remote: bool, csrf_token: Option<&str>) -> Vec<(String, String)> {
    let mut fields = vec![
        (UTF8_FIELD.0.to_string(), UTF8_FIELD.1.to_string()),
        (METHOD_FIELD.to_string(), method.as_str().to_string()),
    ];
    // Remote requests send the token as a header instead
    if !remote {
        if let Some(token) = csrf_token {
            fields.push((AUTHENTICITY_FIELD.to_string(), token.to_string()));
        }
    }
    fields
}

/// How a remote submission ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum TransportOutcome {
    Success,
    Failure {
        /// HTTP status, `None` for network-level failures
        status: Option<u16>,
        reason: String,
    },
}

impl TransportOutcome {
    /// Map an HTTP status code: any 2xx is success
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            TransportOutcome::Success
        } else {
            TransportOutcome::Failure {
                status: Some(status),
                reason: format!("HTTP {}", status),
            }
        }
    }

    pub fn network_error(reason: impl Into<String>) -> Self {
        TransportOutcome::Failure {
            status: None,
            reason: reason.into(),
        }
    }
}
