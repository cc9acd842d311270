//! Editor instance and interaction session state

use serde::Serialize;

use super::field::TextField;
use super::page::TriggerId;
use crate::transport::{FormKind, RequestId};

/// A submission accepted by the arbiter and not yet resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub kind: FormKind,
    /// `None` for non-remote submissions (the page navigates away)
    pub request: Option<RequestId>,
    /// Value that was sent; a successful update shows exactly this
    pub value: String,
}

/// The live form attached next to a trigger while editing
#[derive(Debug, Clone)]
pub struct EditorInstance {
    /// Back-reference to the trigger this editor replaces
    pub trigger: TriggerId,
    original_value: String,
    pub field: TextField,
    pub pending: Option<PendingSubmission>,
    /// A delete confirmation dialog is waiting for an answer
    pub awaiting_confirmation: bool,
}

impl EditorInstance {
    pub fn new(trigger: TriggerId, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            trigger,
            field: TextField::new(value.clone()),
            original_value: value,
            pending: None,
            awaiting_confirmation: false,
        }
    }

    /// Value captured when the editor opened
    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    /// Current (possibly edited) value
    pub fn value(&self) -> &str {
        self.field.text()
    }

    pub fn is_dirty(&self) -> bool {
        self.field.text() != self.original_value
    }

    /// Whether `request` is the in-flight submission of this editor
    pub fn owns_request(&self, request: RequestId) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.request == Some(request))
    }
}

/// Interaction guard flags shared by every handler.
///
/// One session exists per controller. Only one editor can be open, so one
/// set of flags is enough; it is reset whenever the editor closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    /// A submission was accepted and has not resolved
    pub submission_in_progress: bool,
    /// A control (submit/cancel/delete) got a mousedown; the next blur is ours
    pub button_mousedown: bool,
    /// Escape is being handled; blocks a racing submit.
    ///
    /// Only set for the duration of the Escape handler. A browser host fires
    /// the input's blur synchronously while the form is torn down; with
    /// submit-on-blur that blur would reach the submit gate from inside the
    /// close. Between messages the flag is always clear.
    pub escape_keydown: bool,
}

impl Session {
    pub fn reset(&mut self) {
        *self = Session::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Session::default()
    }
}

/// Coarse lifecycle phase, derived from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "trigger", rename_all = "lowercase")]
pub enum Phase {
    /// No editor open
    Idle,
    /// Editor open on the trigger, input focused
    Editing(TriggerId),
    /// Editor open with a submission in flight
    Submitting(TriggerId),
}

impl Phase {
    pub fn is_idle(self) -> bool {
        matches!(self, Phase::Idle)
    }
}
