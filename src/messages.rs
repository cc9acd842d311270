//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Browser events
//! (click, keydown, blur, mousedown), dialog answers and transport
//! completions are all expressed as a [`Msg`].

use crate::model::TriggerId;
use crate::transport::{RequestId, TransportOutcome};

/// Trigger label events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerMsg {
    /// The label was clicked (by the user or by chaining)
    Clicked(TriggerId),
}

/// Caret movement inside the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretMove {
    Left,
    Right,
    Home,
    End,
}

/// Events on the editor's text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMsg {
    /// Escape keydown
    Escape,
    /// Tab keydown (submits instead of moving focus)
    Tab,
    /// The input lost focus
    Blur,
    /// Insert a single character at the caret
    InsertChar(char),
    /// Insert text at the caret (paste, IME commit)
    InsertText(String),
    /// Backspace
    DeleteBackward,
    /// Delete
    DeleteForward,
    /// Arrow/Home/End
    MoveCaret(CaretMove),
    /// Replace the whole value (browser `input` event)
    SetValue(String),
}

/// Controls rendered next to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Submit,
    Cancel,
    Delete,
}

/// Events on the editor form and its controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    /// The update form is being submitted (Enter, submit button, Tab, blur)
    Submit,
    /// Cancel button clicked
    CancelClicked,
    /// Delete control clicked
    DeleteClicked,
    /// Mousedown on one of the controls, delivered before the input's blur
    ControlMousedown(Control),
    /// Answer from the delete confirmation dialog
    ConfirmAnswered(bool),
}

/// Completion of a remote submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportMsg {
    Completed {
        request: RequestId,
        outcome: TransportOutcome,
    },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Trigger(TriggerMsg),
    Input(InputMsg),
    Form(FormMsg),
    Transport(TransportMsg),
}

impl Msg {
    pub fn click(trigger: TriggerId) -> Self {
        Msg::Trigger(TriggerMsg::Clicked(trigger))
    }

    pub fn completed(request: RequestId, outcome: TransportOutcome) -> Self {
        Msg::Transport(TransportMsg::Completed { request, outcome })
    }
}

impl From<TriggerMsg> for Msg {
    fn from(msg: TriggerMsg) -> Self {
        Msg::Trigger(msg)
    }
}

impl From<InputMsg> for Msg {
    fn from(msg: InputMsg) -> Self {
        Msg::Input(msg)
    }
}

impl From<FormMsg> for Msg {
    fn from(msg: FormMsg) -> Self {
        Msg::Form(msg)
    }
}

impl From<TransportMsg> for Msg {
    fn from(msg: TransportMsg) -> Self {
        Msg::Transport(msg)
    }
}
