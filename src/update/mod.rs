//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod activation;
mod lifecycle;
mod submission;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::WidgetModel;

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use activation::activate;
pub use lifecycle::{update_form, update_input, update_trigger};
pub use submission::update_transport;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut WidgetModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut WidgetModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Trigger(m) => lifecycle::update_trigger(model, m),
        Msg::Input(m) => lifecycle::update_input(model, m),
        Msg::Form(m) => lifecycle::update_form(model, m),
        Msg::Transport(m) => submission::update_transport(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after phase and session flags and logs the difference.
#[cfg(debug_assertions)]
fn update_traced(model: &mut WidgetModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SessionSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    if let Some(cmd) = &result {
        debug!(target: "message", cmds = ?cmd.flatten(), "produced");
    }

    let after = SessionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "session", %diff, "state changed");
    }

    debug_assert!(
        model.editor.is_some() || model.session.is_clear(),
        "session flags left set with no open editor after {}",
        msg_name
    );

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Trigger::Clicked(TriggerId(0))`
/// - `Input::Escape`
/// - `Transport::Completed { .. }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Trigger(m) => format!("Trigger::{:?}", m),
        Msg::Input(m) => format!("Input::{:?}", m),
        Msg::Form(m) => format!("Form::{:?}", m),
        Msg::Transport(m) => format!("Transport::{:?}", m),
    }
}
