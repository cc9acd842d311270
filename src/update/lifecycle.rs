//! Lifecycle state machine: keyboard, mouse and focus handling for the open
//! editor, and the close paths shared by every transition.

use tracing::{debug, info};

use crate::commands::Cmd;
use crate::messages::{CaretMove, FormMsg, InputMsg, TriggerMsg};
use crate::model::{TextField, TriggerId, TriggerState, WidgetModel};

use super::activation::activate;
use super::submission;

/// How the editor leaves the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Close {
    /// Label goes back to the value captured at activation
    Revert,
    /// Label shows the given (submitted) value
    Commit(String),
    /// Record deleted: label stays hidden for good
    Destroy,
}

/// Remove the open editor and settle its trigger. Returns the trigger the
/// editor belonged to, or `None` if nothing was open.
///
/// Does not touch the session; callers reset it once their own follow-up
/// (chaining, reopening) has been decided.
pub(crate) fn close_editor(model: &mut WidgetModel, close: Close) -> Option<TriggerId> {
    let editor = model.ensure_editor_absent()?;
    let id = editor.trigger;

    if let Some(trigger) = model.page.get_mut(id) {
        match close {
            Close::Revert => {
                trigger.text = editor.original_value().to_string();
                trigger.state = TriggerState::Visible;
            }
            Close::Commit(value) => {
                trigger.text = value;
                trigger.state = TriggerState::Visible;
            }
            Close::Destroy => {
                trigger.state = TriggerState::Deleted;
            }
        }
    }

    Some(id)
}

/// Cancel: revert the label to its original value and drop the editor
pub(crate) fn cancel(model: &mut WidgetModel) -> Option<Cmd> {
    let closed = close_editor(model, Close::Revert);
    model.session.reset();
    let id = closed?;
    info!(target: "lifecycle", trigger = id.0, "editor cancelled");
    Some(Cmd::Redraw)
}

/// Handle trigger events
pub fn update_trigger(model: &mut WidgetModel, msg: TriggerMsg) -> Option<Cmd> {
    match msg {
        TriggerMsg::Clicked(id) => activate(model, id),
    }
}

/// Handle input events (keys, focus, text editing)
pub fn update_input(model: &mut WidgetModel, msg: InputMsg) -> Option<Cmd> {
    if model.editor.is_none() {
        debug!(target: "lifecycle", ?msg, "input event without an open editor ignored");
        return None;
    }

    match msg {
        InputMsg::Escape => {
            if model.session.submission_in_progress {
                debug!(target: "lifecycle", "escape ignored: submission in progress");
                return None;
            }
            model.session.escape_keydown = true;
            let cmd = cancel(model);
            model.session.escape_keydown = false;
            cmd
        }

        InputMsg::Tab => {
            if model.session.submission_in_progress {
                debug!(target: "lifecycle", "tab ignored: submission in progress");
                return None;
            }
            submit_requested(model)
        }

        InputMsg::Blur => {
            if model.session.submission_in_progress || model.session.button_mousedown {
                debug!(
                    target: "lifecycle",
                    session = ?model.session,
                    "blur ignored"
                );
                return None;
            }
            let submit_on_blur = model
                .editor_trigger()
                .is_some_and(|t| t.bundle.submit_on_blur);
            if submit_on_blur {
                submit_requested(model)
            } else {
                cancel(model)
            }
        }

        InputMsg::InsertChar(ch) => edit_field(model, |f| f.insert_char(ch)),
        InputMsg::InsertText(text) => edit_field(model, |f| f.insert_str(&text)),
        InputMsg::DeleteBackward => edit_field(model, TextField::delete_backward),
        InputMsg::DeleteForward => edit_field(model, TextField::delete_forward),
        InputMsg::MoveCaret(CaretMove::Left) => edit_field(model, TextField::move_left),
        InputMsg::MoveCaret(CaretMove::Right) => edit_field(model, TextField::move_right),
        InputMsg::MoveCaret(CaretMove::Home) => edit_field(model, TextField::move_home),
        InputMsg::MoveCaret(CaretMove::End) => edit_field(model, TextField::move_end),
        InputMsg::SetValue(value) => edit_field(model, |f| f.set_value(value)),
    }
}

fn edit_field(model: &mut WidgetModel, edit: impl FnOnce(&mut TextField)) -> Option<Cmd> {
    let editor = model.editor.as_mut()?;
    edit(&mut editor.field);
    Some(Cmd::Redraw)
}

/// Handle form and control events
pub fn update_form(model: &mut WidgetModel, msg: FormMsg) -> Option<Cmd> {
    if model.editor.is_none() {
        debug!(target: "lifecycle", ?msg, "form event without an open editor ignored");
        return None;
    }

    match msg {
        FormMsg::Submit => submit_requested(model),

        FormMsg::CancelClicked => {
            if model.session.submission_in_progress {
                debug!(target: "lifecycle", "cancel ignored: submission in progress");
                return None;
            }
            cancel(model)
        }

        FormMsg::ControlMousedown(control) => {
            debug!(target: "lifecycle", ?control, "control mousedown, arming blur guard");
            model.session.button_mousedown = true;
            None
        }

        FormMsg::DeleteClicked => submission::delete_requested(model),

        FormMsg::ConfirmAnswered(answer) => submission::confirm_answered(model, answer),
    }
}

/// Form submission gate: suppressed while another submission is in flight
/// or while Escape is being handled
fn submit_requested(model: &mut WidgetModel) -> Option<Cmd> {
    if model.session.submission_in_progress || model.session.escape_keydown {
        debug!(
            target: "lifecycle",
            session = ?model.session,
            "submission suppressed"
        );
        return None;
    }
    submission::submit_update(model)
}
