//! Submission arbiter: dispatching the update/delete forms, reconciling
//! remote outcomes, and chaining to the next trigger.

use tracing::{debug, info, warn};

use crate::commands::Cmd;
use crate::messages::TransportMsg;
use crate::model::{PendingSubmission, TriggerId, WidgetModel};
use crate::transport::{FormKind, FormRequest, TransportOutcome};

use super::activation::activate;
use super::lifecycle::{close_editor, Close};

/// Dispatch the update form. The caller has already checked the guards;
/// the in-progress flag is raised here, once there is something to send.
pub(crate) fn submit_update(model: &mut WidgetModel) -> Option<Cmd> {
    let editor = model.editor.as_ref()?;
    let trigger = model.page.get(editor.trigger)?;
    let value = editor.value().to_string();
    let request = FormRequest::update(&trigger.bundle, &value, model.config.csrf_token.as_deref());
    dispatch(model, value, request)
}

/// Delete control clicked: ask for confirmation if configured, otherwise
/// start the delete right away
pub(crate) fn delete_requested(model: &mut WidgetModel) -> Option<Cmd> {
    let editor = model.editor.as_ref()?;
    let trigger = model.page.get(editor.trigger)?;

    let Some(action) = &trigger.bundle.delete else {
        debug!(target: "submission", trigger = trigger.id.0, "delete on non-deletable trigger ignored");
        return None;
    };

    if model.session.submission_in_progress {
        debug!(target: "submission", "delete ignored: submission in progress");
        return None;
    }

    match action.confirmation.clone() {
        Some(prompt) => {
            let editor = model.editor.as_mut()?;
            editor.awaiting_confirmation = true;
            debug!(target: "submission", %prompt, "asking for delete confirmation");
            Some(Cmd::Confirm { prompt })
        }
        None => begin_delete(model),
    }
}

/// Answer from the delete confirmation dialog
pub(crate) fn confirm_answered(model: &mut WidgetModel, answer: bool) -> Option<Cmd> {
    let editor = model.editor.as_mut()?;
    if !editor.awaiting_confirmation {
        debug!(target: "submission", answer, "unexpected confirmation answer ignored");
        return None;
    }
    editor.awaiting_confirmation = false;

    if answer {
        return begin_delete(model);
    }

    // Declined: put focus back in the input without losing the edit
    editor.field.refocus();
    let caret = editor.field.caret();
    let trigger = editor.trigger;
    model.session.button_mousedown = false;

    let field_id = model.page.get(trigger)?.bundle.field_names().id;
    debug!(target: "submission", trigger = trigger.0, "delete declined, refocusing input");
    Some(Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::FocusInput { field_id, caret },
    ]))
}

/// Pre-flight for the delete request: vetoed while anything is in flight
fn begin_delete(model: &mut WidgetModel) -> Option<Cmd> {
    if model.session.submission_in_progress {
        debug!(target: "submission", "delete vetoed: submission in progress");
        return None;
    }

    let editor = model.editor.as_ref()?;
    let trigger = model.page.get(editor.trigger)?;
    let action = trigger.bundle.delete.as_ref()?;
    let value = editor.value().to_string();
    let request = FormRequest::delete(&trigger.bundle, action, model.config.csrf_token.as_deref());
    dispatch(model, value, request)
}

/// Raise the in-progress flag, record what was sent and emit the transport
/// command
fn dispatch(model: &mut WidgetModel, value: String, request: FormRequest) -> Option<Cmd> {
    let request_id = request.remote.then(|| model.next_request_id());
    let editor = model.editor.as_mut()?;

    model.session.submission_in_progress = true;
    editor.pending = Some(PendingSubmission {
        kind: request.kind,
        request: request_id,
        value,
    });

    match request_id {
        Some(id) => {
            info!(
                target: "submission",
                %id,
                kind = ?request.kind,
                verb = request.http_verb(),
                path = %request.path,
                "sending remote request"
            );
            Some(Cmd::SendRequest { id, request })
        }
        None => {
            info!(
                target: "submission",
                kind = ?request.kind,
                path = %request.path,
                "submitting form by navigation"
            );
            Some(Cmd::Navigate { request })
        }
    }
}

/// Handle transport completions
pub fn update_transport(model: &mut WidgetModel, msg: TransportMsg) -> Option<Cmd> {
    let TransportMsg::Completed { request, outcome } = msg;

    let Some(pending) = model
        .editor
        .as_ref()
        .filter(|editor| editor.owns_request(request))
        .and_then(|editor| editor.pending.clone())
    else {
        debug!(target: "submission", %request, "completion for unknown request ignored");
        return None;
    };

    match outcome {
        TransportOutcome::Failure { status, reason } => {
            warn!(
                target: "submission",
                %request,
                ?status,
                %reason,
                "remote submission failed, reopening editor"
            );
            // Reopening re-captures the reverted label, so the failed edit is
            // discarded
            let trigger = close_editor(model, Close::Revert)?;
            model.session.reset();
            activate(model, trigger)
        }

        TransportOutcome::Success => match pending.kind {
            FormKind::Delete => {
                let trigger = close_editor(model, Close::Destroy)?;
                model.session.reset();
                info!(target: "submission", %request, trigger = trigger.0, "record deleted");
                Some(Cmd::Redraw)
            }
            FormKind::Update => {
                let trigger = close_editor(model, Close::Commit(pending.value))?;
                let next = chain_target(model, trigger);
                model.session.reset();
                info!(
                    target: "submission",
                    %request,
                    trigger = trigger.0,
                    next = ?next.map(|id| id.0),
                    "update saved"
                );
                match next {
                    Some(next) => Some(Cmd::batch(vec![Cmd::Redraw, Cmd::Activate(next)])),
                    None => Some(Cmd::Redraw),
                }
            }
        },
    }
}

/// Resolve the trigger to open after a successful save of `current`
fn chain_target(model: &WidgetModel, current: TriggerId) -> Option<TriggerId> {
    let selector = model.page.get(current)?.bundle.tab_to_next.as_ref()?;
    let next = model.page.chain_target(selector, current);
    if next.is_none() {
        debug!(target: "submission", %selector, "no chaining target");
    }
    next
}
