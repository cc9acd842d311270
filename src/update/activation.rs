//! Activation: turning a trigger into an open editor

use tracing::{debug, info};

use crate::commands::Cmd;
use crate::model::{EditorInstance, TriggerId, TriggerState, WidgetModel};

/// Open an editor on `id`.
///
/// Rejected (no-op) when any editor is already open on the page, which is
/// the one place the single-editor invariant is enforced. The trigger is
/// hidden, the editor captures its text as the original value, and the
/// input is focused with the caret at end-of-text.
pub fn activate(model: &mut WidgetModel, id: TriggerId) -> Option<Cmd> {
    if let Some(open) = &model.editor {
        debug!(
            target: "lifecycle",
            requested = id.0,
            open = open.trigger.0,
            "activation rejected: an editor is already open"
        );
        return None;
    }

    let Some(trigger) = model.page.get_mut(id) else {
        debug!(target: "lifecycle", trigger = id.0, "activation of unknown trigger ignored");
        return None;
    };

    if trigger.is_deleted() {
        debug!(target: "lifecycle", trigger = id.0, "activation of deleted trigger ignored");
        return None;
    }

    trigger.state = TriggerState::Hidden;
    let editor = EditorInstance::new(id, trigger.text.clone());
    let field_id = trigger.bundle.field_names().id;
    let caret = editor.field.caret();

    info!(
        target: "lifecycle",
        trigger = id.0,
        field = %field_id,
        value = %editor.original_value(),
        "editor opened"
    );

    model.editor = Some(editor);

    Some(Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::FocusInput { field_id, caret },
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use crate::model::{FormMethod, Page, TriggerBundle};

    fn model() -> WidgetModel {
        let mut page = Page::new();
        for text in ["Hello", "World"] {
            page.push(
                None,
                vec![],
                text,
                TriggerBundle::new("/posts/1", "title", FormMethod::Patch, "post"),
            );
        }
        WidgetModel::new(page, WidgetConfig::default())
    }

    #[test]
    fn test_activate_hides_trigger_and_focuses_at_end() {
        let mut model = model();
        let cmd = activate(&mut model, TriggerId(0)).unwrap();

        assert_eq!(model.page.get(TriggerId(0)).unwrap().state, TriggerState::Hidden);
        let editor = model.editor.as_ref().unwrap();
        assert_eq!(editor.original_value(), "Hello");
        assert!(cmd.flatten().contains(&&Cmd::FocusInput {
            field_id: "post_title".to_string(),
            caret: 5,
        }));
    }

    #[test]
    fn test_second_activation_is_noop() {
        let mut model = model();
        activate(&mut model, TriggerId(0));
        assert!(activate(&mut model, TriggerId(1)).is_none());

        assert_eq!(model.editor.as_ref().unwrap().trigger, TriggerId(0));
        assert!(model.page.get(TriggerId(1)).unwrap().is_visible());
    }

    #[test]
    fn test_unknown_trigger_is_noop() {
        let mut model = model();
        assert!(activate(&mut model, TriggerId(9)).is_none());
        assert!(model.editor.is_none());
    }
}
