//! Lifecycle tests
//!
//! Keyboard, blur and control handling for an open editor.

mod common;

use common::{click, remote_bundle, single, submit, test_model, type_text};

use inplace::input::{key_to_msg, Key};
use inplace::messages::{CaretMove, Control, FormMsg, InputMsg, Msg};
use inplace::model::{Phase, TriggerId};
use inplace::update::update;

// ========================================================================
// Escape / Cancel
// ========================================================================

#[test]
fn test_escape_reverts_to_original_value() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    type_text(&mut ctl, " World");
    assert_eq!(ctl.model().editor.as_ref().unwrap().value(), "Hello World");

    ctl.handle(key_to_msg(Key::Escape));

    assert!(ctl.phase().is_idle());
    let trigger = &ctl.model().page.triggers()[0];
    assert_eq!(trigger.text, "Hello");
    assert!(trigger.is_visible());
    assert!(ctl.model().session.is_clear());
    assert!(ctl.host().sent.is_empty());
}

#[test]
fn test_cancel_button_reverts() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    ctl.handle(InputMsg::SetValue("Changed".to_string()));
    ctl.handle(FormMsg::ControlMousedown(Control::Cancel));
    ctl.handle(InputMsg::Blur);
    ctl.handle(FormMsg::CancelClicked);

    assert!(ctl.phase().is_idle());
    assert_eq!(common::label(&ctl, 0), "Hello");
    assert!(ctl.model().session.is_clear());
}

#[test]
fn test_escape_during_submission_is_ignored() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    submit(&mut ctl);

    ctl.handle(InputMsg::Escape);

    assert_eq!(ctl.phase(), Phase::Submitting(TriggerId(0)));
    assert!(!ctl.model().session.escape_keydown);
}

#[test]
fn test_cancel_click_during_submission_is_ignored() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    submit(&mut ctl);
    ctl.handle(FormMsg::CancelClicked);
    assert_eq!(ctl.phase(), Phase::Submitting(TriggerId(0)));
}

// ========================================================================
// Tab / Enter
// ========================================================================

#[test]
fn test_tab_submits() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    ctl.handle(key_to_msg(Key::Tab));

    assert_eq!(ctl.phase(), Phase::Submitting(TriggerId(0)));
    assert_eq!(ctl.host().sent.len(), 1);
}

#[test]
fn test_double_submit_sends_once() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    ctl.handle(key_to_msg(Key::Enter));
    ctl.handle(key_to_msg(Key::Enter));
    ctl.handle(key_to_msg(Key::Tab));
    ctl.handle(FormMsg::Submit);

    assert_eq!(ctl.host().sent.len(), 1);
    assert!(ctl.model().session.submission_in_progress);
}

#[test]
fn test_escape_on_submit_on_blur_field_sends_nothing() {
    let mut bundle = remote_bundle();
    bundle.submit_on_blur = true;
    let mut ctl = single(bundle);
    click(&mut ctl, 0);
    type_text(&mut ctl, " there");

    ctl.handle(key_to_msg(Key::Escape));
    // The blur and stray submit a torn-down form can still deliver
    ctl.handle(InputMsg::Blur);
    ctl.handle(FormMsg::Submit);

    assert!(ctl.phase().is_idle());
    assert!(ctl.host().sent.is_empty());
    assert_eq!(common::label(&ctl, 0), "Hello");
    assert!(!ctl.model().session.escape_keydown);
}

#[test]
fn test_submit_gate_refuses_while_escape_flag_is_up() {
    let mut model = test_model(remote_bundle());
    update(&mut model, Msg::click(TriggerId(0)));
    model.session.escape_keydown = true;

    assert_eq!(update(&mut model, FormMsg::Submit.into()), None);
    assert!(!model.session.submission_in_progress);
}

// ========================================================================
// Blur
// ========================================================================

#[test]
fn test_blur_cancels_by_default() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    type_text(&mut ctl, "!!!");
    ctl.handle(InputMsg::Blur);

    assert!(ctl.phase().is_idle());
    assert_eq!(common::label(&ctl, 0), "Hello");
    assert!(ctl.host().sent.is_empty());
}

#[test]
fn test_blur_submits_when_configured() {
    let mut bundle = remote_bundle();
    bundle.submit_on_blur = true;
    let mut ctl = single(bundle);
    click(&mut ctl, 0);
    ctl.handle(InputMsg::Blur);

    assert_eq!(ctl.phase(), Phase::Submitting(TriggerId(0)));
    assert_eq!(ctl.host().sent.len(), 1);
}

#[test]
fn test_blur_after_control_mousedown_is_ignored() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    ctl.handle(FormMsg::ControlMousedown(Control::Submit));
    ctl.handle(InputMsg::Blur);

    assert_eq!(ctl.phase(), Phase::Editing(TriggerId(0)));
    assert!(ctl.model().session.button_mousedown);

    // The click that follows the mousedown goes through
    submit(&mut ctl);
    assert_eq!(ctl.host().sent.len(), 1);
}

#[test]
fn test_blur_during_submission_is_ignored() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    submit(&mut ctl);
    ctl.handle(InputMsg::Blur);
    assert_eq!(ctl.phase(), Phase::Submitting(TriggerId(0)));
}

// ========================================================================
// Text editing
// ========================================================================

#[test]
fn test_keys_edit_the_value() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    for key in [Key::Backspace, Key::Left, Key::Char('X'), Key::Home, Key::Delete] {
        ctl.handle(key_to_msg(key));
    }
    assert_eq!(ctl.model().editor.as_ref().unwrap().value(), "elXl");
}

#[test]
fn test_caret_moves_do_not_change_value() {
    let mut ctl = single(remote_bundle());
    click(&mut ctl, 0);
    ctl.handle(InputMsg::MoveCaret(CaretMove::Home));
    let editor = ctl.model().editor.as_ref().unwrap();
    assert_eq!(editor.field.caret(), 0);
    assert_eq!(editor.value(), "Hello");
}

#[test]
fn test_input_without_editor_is_ignored() {
    let mut model = test_model(remote_bundle());
    assert_eq!(update(&mut model, InputMsg::Escape.into()), None);
    assert_eq!(update(&mut model, InputMsg::Blur.into()), None);
    assert_eq!(update(&mut model, FormMsg::Submit.into()), None);
    assert!(model.session.is_clear());
}
