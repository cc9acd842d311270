//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use inplace::config::WidgetConfig;
use inplace::messages::{FormMsg, InputMsg, Msg};
use inplace::model::{
    DeleteAction, FormMethod, Page, Selector, TriggerBundle, TriggerId, WidgetModel,
};
use inplace::runtime::{Controller, RecordingHost};
use inplace::transport::{RequestId, TransportOutcome};

/// Remote `post[title]` bundle
pub fn remote_bundle() -> TriggerBundle {
    let mut bundle = TriggerBundle::new("/posts/1", "title", FormMethod::Patch, "post");
    bundle.remote = true;
    bundle.content_type = Some("json".to_string());
    bundle
}

pub fn deletable(mut bundle: TriggerBundle, confirmation: Option<&str>) -> TriggerBundle {
    bundle.delete = Some(DeleteAction {
        path: "/posts/1".to_string(),
        content_type: Some("json".to_string()),
        confirmation: confirmation.map(str::to_string),
    });
    bundle
}

pub fn chained(mut bundle: TriggerBundle, selector: &str) -> TriggerBundle {
    bundle.tab_to_next = Some(Selector::parse(selector).unwrap());
    bundle
}

/// Page with one trigger per `(dom id, class list, text)` entry, all
/// sharing `bundle`
pub fn page_of(entries: &[(&str, &str, &str)], bundle: &TriggerBundle) -> Page {
    let mut page = Page::new();
    for (id, classes, text) in entries {
        page.push(
            Some(id.to_string()),
            classes.split_whitespace().map(str::to_string).collect(),
            *text,
            bundle.clone(),
        );
    }
    page
}

/// Single-trigger model showing "Hello"
pub fn test_model(bundle: TriggerBundle) -> WidgetModel {
    WidgetModel::new(
        page_of(&[("title", "", "Hello")], &bundle),
        WidgetConfig::default(),
    )
}

pub fn controller(model: WidgetModel) -> Controller<RecordingHost> {
    Controller::new(model, RecordingHost::new())
}

pub fn single(bundle: TriggerBundle) -> Controller<RecordingHost> {
    controller(test_model(bundle))
}

/// Single-trigger controller whose host answers confirmations from `answers`
pub fn answering(bundle: TriggerBundle, answers: &[bool]) -> Controller<RecordingHost> {
    Controller::new(
        test_model(bundle),
        RecordingHost::with_answers(answers.iter().copied()),
    )
}

pub fn click(ctl: &mut Controller<RecordingHost>, index: usize) {
    ctl.handle(Msg::click(TriggerId(index)));
}

pub fn type_text(ctl: &mut Controller<RecordingHost>, text: &str) {
    ctl.handle(InputMsg::InsertText(text.to_string()));
}

pub fn submit(ctl: &mut Controller<RecordingHost>) {
    ctl.handle(FormMsg::Submit);
}

/// Complete the oldest in-flight request
pub fn respond(ctl: &mut Controller<RecordingHost>, outcome: TransportOutcome) -> RequestId {
    let request = ctl
        .host_mut()
        .take_pending()
        .expect("a request should be in flight");
    ctl.complete(request, outcome);
    request
}

pub fn label(ctl: &Controller<RecordingHost>, index: usize) -> String {
    ctl.model().page.triggers()[index].text.clone()
}

pub fn server_error() -> TransportOutcome {
    TransportOutcome::from_status(500)
}
