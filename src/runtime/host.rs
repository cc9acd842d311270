//! The side of the page the widget cannot reach on its own

use std::collections::VecDeque;

use crate::model::WidgetModel;
use crate::transport::{FormRequest, RequestId};
use crate::view::render_page;

/// Everything the controller asks of its surroundings.
///
/// `send` is fire-and-forget: the host reports back later through
/// [`Controller::complete`](super::Controller::complete).
pub trait Host {
    /// The model changed; re-render whatever represents it
    fn redraw(&mut self, model: &WidgetModel);

    /// Put focus in the editor input with the caret at `caret`
    fn focus_input(&mut self, field_id: &str, caret: usize);

    /// Blocking yes/no dialog
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Start an asynchronous request
    fn send(&mut self, id: RequestId, request: FormRequest);

    /// Submit by navigating away from the page
    fn navigate(&mut self, request: FormRequest);
}

/// A host that writes everything down, for replays and tests.
///
/// Confirmation answers are taken from a queue; an empty queue answers yes.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Every request ever sent, in order
    pub sent: Vec<(RequestId, FormRequest)>,
    /// Requests not yet completed
    pub pending: VecDeque<RequestId>,
    pub navigations: Vec<FormRequest>,
    pub confirm_answers: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub focus_log: Vec<(String, usize)>,
    pub redraws: usize,
    /// Markup from the most recent redraw
    pub last_html: Option<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for upcoming confirmation dialogs
    pub fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            confirm_answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Oldest request still waiting for a response
    pub fn take_pending(&mut self) -> Option<RequestId> {
        self.pending.pop_front()
    }

    pub fn last_sent(&self) -> Option<&FormRequest> {
        self.sent.last().map(|(_, request)| request)
    }
}

impl Host for RecordingHost {
    fn redraw(&mut self, model: &WidgetModel) {
        self.redraws += 1;
        self.last_html = Some(render_page(model).to_html());
    }

    fn focus_input(&mut self, field_id: &str, caret: usize) {
        self.focus_log.push((field_id.to_string(), caret));
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirm_answers.pop_front().unwrap_or(true)
    }

    fn send(&mut self, id: RequestId, request: FormRequest) {
        self.pending.push_back(id);
        self.sent.push((id, request));
    }

    fn navigate(&mut self, request: FormRequest) {
        self.navigations.push(request);
    }
}
