//! Runtime - drives the update loop and hands commands to the host
//!
//! - `host` - the [`Host`] trait and a recording implementation

mod host;

pub use host::{Host, RecordingHost};

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::commands::Cmd;
use crate::messages::{FormMsg, Msg};
use crate::model::{Phase, WidgetModel};
use crate::transport::{RequestId, TransportOutcome};
use crate::update::update;

/// Owns the model and feeds it messages one at a time.
///
/// Commands that produce follow-up messages (chaining, dialog answers)
/// queue them; `handle` returns once the queue is drained, so every event
/// is fully processed before the next one is looked at.
pub struct Controller<H: Host> {
    model: WidgetModel,
    host: H,
    queue: VecDeque<Msg>,
}

impl<H: Host> Controller<H> {
    pub fn new(model: WidgetModel, host: H) -> Self {
        Self {
            model,
            host,
            queue: VecDeque::new(),
        }
    }

    pub fn model(&self) -> &WidgetModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn phase(&self) -> Phase {
        self.model.phase()
    }

    pub fn into_parts(self) -> (WidgetModel, H) {
        (self.model, self.host)
    }

    /// Process `msg` and everything it causes
    pub fn handle(&mut self, msg: impl Into<Msg>) -> Phase {
        self.queue.push_back(msg.into());
        while let Some(msg) = self.queue.pop_front() {
            if let Some(cmd) = update(&mut self.model, msg) {
                // One redraw per update, before focus moves into the new markup
                if cmd.needs_redraw() {
                    self.host.redraw(&self.model);
                }
                self.process_cmd(cmd);
            }
        }
        self.model.phase()
    }

    /// Report the outcome of a request previously handed to `Host::send`
    pub fn complete(&mut self, request: RequestId, outcome: TransportOutcome) -> Phase {
        self.handle(Msg::completed(request, outcome))
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::FocusInput { field_id, caret } => {
                self.host.focus_input(&field_id, caret);
            }
            Cmd::Confirm { prompt } => {
                let answer = self.host.confirm(&prompt);
                debug!(target: "runtime", %prompt, answer, "confirmation answered");
                self.queue
                    .push_back(Msg::Form(FormMsg::ConfirmAnswered(answer)));
            }
            Cmd::SendRequest { id, request } => {
                trace!(target: "runtime", %id, body = %request.encoded_body(), "send");
                self.host.send(id, request);
            }
            Cmd::Navigate { request } => self.host.navigate(request),
            Cmd::Activate(trigger) => self.queue.push_back(Msg::click(trigger)),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}
