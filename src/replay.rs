//! Scripted replays
//!
//! A page fixture describes the triggers, a script describes what the user
//! and the server do. Replaying runs the script through a [`Controller`]
//! with a [`RecordingHost`] and records what happened after every step.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::WidgetConfig;
use crate::input::{key_to_msg, Key};
use crate::messages::{Control, FormMsg, InputMsg, Msg};
use crate::model::{Page, Phase, Session, TriggerId, TriggerSpec, TriggerState, WidgetModel};
use crate::runtime::{Controller, RecordingHost};
use crate::transport::{FormRequest, RequestId, TransportOutcome};
use crate::view::render_page;

/// Page fixture: triggers in document order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub triggers: Vec<TriggerSpec>,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page fixture {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse page fixture {}", path.display()))
    }

    pub fn build_page(&self) -> Result<Page> {
        Page::from_specs(&self.triggers).map_err(|(index, err)| {
            anyhow!("Trigger #{} ({:?}): {}", index, self.triggers[index].text, err)
        })
    }
}

/// Where a click lands
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ClickTarget {
    /// Position in document order
    Index(usize),
    /// Element id
    DomId(String),
}

/// How the server answers the oldest pending request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Success,
    Status(u16),
    Error(String),
}

impl Response {
    fn outcome(&self) -> TransportOutcome {
        match self {
            Response::Success => TransportOutcome::Success,
            Response::Status(code) => TransportOutcome::from_status(*code),
            Response::Error(reason) => TransportOutcome::network_error(reason.clone()),
        }
    }
}

/// One scripted event
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Click(ClickTarget),
    /// Type text at the caret
    Type(String),
    /// Replace the whole value
    Set(String),
    /// Named key (`Escape`, `Tab`, `Enter`, ...) or a single character
    Key(String),
    Backspace,
    Blur,
    /// Mousedown on `submit`, `cancel` or `delete`
    Mousedown(String),
    Submit,
    Cancel,
    Delete,
    /// Queue the answer for the next confirmation dialog
    Answer(bool),
    Respond(Response),
}

/// A replay script
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    /// One single-key map (or bare word) per step
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }
}

/// Label state after a step
#[derive(Debug, Clone, Serialize)]
pub struct LabelRecord {
    pub trigger: TriggerId,
    pub text: String,
    pub state: TriggerState,
}

/// A request the host was asked to send during a step
#[derive(Debug, Clone, Serialize)]
pub struct SentRecord {
    /// `None` for navigations
    pub id: Option<RequestId>,
    pub verb: &'static str,
    pub body: String,
    #[serde(flatten)]
    pub request: FormRequest,
}

/// Everything observable after one step
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub step: String,
    pub phase: Phase,
    pub session: Session,
    pub value: Option<String>,
    pub labels: Vec<LabelRecord>,
    pub sent: Vec<SentRecord>,
    pub prompts: Vec<String>,
}

/// Output of a whole replay
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub steps: Vec<StepRecord>,
    pub final_html: String,
}

/// Output format for a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
    Html,
}

impl Transcript {
    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Text => Ok(self.to_text()),
            Format::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize transcript")
            }
            Format::Html => Ok(self.final_html.clone()),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        for record in &self.steps {
            let _ = writeln!(out, "[{}] {} -> {:?}", record.index, record.step, record.phase);
            if let Some(value) = &record.value {
                let _ = writeln!(out, "    value: {:?}", value);
            }
            if !record.session.is_clear() {
                let _ = writeln!(out, "    session: {:?}", record.session);
            }
            for sent in &record.sent {
                let id = sent.id.map_or_else(|| "navigate".to_string(), |id| id.to_string());
                let _ = writeln!(out, "    {} {} {} {}", id, sent.verb, sent.request.path, sent.body);
            }
            for prompt in &record.prompts {
                let _ = writeln!(out, "    confirm: {:?}", prompt);
            }
            let labels: Vec<String> = record
                .labels
                .iter()
                .map(|l| match l.state {
                    TriggerState::Visible => format!("{:?}", l.text),
                    TriggerState::Hidden => format!("({:?})", l.text),
                    TriggerState::Deleted => "<deleted>".to_string(),
                })
                .collect();
            let _ = writeln!(out, "    labels: {}", labels.join(" "));
        }
        out
    }
}

fn resolve_click(page: &Page, target: &ClickTarget) -> Result<TriggerId> {
    match target {
        ClickTarget::Index(index) if *index < page.len() => Ok(TriggerId(*index)),
        ClickTarget::Index(index) => bail!("No trigger at index {}", index),
        ClickTarget::DomId(dom_id) => page
            .triggers()
            .iter()
            .find(|t| t.dom_id.as_deref() == Some(dom_id.as_str()))
            .map(|t| t.id)
            .ok_or_else(|| anyhow!("No trigger with id {:?}", dom_id)),
    }
}

fn control(name: &str) -> Result<Control> {
    match name {
        "submit" => Ok(Control::Submit),
        "cancel" => Ok(Control::Cancel),
        "delete" => Ok(Control::Delete),
        other => bail!("Unknown control {:?}", other),
    }
}

fn describe(step: &Step) -> String {
    match step {
        Step::Click(ClickTarget::Index(i)) => format!("click #{}", i),
        Step::Click(ClickTarget::DomId(id)) => format!("click {}", id),
        Step::Type(text) => format!("type {:?}", text),
        Step::Set(text) => format!("set {:?}", text),
        Step::Key(key) => format!("key {}", key),
        Step::Backspace => "backspace".to_string(),
        Step::Blur => "blur".to_string(),
        Step::Mousedown(name) => format!("mousedown {}", name),
        Step::Submit => "submit".to_string(),
        Step::Cancel => "cancel".to_string(),
        Step::Delete => "delete".to_string(),
        Step::Answer(answer) => format!("answer {}", answer),
        Step::Respond(Response::Success) => "respond success".to_string(),
        Step::Respond(Response::Status(code)) => format!("respond {}", code),
        Step::Respond(Response::Error(reason)) => format!("respond error {:?}", reason),
    }
}

/// Run `script` against a page built from `fixture`
pub fn replay(fixture: &Fixture, script: &Script, config: WidgetConfig) -> Result<Transcript> {
    let page = fixture.build_page()?;
    let mut ctl = Controller::new(WidgetModel::new(page, config), RecordingHost::new());
    let mut steps = Vec::with_capacity(script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        let sent_before = ctl.host().sent.len();
        let nav_before = ctl.host().navigations.len();
        let prompts_before = ctl.host().prompts.len();
        debug!(target: "replay", index, ?step, "step");

        let msg: Option<Msg> = match step {
            Step::Click(target) => Some(Msg::click(resolve_click(&ctl.model().page, target)?)),
            Step::Type(text) => Some(InputMsg::InsertText(text.clone()).into()),
            Step::Set(text) => Some(InputMsg::SetValue(text.clone()).into()),
            Step::Key(name) => {
                let key: Key = name.parse().map_err(|e: String| anyhow!(e))?;
                Some(key_to_msg(key))
            }
            Step::Backspace => Some(InputMsg::DeleteBackward.into()),
            Step::Blur => Some(InputMsg::Blur.into()),
            Step::Mousedown(name) => Some(FormMsg::ControlMousedown(control(name)?).into()),
            Step::Submit => Some(FormMsg::Submit.into()),
            Step::Cancel => Some(FormMsg::CancelClicked.into()),
            Step::Delete => Some(FormMsg::DeleteClicked.into()),
            Step::Answer(answer) => {
                ctl.host_mut().confirm_answers.push_back(*answer);
                None
            }
            Step::Respond(response) => {
                let request = ctl
                    .host_mut()
                    .take_pending()
                    .ok_or_else(|| anyhow!("Step {}: no request is waiting for a response", index))?;
                Some(Msg::completed(request, response.outcome()))
            }
        };
        if let Some(msg) = msg {
            ctl.handle(msg);
        }

        let host = ctl.host();
        let model = ctl.model();
        let mut sent: Vec<SentRecord> = host.sent[sent_before..]
            .iter()
            .map(|(id, request)| SentRecord {
                id: Some(*id),
                verb: request.http_verb(),
                body: request.encoded_body(),
                request: request.clone(),
            })
            .collect();
        sent.extend(host.navigations[nav_before..].iter().map(|request| SentRecord {
            id: None,
            verb: request.http_verb(),
            body: request.encoded_body(),
            request: request.clone(),
        }));

        steps.push(StepRecord {
            index,
            step: describe(step),
            phase: model.phase(),
            session: model.session,
            value: model.editor.as_ref().map(|e| e.value().to_string()),
            labels: model
                .page
                .triggers()
                .iter()
                .map(|t| LabelRecord {
                    trigger: t.id,
                    text: t.text.clone(),
                    state: t.state,
                })
                .collect(),
            sent,
            prompts: host.prompts[prompts_before..].to_vec(),
        });
    }

    let final_html = render_page(ctl.model()).to_html();
    info!(target: "replay", steps = steps.len(), phase = ?ctl.phase(), "replay finished");
    Ok(Transcript { steps, final_html })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
triggers:
  - id: first
    class: title
    text: Hello
    data:
      path: /posts/1
      attribute: title
      method: patch
      class: post
      remote: true
      tab-to-next: .title
  - id: second
    class: title
    text: Other
    data:
      path: /posts/2
      attribute: title
      method: patch
      class: post
      remote: true
"#;

    #[test]
    fn test_script_parses_all_step_shapes() {
        let script: Script = serde_yaml::from_str(
            r#"
steps:
  - click: first
  - click: 1
  - type: " World"
  - key: Enter
  - blur
  - mousedown: cancel
  - answer: false
  - respond: success
  - respond:
      status: 422
"#,
        )
        .unwrap();
        assert_eq!(script.steps[0], Step::Click(ClickTarget::DomId("first".into())));
        assert_eq!(script.steps[1], Step::Click(ClickTarget::Index(1)));
        assert_eq!(script.steps[4], Step::Blur);
        assert_eq!(script.steps[8], Step::Respond(Response::Status(422)));
    }

    #[test]
    fn test_replay_save_and_chain() {
        let fixture: Fixture = serde_yaml::from_str(PAGE).unwrap();
        let script: Script = serde_yaml::from_str(
            r#"
steps:
  - click: first
  - type: " World"
  - key: Enter
  - respond: success
"#,
        )
        .unwrap();
        let transcript = replay(&fixture, &script, WidgetConfig::default()).unwrap();
        let last = transcript.steps.last().unwrap();
        assert_eq!(last.labels[0].text, "Hello World");
        assert_eq!(last.phase, Phase::Editing(TriggerId(1)));
        assert_eq!(transcript.steps[2].sent.len(), 1);
        assert_eq!(transcript.steps[2].sent[0].verb, "PATCH");
    }

    #[test]
    fn test_respond_without_pending_request_fails() {
        let fixture: Fixture = serde_yaml::from_str(PAGE).unwrap();
        let script = Script {
            steps: vec![Step::Respond(Response::Success)],
        };
        assert!(replay(&fixture, &script, WidgetConfig::default()).is_err());
    }
}
