//! Replay tests
//!
//! Fixture and script files on disk, run end to end.

use std::path::PathBuf;

use inplace::config::WidgetConfig;
use inplace::model::{Phase, TriggerId, TriggerState};
use inplace::replay::{replay, Fixture, Format, Script};
use tempfile::TempDir;

const PAGE: &str = r#"
triggers:
  - id: post-title
    class: field
    text: Hello
    data:
      path: /posts/1
      attribute: title
      method: patch
      class: post
      remote: true
      type: json
      deletable: "Delete this post?"
      deletable-path: /posts/1
      deletable-type: json
      tab-to-next: .field
  - id: post-body
    class: field
    text: Body
    data:
      path: /posts/1
      attribute: body
      method: patch
      class: post
      remote: true
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn run(script: &str) -> inplace::replay::Transcript {
    let dir = TempDir::new().unwrap();
    let fixture = Fixture::load(&write(&dir, "page.yaml", PAGE)).unwrap();
    let script = Script::load(&write(&dir, "script.yaml", script)).unwrap();
    replay(&fixture, &script, WidgetConfig::default()).unwrap()
}

#[test]
fn test_edit_save_and_chain() {
    let transcript = run(r#"
steps:
  - click: post-title
  - type: " World"
  - key: Enter
  - respond: success
"#);
    let last = transcript.steps.last().unwrap();
    assert_eq!(last.phase, Phase::Editing(TriggerId(1)));
    assert_eq!(last.labels[0].text, "Hello World");
    assert_eq!(last.labels[1].state, TriggerState::Hidden);
    assert!(transcript.final_html.contains(r#"id="post_body""#));
}

#[test]
fn test_declined_delete_then_failure() {
    let transcript = run(r#"
steps:
  - click: 0
  - answer: false
  - mousedown: delete
  - blur
  - delete
  - type: "!"
  - key: Tab
  - respond:
      status: 503
"#);
    assert_eq!(transcript.steps[4].prompts, vec!["Delete this post?".to_string()]);
    assert!(transcript.steps[4].sent.is_empty());
    assert_eq!(transcript.steps[6].sent[0].body, "utf8=%E2%9C%93&_method=patch&post%5Btitle%5D=Hello%21");

    let last = transcript.steps.last().unwrap();
    assert_eq!(last.value.as_deref(), Some("Hello"));
    assert!(last.session.is_clear());
}

#[test]
fn test_json_output_is_valid() {
    let transcript = run(r#"
steps:
  - click: post-body
  - key: Escape
"#);
    let json = transcript.render(Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["steps"].as_array().unwrap().len(), 2);
    assert_eq!(value["steps"][1]["phase"]["phase"], "idle");
}

#[test]
fn test_text_output_mentions_each_step() {
    let transcript = run(r#"
steps:
  - click: post-body
  - set: Changed
  - cancel
"#);
    let text = transcript.render(Format::Text).unwrap();
    assert!(text.contains("[0] click post-body"));
    assert!(text.contains("[1] set \"Changed\""));
    assert!(text.contains("[2] cancel -> Idle"));
}

#[test]
fn test_quoted_flags_and_tag_selector_load() {
    let dir = TempDir::new().unwrap();
    let page = r#"
triggers:
  - id: first
    class: field
    text: One
    data:
      path: /rows/1
      attribute: name
      method: patch
      class: row
      remote: "true"
      buttonless: "false"
      submit-on-blur: "1"
      tab-to-next: span.field
  - id: second
    class: field
    text: Two
    data:
      path: /rows/2
      attribute: name
      method: patch
      class: row
      remote: "true"
"#;
    let fixture = Fixture::load(&write(&dir, "page.yaml", page)).unwrap();
    let built = fixture.build_page().unwrap();
    let bundle = &built.triggers()[0].bundle;
    assert!(bundle.remote);
    assert!(bundle.submit_on_blur);
    assert!(!bundle.buttonless);

    let script = Script::load(&write(
        &dir,
        "script.yaml",
        "steps:\n  - click: first\n  - blur\n  - respond: success\n",
    ))
    .unwrap();
    let transcript = replay(&fixture, &script, WidgetConfig::default()).unwrap();
    assert_eq!(transcript.steps[1].sent.len(), 1);
    assert_eq!(
        transcript.steps.last().unwrap().phase,
        Phase::Editing(TriggerId(1))
    );
}

#[test]
fn test_invalid_fixture_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "page.yaml",
        "triggers:\n  - text: Broken\n    data:\n      path: /x\n",
    );
    let fixture = Fixture::load(&path).unwrap();
    let err = fixture.build_page().unwrap_err().to_string();
    assert!(err.contains("Broken"), "{}", err);
}

#[test]
fn test_missing_script_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(Script::load(&dir.path().join("nope.yaml")).is_err());
}
