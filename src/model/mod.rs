//! Widget model - the complete state of the page and its editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod bundle;
pub mod editor;
pub mod field;
pub mod page;
pub mod selector;

pub use bundle::{
    BundleError, DataAttributes, DataValue, DeleteAction, FieldNames, FormMethod, TriggerBundle,
};
pub use editor::{EditorInstance, PendingSubmission, Phase, Session};
pub use field::TextField;
pub use page::{Page, Trigger, TriggerId, TriggerSpec, TriggerState};
pub use selector::Selector;

use crate::config::WidgetConfig;
use crate::transport::RequestId;

/// The complete widget model
#[derive(Debug)]
pub struct WidgetModel {
    /// Triggers in document order
    pub page: Page,
    /// The single editor slot; at most one editor is open page-wide
    pub editor: Option<EditorInstance>,
    /// Interaction guard flags
    pub session: Session,
    /// Icons and authenticity token
    pub config: WidgetConfig,
    next_request: u64,
}

impl WidgetModel {
    pub fn new(page: Page, config: WidgetConfig) -> Self {
        Self {
            page,
            editor: None,
            session: Session::default(),
            config,
            next_request: 1,
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.editor {
            None => Phase::Idle,
            Some(editor) if self.session.submission_in_progress => {
                Phase::Submitting(editor.trigger)
            }
            Some(editor) => Phase::Editing(editor.trigger),
        }
    }

    pub fn has_open_editor(&self) -> bool {
        self.editor.is_some()
    }

    /// Trigger owning the open editor
    pub fn editor_trigger(&self) -> Option<&Trigger> {
        self.editor
            .as_ref()
            .and_then(|editor| self.page.get(editor.trigger))
    }

    /// Remove the editor if one is attached. Removing an absent editor is a
    /// successful no-op.
    pub fn ensure_editor_absent(&mut self) -> Option<EditorInstance> {
        self.editor.take()
    }

    pub fn next_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        id
    }
}
