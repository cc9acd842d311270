//! The page the widget lives on: triggers in document order

use serde::{Deserialize, Serialize};

use super::bundle::{BundleError, DataAttributes, TriggerBundle};
use super::selector::Selector;

/// Stable handle for a trigger (its position in document order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriggerId(pub usize);

/// Visibility of a trigger label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerState {
    /// Label shown, no editor attached
    #[default]
    Visible,
    /// Label hidden behind its open editor
    Hidden,
    /// The backing record was deleted; the page collaborator owns removal
    Deleted,
}

/// A clickable label that opens an editor
#[derive(Debug, Clone)]
pub struct Trigger {
    pub id: TriggerId,
    /// Element id attribute (target for `#id` chaining)
    pub dom_id: Option<String>,
    /// Element class list (target for `.class` chaining)
    pub classes: Vec<String>,
    /// Displayed text, i.e. the current value
    pub text: String,
    pub state: TriggerState,
    pub bundle: TriggerBundle,
}

impl Trigger {
    /// Element every trigger label is rendered as
    pub const TAG: &'static str = "span";

    pub fn is_visible(&self) -> bool {
        self.state == TriggerState::Visible
    }

    pub fn is_deleted(&self) -> bool {
        self.state == TriggerState::Deleted
    }

    fn matches(&self, selector: &Selector) -> bool {
        selector.matches(Self::TAG, self.dom_id.as_deref(), &self.classes)
    }
}

/// Declarative description of a trigger, as found in page fixtures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerSpec {
    #[serde(default)]
    pub id: Option<String>,
    /// Space separated class list
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub data: DataAttributes,
}

/// Ordered collection of triggers
#[derive(Debug, Clone, Default)]
pub struct Page {
    triggers: Vec<Trigger>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a page from fixture specs, failing on the first invalid bundle
    pub fn from_specs(specs: &[TriggerSpec]) -> Result<Self, (usize, BundleError)> {
        let mut page = Page::new();
        for (index, spec) in specs.iter().enumerate() {
            let bundle = TriggerBundle::from_data(&spec.data).map_err(|e| (index, e))?;
            page.push(
                spec.id.clone(),
                spec.class.split_whitespace().map(str::to_string).collect(),
                spec.text.clone(),
                bundle,
            );
        }
        Ok(page)
    }

    /// Append a trigger at the end of the document
    pub fn push(
        &mut self,
        dom_id: Option<String>,
        classes: Vec<String>,
        text: impl Into<String>,
        bundle: TriggerBundle,
    ) -> TriggerId {
        let id = TriggerId(self.triggers.len());
        self.triggers.push(Trigger {
            id,
            dom_id,
            classes,
            text: text.into(),
            state: TriggerState::Visible,
            bundle,
        });
        id
    }

    pub fn get(&self, id: TriggerId) -> Option<&Trigger> {
        self.triggers.get(id.0)
    }

    pub fn get_mut(&mut self, id: TriggerId) -> Option<&mut Trigger> {
        self.triggers.get_mut(id.0)
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }


    /// Live triggers matching a selector, in document order
    pub fn select(&self, selector: &Selector) -> Vec<TriggerId> {
        self.triggers
            .iter()
            .filter(|t| !t.is_deleted() && t.matches(selector))
            .map(|t| t.id)
            .collect()
    }

    /// Resolve the chaining target for `current`.
    ///
    /// A selector naming an id picks its first match directly. Any other
    /// selector picks the match right after `current`; when `current` itself
    /// doesn't match, the first match is picked. Running off the end yields
    /// `None`.
    pub fn chain_target(&self, selector: &Selector, current: TriggerId) -> Option<TriggerId> {
        let matches = self.select(selector);
        if selector.is_id() {
            return matches.first().copied();
        }
        let next = matches
            .iter()
            .position(|&id| id == current)
            .map_or(0, |ordinal| ordinal + 1);
        matches.get(next).copied()
    }
}
