//! View construction
//!
//! Builds a virtual node tree from the model. The state machine never looks
//! at this; hosts that render to a real document diff or serialize it.

mod form;

pub use form::{editor_form, ELEMENT_CLASSES};

use std::fmt::Write as _;

use crate::model::{Trigger, TriggerState, WidgetModel};

/// A node in the virtual tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add an attribute only when `value` is present
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    fn is_void(&self) -> bool {
        matches!(self.tag, "input" | "br" | "img" | "meta")
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// First element (depth-first, self included) carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(el) => {
                if el.has_class(class) {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find_by_class(class))
            }
        }
    }

    /// Serialize to HTML, escaping text and attribute values
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                for (name, value) in &el.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
                }
                out.push('>');
                if el.is_void() {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

/// Escape a value for a double-quoted attribute
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape text content
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

fn trigger_node(trigger: &Trigger) -> Element {
    let mut classes = vec![ELEMENT_CLASSES.trigger.to_string()];
    classes.extend(trigger.classes.iter().cloned());
    let el = Element::new(Trigger::TAG)
        .attr_opt("id", trigger.dom_id.clone())
        .class(classes.join(" "));
    let el = if trigger.is_visible() {
        el
    } else {
        el.attr("style", "display:none;")
    };
    el.text(trigger.text.clone())
}

/// The whole page: triggers in order, the open editor right after its
/// trigger. Deleted triggers are left out.
pub fn render_page(model: &WidgetModel) -> Node {
    let mut nodes = Vec::new();
    for trigger in model.page.triggers() {
        if trigger.state == TriggerState::Deleted {
            continue;
        }
        nodes.push(trigger_node(trigger).into());
        if let Some(editor) = model.editor.as_ref().filter(|e| e.trigger == trigger.id) {
            nodes.push(editor_form(&trigger.bundle, editor, &model.config));
        }
    }
    Element::new("div").class("page").children(nodes).into()
}
