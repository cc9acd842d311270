//! Editor form markup
//!
//! Pure construction from an already-validated bundle; nothing here can fail.

use super::{Element, Node};
use crate::config::WidgetConfig;
use crate::model::{EditorInstance, TriggerBundle};
use crate::transport::{AUTHENTICITY_FIELD, METHOD_FIELD, UTF8_FIELD};

/// Class names hosts use to find the widget's parts
pub struct ElementClasses {
    pub trigger: &'static str,
    pub container: &'static str,
    pub form: &'static str,
    pub input: &'static str,
    pub delete_container: &'static str,
    pub delete: &'static str,
    pub buttons: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
}

pub const ELEMENT_CLASSES: ElementClasses = ElementClasses {
    trigger: "inplace",
    container: "inplace-container",
    form: "inplace-form",
    input: "inplace-input",
    delete_container: "inplace-delete-container",
    delete: "inplace-delete",
    buttons: "inplace-buttons",
    submit: "inplace-submit",
    cancel: "inplace-cancel",
};

fn hidden_input(name: &str, value: &str) -> Node {
    Element::new("input")
        .attr("name", name)
        .attr("type", "hidden")
        .attr("value", value)
        .into()
}

fn with_remote(el: Element, bundle: &TriggerBundle, content_type: Option<&String>) -> Element {
    if !bundle.remote {
        return el;
    }
    el.attr("data-remote", "true")
        .attr_opt("data-type", content_type.cloned())
}

fn hidden_fields(bundle: &TriggerBundle, config: &WidgetConfig) -> Element {
    let mut fields = vec![
        hidden_input(UTF8_FIELD.0, UTF8_FIELD.1),
        hidden_input(METHOD_FIELD, bundle.method.as_str()),
    ];
    if !bundle.remote {
        if let Some(token) = &config.csrf_token {
            fields.push(hidden_input(AUTHENTICITY_FIELD, token));
        }
    }
    Element::new("div")
        .attr("style", "display:none;")
        .children(fields)
}

fn text_input(bundle: &TriggerBundle, editor: &EditorInstance, config: &WidgetConfig) -> Element {
    let names = bundle.field_names();
    Element::new("input")
        .attr("type", "text")
        .class(format!("{} {}", config.input_class, ELEMENT_CLASSES.input))
        .attr("id", names.id)
        .attr("name", names.name)
        .attr("value", editor.value())
        .attr("data-original-value", editor.original_value())
        .attr_opt(
            "data-tab-to-next-selector",
            bundle.tab_to_next.as_ref().map(ToString::to_string),
        )
        .attr_opt("data-submit-on-blur", bundle.submit_on_blur.then_some("true"))
}

fn delete_control(bundle: &TriggerBundle, config: &WidgetConfig) -> Option<Element> {
    let action = bundle.delete.as_ref()?;
    let link = Element::new("a")
        .attr("href", action.path.clone())
        .class(ELEMENT_CLASSES.delete)
        .attr("data-method", "delete")
        .attr_opt("data-confirm", action.confirmation.clone());
    let link = with_remote(link, bundle, action.content_type.as_ref())
        .attr("rel", "nofollow")
        .child(Element::new("i").class(config.delete_icon.clone()));
    Some(
        Element::new("span")
            .class(ELEMENT_CLASSES.delete_container)
            .child(link),
    )
}

fn buttons(bundle: &TriggerBundle, config: &WidgetConfig) -> Element {
    let wrapper = Element::new("div").class(ELEMENT_CLASSES.buttons);
    if bundle.buttonless {
        return wrapper;
    }
    wrapper
        .child(
            Element::new("button")
                .attr("type", "submit")
                .class(ELEMENT_CLASSES.submit)
                .child(Element::new("i").class("icon").text(config.submit_icon.clone())),
        )
        .child(
            Element::new("button")
                .attr("type", "button")
                .class(ELEMENT_CLASSES.cancel)
                .child(Element::new("i").class("icon").text(config.cancel_icon.clone())),
        )
}

/// The editor that sits right after its trigger while editing
pub fn editor_form(bundle: &TriggerBundle, editor: &EditorInstance, config: &WidgetConfig) -> Node {
    let mut input_container = Element::new("div")
        .class("inplace-input-container")
        .child(text_input(bundle, editor, config));
    if let Some(delete) = delete_control(bundle, config) {
        input_container = input_container.child(delete);
    }

    let form = Element::new("form")
        .attr("accept-charset", "UTF-8")
        .attr("action", bundle.path.clone());
    let form = with_remote(form, bundle, bundle.content_type.as_ref())
        .class(ELEMENT_CLASSES.form)
        .attr("method", "post")
        .child(hidden_fields(bundle, config))
        .child(
            Element::new("div")
                .class("inplace-input-and-button-wrapper")
                .child(input_container)
                .child(buttons(bundle, config)),
        );

    Element::new("span")
        .class(ELEMENT_CLASSES.container)
        .child(form)
        .into()
}
