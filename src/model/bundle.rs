//! Trigger configuration bundle
//!
//! A trigger carries its configuration as `data-*` attributes. Raw attribute
//! strings are coerced the way a page's dataset reader does it: `"true"` and
//! `"false"` become flags, integers become numbers, everything else stays text.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::selector::Selector;

/// Errors raised while reading a trigger's configuration bundle
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BundleError {
    /// A required attribute is absent or empty
    #[error("Missing required attribute: data-{0}")]
    Missing(&'static str),

    /// The form method is not one a form can simulate
    #[error("Unsupported form method: {0}")]
    InvalidMethod(String),

    /// `data-deletable` is set but there is nowhere to send the delete
    #[error("Deletable trigger has no data-deletable-path")]
    MissingDeletablePath,

    /// `data-tab-to-next` is not a single compound selector
    #[error("Invalid tab-to-next selector: {0:?}")]
    InvalidSelector(String),

    /// A flag attribute holds something other than a boolean
    #[error("Expected a boolean for data-{key}, got {value:?}")]
    NotBoolean { key: &'static str, value: String },
}

/// A single coerced `data-*` value
///
/// Deserialized strings are coerced with [`DataValue::from_attr`], so a
/// fixture's `"true"` reads the same as an attribute's `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "RawDataValue")]
pub enum DataValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

/// Value as written in a fixture, before string coercion
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDataValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl From<RawDataValue> for DataValue {
    fn from(raw: RawDataValue) -> Self {
        match raw {
            RawDataValue::Flag(b) => DataValue::Flag(b),
            RawDataValue::Number(n) => DataValue::Number(n),
            RawDataValue::Text(s) => DataValue::from_attr(&s),
        }
    }
}

impl DataValue {
    /// Coerce a raw attribute string
    pub fn from_attr(raw: &str) -> Self {
        match raw {
            "true" => DataValue::Flag(true),
            "false" => DataValue::Flag(false),
            _ => match raw.parse::<i64>() {
                // Keep leading zeros and explicit signs as text, like a dataset reader
                Ok(n) if n.to_string() == raw => DataValue::Number(n),
                _ => DataValue::Text(raw.to_string()),
            },
        }
    }

    /// Text form of the value, used for string-typed attributes
    pub fn as_text(&self) -> String {
        match self {
            DataValue::Flag(b) => b.to_string(),
            DataValue::Number(n) => n.to_string(),
            DataValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for DataValue {
    fn from(raw: &str) -> Self {
        DataValue::from_attr(raw)
    }
}

impl From<bool> for DataValue {
    fn from(flag: bool) -> Self {
        DataValue::Flag(flag)
    }
}

/// Attribute name → coerced value, keyed without the `data-` prefix
pub type DataAttributes = BTreeMap<String, DataValue>;

/// HTTP verb a form submission simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Post,
    Put,
    Patch,
    Delete,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Post => "post",
            FormMethod::Put => "put",
            FormMethod::Patch => "patch",
            FormMethod::Delete => "delete",
        }
    }
}

impl FromStr for FormMethod {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "post" => Ok(FormMethod::Post),
            "put" => Ok(FormMethod::Put),
            "patch" => Ok(FormMethod::Patch),
            "delete" => Ok(FormMethod::Delete),
            _ => Err(BundleError::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delete control configuration, present only for deletable triggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAction {
    /// Where the delete request goes
    pub path: String,
    /// Content-type hint for remote deletes
    pub content_type: Option<String>,
    /// Prompt shown before the delete fires; `None` deletes without asking
    pub confirmation: Option<String>,
}

/// Stable form field identifiers derived from class and attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    /// `{class}_{attribute}`
    pub id: String,
    /// `{class}[{attribute}]`
    pub name: String,
}

/// Read-only configuration attached to a trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerBundle {
    /// Submission URL
    pub path: String,
    /// Backing field name
    pub attribute: String,
    /// Simulated HTTP verb
    pub method: FormMethod,
    /// Logical entity name (prefix for field id and name)
    pub class: String,
    /// Asynchronous submission instead of page navigation
    pub remote: bool,
    /// Content-type hint, only kept when `remote` is set
    pub content_type: Option<String>,
    /// Delete control, if any
    pub delete: Option<DeleteAction>,
    /// Next trigger to open after a successful save
    pub tab_to_next: Option<Selector>,
    /// Losing focus submits instead of cancelling
    pub submit_on_blur: bool,
    /// No submit/cancel buttons
    pub buttonless: bool,
}

impl TriggerBundle {
    /// Minimal bundle with every optional behavior switched off
    pub fn new(
        path: impl Into<String>,
        attribute: impl Into<String>,
        method: FormMethod,
        class: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            attribute: attribute.into(),
            method,
            class: class.into(),
            remote: false,
            content_type: None,
            delete: None,
            tab_to_next: None,
            submit_on_blur: false,
            buttonless: false,
        }
    }

    /// Parse a bundle from a trigger's data attributes
    pub fn from_data(data: &DataAttributes) -> Result<Self, BundleError> {
        let path = required(data, "path")?;
        let attribute = required(data, "attribute")?;
        let method = required(data, "method")?.parse::<FormMethod>()?;
        let class = required(data, "class")?;

        let remote = flag(data, "remote")?;
        let content_type = if remote { optional(data, "type") } else { None };

        let delete = match data.get("deletable") {
            None | Some(DataValue::Flag(false)) => None,
            Some(value) => {
                let confirmation = match value {
                    DataValue::Flag(_) => None,
                    other => Some(other.as_text()).filter(|s| !s.is_empty()),
                };
                let path = optional(data, "deletable-path").ok_or(BundleError::MissingDeletablePath)?;
                let content_type = if remote {
                    optional(data, "deletable-type")
                } else {
                    None
                };
                Some(DeleteAction {
                    path,
                    content_type,
                    confirmation,
                })
            }
        };

        let tab_to_next = match data.get("tab-to-next") {
            None | Some(DataValue::Flag(false)) => None,
            Some(DataValue::Text(raw)) => Some(Selector::parse(raw)?),
            Some(other) => return Err(BundleError::InvalidSelector(other.as_text())),
        };

        Ok(Self {
            path,
            attribute,
            method,
            class,
            remote,
            content_type,
            delete,
            tab_to_next,
            submit_on_blur: flag(data, "submit-on-blur")?,
            buttonless: flag(data, "buttonless")?,
        })
    }

    /// Field id and name the server side expects
    pub fn field_names(&self) -> FieldNames {
        FieldNames {
            id: format!("{}_{}", self.class, self.attribute),
            name: format!("{}[{}]", self.class, self.attribute),
        }
    }
}

fn optional(data: &DataAttributes, key: &str) -> Option<String> {
    data.get(key).map(DataValue::as_text).filter(|s| !s.is_empty())
}

fn required(data: &DataAttributes, key: &'static str) -> Result<String, BundleError> {
    match data.get(key) {
        Some(DataValue::Flag(_)) | None => Err(BundleError::Missing(key)),
        Some(value) => Some(value.as_text())
            .filter(|s| !s.is_empty())
            .ok_or(BundleError::Missing(key)),
    }
}

fn flag(data: &DataAttributes, key: &'static str) -> Result<bool, BundleError> {
    match data.get(key) {
        None => Ok(false),
        Some(DataValue::Flag(b)) => Ok(*b),
        Some(DataValue::Number(n)) => Ok(*n == 1),
        Some(DataValue::Text(s)) if s.is_empty() => Ok(false),
        Some(DataValue::Text(s)) => Err(BundleError::NotBoolean {
            key,
            value: s.clone(),
        }),
    }
}
