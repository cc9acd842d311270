//! Chaining target selectors
//!
//! A chaining target is one compound selector: an optional tag name followed
//! by any mix of `#id` and `.class` parts (`#next`, `.a.b`, `span.title`,
//! `span#next`). Selectors naming an id pick that one trigger directly; the
//! others pick every matching trigger in document order. Combinators,
//! attribute selectors and selector lists are not supported.

use std::fmt;

use super::bundle::BundleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    pub fn parse(raw: &str) -> Result<Self, BundleError> {
        let raw = raw.trim();
        let invalid = || BundleError::InvalidSelector(raw.to_string());

        let tag_len = raw.find(['#', '.']).unwrap_or(raw.len());
        let (tag, mut rest) = raw.split_at(tag_len);
        let tag = match tag {
            "" => None,
            "*" => Some("*".to_string()),
            t if is_ident(t) => Some(t.to_ascii_lowercase()),
            _ => return Err(invalid()),
        };

        let mut selector = Selector {
            tag,
            id: None,
            classes: Vec::new(),
        };
        while let Some(sigil) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if !is_ident(name) {
                return Err(invalid());
            }
            match sigil {
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                '.' => selector.classes.push(name.to_string()),
                _ => return Err(invalid()),
            }
            rest = &body[end..];
        }

        if selector.tag.is_none() && selector.id.is_none() && selector.classes.is_empty() {
            return Err(invalid());
        }
        Ok(selector)
    }

    /// Whether the selector names a single element by id
    pub fn is_id(&self) -> bool {
        self.id.is_some()
    }

    /// Check an element's tag, id and class list against this selector
    pub fn matches(&self, tag: &str, dom_id: Option<&str>, classes: &[String]) -> bool {
        let tag_ok = match self.tag.as_deref() {
            None | Some("*") => true,
            Some(wanted) => wanted.eq_ignore_ascii_case(tag),
        };
        let id_ok = match self.id.as_deref() {
            None => true,
            Some(id) => dom_id == Some(id),
        };
        tag_ok && id_ok && self.classes.iter().all(|w| classes.iter().any(|c| c == w))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{}", tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
