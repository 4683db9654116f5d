//! Mock-up element types
//!
//! This module provides `MockElement`, the placeholder created for each
//! role occurrence during parsing and consumed once by the rewrite pass,
//! plus the `ElementKind` table mapping each variant to its token, display
//! label and HTML renderer.

use crate::html::{escape_attr, escape_text};
use crate::role::split_role_text;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

lazy_static! {
    /// Matches the `required` token plus any trailing comma/whitespace
    static ref REQUIRED_TOKEN: Regex = Regex::new(r"(?i)required(,\s*)*").unwrap();
}

/// Kind of mock-up element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    /// Push button
    Button,
    /// Single-line text input
    Text,
    /// Multi-line text input
    Textarea,
    /// Dropdown selection
    Select,
    /// Radio button group
    Radio,
    /// Checkbox group
    Checkbox,
}

impl ElementKind {
    /// All element kinds, in role-token order
    pub const ALL: [ElementKind; 6] = [
        ElementKind::Button,
        ElementKind::Text,
        ElementKind::Textarea,
        ElementKind::Select,
        ElementKind::Radio,
        ElementKind::Checkbox,
    ];

    /// Look up a kind from its role token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "button" => Some(ElementKind::Button),
            "text" => Some(ElementKind::Text),
            "textarea" => Some(ElementKind::Textarea),
            "select" => Some(ElementKind::Select),
            "radio" => Some(ElementKind::Radio),
            "checkbox" => Some(ElementKind::Checkbox),
            _ => None,
        }
    }

    /// Get the role token for this kind
    pub fn token(&self) -> &'static str {
        match self {
            ElementKind::Button => "button",
            ElementKind::Text => "text",
            ElementKind::Textarea => "textarea",
            ElementKind::Select => "select",
            ElementKind::Radio => "radio",
            ElementKind::Checkbox => "checkbox",
        }
    }

    /// Get the human-readable label used in description tables
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Button => "Button",
            ElementKind::Text => "Text",
            ElementKind::Textarea => "Text (multiline)",
            ElementKind::Select => "Dropdown",
            ElementKind::Radio => "Radio",
            ElementKind::Checkbox => "Checkbox",
        }
    }

    /// Whether this kind carries a comma-separated choice list as title
    pub fn is_multi_choice(&self) -> bool {
        matches!(
            self,
            ElementKind::Select | ElementKind::Radio | ElementKind::Checkbox
        )
    }
}

/// A mock-up element placeholder
///
/// Created once per role occurrence during parsing, consumed once by the
/// rewrite pass, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockElement {
    /// Element kind
    pub kind: ElementKind,
    /// Raw display title (may be empty; comma-separated choices for
    /// multi-choice kinds)
    pub title: String,
    /// Raw option text, e.g. `required, some note`
    pub options: String,
}

impl MockElement {
    /// Create an element directly from its parts
    pub fn new(kind: ElementKind, title: impl Into<String>, options: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            options: options.into(),
        }
    }

    /// Create an element from raw role text.
    ///
    /// Splits the explicit-title form `Title <options>` and normalizes
    /// the `-`/`_` title sentinels to an empty title.
    pub fn from_role_text(kind: ElementKind, text: &str) -> Self {
        let (title, options) = split_role_text(text);
        Self {
            kind,
            title,
            options,
        }
    }

    /// Whether the option text marks this element as required.
    ///
    /// Substring match on the token `required`, case-insensitive,
    /// anywhere in the option text.
    pub fn is_required(&self) -> bool {
        REQUIRED_TOKEN.is_match(&self.options)
    }

    /// Derived description: the option text with the `required` token and
    /// any trailing comma/whitespace removed. Multi-choice kinds prefix
    /// the literal choice list.
    pub fn description(&self) -> String {
        let base = REQUIRED_TOKEN.replace_all(&self.options, "").into_owned();

        if self.kind.is_multi_choice() {
            let choices = format!("Choices: {}", self.title);
            if base.is_empty() {
                choices
            } else {
                format!("{}, {}", choices, base)
            }
        } else {
            base
        }
    }

    /// The comma-split choice labels of a multi-choice title
    fn choices(&self) -> Vec<&str> {
        self.title.split(',').collect()
    }

    /// Render this element to its HTML fragment
    pub fn to_html(&self) -> String {
        match self.kind {
            ElementKind::Button => {
                format!("<button>{}</button>", escape_text(&self.title))
            }
            ElementKind::Text => {
                format!(
                    r#"<input type="text" value="{}" size="40" />"#,
                    escape_attr(&self.title)
                )
            }
            ElementKind::Textarea => {
                format!(
                    r#"<textarea rows="5" cols="60">{}</textarea>"#,
                    escape_text(&self.title)
                )
            }
            ElementKind::Select => {
                let options: String = self
                    .choices()
                    .iter()
                    .map(|label| format!("<option>{}</option>", escape_text(label)))
                    .collect();
                format!("<select>{}</select>", options)
            }
            ElementKind::Radio => {
                // One generated group id per element instance
                let group = Uuid::new_v4();
                self.choices()
                    .iter()
                    .map(|label| {
                        format!(
                            r#"<input type="radio" name="{}" value="{}" />{}"#,
                            group,
                            escape_attr(label),
                            escape_text(label)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("&nbsp;")
            }
            ElementKind::Checkbox => self
                .choices()
                .iter()
                .map(|label| {
                    format!(
                        r#"<input type="checkbox" value="{}" />{}"#,
                        escape_attr(label),
                        escape_text(label)
                    )
                })
                .collect::<Vec<_>>()
                .join("&nbsp;"),
        }
    }
}
