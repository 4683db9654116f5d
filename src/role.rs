//! Inline role syntax
//!
//! Mock-up elements are written as MyST-flavored roles: a text run ending
//! in `{token}` immediately followed by an inline code span, e.g.
//! `` {button}`Cancel` ``. The code span text may carry an explicit title
//! with trailing options in angle brackets: `` {text}`Your name <required>` ``.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a role marker at the end of a text run, e.g. `{button}`
    static ref ROLE_SUFFIX: Regex =
        Regex::new(r"\{(button|text|textarea|select|radio|checkbox)\}$").unwrap();

    /// Splits `Title <options>` into title and options
    static ref EXPLICIT_TITLE: Regex = Regex::new(r"(?s)^(.+?)\s*<([^<]*)>$").unwrap();
}

/// A role marker found at the end of a text run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMarker {
    /// The role token, e.g. `button`
    pub token: String,
    /// Byte offset where the marker starts in the text run
    pub start: usize,
}

/// Find a role marker at the end of a text run.
///
/// Returns `None` when the text does not end in a recognized `{token}`.
pub fn find_role_marker(text: &str) -> Option<RoleMarker> {
    let caps = ROLE_SUFFIX.captures(text)?;
    let whole = caps.get(0)?;
    Some(RoleMarker {
        token: caps[1].to_string(),
        start: whole.start(),
    })
}

/// Split role text into its title and option parts.
///
/// `Title <options>` yields `("Title", "options")`; text without the
/// explicit form yields the whole text as title and empty options. A
/// title of exactly `-` or `_` is a sentinel for "no title".
pub fn split_role_text(text: &str) -> (String, String) {
    let (title, options) = match EXPLICIT_TITLE.captures(text) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (text.to_string(), String::new()),
    };

    if title == "-" || title == "_" {
        (String::new(), options)
    } else {
        (title, options)
    }
}
