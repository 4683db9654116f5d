//! Block directive syntax
//!
//! Directives are fenced code blocks whose info string is `{menulist}` or
//! `{page} Optional Title`. A `page` body may open with MyST-style option
//! lines (`:breadcrumb: Home > Users`, `:desctable:`) followed by a blank
//! line and nested markdown content.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a directive info string, e.g. `{page} User List`
    static ref DIRECTIVE_INFO: Regex = Regex::new(r"^\{(menulist|page)\}\s*(.*)$").unwrap();

    /// Matches a MyST option line, e.g. `:breadcrumb: Home > Users`
    static ref OPTION_LINE: Regex = Regex::new(r"^:([A-Za-z][A-Za-z-]*):\s*(.*)$").unwrap();

    /// Splits a breadcrumb string on `,` or `>` separators
    static ref BREADCRUMB_SEP: Regex = Regex::new(r"\s*[,>]\s*").unwrap();
}

/// A recognized block directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `{menulist}`: register navigation menus from a bullet list body
    MenuList,
    /// `{page} Optional Title`: assemble a page mock-up from the body
    Page {
        /// Title argument from the info string, if any
        title: Option<String>,
    },
}

/// Recognize a fenced code block info string as a directive.
///
/// Anything that is not a known directive returns `None` and the block is
/// left untouched as an ordinary code block.
pub fn parse_info(info: &str) -> Option<Directive> {
    let caps = DIRECTIVE_INFO.captures(info.trim())?;
    let arg = caps[2].trim();

    match &caps[1] {
        "menulist" => Some(Directive::MenuList),
        "page" => Some(Directive::Page {
            title: if arg.is_empty() {
                None
            } else {
                Some(arg.to_string())
            },
        }),
        _ => None,
    }
}

/// Options parsed from a `page` directive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Title argument from the info string
    pub title: Option<String>,
    /// `:breadcrumb:` option value
    pub breadcrumb: Option<String>,
    /// Whether the `:desctable:` flag is present
    pub desctable: bool,
}

impl PageOptions {
    /// The breadcrumb split into trimmed segments.
    ///
    /// Mirrors the host convention: an absent or empty breadcrumb still
    /// yields one empty segment, which selects no submenu.
    pub fn breadcrumb_segments(&self) -> Vec<String> {
        let raw = self.breadcrumb.as_deref().unwrap_or("");
        BREADCRUMB_SEP
            .split(raw)
            .map(|s| s.trim().to_string())
            .collect()
    }
}

/// Split a `page` directive body into its options and nested content.
///
/// Option lines are consumed from the top of the body until the first
/// line that is not an option; a single blank separator line after the
/// options is swallowed. Unknown option names are ignored.
pub fn split_page_body(title: Option<String>, body: &str) -> (PageOptions, String) {
    let mut options = PageOptions {
        title,
        ..PageOptions::default()
    };

    let mut rest = Vec::new();
    let mut in_options = true;

    for line in body.lines() {
        if in_options {
            if let Some(caps) = OPTION_LINE.captures(line) {
                match &caps[1] {
                    "breadcrumb" => options.breadcrumb = Some(caps[2].trim().to_string()),
                    "desctable" => options.desctable = true,
                    _ => {}
                }
                continue;
            }
            in_options = false;
            if line.trim().is_empty() {
                continue;
            }
        }
        rest.push(line);
    }

    (options, rest.join("\n"))
}
