//! Post-parse tree rewriting
//!
//! A single pass per document tree: directives execute first in document
//! order, then every remaining role occurrence is replaced with the raw
//! HTML fragment its element renders. Nodes are collected before any
//! mutation so the traversal never skips or duplicates a node, and the
//! pass is idempotent: a rewritten tree contains no role occurrences.

use crate::diagnostics::MockdownResult;
use crate::directive::{parse_info, split_page_body, Directive};
use crate::element::{ElementKind, MockElement};
use crate::menu::collect_text;
use crate::page;
use crate::processor::BuildContext;
use crate::role::find_role_marker;
use comrak::nodes::{Ast, AstNode, LineColumn, NodeHtmlBlock, NodeValue};
use comrak::Arena;
use std::cell::RefCell;

/// A role occurrence: the `{token}` text run, the code span holding the
/// role text, and the element parsed from them
struct RoleOccurrence<'a> {
    /// Text node whose tail is the `{token}` marker
    text_node: &'a AstNode<'a>,
    /// Byte offset of the marker within the text node
    marker_start: usize,
    /// Code span node carrying the role text
    code_node: &'a AstNode<'a>,
    /// The parsed element
    element: MockElement,
}

/// Run the directive pass followed by the role rewrite pass
pub fn process_tree<'a>(
    arena: &'a Arena<AstNode<'a>>,
    root: &'a AstNode<'a>,
    ctx: &mut BuildContext,
) -> MockdownResult<()> {
    process_directives(arena, root, ctx)?;
    let expanded = rewrite_roles(arena, root);
    ctx.stats.elements += expanded;
    Ok(())
}

/// Execute every directive block in document order, replacing each with
/// its output: `menulist` blocks vanish, `page` blocks become raw HTML.
fn process_directives<'a>(
    arena: &'a Arena<AstNode<'a>>,
    root: &'a AstNode<'a>,
    ctx: &mut BuildContext,
) -> MockdownResult<()> {
    let mut found = Vec::new();
    for node in root.descendants() {
        let data = node.data.borrow();
        if let NodeValue::CodeBlock(ref block) = data.value {
            if let Some(directive) = parse_info(&block.info) {
                found.push((node, directive, block.literal.clone()));
            }
        }
    }

    for (node, directive, body) in found {
        match directive {
            Directive::MenuList => {
                let before = ctx.menus.len();
                ctx.menus.populate_from_markdown(&body);
                ctx.stats.menus += ctx.menus.len() - before;
                node.detach();
            }
            Directive::Page { title } => {
                let (options, content) = split_page_body(title, &body);
                let html = page::assemble(&options, &content, ctx)?;
                node.insert_after(raw_block(arena, html));
                node.detach();
            }
        }
    }

    Ok(())
}

/// Replace every role occurrence with its rendered HTML fragment.
///
/// Returns the number of elements expanded. Running this on an already
/// rewritten tree finds nothing and is a no-op.
pub fn rewrite_roles<'a>(arena: &'a Arena<AstNode<'a>>, root: &'a AstNode<'a>) -> usize {
    let occurrences = find_roles(root);
    let count = occurrences.len();

    for occurrence in occurrences {
        // Strip the `{token}` marker from the preceding text run
        let drop_text = {
            let mut data = occurrence.text_node.data.borrow_mut();
            if let NodeValue::Text(ref mut text) = data.value {
                text.truncate(occurrence.marker_start);
                text.is_empty()
            } else {
                false
            }
        };
        if drop_text {
            occurrence.text_node.detach();
        }

        let html = occurrence.element.to_html();
        occurrence.code_node.insert_after(raw_inline(arena, html));
        occurrence.code_node.detach();
    }

    count
}

/// Collect the elements that qualify for a description table, paired with
/// their field labels, in traversal order.
///
/// An element qualifies when its ancestry places it inside a
/// description-list details block, either directly or one level of
/// nesting deeper; the label is the text of the paired term.
pub fn collect_described<'a>(root: &'a AstNode<'a>) -> Vec<(String, MockElement)> {
    find_roles(root)
        .into_iter()
        .filter_map(|occurrence| {
            let details = enclosing_details(occurrence.code_node)?;
            let label = details_term_text(details)?;
            Some((label, occurrence.element))
        })
        .collect()
}

/// Find all role occurrences in the tree, in document order
fn find_roles<'a>(root: &'a AstNode<'a>) -> Vec<RoleOccurrence<'a>> {
    let mut found = Vec::new();

    for node in root.descendants() {
        let role_text = {
            let data = node.data.borrow();
            match data.value {
                NodeValue::Code(ref code) => code.literal.clone(),
                _ => continue,
            }
        };

        let Some(text_node) = node.previous_sibling() else {
            continue;
        };
        let marker = {
            let data = text_node.data.borrow();
            match data.value {
                NodeValue::Text(ref text) => find_role_marker(text),
                _ => None,
            }
        };
        let Some(marker) = marker else {
            continue;
        };
        // The marker token always names a known kind
        let Some(kind) = ElementKind::from_token(&marker.token) else {
            continue;
        };

        found.push(RoleOccurrence {
            text_node,
            marker_start: marker.start,
            code_node: node,
            element: MockElement::from_role_text(kind, &role_text),
        });
    }

    found
}

/// The description-details block enclosing a node, if its ancestry
/// qualifies (2nd or 3rd ancestor)
fn enclosing_details<'a>(node: &'a AstNode<'a>) -> Option<&'a AstNode<'a>> {
    let second = node.parent()?.parent()?;
    if is_details(second) {
        return Some(second);
    }
    let third = second.parent()?;
    if is_details(third) {
        return Some(third);
    }
    None
}

fn is_details<'a>(node: &'a AstNode<'a>) -> bool {
    matches!(node.data.borrow().value, NodeValue::DescriptionDetails)
}

/// The text of the term paired with a details block
fn details_term_text<'a>(details: &'a AstNode<'a>) -> Option<String> {
    let item = details.parent()?;
    let term = item
        .children()
        .find(|n| matches!(n.data.borrow().value, NodeValue::DescriptionTerm))?;
    Some(collect_text(term))
}

/// Allocate a raw inline HTML node, emitted verbatim by the renderer
fn raw_inline<'a>(arena: &'a Arena<AstNode<'a>>, html: String) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(
        NodeValue::HtmlInline(html),
        LineColumn { line: 0, column: 0 },
    ))))
}

/// Allocate a raw block HTML node
fn raw_block<'a>(arena: &'a Arena<AstNode<'a>>, html: String) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(
        NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 6,
            literal: html,
        }),
        LineColumn { line: 0, column: 0 },
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::host_options;
    use comrak::parse_document;

    fn parse_and_rewrite(source: &str) -> (usize, usize) {
        let arena = Arena::new();
        let root = parse_document(&arena, source, &host_options());
        let first = rewrite_roles(&arena, root);
        let second = rewrite_roles(&arena, root);
        (first, second)
    }

    #[test]
    fn test_rewrite_replaces_role() {
        let arena = Arena::new();
        let root = parse_document(&arena, "Press {button}`OK` now.\n", &host_options());
        let count = rewrite_roles(&arena, root);
        assert_eq!(count, 1);

        let html = crate::processor::render_html(root).unwrap();
        assert!(html.contains("Press <button>OK</button> now."));
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let (first, second) = parse_and_rewrite("One {text}`a` and {checkbox}`x,y` here.\n");
        assert_eq!(first, 2);
        assert_eq!(second, 0);
    }

    #[test]
    fn test_unknown_token_left_intact() {
        let arena = Arena::new();
        let root = parse_document(&arena, "A {bogus}`span` here.\n", &host_options());
        assert_eq!(rewrite_roles(&arena, root), 0);

        let html = crate::processor::render_html(root).unwrap();
        assert!(html.contains("{bogus}"));
        assert!(html.contains("<code>span</code>"));
    }

    #[test]
    fn test_plain_code_span_left_intact() {
        let arena = Arena::new();
        let root = parse_document(&arena, "Run `cargo doc` locally.\n", &host_options());
        assert_eq!(rewrite_roles(&arena, root), 0);
    }

    #[test]
    fn test_marker_only_text_node_is_dropped() {
        let arena = Arena::new();
        let root = parse_document(&arena, "{button}`OK`\n", &host_options());
        rewrite_roles(&arena, root);

        let html = crate::processor::render_html(root).unwrap();
        assert!(html.contains("<p><button>OK</button></p>"));
    }

    #[test]
    fn test_multiple_roles_in_one_paragraph() {
        let arena = Arena::new();
        let root = parse_document(
            &arena,
            "{button}`Cancel` or {button}`OK`\n",
            &host_options(),
        );
        assert_eq!(rewrite_roles(&arena, root), 2);

        let html = crate::processor::render_html(root).unwrap();
        assert!(html.contains("<button>Cancel</button> or <button>OK</button>"));
    }

    #[test]
    fn test_collect_described_direct_nesting() {
        let arena = Arena::new();
        let source = "Name\n: {text}`Your name <required>`\n";
        let root = parse_document(&arena, source, &host_options());

        let described = collect_described(root);
        assert_eq!(described.len(), 1);
        assert_eq!(described[0].0, "Name");
        assert_eq!(described[0].1.kind, ElementKind::Text);
        assert!(described[0].1.is_required());
    }

    #[test]
    fn test_collect_described_one_level_deeper() {
        let arena = Arena::new();
        // The element sits one wrapper deeper than the details block
        let source = "Color\n: > {radio}`Red,Blue`\n";
        let root = parse_document(&arena, source, &host_options());

        let described = collect_described(root);
        assert_eq!(described.len(), 1);
        assert_eq!(described[0].0, "Color");
        assert_eq!(described[0].1.kind, ElementKind::Radio);
    }

    #[test]
    fn test_collect_described_skips_free_elements() {
        let arena = Arena::new();
        let source = "Press {button}`OK`\n\nName\n: {text}`-`\n";
        let root = parse_document(&arena, source, &host_options());

        let described = collect_described(root);
        assert_eq!(described.len(), 1);
        assert_eq!(described[0].1.kind, ElementKind::Text);
    }

    #[test]
    fn test_collect_described_traversal_order() {
        let arena = Arena::new();
        let source = "First\n: {text}`a`\n\nSecond\n: {select}`x,y`\n";
        let root = parse_document(&arena, source, &host_options());

        let described = collect_described(root);
        let labels: Vec<&str> = described.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
    }
}
