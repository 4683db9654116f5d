//! Page assembly
//!
//! Builds the page mock-up produced by the `page` directive: a stacked
//! layout table holding the global navigation row, the sub navigation row
//! and the page content, plus the optional breadcrumb trail and the
//! optional attribute description table.

use crate::diagnostics::MockdownResult;
use crate::directive::PageOptions;
use crate::element::MockElement;
use crate::html::{escape_text, slug};
use crate::menu::MenuRegistry;
use crate::processor::{host_options, render_html, BuildContext};
use crate::rewrite;
use comrak::{parse_document, Arena};

/// Assemble the HTML for one `page` directive.
///
/// The body content is parsed as markdown and processed with the same
/// directive and rewrite passes as a full document, so nested roles and
/// directives behave as in ordinary content.
pub fn assemble(
    options: &PageOptions,
    content: &str,
    ctx: &mut BuildContext,
) -> MockdownResult<String> {
    let arena = Arena::new();
    let root = parse_document(&arena, content, &host_options());

    // Attribute collection must see the role placeholders, so it runs
    // before the rewrite pass consumes them.
    let described = if options.desctable {
        rewrite::collect_described(root)
    } else {
        Vec::new()
    };

    rewrite::process_tree(&arena, root, ctx)?;
    let content_html = render_html(root)?;

    let segments = options.breadcrumb_segments();
    let has_breadcrumb = options
        .breadcrumb
        .as_deref()
        .map(|s| !s.is_empty())
        .unwrap_or(false);

    let mut cell = String::new();
    if has_breadcrumb {
        cell.push_str(&build_breadcrumb(&segments));
        cell.push('\n');
    }
    cell.push_str(&content_html);

    let layout = build_layout(&ctx.menus, &segments[0], &cell);

    let mut out = match options.title {
        Some(ref title) => build_section(title, &layout),
        None => layout,
    };

    if options.desctable && !described.is_empty() {
        out.push('\n');
        out.push_str(&build_desctable(&described));
    }

    ctx.stats.pages += 1;
    Ok(out)
}

/// Build the stacked layout table: global navigation, sub navigation and
/// content rows inside a 15%/85% two-column grid. All three rows are
/// always present; missing navigation yields empty cells.
fn build_layout(menus: &MenuRegistry, selected: &str, content_html: &str) -> String {
    let global = menus
        .keys()
        .iter()
        .map(|label| escape_text(label))
        .collect::<Vec<_>>()
        .join(" / ");

    let sub = menus
        .get(selected)
        .map(|submenus| {
            submenus
                .iter()
                .map(|label| escape_text(label))
                .collect::<Vec<_>>()
                .join(" / ")
        })
        .unwrap_or_default();

    let mut html = String::new();
    html.push_str("<table class=\"mock-page\">\n");
    html.push_str("<colgroup>\n");
    html.push_str("<col style=\"width: 15%\" />\n");
    html.push_str("<col style=\"width: 85%\" />\n");
    html.push_str("</colgroup>\n");
    html.push_str("<tbody>\n");
    html.push_str(&format!("<tr><td class=\"global-nav\">{}</td></tr>\n", global));
    html.push_str(&format!("<tr><td class=\"sub-nav\">{}</td></tr>\n", sub));
    html.push_str(&format!(
        "<tr><td class=\"page-content\">\n{}</td></tr>\n",
        content_html
    ));
    html.push_str("</tbody>\n");
    html.push_str("</table>");
    html
}

/// Build the breadcrumb trail: linked emphasized segments separated by an
/// emphasized `>>` with single surrounding spaces.
fn build_breadcrumb(segments: &[String]) -> String {
    let linked: Vec<String> = segments
        .iter()
        .map(|segment| {
            format!(
                "<a href=\"#\"><em>{}</em></a>",
                escape_text(segment.trim())
            )
        })
        .collect();

    format!(
        "<p class=\"breadcrumb\">{}</p>",
        linked.join(" <em>&gt;&gt;</em> ")
    )
}

/// Wrap the layout table in a titled section whose id derives from the
/// normalized title
fn build_section(title: &str, layout: &str) -> String {
    format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n{}\n</section>",
        slug(title),
        escape_text(title),
        layout
    )
}

/// Build the attribute description table
fn build_desctable(described: &[(String, MockElement)]) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"mock-desctable\">\n");
    html.push_str("<colgroup>\n");
    for width in [5, 20, 20, 5, 50] {
        html.push_str(&format!("<col style=\"width: {}%\" />\n", width));
    }
    html.push_str("</colgroup>\n");
    html.push_str("<thead>\n<tr>");
    for label in ["No", "Name", "Type", "Required", "Description"] {
        html.push_str(&format!("<th>{}</th>", label));
    }
    html.push_str("</tr>\n</thead>\n");
    html.push_str("<tbody>\n");

    for (i, (name, element)) in described.iter().enumerate() {
        let required = if element.is_required() { "o" } else { "" };
        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", i + 1));
        html.push_str(&format!("<td>{}</td>", escape_text(name)));
        html.push_str(&format!("<td>{}</td>", element.kind.display_name()));
        html.push_str(&format!("<td>{}</td>", required));
        html.push_str(&format!("<td>{}</td>", escape_text(&element.description())));
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n");
    html.push_str("</table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_ctx() -> BuildContext {
        BuildContext::new()
    }

    #[test]
    fn test_layout_with_empty_registry_and_no_breadcrumb() {
        let mut ctx = empty_ctx();
        let options = PageOptions::default();
        let html = assemble(&options, "Hello.\n", &mut ctx).unwrap();

        assert!(html.contains("<td class=\"global-nav\"></td>"));
        assert!(html.contains("<td class=\"sub-nav\"></td>"));
        assert!(html.contains("<p>Hello.</p>"));
        assert!(!html.contains("breadcrumb"));
        assert!(!html.contains("mock-desctable"));
    }

    #[test]
    fn test_layout_rows_from_registry() {
        let mut ctx = empty_ctx();
        ctx.menus.add_submenu("Home", "Dashboard");
        ctx.menus.add_submenu("Home", "Inbox");
        ctx.menus.add_menu("Admin");

        let options = PageOptions {
            breadcrumb: Some("Home > Dashboard".to_string()),
            ..PageOptions::default()
        };
        let html = assemble(&options, "Body.\n", &mut ctx).unwrap();

        assert!(html.contains("<td class=\"global-nav\">Home / Admin</td>"));
        assert!(html.contains("<td class=\"sub-nav\">Dashboard / Inbox</td>"));
    }

    #[test]
    fn test_breadcrumb_rendering() {
        let mut ctx = empty_ctx();
        let options = PageOptions {
            breadcrumb: Some("Home > Users".to_string()),
            ..PageOptions::default()
        };
        let html = assemble(&options, "Body.\n", &mut ctx).unwrap();

        assert!(html.contains(
            "<p class=\"breadcrumb\"><a href=\"#\"><em>Home</em></a> \
             <em>&gt;&gt;</em> <a href=\"#\"><em>Users</em></a></p>"
        ));
    }

    #[test]
    fn test_unknown_breadcrumb_menu_degrades_to_empty_row() {
        let mut ctx = empty_ctx();
        let options = PageOptions {
            breadcrumb: Some("Nowhere".to_string()),
            ..PageOptions::default()
        };
        let html = assemble(&options, "Body.\n", &mut ctx).unwrap();

        assert!(html.contains("<td class=\"sub-nav\"></td>"));
    }

    #[test]
    fn test_section_wrapping() {
        let mut ctx = empty_ctx();
        let options = PageOptions {
            title: Some("Admin Users".to_string()),
            ..PageOptions::default()
        };
        let html = assemble(&options, "Body.\n", &mut ctx).unwrap();

        assert!(html.starts_with("<section id=\"admin-users\">\n<h2>Admin Users</h2>"));
        assert!(html.trim_end().ends_with("</section>"));
    }

    #[test]
    fn test_desctable_from_description_list() {
        let mut ctx = empty_ctx();
        let options = PageOptions {
            desctable: true,
            ..PageOptions::default()
        };
        let content = "Name\n: {text}`Your name <required, full name>`\n\n\
                       Color\n: {select}`Red,Blue <pick one>`\n";
        let html = assemble(&options, content, &mut ctx).unwrap();

        assert!(html.contains("mock-desctable"));
        assert!(html.contains(
            "<tr><td>1</td><td>Name</td><td>Text</td><td>o</td><td>full name</td></tr>"
        ));
        assert!(html.contains(
            "<tr><td>2</td><td>Color</td><td>Dropdown</td><td></td>\
             <td>Choices: Red,Blue, pick one</td></tr>"
        ));
    }

    #[test]
    fn test_desctable_skipped_without_qualifying_elements() {
        let mut ctx = empty_ctx();
        let options = PageOptions {
            desctable: true,
            ..PageOptions::default()
        };
        // The element is not inside a description list, so nothing
        // qualifies and no second table is appended.
        let html = assemble(&options, "Press {button}`OK`\n", &mut ctx).unwrap();

        assert!(!html.contains("mock-desctable"));
        assert_eq!(html.matches("<table").count(), 1);
    }

    #[test]
    fn test_desctable_is_sibling_of_section() {
        let mut ctx = empty_ctx();
        let options = PageOptions {
            title: Some("Users".to_string()),
            desctable: true,
            ..PageOptions::default()
        };
        let content = "Name\n: {text}`- <required>`\n";
        let html = assemble(&options, content, &mut ctx).unwrap();

        let section_end = html.find("</section>").unwrap();
        let table_start = html.find("mock-desctable").unwrap();
        assert!(table_start > section_end);
    }

    #[test]
    fn test_roles_inside_page_content_are_expanded() {
        let mut ctx = empty_ctx();
        let options = PageOptions::default();
        let html = assemble(&options, "Press {button}`OK` now.\n", &mut ctx).unwrap();

        assert!(html.contains("<button>OK</button>"));
        assert!(!html.contains("{button}"));
    }
}
