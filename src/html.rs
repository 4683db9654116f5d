//! HTML helpers
//!
//! Escaping, slug generation and the standalone page shell used when the
//! builder writes finished `.html` files.

/// Escape a string for use as HTML text content
pub fn escape_text(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

/// Escape a string for use inside a double-quoted HTML attribute
pub fn escape_attr(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

/// Generate a URL-safe slug from a string.
///
/// Converts the input string to lowercase, replaces non-alphanumeric
/// characters with hyphens, collapses multiple consecutive hyphens,
/// and trims leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use mockdown::html::slug;
///
/// assert_eq!(slug("Admin Users"), "admin-users");
/// assert_eq!(slug("Sign-up / Login"), "sign-up-login");
/// ```
pub fn slug(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '-',
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Wrap a rendered document body in HTML boilerplate
pub fn wrap_html(title: &str, body: &str) -> String {
    let body_with_footer = format!(
        "{body}\n<footer>\n    <p>Generated by mockdown v{version}</p>\n</footer>",
        body = body,
        version = crate::VERSION,
    );

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"##,
        title = escape_text(title),
        body = body_with_footer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
        assert_eq!(escape_text("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Admin Users"), "admin-users");
        assert_eq!(slug("Hello  World"), "hello-world");
        assert_eq!(slug("user_list"), "user-list");
    }

    #[test]
    fn test_wrap_html() {
        let html = wrap_html("Login", "<p>body</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Login</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("Generated by mockdown"));
    }
}
