//! Document processing
//!
//! The processor coordinates one build run: it parses each markdown
//! document with the comrak host, runs the directive pass and the role
//! rewrite pass, and renders the final HTML. All documents of a run share
//! one `BuildContext`, so menus registered in an earlier document are
//! visible to page directives in later ones.

use crate::diagnostics::{DiagnosticsCollector, MockdownResult};
use crate::menu::MenuRegistry;
use crate::rewrite;
use comrak::nodes::AstNode;
use comrak::{format_html, parse_document, Arena, Options};
use serde::{Deserialize, Serialize};

/// Comrak options for the host pipeline: description lists enabled for
/// field bodies, raw HTML passthrough enabled so rewritten fragments are
/// emitted verbatim.
pub fn host_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.description_lists = true;
    options.render.unsafe_ = true;
    options
}

/// Render a processed tree to HTML
pub(crate) fn render_html<'a>(root: &'a AstNode<'a>) -> MockdownResult<String> {
    let mut out = Vec::new();
    format_html(root, &host_options(), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Aggregate statistics for a build run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
    /// Documents processed
    pub documents: usize,
    /// Pages assembled
    pub pages: usize,
    /// Mock-up elements expanded
    pub elements: usize,
    /// Top-level menus registered
    pub menus: usize,
}

/// Shared state for one build run
///
/// Owns the menu registry and the diagnostics for the run; threaded
/// through every page assembly instead of living in process-global state.
#[derive(Debug, Default)]
pub struct BuildContext {
    /// Navigation menus registered by `menulist` directives
    pub menus: MenuRegistry,
    /// Diagnostics gathered during the run
    pub diagnostics: DiagnosticsCollector,
    /// Aggregate statistics
    pub stats: BuildStats,
}

impl BuildContext {
    /// Create a fresh context
    pub fn new() -> Self {
        Self::default()
    }
}

/// Markdown-to-HTML processor for mock-up documents
#[derive(Debug, Default)]
pub struct Processor {
    ctx: BuildContext,
}

impl Processor {
    /// Create a processor with a fresh build context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor around an existing context
    pub fn with_context(ctx: BuildContext) -> Self {
        Self { ctx }
    }

    /// Get the build context
    pub fn context(&self) -> &BuildContext {
        &self.ctx
    }

    /// Get the build context mutably
    pub fn context_mut(&mut self) -> &mut BuildContext {
        &mut self.ctx
    }

    /// Consume the processor, yielding its context
    pub fn into_context(self) -> BuildContext {
        self.ctx
    }

    /// Process one markdown document into an HTML body.
    ///
    /// Directives execute in document source order before the single
    /// rewrite pass; the rendered output embeds every expanded fragment
    /// verbatim.
    pub fn process(&mut self, source: &str) -> MockdownResult<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, source, &host_options());

        rewrite::process_tree(&arena, root, &mut self.ctx)?;

        let html = render_html(root)?;
        self.ctx.stats.documents += 1;
        Ok(html)
    }
}
