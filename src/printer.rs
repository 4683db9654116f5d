//! Terminal build summary printer
//!
//! Colored terminal output for build results and diagnostics, printed
//! once per builder run.

use crate::diagnostics::{Diagnostic, DiagnosticSeverity};
use crate::processor::BuildStats;
use std::io::Write;
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Terminal printer for build summaries
pub struct BuildPrinter {
    /// Whether to use colored output
    use_color: bool,
}

impl BuildPrinter {
    /// Create a new printer
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn stream(&self) -> StandardStream {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        StandardStream::stderr(choice)
    }

    /// Print one written output file
    pub fn file(&self, path: &Path) -> std::io::Result<()> {
        let mut out = self.stream();
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "    wrote")?;
        out.reset()?;
        writeln!(out, " {}", path.display())
    }

    /// Print a diagnostic
    pub fn diagnostic(&self, diagnostic: &Diagnostic) -> std::io::Result<()> {
        let mut out = self.stream();
        let color = match diagnostic.severity {
            DiagnosticSeverity::Error => Color::Red,
            DiagnosticSeverity::Warning => Color::Yellow,
            DiagnosticSeverity::Info => Color::Blue,
        };
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{}", diagnostic.severity.display())?;
        out.reset()?;
        writeln!(out, ": {}", diagnostic.message)
    }

    /// Print the aggregate summary for a run
    pub fn summary(&self, stats: &BuildStats) -> std::io::Result<()> {
        let mut out = self.stream();
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "mockdown")?;
        out.reset()?;
        writeln!(
            out,
            ": {} document(s), {} page(s), {} element(s), {} menu(s)",
            stats.documents, stats.pages, stats.elements, stats.menus
        )
    }
}
