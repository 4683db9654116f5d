//! MockdownBuilder - Main API for documentation builds
//!
//! This module provides the builder pattern API for configuring and
//! running a build over one or more markdown documents.

use crate::diagnostics::{Diagnostic, MockdownError, MockdownResult};
use crate::html::wrap_html;
use crate::printer::BuildPrinter;
use crate::processor::{BuildStats, Processor};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Build output containing written documentation
#[derive(Debug)]
pub struct BuildOutput {
    /// Written HTML files
    pub html_files: Vec<PathBuf>,
    /// Written JSON report, if requested
    pub report_file: Option<PathBuf>,
    /// Output directory
    pub output_dir: PathBuf,
    /// Aggregate statistics for the run
    pub stats: BuildStats,
    /// Diagnostics gathered during the run
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    /// Get all written files
    pub fn all_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.html_files.iter().chain(self.report_file.iter())
    }
}

/// Optional TOML configuration file contents
///
/// Mirrors the builder fields; every field is optional and overrides the
/// builder default when present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MockdownConfig {
    /// Directory scanned for `*.md` inputs
    pub input_dir: Option<PathBuf>,
    /// Explicit input files
    pub inputs: Option<Vec<PathBuf>>,
    /// Output directory
    pub output_dir: Option<PathBuf>,
    /// Page-shell title
    pub title: Option<String>,
    /// Whether to wrap bodies in a standalone HTML shell
    pub standalone: Option<bool>,
}

/// Builder for configuring a documentation build
///
/// # Example
///
/// ```no_run
/// use mockdown::MockdownBuilder;
///
/// MockdownBuilder::new()
///     .input_dir("docs/src")
///     .output_dir("docs/html")
///     .title("Wireframes")
///     .build()
///     .expect("Failed to build mock-up docs");
/// ```
#[derive(Debug)]
pub struct MockdownBuilder {
    /// Explicit input files
    pub inputs: Vec<PathBuf>,
    /// Directory scanned for `*.md` inputs
    pub input_dir: Option<PathBuf>,
    /// Output directory
    pub output_dir: PathBuf,
    /// Page-shell title; the file stem is used when unset
    pub title: Option<String>,
    /// Whether to wrap bodies in a standalone HTML shell
    pub standalone: bool,
    /// Whether to write a JSON build report
    pub report: bool,
    /// Whether to suppress terminal output
    pub quiet: bool,
}

impl Default for MockdownBuilder {
    fn default() -> Self {
        Self {
            inputs: vec![],
            input_dir: None,
            output_dir: PathBuf::from("docs"),
            title: None,
            standalone: true,
            report: false,
            quiet: false,
        }
    }
}

impl MockdownBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an explicit input file
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Set the input directory to scan for `*.md` files
    pub fn input_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(path.into());
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Set the page-shell title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable the standalone HTML shell
    pub fn standalone(mut self, enable: bool) -> Self {
        self.standalone = enable;
        self
    }

    /// Enable or disable the JSON build report
    pub fn report(mut self, enable: bool) -> Self {
        self.report = enable;
        self
    }

    /// Suppress terminal output
    pub fn quiet(mut self, enable: bool) -> Self {
        self.quiet = enable;
        self
    }

    /// Apply a loaded configuration over this builder
    pub fn with_config(mut self, config: MockdownConfig) -> Self {
        if let Some(dir) = config.input_dir {
            self.input_dir = Some(dir);
        }
        if let Some(inputs) = config.inputs {
            self.inputs.extend(inputs);
        }
        if let Some(dir) = config.output_dir {
            self.output_dir = dir;
        }
        if let Some(title) = config.title {
            self.title = Some(title);
        }
        if let Some(standalone) = config.standalone {
            self.standalone = standalone;
        }
        self
    }

    /// Load builder settings from a `mockdown.toml` configuration file
    pub fn from_config_file(path: impl AsRef<Path>) -> MockdownResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MockdownError::FileNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let config: MockdownConfig =
            toml::from_str(&raw).map_err(|e| MockdownError::config(e.to_string()))?;
        Ok(Self::new().with_config(config))
    }

    /// Gather the input files: explicit inputs first, then a sorted scan
    /// of the input directory for markdown files.
    fn gather_inputs(&self) -> MockdownResult<Vec<PathBuf>> {
        let mut files = self.inputs.clone();

        if let Some(ref dir) = self.input_dir {
            if !dir.exists() {
                return Err(MockdownError::FileNotFound(dir.clone()));
            }
            for entry in WalkDir::new(dir).sort_by_file_name() {
                let entry = entry.map_err(|e| MockdownError::Io(e.into()))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let is_markdown = entry
                    .path()
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("markdown"))
                    .unwrap_or(false);
                if is_markdown {
                    files.push(entry.path().to_path_buf());
                }
            }
        }

        if files.is_empty() {
            return Err(MockdownError::config("no input files configured"));
        }

        Ok(files)
    }

    /// Run the build
    ///
    /// Processes every input through one shared build context (menus
    /// registered by earlier documents are visible to later ones) and
    /// writes one `.html` file per input into the output directory.
    pub fn build(self) -> MockdownResult<BuildOutput> {
        let files = self.gather_inputs()?;
        fs::create_dir_all(&self.output_dir)?;

        let printer = BuildPrinter::new(true);
        let mut processor = Processor::new();
        let mut html_files = Vec::new();
        let mut seen_stems = HashSet::new();

        for file in &files {
            let source = fs::read_to_string(file)
                .map_err(|e| MockdownError::parse(file, e.to_string()))?;
            let body = processor.process(&source)?;

            let stem = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("index");
            if !seen_stems.insert(stem.to_string()) {
                processor.context_mut().diagnostics.warning(format!(
                    "duplicate output name {}.html, overwriting earlier input",
                    stem
                ));
            }
            let title = self.title.clone().unwrap_or_else(|| stem.to_string());

            let html = if self.standalone {
                wrap_html(&title, &body)
            } else {
                body
            };

            let out_path = self.output_dir.join(format!("{}.html", stem));
            fs::write(&out_path, html)?;
            if !self.quiet {
                printer.file(&out_path)?;
            }
            html_files.push(out_path);
        }

        let ctx = processor.into_context();

        let report_file = if self.report {
            let path = self.output_dir.join("mockdown-report.json");
            fs::write(&path, serde_json::to_string_pretty(&ctx.stats)?)?;
            Some(path)
        } else {
            None
        };

        if !self.quiet {
            for diagnostic in ctx.diagnostics.diagnostics() {
                printer.diagnostic(diagnostic)?;
            }
            printer.summary(&ctx.stats)?;
        }

        Ok(BuildOutput {
            html_files,
            report_file,
            output_dir: self.output_dir,
            stats: ctx.stats,
            diagnostics: ctx.diagnostics.diagnostics().to_vec(),
        })
    }
}
