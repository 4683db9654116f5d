//! mockdown: UI wireframe mock-ups for markdown documentation builds
//!
//! This crate expands custom markup into HTML wireframe mock-ups at
//! document-build time:
//! - Inline roles (`` {button}`OK` ``, `` {text}`Name <required>` ``, ...)
//!   become form-control HTML fragments
//! - `{menulist}` directives register navigation menus from bullet lists
//! - `{page}` directives assemble a layout table with navigation rows,
//!   an optional breadcrumb trail and an optional attribute description
//!   table
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────┐
//! │ markdown src │───▶│ comrak parse      │
//! └──────────────┘    └─────────┬─────────┘
//!                               ▼
//!                     ┌───────────────────┐   ┌──────────────┐
//!                     │ directive pass    │◀─▶│ MenuRegistry │
//!                     │ (menulist, page)  │   │ BuildContext │
//!                     └─────────┬─────────┘   └──────────────┘
//!                               ▼
//!                     ┌───────────────────┐
//!                     │ role rewrite pass │
//!                     └─────────┬─────────┘
//!                               ▼
//!                     ┌───────────────────┐
//!                     │ comrak HTML out   │
//!                     └───────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use mockdown::Processor;
//!
//! let mut processor = Processor::new();
//! let html = processor
//!     .process("Press {button}`OK` to continue.\n")
//!     .expect("markdown processing failed");
//! assert!(html.contains("<button>OK</button>"));
//! ```

// Core types
pub mod element;
pub mod menu;
pub mod role;

// Directive handling and page assembly
pub mod directive;
pub mod page;
pub mod rewrite;

// Pipeline and utilities
pub mod diagnostics;
pub mod html;
pub mod printer;
pub mod processor;

// Submodules
pub mod builder;

// Re-exports for convenience
pub use builder::{BuildOutput, MockdownBuilder, MockdownConfig};
pub use diagnostics::{
    Diagnostic, DiagnosticSeverity, DiagnosticsCollector, MockdownError, MockdownResult,
};
pub use directive::{Directive, PageOptions};
pub use element::{ElementKind, MockElement};
pub use menu::MenuRegistry;
pub use processor::{host_options, BuildContext, BuildStats, Processor};

// Terminal output
pub use printer::BuildPrinter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
