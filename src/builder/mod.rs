//! Builder API for mockdown
//!
//! This module provides the builder pattern API for configuring
//! and running documentation builds.

mod mockdown_builder;

pub use mockdown_builder::{BuildOutput, MockdownBuilder, MockdownConfig};
