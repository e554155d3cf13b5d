//! # srcpack
//!
//! Packs a multi-file header-only C/C++ project into a single header file.
//!
//! Starting from an entrypoint header, srcpack follows quoted includes and
//! namespace-qualified angle-bracket includes through the project, orders the
//! discovered files so every file comes after the files it depends on, and
//! concatenates their cleaned contents into one include-guarded output.
//! Includes of anything outside the project are kept as plain declarations at
//! the top of the output. Only `#include` directives and `#pragma once`
//! markers are interpreted; the rest of the source is copied as opaque text.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod graph;
pub mod paths;

pub use config::{PackConfig, ProjectInfo};
pub use error::{PackError, Result};
pub use graph::{build_include_graph, extract_includes, include_order, IncludeGraph, OrderedIncludes};
