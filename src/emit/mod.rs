use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::config::ProjectInfo;
use crate::error::{PackError, Result};
use crate::graph::{include_order, IncludeGraph, OrderedIncludes, INCLUDE_PATTERN};

/// A `/** ... */` documentation block at the very start of a file.
static HEADER_COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^/\*\*.*?\*/").unwrap());

static PRAGMA_ONCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#pragma once$").unwrap());

/// Write the whole project as a single header to `outfile`, overwriting it.
///
/// The output starts with the entrypoint's documentation block and an include
/// guard derived from the uppercased namespace, followed by the external
/// include declarations in sorted order and the cleaned contents of every
/// project file in dependency order. Returns the computed order so the caller
/// can report any cycle edges that were dropped.
pub fn write_packed_source(
    outfile: &Path,
    graph: &IncludeGraph,
    project: &ProjectInfo,
) -> Result<OrderedIncludes> {
    let namespace = project.namespace.to_uppercase();
    let ordered = include_order(&project.entrypoint, graph);

    let entry_source = read_source(&project.entrypoint)?;
    let header = HEADER_COMMENT_PATTERN
        .find(&entry_source)
        .ok_or_else(|| PackError::MissingHeader {
            path: project.entrypoint.clone(),
        })?;

    let mut out = File::create(outfile).map_err(output_error(outfile))?;

    writeln!(out, "{}", header.as_str()).map_err(output_error(outfile))?;
    writeln!(out, "#ifndef {namespace}_HEADER_INCLUDED").map_err(output_error(outfile))?;
    writeln!(out, "#define {namespace}_HEADER_INCLUDED").map_err(output_error(outfile))?;

    for include in &graph.language {
        writeln!(out, "#include <{include}>").map_err(output_error(outfile))?;
    }

    for file in &ordered.files {
        let source = read_source(file)?;
        writeln!(out, "{}", clean_source(&source)).map_err(output_error(outfile))?;
    }

    writeln!(out, "#endif //{namespace}_HEADER_INCLUDED").map_err(output_error(outfile))?;

    Ok(ordered)
}

/// Strip the leading documentation block, include-once markers and include
/// directives from a file's contents, then drop every blank line.
fn clean_source(source: &str) -> String {
    let source = HEADER_COMMENT_PATTERN.replace(source, "");
    let source = PRAGMA_ONCE_PATTERN.replace_all(&source, "");
    let source = INCLUDE_PATTERN.replace_all(&source, "");

    source
        .lines()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PackError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

fn output_error(path: &Path) -> impl Fn(io::Error) -> PackError + '_ {
    move |source| PackError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}
