use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackError, Result};
use crate::paths;

/// The information of the project to be packed: where its source code lives,
/// what namespace identifies its own headers, and which file starts the
/// include traversal. Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    /// Root directory of the project's source files, absolute.
    pub workingdir: PathBuf,
    /// Token that recognizes project headers in angle-bracket includes and
    /// builds the include-guard identifier.
    pub namespace: String,
    /// Absolute path of the file the dependency traversal begins from.
    pub entrypoint: PathBuf,
}

/// A fully resolved packing configuration.
#[derive(Debug, Clone)]
pub struct PackConfig {
    pub project: ProjectInfo,
    pub outfile: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    project: ProjectSection,
    output: OutputSection,
}

#[derive(Debug, Deserialize)]
struct ProjectSection {
    workingdir: PathBuf,
    namespace: String,
    entrypoint: PathBuf,
}

#[derive(Debug, Deserialize)]
struct OutputSection {
    outfile: PathBuf,
}

/// Load a configuration file and resolve every path in it to absolute form.
/// The entrypoint is taken relative to the working directory, the working
/// directory and output file relative to the current directory.
pub fn load_config(path: &Path) -> Result<PackConfig> {
    let contents = fs::read_to_string(path).map_err(|source| PackError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| PackError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    let workingdir = paths::absolutize(&parsed.project.workingdir);
    let entrypoint = paths::resolve(&workingdir, &parsed.project.entrypoint);

    Ok(PackConfig {
        project: ProjectInfo {
            workingdir,
            namespace: parsed.project.namespace,
            entrypoint,
        },
        outfile: paths::absolutize(&parsed.output.outfile),
    })
}
