mod extract;
mod order;

pub use extract::extract_includes;
pub use order::{include_order, OrderedIncludes};

pub(crate) use extract::INCLUDE_PATTERN;

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::config::ProjectInfo;
use crate::error::Result;

/// The include-dependency graph of a project. Separates the dependencies that
/// are language or library globals from the project files that must be packed.
#[derive(Debug, Default)]
pub struct IncludeGraph {
    /// File to its direct project dependencies, in first-seen order.
    /// Duplicate entries are kept, one per directive occurrence.
    pub project: HashMap<PathBuf, Vec<PathBuf>>,
    /// External include names aggregated over every reachable file. Sorted so
    /// the emitted declarations are byte-reproducible across runs.
    pub language: BTreeSet<String>,
}

/// Build the include graph of every project file reachable from the
/// entrypoint, breadth-first. Each file is extracted exactly once: a file is
/// enqueued only when first discovered, so a cyclic include terminates after
/// covering each file and leaves the cycle for the orderer to break.
pub fn build_include_graph(entrypoint: &Path, project: &ProjectInfo) -> Result<IncludeGraph> {
    let mut graph = IncludeGraph::default();
    let mut scheduled: HashSet<PathBuf> = HashSet::new();
    let mut pending: VecDeque<PathBuf> = VecDeque::new();

    scheduled.insert(entrypoint.to_path_buf());
    pending.push_back(entrypoint.to_path_buf());

    while let Some(current) = pending.pop_front() {
        let (dependencies, externals) = extract_includes(&current, project)?;

        for dependency in &dependencies {
            if scheduled.insert(dependency.clone()) {
                pending.push_back(dependency.clone());
            }
        }

        graph.project.insert(current, dependencies);
        graph.language.extend(externals);
    }

    Ok(graph)
}
