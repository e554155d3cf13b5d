use std::path::{Path, PathBuf};

use super::IncludeGraph;

/// The packing order computed for an entrypoint, together with the dependency
/// edges that were dropped to break an include cycle.
#[derive(Debug, Default)]
pub struct OrderedIncludes {
    /// Every reachable file exactly once, each after all of its dependencies.
    pub files: Vec<PathBuf>,
    /// Edges (from, to) skipped because `to` was an ancestor of `from` in the
    /// traversal. Empty for acyclic projects.
    pub cycles: Vec<(PathBuf, PathBuf)>,
}

/// Walk the graph depth-first from the entrypoint and return the order the
/// files must be concatenated in. Among siblings, first-discovered comes
/// first; a file reached through several paths keeps its earliest position.
pub fn include_order(entrypoint: &Path, graph: &IncludeGraph) -> OrderedIncludes {
    let mut cycles = Vec::new();
    let files = visit(entrypoint, graph, &[], &mut cycles);

    OrderedIncludes { files, cycles }
}

fn visit(
    file: &Path,
    graph: &IncludeGraph,
    ancestors: &[PathBuf],
    cycles: &mut Vec<(PathBuf, PathBuf)>,
) -> Vec<PathBuf> {
    let mut ordered: Vec<PathBuf> = Vec::new();

    let mut ancestors = ancestors.to_vec();
    ancestors.push(file.to_path_buf());

    let dependencies = graph.project.get(file).map(Vec::as_slice).unwrap_or(&[]);

    for dependency in dependencies {
        if ordered.contains(dependency) {
            continue;
        }

        if ancestors.contains(dependency) {
            cycles.push((file.to_path_buf(), dependency.clone()));
            continue;
        }

        for transitive in visit(dependency, graph, &ancestors, cycles) {
            if !ordered.contains(&transitive) {
                ordered.push(transitive);
            }
        }
    }

    ordered.push(file.to_path_buf());
    ordered
}
