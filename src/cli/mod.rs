mod args;

pub use args::Args;

use anyhow::Result;

use crate::config::load_config;
use crate::emit::write_packed_source;
use crate::graph::build_include_graph;
use crate::paths;

/// Run a full packing pass: load the configuration, build the include graph
/// from the entrypoint and write the packed header. The output path from the
/// command line, when given, wins over the configured one.
pub fn run(args: &Args) -> Result<()> {
    let config = load_config(&args.config)?;

    let outfile = match &args.outfile {
        Some(path) => paths::absolutize(path),
        None => config.outfile.clone(),
    };

    let graph = build_include_graph(&config.project.entrypoint, &config.project)?;
    let ordered = write_packed_source(&outfile, &graph, &config.project)?;

    for (file, dependency) in &ordered.cycles {
        eprintln!(
            "warning: include cycle broken at {} -> {}",
            file.display(),
            dependency.display()
        );
    }

    Ok(())
}
