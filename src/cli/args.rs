use clap::Parser;
use std::path::PathBuf;

/// Pack the source code of a whole header-only project into a single file.
#[derive(Debug, Parser)]
#[command(name = "srcpack", version, about)]
pub struct Args {
    /// The source packing configuration file
    #[arg(short, long, value_name = "file", default_value = ".packconfig")]
    pub config: PathBuf,

    /// The target file to output the packed source code to
    #[arg(short, long, value_name = "file")]
    pub outfile: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_dotfile() {
        let args = Args::parse_from(["srcpack"]);
        assert_eq!(args.config, PathBuf::from(".packconfig"));
        assert!(args.outfile.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from(["srcpack", "-c", "pack.toml", "-o", "single.h"]);
        assert_eq!(args.config, PathBuf::from("pack.toml"));
        assert_eq!(args.outfile, Some(PathBuf::from("single.h")));
    }
}
