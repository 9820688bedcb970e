use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_CONFIG_NAME;

/// Command-line arguments for the case loader.
///
/// Every option is optional: with no arguments the loader runs with the
/// built-in defaults (or the values from `--config`), which is how the
/// nightly scheduled task invokes it.
#[derive(Parser, Debug)]
#[clap(
    name = "case-loader",
    about = "Load ticket work folders into the case repository",
    version
)]
pub struct Args {
    /// Path to configuration YAML file (created with defaults if missing)
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Source ticket work directory (overrides the config file)
    #[clap(short, long)]
    pub source: Option<PathBuf>,

    /// Case repository directory (overrides the config file)
    #[clap(short, long)]
    pub repo: Option<PathBuf>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a configuration file populated with the defaults
    InitConfig {
        /// Output path for the configuration file
        #[clap(short, long, default_value = DEFAULT_CONFIG_NAME)]
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["case-loader"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.source.is_none());
        assert!(args.repo.is_none());
        assert!(!args.verbose);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "case-loader",
            "-c",
            "loader.yaml",
            "--source",
            "/data/Ticket Work",
            "-r",
            "/data/repo",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("loader.yaml")));
        assert_eq!(args.source, Some(PathBuf::from("/data/Ticket Work")));
        assert_eq!(args.repo, Some(PathBuf::from("/data/repo")));
        assert!(args.verbose);
    }

    #[test]
    fn test_init_config_default_path() {
        let args = Args::try_parse_from(["case-loader", "init-config"]).unwrap();
        match args.command {
            Some(Commands::InitConfig { path }) => {
                assert_eq!(path, PathBuf::from("case-loader.yaml"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["case-loader", "--bucket", "x"]).is_err());
    }
}
