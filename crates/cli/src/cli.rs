use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lazy_core::Config;

use crate::commands::{create_command, run_command};

/// Lazy is an application that lets you manipulate programming files easily.
#[derive(Parser, Debug)]
#[command(name = "lazy")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Lazy {
    /// Config file (default is $HOME/.lazy.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs a file given, compiling it if is a source file
    #[command(visible_alias = "r")]
    Run {
        /// Name of the source file, with its extension (e.g. main.go)
        file: String,

        /// Print the compile and run commands without executing them
        #[arg(short, long)]
        dry_run: bool,

        /// Seconds to wait for the compiler's output before giving up
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Create files in the project directory of their extension, creating
    /// the directory if needed
    #[command(visible_alias = "c")]
    Create {
        /// File names, each with an extension
        #[arg(required = true)]
        files: Vec<String>,
    },
}

impl Lazy {
    /// Load configuration and execute the selected command
    pub fn execute(self) -> Result<()> {
        let (config, used) = Config::load(self.config.as_deref())?;
        if let Some(path) = used {
            eprintln!("Using config file: {}", path.display());
        }
        self.command.execute(&config)
    }
}

impl Commands {
    pub fn execute(self, config: &Config) -> Result<()> {
        match self {
            Commands::Run {
                file,
                dry_run,
                timeout,
            } => run_command(config, &file, dry_run, timeout),
            Commands::Create { files } => create_command(config, &files),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Lazy::try_parse_from(["lazy", "run", "main.go", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Run { file, dry_run, timeout } => {
                assert_eq!(file, "main.go");
                assert!(dry_run);
                assert_eq!(timeout, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_run_takes_exactly_one_file() {
        assert!(Lazy::try_parse_from(["lazy", "run"]).is_err());
        assert!(Lazy::try_parse_from(["lazy", "run", "a.c", "b.c"]).is_err());
    }

    #[test]
    fn test_parse_create_many_with_global_config() {
        let cli =
            Lazy::try_parse_from(["lazy", "create", "a.c", "b.go", "--config", "/tmp/x.json"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.json")));
        match cli.command {
            Commands::Create { files } => assert_eq!(files, vec!["a.c", "b.go"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_create_requires_a_file() {
        assert!(Lazy::try_parse_from(["lazy", "create"]).is_err());
    }
}
