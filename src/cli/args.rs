//! Command-line argument parsing for medaltally
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// medaltally - Extract Olympic medal results and explore them from the terminal
#[derive(Parser, Debug)]
#[command(name = "medaltally")]
#[command(version)]
#[command(about = "Extract Olympic medal results and explore them from the terminal", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand (defaults to the interactive viewer)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Parse the raw medal listing into the medal table
    Extract {
        /// Raw listing, one token per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Medal table to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Browse the medal table interactively
    View {
        /// Medal table to read
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Print the country ranking
    Rank {
        #[command(flatten)]
        query: QueryOpts,
    },

    /// Print medals per sport for one country
    Sports {
        /// Country name, exactly as in the table
        country: String,

        #[command(flatten)]
        query: QueryOpts,
    },

    /// Print medalists of one sport
    Athletes {
        /// Sport name, exactly as in the table
        sport: String,

        /// Restrict to one country
        #[arg(long)]
        country: Option<String>,

        #[command(flatten)]
        query: QueryOpts,
    },

    /// Display current configuration
    Config {
        /// Write the configuration to the config file (default location unless -c is given)
        #[arg(long)]
        init: bool,
    },
}

/// Options shared by the one-shot query commands
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOpts {
    /// Medal table to read
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Also export the result as <NAME>.csv into the export directory
    #[arg(long, value_name = "NAME")]
    pub export: Option<String>,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Subcommand to run; no subcommand means the viewer
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::View { table: None })
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default log filter directive when RUST_LOG is not set
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "medaltally=error",
            Verbosity::Normal => "medaltally=warn",
            Verbosity::Verbose => "medaltally=info",
            Verbosity::VeryVerbose => "medaltally=debug",
        }
    }

    /// Check if should show progress bars
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_view() {
        let args = Args::parse_from(["medaltally"]);
        assert_eq!(args.command(), Commands::View { table: None });
        assert_eq!(args.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(Args::parse_from(["medaltally", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(Args::parse_from(["medaltally", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(
            Args::parse_from(["medaltally", "rank", "-vv"]).verbosity(),
            Verbosity::VeryVerbose
        );
    }

    #[test]
    fn test_extract_paths() {
        let args = Args::parse_from(["medaltally", "extract", "-i", "dump.txt", "-o", "out.csv"]);
        assert_eq!(
            args.command(),
            Commands::Extract {
                input: Some(PathBuf::from("dump.txt")),
                output: Some(PathBuf::from("out.csv")),
            }
        );
    }

    #[test]
    fn test_athletes_with_country() {
        let args = Args::parse_from([
            "medaltally", "athletes", "Judo", "--country", "Brazil", "--json",
        ]);
        match args.command() {
            Commands::Athletes { sport, country, query } => {
                assert_eq!(sport, "Judo");
                assert_eq!(country.as_deref(), Some("Brazil"));
                assert!(query.json);
                assert!(query.export.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_sports_export_name() {
        let args = Args::parse_from(["medaltally", "sports", "Kenya", "--export", "kenya"]);
        match args.command() {
            Commands::Sports { country, query } => {
                assert_eq!(country, "Kenya");
                assert_eq!(query.export.as_deref(), Some("kenya"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_config_init() {
        let args = Args::parse_from(["medaltally", "-c", "medals.toml", "config", "--init"]);
        assert_eq!(args.command(), Commands::Config { init: true });
        assert_eq!(args.config, Some(PathBuf::from("medals.toml")));
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
        assert_eq!(Verbosity::VeryVerbose.log_directive(), "medaltally=debug");
        assert_eq!(Verbosity::Verbose.as_str(), "verbose");
    }
}
