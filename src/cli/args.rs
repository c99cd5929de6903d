//! Command-line argument parsing for SymptomBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SymptomBuddy - Predict likely diseases from reported symptoms
#[derive(Parser, Debug)]
#[command(name = "symptombuddy")]
#[command(version)]
#[command(about = "Predict likely diseases from reported symptoms and serve prevention tips", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Address to bind (overrides config)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Symptom/disease training CSV (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub symptoms_csv: Option<PathBuf>,

    /// Disease/prevention-tip CSV (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub prevention_csv: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Train the model and start the HTTP server (default)
    Serve,

    /// Train the model, report held-out accuracy, and exit
    Evaluate,

    /// Display the effective configuration
    Config,
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

    /// Subcommand to run, `serve` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
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

    /// Default tracing filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::VeryVerbose => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_quiet() {
        let args = Args::parse_from(["symptombuddy", "-q"]);
        assert_eq!(args.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let args = Args::parse_from(["symptombuddy"]);
        assert_eq!(args.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_very_verbose() {
        let args = Args::parse_from(["symptombuddy", "-vv"]);
        assert_eq!(args.verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_verbosity_labels() {
        assert_eq!(Verbosity::Quiet.as_str(), "quiet");
        assert_eq!(Verbosity::VeryVerbose.as_str(), "very_verbose");
        assert_eq!(Verbosity::Verbose.filter_directive(), "debug");
    }

    #[test]
    fn test_default_command_is_serve() {
        let args = Args::parse_from(["symptombuddy"]);
        assert_eq!(args.command(), Commands::Serve);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from([
            "symptombuddy",
            "evaluate",
            "--symptoms-csv",
            "data/sym.csv",
            "--port",
            "8081",
        ]);
        assert_eq!(args.command(), Commands::Evaluate);
        assert_eq!(args.symptoms_csv, Some(PathBuf::from("data/sym.csv")));
        assert_eq!(args.port, Some(8081));
        assert!(args.host.is_none());
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(Verbosity::Quiet.filter_directive(), "warn");
        assert_eq!(Verbosity::Normal.filter_directive(), "info");
        assert_eq!(Verbosity::Verbose.filter_directive(), "debug");
        assert_eq!(Verbosity::VeryVerbose.filter_directive(), "trace");
    }
}
