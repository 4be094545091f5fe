//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate markdown API pages from a library's public type surface
#[derive(Parser, Debug)]
#[command(name = "surfacedoc")]
#[command(about = "Generate markdown API pages from a library's public type surface")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Regenerate the markdown tree from a type manifest
    Generate {
        /// Type manifest (JSON) describing the library
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Output directory; deleted and recreated
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only document types whose module contains this string
        #[arg(long)]
        filter: Option<String>,

        /// Directory layout (namespaced, flat)
        #[arg(long)]
        layout: Option<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Echo every extracted member
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build the documentation model only and print it as JSON
    Extract {
        /// Type manifest (JSON) describing the library
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Only include types whose module contains this string
        #[arg(long)]
        filter: Option<String>,

        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Echo every extracted member
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let args = Args::try_parse_from(["surfacedoc", "generate"]).unwrap();
        match args.command {
            Command::Generate {
                manifest,
                output,
                filter,
                layout,
                config,
                verbose,
            } => {
                assert!(manifest.is_none());
                assert!(output.is_none());
                assert!(filter.is_none());
                assert!(layout.is_none());
                assert!(config.is_none());
                assert!(!verbose);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_with_options() {
        let args = Args::try_parse_from([
            "surfacedoc", "generate",
            "--manifest", "data/client/AltV.Net.Client.json",
            "--output", "/tmp/docs",
            "--filter", "AltV.Net.Client",
            "--layout", "flat",
            "--config", "custom.toml",
            "--verbose",
        ])
        .unwrap();

        match args.command {
            Command::Generate {
                manifest,
                output,
                filter,
                layout,
                config,
                verbose,
            } => {
                assert_eq!(manifest, Some(PathBuf::from("data/client/AltV.Net.Client.json")));
                assert_eq!(output, Some(PathBuf::from("/tmp/docs")));
                assert_eq!(filter.as_deref(), Some("AltV.Net.Client"));
                assert_eq!(layout.as_deref(), Some("flat"));
                assert_eq!(config, Some(PathBuf::from("custom.toml")));
                assert!(verbose);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_empty_filter() {
        let args = Args::try_parse_from(["surfacedoc", "generate", "--filter", ""]).unwrap();
        match args.command {
            Command::Generate { filter, .. } => assert_eq!(filter.as_deref(), Some("")),
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_extract_with_output() {
        let args = Args::try_parse_from([
            "surfacedoc", "extract", "--manifest", "lib.json", "-o", "model.json",
        ])
        .unwrap();
        match args.command {
            Command::Extract {
                manifest, output, ..
            } => {
                assert_eq!(manifest, Some(PathBuf::from("lib.json")));
                assert_eq!(output, Some(PathBuf::from("model.json")));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = Args::try_parse_from(["surfacedoc", "version"]).unwrap();
        assert!(matches!(args.command, Command::Version));
    }
}
