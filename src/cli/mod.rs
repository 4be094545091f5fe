//! CLI module for surfacedoc

mod args;

pub use args::{Args, Command};

use crate::config::Config;
use crate::error::Result;
use crate::{logging, model::ClassRecord};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_CONFIG: &str = "surfacedoc.toml";

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Generate {
            manifest,
            output,
            filter,
            layout,
            config,
            verbose,
        } => {
            // The bar only draws on a terminal; elsewhere INFO lines report progress.
            let progress = !verbose && std::io::stderr().is_terminal();
            logging::init(verbose, progress);

            let mut cfg = load_config(config.as_deref())?;
            cfg.merge_cli(manifest, output, filter, layout)?;
            cfg.validate()?;

            let classes = build_model(&cfg)?;

            println!("Generating pages in {}...", cfg.output.directory.display());
            let report = crate::generate_docs(&classes, &cfg, progress)?;

            println!("{}", report.summary());
            println!("Documentation written to: {}", cfg.output.directory.display());
            Ok(())
        }

        Command::Extract {
            manifest,
            filter,
            output,
            config,
            verbose,
        } => {
            logging::init(verbose, false);

            let mut cfg = load_config(config.as_deref())?;
            cfg.merge_cli(manifest, None, filter, None)?;
            cfg.validate()?;

            let classes = build_model(&cfg)?;
            let json = serde_json::to_string_pretty(&classes)?;

            match output {
                Some(path) => write_model(&path, &json)?,
                None => println!("{}", json),
            }
            Ok(())
        }

        Command::Version => {
            println!("surfacedoc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Explicit `--config`, else `surfacedoc.toml` when present, else defaults
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG)),
    }
}

fn build_model(cfg: &Config) -> Result<Vec<ClassRecord>> {
    let classes = crate::extract_model(cfg)?;
    // Progress goes to stderr so `extract` can pipe its JSON.
    eprintln!(
        "Loaded {}: {} classes matching '{}'",
        cfg.input.manifest.display(),
        classes.len(),
        cfg.input.library_filter
    );
    Ok(classes)
}

fn write_model(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    eprintln!("Model written to: {}", path.display());
    Ok(())
}
