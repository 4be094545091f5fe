//! surfacedoc - Generate markdown API pages from a library's public type surface
//!
//! Reads a type manifest describing a compiled library, builds a model of
//! its public classes and writes one markdown page per class, property and
//! method, linked from a root index.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;

use tracing::info;

// Re-export main types
pub use catalog::{ManifestCatalog, TypeCatalog, TypeDescriptor};
pub use config::{Config, DirectoryLayout};
pub use error::{Error, Result};
pub use model::{ClassRecord, Extractor};
pub use output::{GenerationReport, PageRenderer, SiteConfig, SiteGenerator};

/// Load the configured manifest and build the documentation model
pub fn extract_model(config: &Config) -> Result<Vec<ClassRecord>> {
    let catalog = ManifestCatalog::load(&config.input.manifest)?;
    let extractor = Extractor::new(config.input.library_filter.clone());
    info!(
        library = catalog.library.as_deref().unwrap_or("unnamed"),
        filter = extractor.library_filter(),
        "loaded manifest"
    );
    Ok(extractor.extract(&catalog))
}

/// Replace the configured output directory with pages for `classes`
pub fn generate_docs(
    classes: &[ClassRecord],
    config: &Config,
    progress: bool,
) -> Result<GenerationReport> {
    let generator = SiteGenerator::new(SiteConfig::from(&config.output))?.with_progress(progress);
    info!(root = %generator.output_dir().display(), "regenerating output");
    generator.generate(classes)
}
