// Markdown site generator
//
// Writes the documentation tree: one directory per class holding index.md,
// one page per property and per method, plus the root index.md.

use crate::config::{DirectoryLayout, OutputConfig};
use crate::error::Result;
use crate::model::ClassRecord;
use crate::output::templates::{IndexEntry, PageRenderer};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration for site generation
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Output root; deleted and recreated on every run
    pub output_dir: PathBuf,
    pub layout: DirectoryLayout,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for SiteConfig {
    fn from(output: &OutputConfig) -> Self {
        Self {
            output_dir: output.directory.clone(),
            layout: output.layout,
        }
    }
}

/// Markdown site generator
pub struct SiteGenerator {
    config: SiteConfig,
    renderer: PageRenderer,
    progress: bool,
}

impl SiteGenerator {
    /// Create a new site generator
    pub fn new(config: SiteConfig) -> Result<Self> {
        let renderer = PageRenderer::new()?;
        Ok(Self {
            config,
            renderer,
            progress: false,
        })
    }

    /// Show a progress bar over the classes
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Regenerate the whole tree from the model
    pub fn generate(&self, classes: &[ClassRecord]) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();

        self.reset_output_dir()?;

        let progress = if self.progress {
            let pb = ProgressBar::new(classes.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut entries = Vec::with_capacity(classes.len());

        for class in classes {
            if let Some(ref pb) = progress {
                pb.set_message(class.qualified_name());
                pb.inc(1);
            }

            report.pages_written += self.generate_class(class)?;
            report.classes += 1;

            entries.push(IndexEntry {
                link: format!("{}/index.html", self.class_link(class)),
                label: format!("{}.{}", class.namespace, class.name),
            });
        }

        let index = self.renderer.render_root_index(&entries)?;
        fs::write(self.output_dir().join("index.md"), index)?;
        report.pages_written += 1;

        if let Some(pb) = progress {
            pb.finish_with_message("Pages written");
        }

        Ok(report)
    }

    /// Delete the output root if present and create it empty
    fn reset_output_dir(&self) -> Result<()> {
        let root = self.output_dir();
        if root.exists() {
            fs::remove_dir_all(root)?;
        }
        fs::create_dir_all(root)?;
        Ok(())
    }

    /// Write the pages of one class, returning how many were written
    fn generate_class(&self, class: &ClassRecord) -> Result<usize> {
        let dir = self.class_dir(class);
        fs::create_dir_all(&dir)?;

        let index_path = dir.join("index.md");
        fs::write(&index_path, self.renderer.render_class_index(class)?)?;
        info!(path = %index_path.display(), "wrote class index");
        let mut written = 1;

        for property in class.documented_properties() {
            let page = self.renderer.render_property(property)?;
            fs::write(dir.join(format!("{}.md", property.name)), page)?;
            written += 1;
        }

        // Overloads share a file name; the last one written stays.
        for method in &class.methods {
            let page = self.renderer.render_method(class, method)?;
            fs::write(dir.join(format!("{}.md", method.name)), page)?;
            written += 1;
        }

        Ok(written)
    }

    /// Directory of a class relative to the output root, `/`-separated
    pub fn class_link(&self, class: &ClassRecord) -> String {
        match self.config.layout {
            DirectoryLayout::Namespaced => {
                format!("{}/{}", namespace_dir(&class.namespace), class.name)
            }
            DirectoryLayout::Flat => class.name.clone(),
        }
    }

    /// Directory a class's pages are written to
    pub fn class_dir(&self, class: &ClassRecord) -> PathBuf {
        let root = &self.config.output_dir;
        match self.config.layout {
            DirectoryLayout::Namespaced => root
                .join(namespace_dir(&class.namespace))
                .join(&class.name),
            DirectoryLayout::Flat => root.join(&class.name),
        }
    }

    /// Get the output directory
    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }
}

/// `AltV.Net.Data` becomes `AltV_Net_Data`
pub fn namespace_dir(namespace: &str) -> String {
    namespace.replace('.', "_")
}

/// Report of what was generated
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub classes: usize,
    /// Files written, counting overwritten overload pages once per write
    pub pages_written: usize,
}

impl GenerationReport {
    pub fn summary(&self) -> String {
        format!(
            "Documented {} classes, wrote {} pages",
            self.classes, self.pages_written
        )
    }
}
