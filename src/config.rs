use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Where the type manifest comes from and which modules to keep
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// JSON type manifest describing the library's public surface
    pub manifest: PathBuf,
    /// Substring a type's module must contain to be documented.
    /// Empty keeps every module.
    pub library_filter: String,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub layout: DirectoryLayout,
}

/// How class directories are named under the output root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryLayout {
    /// `<root>/<Name_Space>/<Class>/`
    #[default]
    Namespaced,
    /// `<root>/<Class>/`
    Flat,
}

impl DirectoryLayout {
    /// Parse a layout name as given on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "namespaced" => Some(Self::Namespaced),
            "flat" => Some(Self::Flat),
            _ => None,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("data/server/AltV.Net.json"),
            library_filter: "AltV.Net.".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("docs/api/server"),
            layout: DirectoryLayout::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file, or fall back to defaults when the file is absent.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        manifest: Option<PathBuf>,
        output: Option<PathBuf>,
        filter: Option<String>,
        layout: Option<String>,
    ) -> Result<()> {
        if let Some(manifest) = manifest {
            self.input.manifest = manifest;
        }

        if let Some(out) = output {
            self.output.directory = out;
        }

        if let Some(filter) = filter {
            self.input.library_filter = filter;
        }

        if let Some(name) = layout {
            self.output.layout = DirectoryLayout::from_name(&name).ok_or_else(|| {
                Error::config_validation(format!(
                    "unknown layout '{}' (expected 'namespaced' or 'flat')",
                    name
                ))
            })?;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.input.manifest.as_os_str().is_empty() {
            return Err(Error::config_validation("manifest path must not be empty"));
        }

        // The output root is deleted recursively before every run.
        let dir = &self.output.directory;
        if dir.as_os_str().is_empty() {
            return Err(Error::config_validation("output directory must not be empty"));
        }
        let escapes = dir.components().any(|c| c == Component::ParentDir);
        let only_cur_dir = dir.components().all(|c| c == Component::CurDir);
        if escapes || only_cur_dir || dir.parent().is_none() {
            return Err(Error::config_validation(format!(
                "refusing to use {} as output directory",
                dir.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input.manifest, PathBuf::from("data/server/AltV.Net.json"));
        assert_eq!(config.input.library_filter, "AltV.Net.");
        assert_eq!(config.output.directory, PathBuf::from("docs/api/server"));
        assert_eq!(config.output.layout, DirectoryLayout::Namespaced);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[input]
manifest = "build/client.json"
library_filter = "AltV.Net.Client"

[output]
directory = "docs/api/client"
layout = "flat"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.input.manifest, PathBuf::from("build/client.json"));
        assert_eq!(config.input.library_filter, "AltV.Net.Client");
        assert_eq!(config.output.directory, PathBuf::from("docs/api/client"));
        assert_eq!(config.output.layout, DirectoryLayout::Flat);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndirectory = \"site/api\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.output.directory, PathBuf::from("site/api"));
        assert_eq!(config.input.library_filter, "AltV.Net.");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/surfacedoc.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/surfacedoc.toml")).unwrap();
        assert_eq!(config.output.directory, PathBuf::from("docs/api/server"));
    }

    #[test]
    fn test_load_or_default_rejects_broken_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output\ndirectory = ").unwrap();
        assert!(Config::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_validation_empty_output() {
        let mut config = Config::default();
        config.output.directory = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_root_output() {
        let mut config = Config::default();
        config.output.directory = PathBuf::from("/");
        assert!(config.validate().is_err());

        config.output.directory = PathBuf::from(".");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_parent_dir_output() {
        let mut config = Config::default();
        for dir in ["..", "../..", "docs/..", "docs/../site", "./."] {
            config.output.directory = PathBuf::from(dir);
            assert!(config.validate().is_err(), "{} should be rejected", dir);
        }

        config.output.directory = PathBuf::from("./docs/api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_manifest() {
        let mut config = Config::default();
        config.input.manifest = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = Config::default();
        config
            .merge_cli(
                Some(PathBuf::from("lib.json")),
                Some(PathBuf::from("/custom/output")),
                Some(String::new()),
                Some("flat".to_string()),
            )
            .unwrap();
        assert_eq!(config.input.manifest, PathBuf::from("lib.json"));
        assert_eq!(config.output.directory, PathBuf::from("/custom/output"));
        assert_eq!(config.input.library_filter, "");
        assert_eq!(config.output.layout, DirectoryLayout::Flat);
    }

    #[test]
    fn test_merge_cli_none_keeps_values() {
        let mut config = Config::default();
        config.merge_cli(None, None, None, None).unwrap();
        assert_eq!(config.input.library_filter, "AltV.Net.");
        assert_eq!(config.output.layout, DirectoryLayout::Namespaced);
    }

    #[test]
    fn test_merge_cli_unknown_layout() {
        let mut config = Config::default();
        let err = config
            .merge_cli(None, None, None, Some("nested".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("unknown layout 'nested'"));
    }

    #[test]
    fn test_layout_parsing() {
        let toml_str = r#"layout = "flat""#;
        let output: OutputConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(output.layout, DirectoryLayout::Flat);
    }
}
