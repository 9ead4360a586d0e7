use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PATTERN: &str = "CONTCAR_*";
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".Deleted";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Settings for one batch deletion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionConfig {
    /// Glob pattern for input files, relative to `working_dir`.
    pub pattern: String,
    /// Appended to each input file name to form its output file name.
    pub output_suffix: String,
    /// 0-based global atom indices removed from every input structure.
    pub atoms_to_delete: Vec<isize>,
    pub working_dir: PathBuf,
}

impl DeletionConfig {
    /// Output path for `input`: the same path with the suffix appended to the file name.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let mut name = OsString::from(input.as_os_str());
        name.push(&self.output_suffix);
        PathBuf::from(name)
    }

    /// Whether `path` already carries the output suffix, i.e. was produced by an earlier run.
    pub fn is_output_path(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.output_suffix))
    }
}

#[derive(Default)]
pub struct DeletionConfigBuilder {
    pattern: Option<String>,
    output_suffix: Option<String>,
    atoms_to_delete: Option<Vec<isize>>,
    working_dir: Option<PathBuf>,
}

impl DeletionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
    pub fn output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = Some(suffix.into());
        self
    }
    pub fn atoms_to_delete(mut self, indices: Vec<isize>) -> Self {
        self.atoms_to_delete = Some(indices);
        self
    }
    pub fn working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn build(self) -> Result<DeletionConfig, ConfigError> {
        let pattern = self
            .pattern
            .ok_or(ConfigError::MissingParameter("pattern"))?;
        if pattern.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "pattern",
                reason: "pattern must not be empty".to_string(),
            });
        }

        let output_suffix = self
            .output_suffix
            .ok_or(ConfigError::MissingParameter("output_suffix"))?;
        if output_suffix.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "output_suffix",
                reason: "an empty suffix would overwrite the input files".to_string(),
            });
        }
        if output_suffix.contains(std::path::is_separator) {
            return Err(ConfigError::InvalidParameter {
                name: "output_suffix",
                reason: format!("'{}' contains a path separator", output_suffix),
            });
        }

        Ok(DeletionConfig {
            pattern,
            output_suffix,
            atoms_to_delete: self
                .atoms_to_delete
                .ok_or(ConfigError::MissingParameter("atoms_to_delete"))?,
            working_dir: self.working_dir.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}
