mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use defaults::DefaultsConfig;
use poscar_prune::engine::config::{DeletionConfig, DeletionConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialDeletionConfig {
    pattern: Option<String>,
    suffix: Option<String>,
    atoms: Option<Vec<isize>>,
    directory: Option<PathBuf>,
}

impl PartialDeletionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final batch settings.
    ///
    /// Precedence is command-line flag, then `--set`, then config file, then built-in default.
    pub fn merge_with_cli(mut self, args: &Cli) -> Result<DeletionConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let atoms = match &args.atoms {
            Some(list) => {
                parser::parse_index_list(list).map_err(|e| CliError::Argument(e.to_string()))?
            }
            None => self.atoms.unwrap_or(defaults.atoms),
        };

        DeletionConfigBuilder::new()
            .pattern(
                args.pattern
                    .clone()
                    .or(self.pattern)
                    .unwrap_or(defaults.pattern),
            )
            .output_suffix(args.suffix.clone().or(self.suffix).unwrap_or(defaults.suffix))
            .atoms_to_delete(atoms)
            .working_dir(
                args.dir
                    .clone()
                    .or(self.directory)
                    .unwrap_or(defaults.directory),
            )
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key.trim() {
                "pattern" => self.pattern = Some(value_str.to_string()),
                "suffix" => self.suffix = Some(value_str.to_string()),
                "directory" => self.directory = Some(PathBuf::from(value_str)),
                "atoms" => {
                    self.atoms = Some(parser::parse_index_list(value_str).map_err(|e| {
                        CliError::Config(format!("Invalid value for {}: {}", key, e))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Loads the config file named on the command line (if any) and merges it with the arguments.
pub fn resolve(args: &Cli) -> Result<DeletionConfig> {
    let partial = match &args.config {
        Some(path) => PartialDeletionConfig::from_file(path)?,
        None => PartialDeletionConfig::default(),
    };
    partial.merge_with_cli(args)
}
