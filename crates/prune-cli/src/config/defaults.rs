use poscar_prune::engine::config::{DEFAULT_OUTPUT_SUFFIX, DEFAULT_PATTERN};
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub pattern: String,
    pub suffix: String,
    pub atoms: Vec<isize>,
    pub directory: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            atoms: vec![2, 5, 7, 18],
            directory: PathBuf::from("."),
        }
    }
}
