use crate::core::io::poscar::PoscarFile;
use crate::core::io::traits::StructureFile;
use crate::engine::config::DeletionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub atoms_before: usize,
    pub atoms_after: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    pub files: Vec<ProcessedFile>,
}

/// Lists the regular files matching the configured pattern, in sorted order.
///
/// Files whose name already ends with the output suffix are skipped so that
/// outputs of a previous run are never processed again.
pub fn discover_inputs(config: &DeletionConfig) -> Result<Vec<PathBuf>, EngineError> {
    let full_pattern = if config.working_dir == Path::new(".") {
        config.pattern.clone()
    } else {
        let dir = Pattern::escape(&config.working_dir.to_string_lossy());
        Path::new(&dir)
            .join(&config.pattern)
            .to_string_lossy()
            .into_owned()
    };
    debug!("Expanding file pattern '{}'", full_pattern);

    let entries =
        glob::glob_with(&full_pattern, MATCH_OPTIONS).map_err(|source| EngineError::Pattern {
            pattern: full_pattern.clone(),
            source,
        })?;

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| EngineError::Io {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if !path.is_file() {
            debug!("Skipping non-file match {:?}", path);
            continue;
        }
        if config.is_output_path(&path) {
            debug!("Skipping previous output {:?}", path);
            continue;
        }
        inputs.push(path);
    }
    inputs.sort();
    Ok(inputs)
}

/// Reads `input`, removes the configured atoms, and writes the result next to it.
///
/// Nothing is written unless both reading and deletion succeed.
pub fn process_file(input: &Path, config: &DeletionConfig) -> Result<ProcessedFile, EngineError> {
    let output = config.output_path_for(input);

    let structure = PoscarFile::read_from_path(input).map_err(|source| EngineError::Format {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(
        "Read {:?}: {} atoms in species {:?}",
        input,
        structure.total_atoms(),
        structure.elements
    );

    let edited = structure
        .delete_atoms(&config.atoms_to_delete)
        .map_err(|source| EngineError::Deletion {
            path: input.to_path_buf(),
            source,
        })?;

    PoscarFile::write_to_path(&edited, &output).map_err(|source| EngineError::Write {
        path: output.clone(),
        source,
    })?;
    debug!(
        "Wrote {:?}: {} atoms in species {:?}",
        output,
        edited.total_atoms(),
        edited.elements
    );

    Ok(ProcessedFile {
        input: input.to_path_buf(),
        output,
        atoms_before: structure.total_atoms(),
        atoms_after: edited.total_atoms(),
    })
}

/// Runs a batch deletion over every file matched by `config`.
///
/// Files are processed one at a time in sorted order. The first error aborts the
/// batch: outputs already written are kept and later inputs are left untouched.
#[instrument(skip_all, name = "deletion_workflow")]
pub fn run(
    config: &DeletionConfig,
    reporter: &ProgressReporter,
) -> Result<DeletionSummary, EngineError> {
    let inputs = discover_inputs(config)?;
    info!("Input files: {:?}", inputs);
    if inputs.is_empty() {
        warn!(
            "No input files matched '{}' in {:?}.",
            config.pattern, config.working_dir
        );
    }

    reporter.report(Progress::TaskStart {
        total_steps: inputs.len() as u64,
    });

    let mut summary = DeletionSummary::default();
    for input in &inputs {
        reporter.report(Progress::Message(input.display().to_string()));
        let processed = process_file(input, config)?;
        info!(
            "{:?} -> {:?} ({} -> {} atoms)",
            processed.input, processed.output, processed.atoms_before, processed.atoms_after
        );
        summary.files.push(processed);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    Ok(summary)
}
