use crate::cli::Cli;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use poscar_prune::engine::progress::ProgressReporter;
use poscar_prune::workflows;
use tracing::{info, warn};

pub fn run(args: &Cli) -> Result<()> {
    let config = config::resolve(args)?;
    info!(
        "Deleting atoms {:?} from files matching '{}' in {:?}",
        config.atoms_to_delete, config.pattern, config.working_dir
    );

    if args.dry_run {
        let inputs = workflows::delete::discover_inputs(&config)?;
        println!("Input files: {:?}", inputs);
        for input in &inputs {
            println!(
                "  {} -> {}",
                input.display(),
                config.output_path_for(input).display()
            );
        }
        return Ok(());
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let summary = workflows::delete::run(&config, &reporter)?;

    if summary.files.is_empty() {
        warn!("No files were processed.");
        println!("Warning: no files matched '{}'.", config.pattern);
        return Ok(());
    }

    let inputs: Vec<_> = summary.files.iter().map(|f| &f.input).collect();
    println!("Input files: {:?}", inputs);
    for file in &summary.files {
        println!(
            "  {} -> {} ({} -> {} atoms)",
            file.input.display(),
            file.output.display(),
            file.atoms_before,
            file.atoms_after
        );
    }
    Ok(())
}
