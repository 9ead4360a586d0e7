use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "poscar-prune - Remove atoms from a batch of POSCAR/CONTCAR files and renumber species counts.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Glob pattern selecting the input files [default: CONTCAR_*]
    #[arg(short, long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Suffix appended to each input file name to form the output name [default: .Deleted]
    #[arg(short, long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// 0-based atom indices to delete, as a comma-separated list with optional ranges
    /// (e.g. '2,5,7-9') [default: 2,5,7,18]
    #[arg(short, long, value_name = "LIST", allow_hyphen_values = true)]
    pub atoms: Option<String>,

    /// Directory in which the pattern is expanded [default: .]
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S atoms=0,3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// List the files that would be processed without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
