//! tierdex: compile class and chain difficulty data.
//!
//! Commands:
//! - `tierdex compile`: validate, sort and write everything under `dist/`
//! - `tierdex templates`: scaffold placeholder files for missing classes/chains
//!
//! Exit codes:
//! - 0: Success
//! - 1: Compiled, but validation errors were found
//! - 2: Could not run (I/O, parse or config error)

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tierdex_data::config::CONFIG_FILE;
use tierdex_data::{BuildError, Config, compile_with_progress, generate_templates};

mod report;

/// Exit code when the build completed but produced validation errors.
const VALIDATION_EXIT_CODE: i32 = 1;

/// Exit code when the build could not run at all.
const FATAL_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(name = "tierdex", version, about = "Compile class and chain difficulty data")]
struct Cli {
    /// Project root holding data/, dist/ and tierdex.toml
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file (default: <root>/tierdex.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and sort every source file and write the compiled outputs
    Compile {
        /// Source directory containing classes/ and chains/
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Output directory
        #[arg(long)]
        dist_dir: Option<PathBuf>,
    },
    /// Create placeholder source files for classes and chains that have none
    Templates {
        /// Source directory containing classes/ and chains/
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("tierdex_data=debug,tierdex=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            FATAL_EXIT_CODE
        }
    };
    std::process::exit(exit_code);
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(|| cli.root.join(CONFIG_FILE))
}

fn run(cli: Cli) -> Result<i32, BuildError> {
    let config = Config::load(&config_path(&cli))?;
    tracing::debug!(root = %cli.root.display(), "loaded configuration");

    match cli.command {
        Commands::Compile { data_dir, dist_dir } => {
            let layout = config.layout(&cli.root, data_dir.as_deref(), dist_dir.as_deref());
            let compiled = compile_with_progress(&layout, report::print_progress)?;
            report::print_compile(&compiled);
            Ok(if compiled.is_clean() {
                0
            } else {
                VALIDATION_EXIT_CODE
            })
        }
        Commands::Templates { data_dir } => {
            let layout = config.layout(&cli.root, data_dir.as_deref(), None);
            let templates = generate_templates(
                &layout,
                &config.class_targets(),
                &config.chain_targets(),
            )?;
            report::print_templates(&templates);
            Ok(0)
        }
    }
}
