use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use fp_app::{AppError, AppResult};
use fp_series::ResultSet;

#[derive(Parser)]
#[command(name = "fp-cli")]
#[command(about = "favorprep CLI - hydraulic simulation output to burst-detection workbooks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create one workbook from a solver run
    Create {
        /// Path to the logger configuration YAML file
        #[arg(short, long)]
        config: PathBuf,
        /// Path to the solver result set (JSON Lines)
        #[arg(short, long)]
        results: PathBuf,
        /// Output workbook path
        #[arg(short, long)]
        output: PathBuf,
        /// Overwrite an existing output file
        #[arg(long, default_value_t = false)]
        confirm: bool,
    },
    /// Create one workbook per result set in a directory
    BatchCreate {
        /// Path to the logger configuration YAML file
        #[arg(short, long)]
        config: PathBuf,
        /// Directory of solver result sets (*.jsonl)
        #[arg(long)]
        results_dir: PathBuf,
        /// Directory the workbooks are written to
        #[arg(long)]
        output_dir: PathBuf,
        /// Overwrite existing output files
        #[arg(long, default_value_t = false)]
        confirm: bool,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            config,
            results,
            output,
            confirm,
        } => cmd_create(&config, &results, &output, confirm),
        Commands::BatchCreate {
            config,
            results_dir,
            output_dir,
            confirm,
        } => cmd_batch_create(&config, &results_dir, &output_dir, confirm),
    }
}

fn cmd_create(
    config_path: &Path,
    results_path: &Path,
    output: &Path,
    confirm: bool,
) -> AppResult<()> {
    if output.exists() && !confirm {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (pass --confirm to overwrite)",
            output.display()
        )));
    }

    let config = fp_project::load_yaml(config_path)?;
    let results = ResultSet::load_jsonl(results_path)?;
    fp_app::create(&config, &results, output)?;
    println!("✓ Workbook written to {}", output.display());
    Ok(())
}

fn cmd_batch_create(
    config_path: &Path,
    results_dir: &Path,
    output_dir: &Path,
    confirm: bool,
) -> AppResult<()> {
    let config = fp_project::load_yaml(config_path)?;

    let mut result_files: Vec<PathBuf> = std::fs::read_dir(results_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "jsonl"))
        .collect();
    result_files.sort();

    if result_files.is_empty() {
        println!("No result sets found in {}", results_dir.display());
        return Ok(());
    }

    std::fs::create_dir_all(output_dir)?;
    for path in result_files {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping result set with unusable name");
            continue;
        };
        let out = output_dir.join(format!("{stem}.xlsx"));
        if out.exists() && !confirm {
            println!(
                "Skipping {} (already exists, pass --confirm to overwrite)",
                out.display()
            );
            continue;
        }

        let results = ResultSet::load_jsonl(&path)?;
        fp_app::create(&config, &results, &out)?;
        println!("✓ {}", out.display());
    }
    Ok(())
}
