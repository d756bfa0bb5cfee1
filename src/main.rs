use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use linkplan::catalog::{Catalog, JsonCatalog};
use linkplan::config::Config;
use linkplan::links::{build_links, read_rows, Band};
use linkplan::pipeline;
use linkplan::recommend::Wgs84;

#[derive(Parser)]
#[command(name = "linkplan")]
#[command(about = "Point-to-point link planning and equipment selection")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "config.yaml")]
    config: PathBuf,
    /// Device catalog; overrides `database.path` from the configuration
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a site list and show the links it describes
    Validate { rows: PathBuf },
    /// Select equipment for every link and write the project and BOM
    Run { rows: PathBuf },
    /// List the devices of one frequency band
    Catalog { band: String },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config {}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| config.database.path.clone());

    match cli.command {
        Commands::Validate { rows } => validate(&rows, &config),
        Commands::Run { rows } => run(&rows, &config, &catalog_path),
        Commands::Catalog { band } => list_catalog(&band, &catalog_path),
    }
}

fn validate(path: &Path, config: &Config) -> ExitCode {
    let rows = match read_rows(path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match build_links(&rows, &config.project) {
        Ok(batch) => {
            println!(
                "{} links valid, {} rejected",
                batch.links.len(),
                batch.rejected.len()
            );
            for link in &batch.links {
                let req = &link.requirements;
                println!(
                    "  {}: {} GHz, {} MHz, {} Mbps, {}%",
                    link.label,
                    req.band,
                    req.bandwidth.key(),
                    req.capacity,
                    req.availability
                );
            }
            for rejected in &batch.rejected {
                println!("  {}: {}", rejected.label, rejected.error);
            }
            if batch.links.is_empty() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, config: &Config, catalog_path: &Path) -> ExitCode {
    let catalog = match JsonCatalog::from_file(catalog_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load catalog {}: {}", catalog_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run_file(path, config, &catalog, &Wgs84) {
        Ok((outcome, written)) => {
            println!(
                "{} links planned, {} skipped",
                outcome.resolved.len(),
                outcome.skipped.len()
            );
            for line in outcome.bom_lines(config) {
                println!("  {}", line);
            }
            println!("Project: {}", written.project.display());
            println!("BOM: {}", written.bom.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn list_catalog(band: &str, catalog_path: &Path) -> ExitCode {
    let Some(band) = Band::parse(band) else {
        eprintln!("Unknown band '{}', expected one of 3, 4, 5, 6, 28, 70", band);
        return ExitCode::FAILURE;
    };

    let catalog = match JsonCatalog::from_file(catalog_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load catalog {}: {}", catalog_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let table = match catalog.band_table(band) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Catalog error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if table.is_empty() {
        let bands: Vec<&str> = catalog.bands().into_iter().map(Band::code).collect();
        println!("No devices for band {} (available: {})", band, bands.join(", "));
        return ExitCode::SUCCESS;
    }

    println!("Band {} GHz, {} devices", band, table.len());
    for device in table {
        let bandwidths: Vec<&str> = device.capacity.keys().map(String::as_str).collect();
        println!(
            "  {} [{}] {} ({}), bandwidths: {}",
            device.name,
            device.family,
            device.model,
            device.mount,
            bandwidths.join(", ")
        );
    }
    ExitCode::SUCCESS
}
