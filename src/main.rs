// Museum Admissions - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/museum-admissions
// ```
//
// Or with a scenario file:
//
// ```console
// $ ./target/release/museum-admissions --config scenario.json --seed 42 --output-format json
// ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use museum_admissions::simulation::{LoggingConfig, MuseumError, ScenarioRunner};
use museum_admissions::types::{CliArgs, ScenarioConfig};
use std::io::{self, IsTerminal};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match ScenarioConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = init_logging(&args) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args) {
        let category = e.downcast_ref::<MuseumError>().map_or("Setup", MuseumError::category);
        error!(category, "Museum admissions failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(args: &CliArgs) -> Result<()> {
    let mut logging = if args.debug {
        LoggingConfig::debug()
    } else if args.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::quiet()
    };

    if args.log_json {
        logging = logging.with_json_format();
    }
    if !io::stderr().is_terminal() {
        logging = logging.without_ansi();
    }
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir.clone());
    }

    logging.init().map_err(|e| anyhow!(e))
}

fn run(args: CliArgs) -> Result<()> {
    let dry_run = args.dry_run;

    let config = ScenarioConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let format = config.get_output_format().map_err(|e| anyhow!(e))?;

    info!(
        museum = %config.museum_name,
        exhibits = config.exhibits.len(),
        patrons = config.patrons.len(),
        "Configuration loaded and validated"
    );

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - scenario will not be executed.");
        eprintln!(
            "Museum: {} ({} exhibits, {} patrons)",
            config.museum_name,
            config.exhibits.len(),
            config.patrons.len()
        );
        return Ok(());
    }

    let report = ScenarioRunner::new(config).run().context("Scenario run failed")?;
    println!("{}", report.render(format)?);

    info!("Museum admissions completed successfully");
    Ok(())
}
