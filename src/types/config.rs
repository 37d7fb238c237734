//! Configuration structures for museum scenarios
//!
//! A scenario describes a museum, its exhibits, and the patrons to admit. It is
//! assembled from defaults, an optional JSON file, and command line overrides,
//! in that order of increasing priority.

use crate::museum::Exhibit;
use crate::patron::Patron;
use crate::types::{Money, OutputFormat};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the museum used by the default scenario
pub const DEFAULT_MUSEUM_NAME: &str = "Denver Museum of Nature and Science";

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "museum-admissions",
    version = "0.1.0",
    about = "Museum Admissions - Admits patrons to exhibits and runs the ticket lottery",
    long_about = "Admits each patron of a museum scenario to the exhibits they are interested in and can afford, most expensive first, then draws a ticket lottery winner for every exhibit among the patrons who were priced out.

EXAMPLES:
    # Run the built-in Denver scenario
    museum-admissions

    # Use a scenario file
    museum-admissions --config scenario.json

    # Reproducible lottery draws with a JSON report
    museum-admissions --seed 42 --output-format json

    # Generate a scenario template
    museum-admissions --print-config > my-scenario.json

    # Validate a scenario without running it
    museum-admissions --config my-scenario.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Scenario file (--config flag)
    3. Default values (lowest priority)

    Supported scenario file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Scenario file path (JSON format)
    #[arg(
        short,
        long,
        help = "Scenario file path (JSON format)",
        long_help = "Path to a JSON scenario file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Name of the museum
    #[arg(long, help = "Name of the museum")]
    pub museum_name: Option<String>,

    /// Random seed for reproducible lottery draws
    #[arg(long, help = "Random seed for reproducible lottery draws")]
    pub seed: Option<u64>,

    /// Output format for the report
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the scenario report. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Directory for JSON log files
    #[arg(long, help = "Write JSON logs to daily files in this directory")]
    pub log_dir: Option<String>,

    /// Emit console logs as JSON
    #[arg(long, help = "Emit console logs as JSON")]
    pub log_json: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running the scenario
    #[arg(long, help = "Validate configuration without running the scenario")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default scenario in JSON format and exit")]
    pub print_config: bool,
}

/// An exhibit as described in a scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExhibitSpec {
    /// Exhibit name
    pub name: String,
    /// Admission cost
    pub cost: Money,
}

impl ExhibitSpec {
    /// Create a new exhibit description
    pub fn new(name: impl Into<String>, cost: Money) -> Self {
        Self { name: name.into(), cost }
    }

    /// Build the exhibit this entry describes
    pub fn build(&self) -> Exhibit {
        Exhibit::new(self.name.clone(), self.cost)
    }
}

/// A patron as described in a scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatronSpec {
    /// Patron name
    pub name: String,
    /// Starting balance
    pub spending_money: Money,
    /// Exhibit names the patron wants to see, in order
    #[serde(default)]
    pub interests: Vec<String>,
}

impl PatronSpec {
    /// Create a new patron description
    pub fn new(name: impl Into<String>, spending_money: Money, interests: &[&str]) -> Self {
        Self {
            name: name.into(),
            spending_money,
            interests: interests.iter().map(|i| i.to_string()).collect(),
        }
    }

    /// Build the patron this entry describes
    pub fn build(&self) -> Patron {
        let mut patron = Patron::new(self.name.clone(), self.spending_money);
        for interest in &self.interests {
            patron.add_interest(interest.clone());
        }
        patron
    }
}

/// Scenario file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScenarioFile {
    /// Name of the museum
    pub museum_name: Option<String>,

    /// Random seed for reproducible lottery draws
    pub seed: Option<u64>,

    /// Output format for the report
    pub output_format: Option<String>,

    /// Exhibits, in the order they are added to the museum
    pub exhibits: Option<Vec<ExhibitSpec>>,

    /// Patrons, in the order they are admitted
    pub patrons: Option<Vec<PatronSpec>>,
}

/// Configuration for a museum scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Name of the museum
    pub museum_name: String,

    /// Random seed for reproducible lottery draws
    pub seed: Option<u64>,

    /// Output format for the report
    pub output_format: String,

    /// Exhibits, in the order they are added to the museum
    pub exhibits: Vec<ExhibitSpec>,

    /// Patrons, in the order they are admitted
    pub patrons: Vec<PatronSpec>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for scenario configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigValidationError {
    /// Museum name is blank
    #[error("Museum name must not be empty")]
    EmptyMuseumName,

    /// An exhibit entry is malformed
    #[error("Invalid exhibit at index {index}: {reason}")]
    InvalidExhibit {
        /// Position of the exhibit in the scenario
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// A patron entry is malformed
    #[error("Invalid patron at index {index}: {reason}")]
    InvalidPatron {
        /// Position of the patron in the scenario
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Output format is not recognized
    #[error("Invalid output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            museum_name: DEFAULT_MUSEUM_NAME.to_string(),
            seed: None,
            output_format: "text".to_string(),
            exhibits: vec![
                ExhibitSpec::new("Gems and Minerals", 0),
                ExhibitSpec::new("Dead Sea Scrolls", 10),
                ExhibitSpec::new("IMAX", 15),
            ],
            patrons: vec![
                PatronSpec::new("TJ", 7, &["IMAX", "Dead Sea Scrolls"]),
                PatronSpec::new("Bob", 10, &["Dead Sea Scrolls", "IMAX"]),
                PatronSpec::new("Sally", 20, &["IMAX", "Dead Sea Scrolls"]),
                PatronSpec::new("Morgan", 15, &["Gems and Minerals", "Dead Sea Scrolls"]),
            ],
        }
    }
}

impl ScenarioConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let scenario_file: ScenarioFile = serde_json::from_str(&content)?;
                Ok(Self::from_scenario_file(scenario_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    fn from_scenario_file(scenario_file: ScenarioFile) -> Self {
        let defaults = Self::default();

        Self {
            museum_name: scenario_file.museum_name.unwrap_or(defaults.museum_name),
            seed: scenario_file.seed.or(defaults.seed),
            output_format: scenario_file.output_format.unwrap_or(defaults.output_format),
            exhibits: scenario_file.exhibits.unwrap_or(defaults.exhibits),
            patrons: scenario_file.patrons.unwrap_or(defaults.patrons),
        }
    }

    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.museum_name {
            config.museum_name = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the scenario
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.museum_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyMuseumName);
        }

        if self.get_output_format().is_err() {
            return Err(ConfigValidationError::InvalidOutputFormat(self.output_format.clone()));
        }

        for (index, exhibit) in self.exhibits.iter().enumerate() {
            if exhibit.name.trim().is_empty() {
                return Err(ConfigValidationError::InvalidExhibit {
                    index,
                    reason: "name must not be empty".to_string(),
                });
            }
        }

        for (index, patron) in self.patrons.iter().enumerate() {
            if patron.name.trim().is_empty() {
                return Err(ConfigValidationError::InvalidPatron {
                    index,
                    reason: "name must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}
