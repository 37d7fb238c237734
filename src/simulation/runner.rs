//! Scenario runner
//!
//! Builds a museum from a [`ScenarioConfig`], admits every patron in order, and
//! holds a lottery for every exhibit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::{info, instrument};

use crate::lottery::LotteryOutcome;
use crate::museum::{AdmissionReceipt, Museum};
use crate::simulation::{MuseumResult, MuseumStatistics};
use crate::types::{OutputFormat, ScenarioConfig};

/// Everything a scenario run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Museum name
    pub museum_name: String,
    /// Lottery seed, if the run was reproducible
    pub seed: Option<u64>,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// One receipt per admission, in admission order
    pub admissions: Vec<AdmissionReceipt>,
    /// One lottery per exhibit entry, in exhibit order
    pub lotteries: Vec<LotteryOutcome>,
    /// Final attendance and revenue figures
    pub statistics: MuseumStatistics,
}

impl ScenarioReport {
    /// Render the report in the requested format
    pub fn render(&self, format: OutputFormat) -> MuseumResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = self.statistics.to_string();

        out.push_str("\nAdmissions:\n");
        for receipt in &self.admissions {
            let bought = if receipt.purchased_any() {
                receipt.exhibit_names().join(", ")
            } else {
                "nothing".to_string()
            };
            // Writing to a String cannot fail
            let _ = writeln!(
                out,
                "  {} bought {} for {} ({} left)",
                receipt.patron_name, bought, receipt.amount_charged, receipt.remaining_balance
            );
        }

        out.push_str("\nLotteries:\n");
        for lottery in &self.lotteries {
            let _ = writeln!(out, "  {}: {}", lottery.exhibit_name, lottery.announcement());
        }
        out
    }
}

/// Runs a configured scenario against a fresh museum
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: ScenarioConfig,
}

impl ScenarioRunner {
    /// Create a runner for a scenario
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    /// The scenario this runner executes
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Build the museum with all exhibits added and nobody admitted yet
    pub fn build_museum(&self) -> Museum {
        let mut museum = match self.config.seed {
            Some(seed) => Museum::with_seed(self.config.museum_name.clone(), seed),
            None => Museum::new(self.config.museum_name.clone()),
        };
        for spec in &self.config.exhibits {
            museum.add_exhibit(spec.build());
        }
        museum
    }

    /// Validate the scenario, admit every patron, and hold every lottery
    #[instrument(skip(self), fields(museum = %self.config.museum_name, patrons = self.config.patrons.len()))]
    pub fn run(&self) -> MuseumResult<ScenarioReport> {
        self.config.validate()?;

        let mut museum = self.build_museum();

        let admissions: Vec<AdmissionReceipt> =
            self.config.patrons.iter().map(|spec| museum.admit(spec.build())).collect();

        let exhibits = museum.exhibits().to_vec();
        let lotteries: Vec<LotteryOutcome> =
            exhibits.iter().map(|exhibit| museum.run_lottery(exhibit)).collect();

        let statistics = museum.statistics();
        info!(
            admissions = statistics.total_admissions,
            revenue = statistics.revenue,
            winners = lotteries.iter().filter(|l| l.has_winner()).count(),
            "Scenario complete"
        );

        Ok(ScenarioReport {
            museum_name: museum.name().to_string(),
            seed: self.config.seed,
            generated_at: Utc::now(),
            admissions,
            lotteries,
            statistics,
        })
    }
}
