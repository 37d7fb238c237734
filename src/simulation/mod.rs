//! Scenario orchestration and ambient support
//!
//! This module contains the scenario runner, statistics collection, logging
//! setup, and error handling.
//!
//! # Overview
//!
//! - **ScenarioRunner**: builds a museum from a scenario and runs it end to end
//! - **MuseumStatistics**: attendance and revenue snapshot
//! - **LoggingConfig**: tracing subscriber setup
//! - **MuseumError**: error type for the fallible operations
//!
//! # Usage Example
//!
//! ```rust
//! use museum_admissions::simulation::*;
//! use museum_admissions::types::*;
//!
//! let config = ScenarioConfig { seed: Some(42), ..Default::default() };
//! let report = ScenarioRunner::new(config).run().unwrap();
//! assert_eq!(report.statistics.revenue, 35);
//! ```

pub mod error;
pub mod logging;
pub mod runner;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use runner::*;
pub use statistics::*;
