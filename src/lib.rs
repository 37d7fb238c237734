//! Museum Admissions
//!
//! An in-memory model of a museum admitting patrons to exhibits based on their
//! interests and spending money, tracking revenue, and running a ticket lottery
//! for patrons who were priced out of an exhibit.
//!
//! # Overview
//!
//! Patrons declare interests by exhibit name. On admission the museum charges
//! each patron for the interested exhibits they can afford, most expensive
//! first, in a single greedy pass. Later, patrons who are interested in an
//! exhibit but currently cannot afford it are entered into that exhibit's
//! lottery.
//!
//! ## Quick Start
//!
//! ```rust
//! use museum_admissions::*;
//!
//! let mut museum = Museum::new("Denver Museum of Nature and Science");
//! let scrolls = Exhibit::new("Dead Sea Scrolls", 10);
//! let imax = Exhibit::new("IMAX", 15);
//! museum.add_exhibit(scrolls.clone());
//! museum.add_exhibit(imax.clone());
//!
//! let mut bob = Patron::new("Bob", 10);
//! bob.add_interest("Dead Sea Scrolls");
//! bob.add_interest("IMAX");
//! let bob_id = bob.id();
//!
//! museum.admit(bob);
//!
//! assert_eq!(museum.revenue(), 10);
//! assert_eq!(museum.patron(bob_id).unwrap().spending_money(), 0);
//! assert_eq!(museum.patrons_of_exhibits()[&scrolls.id()], vec![bob_id]);
//! assert_eq!(museum.draw_lottery_winner(&imax), Some("Bob".to_string()));
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, money, and scenario configuration
//! - [`museum`]: the museum, its exhibits, and admission receipts
//! - [`patron`]: patrons and their balances
//! - [`lottery`]: random draws and announcements
//! - [`simulation`]: scenario runner, statistics, logging, and errors
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod lottery;
pub mod museum;
pub mod patron;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    CliArgs, ConfigError, ConfigValidationError, ExhibitId, ExhibitSpec, Money, OutputFormat,
    PatronId, PatronSpec, ScenarioConfig,
};

// Museum entities
pub use museum::{AdmissionReceipt, Exhibit, Museum, Ticket};
pub use patron::Patron;

// Lottery
pub use lottery::{Lottery, LotteryOutcome, NO_WINNERS_MESSAGE};

// Scenario support
pub use simulation::{
    ExhibitAttendance, LoggingConfig, MuseumError, MuseumResult, MuseumStatistics,
    ScenarioReport, ScenarioRunner,
};
