//! Core types and identifiers for the museum
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based identity for exhibits and patrons
//! - **Enums**: money alias and report output format
//! - **Configuration**: scenario configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use museum_admissions::types::*;
//!
//! let exhibit_id = ExhibitId::new();
//! let patron_id = PatronId::new();
//! assert!(exhibit_id.to_string().starts_with("EXH_"));
//! assert!(patron_id.to_string().starts_with("PATRON_"));
//!
//! let config = ScenarioConfig::default();
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
