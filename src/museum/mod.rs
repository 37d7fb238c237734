//! Museum, exhibits, and admission receipts
//!
//! # Overview
//!
//! - **Exhibit**: a named attraction with an admission cost
//! - **Museum**: admits patrons, tracks revenue and attendance, runs the lottery
//! - **AdmissionReceipt**: what a single admission bought and missed
//!
//! # Usage Example
//!
//! ```rust
//! use museum_admissions::museum::*;
//! use museum_admissions::patron::Patron;
//!
//! let mut museum = Museum::new("Denver Museum of Nature and Science");
//! let imax = Exhibit::new("IMAX", 15);
//! museum.add_exhibit(imax.clone());
//!
//! let mut sally = Patron::new("Sally", 20);
//! sally.add_interest("IMAX");
//!
//! let receipt = museum.admit(sally);
//! assert_eq!(receipt.remaining_balance, 5);
//! assert_eq!(museum.revenue(), 15);
//!
//! // Sally is the only one interested in IMAX who now has less than 15
//! assert_eq!(museum.announce_lottery_winner(&imax), "Sally has won the IMAX exhibit lottery");
//! ```

pub mod exhibit;
#[allow(clippy::module_inception)]
pub mod museum;
pub mod receipt;

// Re-export all public types for convenience
pub use exhibit::Exhibit;
pub use museum::Museum;
pub use receipt::{AdmissionReceipt, Ticket};
