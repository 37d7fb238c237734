//! Admission receipts
//!
//! Every call to admit a patron produces a receipt listing what was bought and
//! what the patron wanted but could not afford at that point in the pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::museum::Exhibit;
use crate::types::{ExhibitId, Money, PatronId};

/// One exhibit considered during an admission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Exhibit identity
    pub exhibit_id: ExhibitId,
    /// Exhibit name
    pub exhibit_name: String,
    /// Cost at the time of admission
    pub cost: Money,
}

impl From<&Exhibit> for Ticket {
    fn from(exhibit: &Exhibit) -> Self {
        Self { exhibit_id: exhibit.id(), exhibit_name: exhibit.name().to_string(), cost: exhibit.cost() }
    }
}

/// Outcome of admitting one patron
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionReceipt {
    /// Admitted patron
    pub patron_id: PatronId,
    /// Name of the admitted patron
    pub patron_name: String,
    /// When the admission was processed
    pub admitted_at: DateTime<Utc>,
    /// Exhibits charged, in the order they were charged
    pub tickets: Vec<Ticket>,
    /// Interested exhibits the remaining balance did not cover, in the order considered
    pub priced_out: Vec<Ticket>,
    /// Total deducted from the patron
    pub amount_charged: Money,
    /// Balance left after the admission
    pub remaining_balance: Money,
}

impl AdmissionReceipt {
    /// Whether the patron bought at least one ticket
    pub fn purchased_any(&self) -> bool {
        !self.tickets.is_empty()
    }

    /// Names of the exhibits bought, in purchase order
    pub fn exhibit_names(&self) -> Vec<&str> {
        self.tickets.iter().map(|t| t.exhibit_name.as_str()).collect()
    }
}
