//! Museum patrons
//!
//! A patron carries a spending balance and an ordered list of interests. The
//! balance only goes down through [`Patron::charge`], which refuses any charge
//! the patron cannot cover.

use crate::types::{Money, PatronId};
use serde::{Deserialize, Serialize};

/// A visitor with a budget and a list of exhibit names they want to see
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    id: PatronId,
    name: String,
    spending_money: Money,
    interests: Vec<String>,
}

impl Patron {
    /// Create a new patron with no interests
    pub fn new(name: impl Into<String>, spending_money: Money) -> Self {
        Self { id: PatronId::new(), name: name.into(), spending_money, interests: Vec::new() }
    }

    /// Unique identifier of the patron
    pub fn id(&self) -> PatronId {
        self.id
    }

    /// Patron name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current balance
    pub fn spending_money(&self) -> Money {
        self.spending_money
    }

    /// Exhibit names in the order they were added, duplicates included
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Append an interest. Nothing checks that an exhibit by that name exists.
    pub fn add_interest(&mut self, exhibit_name: impl Into<String>) {
        self.interests.push(exhibit_name.into());
    }

    /// Exact-match test against the patron's interests
    pub fn is_interested_in(&self, exhibit_name: &str) -> bool {
        self.interests.iter().any(|interest| interest == exhibit_name)
    }

    /// Whether the current balance covers `amount`
    pub fn can_afford(&self, amount: Money) -> bool {
        self.spending_money >= amount
    }

    /// Deduct `amount` if affordable. Returns whether the charge was applied.
    pub fn charge(&mut self, amount: Money) -> bool {
        if !self.can_afford(amount) {
            return false;
        }
        self.spending_money -= amount;
        true
    }

    /// Overwrite the balance
    pub fn set_spending_money(&mut self, amount: Money) {
        self.spending_money = amount;
    }

    /// Add to the balance
    pub fn deposit(&mut self, amount: Money) {
        self.spending_money = self.spending_money.saturating_add(amount);
    }
}
