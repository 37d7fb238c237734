//! Ticket lottery for patrons priced out of an exhibit
//!
//! The [`Lottery`] owns the random source used for draws. It can be seeded so a
//! sequence of draws is reproducible.

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ExhibitId;

/// Announcement used when nobody qualifies for a lottery
pub const NO_WINNERS_MESSAGE: &str = "No winners for this lottery";

/// Random source for lottery draws
pub struct Lottery {
    rng: Box<dyn RngCore>,
    seed: Option<u64>,
}

impl fmt::Debug for Lottery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lottery").field("seed", &self.seed).finish()
    }
}

impl Default for Lottery {
    fn default() -> Self {
        Self::new()
    }
}

impl Lottery {
    /// Create a lottery backed by the thread-local generator
    pub fn new() -> Self {
        Self { rng: Box::new(rand::thread_rng()), seed: None }
    }

    /// Create a lottery with a specific seed for reproducible draws
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)), seed: Some(seed) }
    }

    /// Seed the lottery was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Pick one entry uniformly at random, or `None` when there are no entries
    pub fn draw<'a, T>(&mut self, entries: &'a [T]) -> Option<&'a T> {
        entries.choose(&mut *self.rng)
    }
}

/// Sentence announcing the result of a draw for the named exhibit
pub fn announcement(winner: Option<&str>, exhibit_name: &str) -> String {
    match winner {
        Some(name) => format!("{} has won the {} exhibit lottery", name, exhibit_name),
        None => NO_WINNERS_MESSAGE.to_string(),
    }
}

/// Result of running one exhibit's lottery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryOutcome {
    /// Exhibit the lottery was held for
    pub exhibit_id: ExhibitId,
    /// Name of that exhibit
    pub exhibit_name: String,
    /// Names of the qualifying patrons, in admission order
    pub contestants: Vec<String>,
    /// Name of the winner, if anyone qualified
    pub winner: Option<String>,
}

impl LotteryOutcome {
    /// Whether anyone won
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Announcement sentence for this outcome
    pub fn announcement(&self) -> String {
        announcement(self.winner.as_deref(), &self.exhibit_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_from_empty_is_none() {
        let mut lottery = Lottery::new();
        let entries: Vec<String> = Vec::new();
        assert!(lottery.draw(&entries).is_none());
    }

    #[test]
    fn test_draw_returns_an_entry() {
        let mut lottery = Lottery::new();
        let entries = ["Bob", "Johnny"];
        for _ in 0..20 {
            let winner = lottery.draw(&entries).unwrap();
            assert!(entries.contains(winner));
        }
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let entries: Vec<u32> = (0..50).collect();
        let mut first = Lottery::with_seed(42);
        let mut second = Lottery::with_seed(42);

        let a: Vec<u32> = (0..10).map(|_| *first.draw(&entries).unwrap()).collect();
        let b: Vec<u32> = (0..10).map(|_| *second.draw(&entries).unwrap()).collect();

        assert_eq!(a, b);
        assert_eq!(first.seed(), Some(42));
    }

    #[test]
    fn test_announcement_text() {
        assert_eq!(announcement(Some("Bob"), "IMAX"), "Bob has won the IMAX exhibit lottery");
        assert_eq!(announcement(None, "IMAX"), NO_WINNERS_MESSAGE);
    }
}
