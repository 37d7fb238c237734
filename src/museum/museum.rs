//! The museum: exhibits, admitted patrons, revenue, and the ticket lottery

use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::lottery::{announcement, Lottery, LotteryOutcome};
use crate::museum::{AdmissionReceipt, Exhibit, Ticket};
use crate::patron::Patron;
use crate::simulation::{MuseumError, MuseumResult, MuseumStatistics};
use crate::types::{ExhibitId, Money, PatronId};

/// A museum admitting patrons to the exhibits they are interested in
///
/// The museum owns every patron it admits. Callers look admitted patrons up by
/// [`PatronId`] through [`Museum::patron`] and [`Museum::patron_mut`].
#[derive(Debug)]
pub struct Museum {
    name: String,
    /// Exhibits in insertion order, duplicates allowed
    exhibits: Vec<Exhibit>,
    /// One record per distinct patron, in first-admission order
    roster: Vec<Patron>,
    roster_index: HashMap<PatronId, usize>,
    /// Every admission in order; a readmitted patron appears more than once
    admissions: Vec<PatronId>,
    revenue: Money,
    patrons_of_exhibits: HashMap<ExhibitId, Vec<PatronId>>,
    lottery: Lottery,
}

impl Museum {
    /// Create an empty museum with an unseeded lottery
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_lottery(name, Lottery::new())
    }

    /// Create an empty museum whose lottery draws are reproducible
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::with_lottery(name, Lottery::with_seed(seed))
    }

    /// Create an empty museum using the given lottery
    pub fn with_lottery(name: impl Into<String>, lottery: Lottery) -> Self {
        let name = name.into();
        info!(museum = %name, seed = ?lottery.seed(), "Opening museum");

        Self {
            name,
            exhibits: Vec::new(),
            roster: Vec::new(),
            roster_index: HashMap::new(),
            admissions: Vec::new(),
            revenue: 0,
            patrons_of_exhibits: HashMap::new(),
            lottery,
        }
    }

    /// Museum name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exhibits in the order they were added
    pub fn exhibits(&self) -> &[Exhibit] {
        &self.exhibits
    }

    /// Total collected from admission charges
    pub fn revenue(&self) -> Money {
        self.revenue
    }

    /// Paying patrons per exhibit. An exhibit is only present once somebody paid for it.
    pub fn patrons_of_exhibits(&self) -> &HashMap<ExhibitId, Vec<PatronId>> {
        &self.patrons_of_exhibits
    }

    /// Admitted patrons in admission order, repeated once per admission
    pub fn patrons(&self) -> Vec<&Patron> {
        self.admissions.iter().filter_map(|id| self.patron(*id)).collect()
    }

    /// Distinct admitted patrons in first-admission order
    pub fn roster(&self) -> &[Patron] {
        &self.roster
    }

    /// Number of admissions processed, counting readmissions
    pub fn admission_count(&self) -> usize {
        self.admissions.len()
    }

    /// Look up an admitted patron
    pub fn patron(&self, id: PatronId) -> Option<&Patron> {
        self.roster_index.get(&id).and_then(|&idx| self.roster.get(idx))
    }

    /// Look up an admitted patron for modification
    pub fn patron_mut(&mut self, id: PatronId) -> Option<&mut Patron> {
        let idx = *self.roster_index.get(&id)?;
        self.roster.get_mut(idx)
    }

    /// First exhibit with the given name
    pub fn exhibit_by_name(&self, name: &str) -> Option<&Exhibit> {
        self.exhibits.iter().find(|exhibit| exhibit.name() == name)
    }

    /// Add an exhibit. Adding the same exhibit twice keeps both entries.
    pub fn add_exhibit(&mut self, exhibit: Exhibit) {
        debug!(exhibit = %exhibit.name(), cost = exhibit.cost(), "Adding exhibit");
        self.exhibits.push(exhibit);
    }

    /// Exhibits whose name appears in the patron's interests, in exhibit order
    pub fn recommend_exhibits(&self, patron: &Patron) -> Vec<&Exhibit> {
        recommend(&self.exhibits, patron)
    }

    /// Admit a patron and charge them for every interested exhibit they can afford
    ///
    /// The patron is recorded even if nothing is affordable. Exhibits are tried from
    /// most to least expensive and each charge is final, so an expensive purchase
    /// can leave too little for a cheaper exhibit.
    ///
    /// Passing a patron whose id is already on the roster (a clone) replaces the
    /// stored record with the passed value before charging it.
    pub fn admit(&mut self, patron: Patron) -> AdmissionReceipt {
        let id = patron.id();
        let existing = self.roster_index.get(&id).copied();
        let index = match existing {
            Some(index) => {
                warn!(
                    patron = %patron.name(),
                    previous_balance = self.roster[index].spending_money(),
                    balance = patron.spending_money(),
                    "Patron already admitted, replacing stored record"
                );
                self.roster[index] = patron;
                index
            }
            None => {
                let index = self.roster.len();
                self.roster_index.insert(id, index);
                self.roster.push(patron);
                index
            }
        };
        self.process_admission(index)
    }

    /// Admit an already-known patron again, charging them a second time
    pub fn readmit(&mut self, id: PatronId) -> MuseumResult<AdmissionReceipt> {
        let index = *self.roster_index.get(&id).ok_or(MuseumError::UnknownPatron(id))?;
        warn!(patron = %self.roster[index].name(), "Readmitting patron");
        Ok(self.process_admission(index))
    }

    fn process_admission(&mut self, index: usize) -> AdmissionReceipt {
        let Self { exhibits, roster, admissions, revenue, patrons_of_exhibits, .. } = self;

        let mut ordered = recommend(exhibits, &roster[index]);
        // Stable ascending sort then reverse: equal-cost exhibits end up in
        // reverse insertion order.
        ordered.sort_by_key(|exhibit| exhibit.cost());
        ordered.reverse();

        let patron = &mut roster[index];
        admissions.push(patron.id());

        let mut tickets = Vec::new();
        let mut priced_out = Vec::new();
        for exhibit in ordered {
            // Revenue must stay equal to the sum of charges, so a charge that
            // cannot be counted is not taken.
            let Some(total) = revenue.checked_add(exhibit.cost()) else {
                warn!(
                    patron = %patron.name(),
                    exhibit = %exhibit.name(),
                    cost = exhibit.cost(),
                    revenue = *revenue,
                    "Revenue would overflow, exhibit not charged"
                );
                priced_out.push(Ticket::from(exhibit));
                continue;
            };

            if patron.charge(exhibit.cost()) {
                *revenue = total;
                patrons_of_exhibits.entry(exhibit.id()).or_default().push(patron.id());
                debug!(
                    patron = %patron.name(),
                    exhibit = %exhibit.name(),
                    cost = exhibit.cost(),
                    remaining = patron.spending_money(),
                    "Charged admission"
                );
                tickets.push(Ticket::from(exhibit));
            } else {
                debug!(
                    patron = %patron.name(),
                    exhibit = %exhibit.name(),
                    cost = exhibit.cost(),
                    balance = patron.spending_money(),
                    "Cannot afford exhibit"
                );
                priced_out.push(Ticket::from(exhibit));
            }
        }

        let amount_charged: Money = tickets.iter().map(|t| t.cost).sum();
        info!(
            patron = %patron.name(),
            tickets = tickets.len(),
            amount_charged,
            revenue = *revenue,
            "Admitted patron"
        );

        AdmissionReceipt {
            patron_id: patron.id(),
            patron_name: patron.name().to_string(),
            admitted_at: Utc::now(),
            tickets,
            priced_out,
            amount_charged,
            remaining_balance: patron.spending_money(),
        }
    }

    /// Admitted patrons interested in each exhibit, whether or not they paid
    ///
    /// Every exhibit is a key, possibly with no patrons. Patrons are listed in
    /// admission order.
    pub fn patrons_by_exhibit_interest(&self) -> HashMap<ExhibitId, Vec<&Patron>> {
        let admitted = self.patrons();
        self.exhibits
            .iter()
            .map(|exhibit| {
                let interested = admitted
                    .iter()
                    .copied()
                    .filter(|patron| patron.is_interested_in(exhibit.name()))
                    .collect();
                (exhibit.id(), interested)
            })
            .collect()
    }

    /// Interested patrons whose current balance is below the exhibit's cost
    ///
    /// An exhibit that was never added to this museum has no contestants.
    pub fn ticket_lottery_contestants(&self, exhibit: &Exhibit) -> Vec<&Patron> {
        self.patrons_by_exhibit_interest()
            .remove(&exhibit.id())
            .unwrap_or_default()
            .into_iter()
            .filter(|patron| patron.spending_money() < exhibit.cost())
            .collect()
    }

    /// Name of a contestant chosen uniformly at random, or `None` without contestants
    pub fn draw_lottery_winner(&mut self, exhibit: &Exhibit) -> Option<String> {
        self.run_lottery(exhibit).winner
    }

    /// Draw once and announce the result
    pub fn announce_lottery_winner(&mut self, exhibit: &Exhibit) -> String {
        let winner = self.draw_lottery_winner(exhibit);
        announcement(winner.as_deref(), exhibit.name())
    }

    /// Draw a winner and keep the full contestant list alongside it
    pub fn run_lottery(&mut self, exhibit: &Exhibit) -> LotteryOutcome {
        let contestants: Vec<String> = self
            .ticket_lottery_contestants(exhibit)
            .into_iter()
            .map(|patron| patron.name().to_string())
            .collect();

        let winner = self.lottery.draw(&contestants).cloned();
        match &winner {
            Some(name) => info!(exhibit = %exhibit.name(), winner = %name, "Lottery drawn"),
            None => debug!(exhibit = %exhibit.name(), "No lottery contestants"),
        }

        LotteryOutcome {
            exhibit_id: exhibit.id(),
            exhibit_name: exhibit.name().to_string(),
            contestants,
            winner,
        }
    }

    /// Snapshot of attendance and revenue figures
    pub fn statistics(&self) -> MuseumStatistics {
        MuseumStatistics::collect(self)
    }
}

fn recommend<'a>(exhibits: &'a [Exhibit], patron: &Patron) -> Vec<&'a Exhibit> {
    exhibits.iter().filter(|exhibit| patron.is_interested_in(exhibit.name())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_museum_is_empty() {
        let museum = Museum::new("Denver Museum of Nature and Science");

        assert_eq!(museum.name(), "Denver Museum of Nature and Science");
        assert!(museum.exhibits().is_empty());
        assert!(museum.patrons().is_empty());
        assert_eq!(museum.revenue(), 0);
        assert!(museum.patrons_of_exhibits().is_empty());
    }

    #[test]
    fn test_add_exhibit_keeps_order_and_duplicates() {
        let mut museum = Museum::new("DMNS");
        let gems = Exhibit::new("Gems and Minerals", 0);
        let imax = Exhibit::new("IMAX", 15);

        museum.add_exhibit(gems.clone());
        museum.add_exhibit(imax.clone());
        museum.add_exhibit(gems.clone());

        assert_eq!(museum.exhibits(), [gems.clone(), imax, gems]);
    }

    #[test]
    fn test_recommend_exhibits_uses_exhibit_order_without_duplicates() {
        let mut museum = Museum::new("DMNS");
        let gems = Exhibit::new("Gems and Minerals", 0);
        let scrolls = Exhibit::new("Dead Sea Scrolls", 10);
        let imax = Exhibit::new("IMAX", 15);
        museum.add_exhibit(gems.clone());
        museum.add_exhibit(scrolls.clone());
        museum.add_exhibit(imax.clone());

        let mut bob = Patron::new("Bob", 20);
        bob.add_interest("Dead Sea Scrolls");
        bob.add_interest("Gems and Minerals");
        bob.add_interest("Dead Sea Scrolls");

        let mut sally = Patron::new("Sally", 20);
        sally.add_interest("IMAX");

        assert_eq!(museum.recommend_exhibits(&bob), vec![&gems, &scrolls]);
        assert_eq!(museum.recommend_exhibits(&sally), vec![&imax]);
        assert!(museum.recommend_exhibits(&Patron::new("Nobody", 5)).is_empty());
    }

    #[test]
    fn test_equal_cost_exhibits_charged_in_reverse_insertion_order() {
        let mut museum = Museum::new("DMNS");
        let first = Exhibit::new("Mummies", 5);
        let second = Exhibit::new("Dinosaurs", 5);
        museum.add_exhibit(first.clone());
        museum.add_exhibit(second.clone());

        let mut patron = Patron::new("Ana", 5);
        patron.add_interest("Mummies");
        patron.add_interest("Dinosaurs");

        let receipt = museum.admit(patron);

        assert_eq!(receipt.exhibit_names(), vec!["Dinosaurs"]);
        assert_eq!(receipt.priced_out[0].exhibit_id, first.id());
        assert_eq!(museum.patrons_of_exhibits().get(&second.id()).map(Vec::len), Some(1));
        assert!(!museum.patrons_of_exhibits().contains_key(&first.id()));
    }

    #[test]
    fn test_readmit_charges_again() {
        let mut museum = Museum::new("DMNS");
        let scrolls = Exhibit::new("Dead Sea Scrolls", 10);
        museum.add_exhibit(scrolls.clone());

        let mut bob = Patron::new("Bob", 25);
        bob.add_interest("Dead Sea Scrolls");
        let bob_id = bob.id();

        museum.admit(bob);
        let receipt = museum.readmit(bob_id).unwrap();

        assert_eq!(receipt.amount_charged, 10);
        assert_eq!(museum.patron(bob_id).unwrap().spending_money(), 5);
        assert_eq!(museum.revenue(), 20);
        assert_eq!(museum.patrons().len(), 2);
        assert_eq!(museum.roster().len(), 1);
        assert_eq!(museum.patrons_of_exhibits()[&scrolls.id()], vec![bob_id, bob_id]);
    }

    #[test]
    fn test_admitting_a_clone_replaces_existing_record() {
        let mut museum = Museum::new("DMNS");
        let imax = Exhibit::new("IMAX", 15);
        museum.add_exhibit(imax.clone());

        let mut sally = Patron::new("Sally", 20);
        sally.add_interest("IMAX");
        let sally_id = sally.id();
        let mut copy = sally.clone();

        museum.admit(sally);
        copy.deposit(100);
        let receipt = museum.admit(copy);

        // The copy arrived with 120 and is charged from that balance
        assert_eq!(receipt.exhibit_names(), vec!["IMAX"]);
        assert_eq!(receipt.remaining_balance, 105);
        assert_eq!(museum.patron(sally_id).unwrap().spending_money(), 105);
        assert_eq!(museum.revenue(), 30);
        assert_eq!(museum.admission_count(), 2);
        assert_eq!(museum.roster().len(), 1);
        assert_eq!(museum.patrons_of_exhibits()[&imax.id()], vec![sally_id, sally_id]);
    }

    #[test]
    fn test_charge_refused_when_revenue_would_overflow() {
        let mut museum = Museum::new("Mint");
        let vault = Exhibit::new("Vault", Money::MAX);
        museum.add_exhibit(vault.clone());

        let mut first = Patron::new("First", Money::MAX);
        first.add_interest("Vault");
        let mut second = Patron::new("Second", Money::MAX);
        second.add_interest("Vault");
        let first_id = first.id();

        let first_receipt = museum.admit(first);
        let second_receipt = museum.admit(second);

        assert_eq!(first_receipt.amount_charged, Money::MAX);
        assert!(!second_receipt.purchased_any());
        assert_eq!(second_receipt.priced_out[0].exhibit_id, vault.id());
        assert_eq!(second_receipt.remaining_balance, Money::MAX);
        assert_eq!(museum.revenue(), first_receipt.amount_charged + second_receipt.amount_charged);
        assert_eq!(museum.patrons_of_exhibits()[&vault.id()], vec![first_id]);
    }

    #[test]
    fn test_readmit_unknown_patron_fails() {
        let mut museum = Museum::new("DMNS");
        let stranger = PatronId::new();

        let result = museum.readmit(stranger);

        assert!(matches!(result, Err(MuseumError::UnknownPatron(id)) if id == stranger));
        assert!(museum.patrons().is_empty());
    }

    #[test]
    fn test_patron_mut_changes_are_seen_by_lottery() {
        let mut museum = Museum::new("DMNS");
        let imax = Exhibit::new("IMAX", 15);
        museum.add_exhibit(imax.clone());

        let mut tj = Patron::new("TJ", 7);
        tj.add_interest("IMAX");
        let tj_id = tj.id();
        museum.admit(tj);

        assert_eq!(museum.ticket_lottery_contestants(&imax).len(), 1);

        museum.patron_mut(tj_id).unwrap().deposit(100);
        assert!(museum.ticket_lottery_contestants(&imax).is_empty());
    }

    #[test]
    fn test_exhibit_by_name_returns_first_match() {
        let mut museum = Museum::new("DMNS");
        let first = Exhibit::new("IMAX", 15);
        museum.add_exhibit(first.clone());
        museum.add_exhibit(Exhibit::new("IMAX", 20));

        assert_eq!(museum.exhibit_by_name("IMAX"), Some(&first));
        assert!(museum.exhibit_by_name("Planetarium").is_none());
    }
}
