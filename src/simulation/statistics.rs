//! Statistics collection and reporting
//!
//! A [`MuseumStatistics`] snapshot is computed from a museum's current state.
//! Lottery contestant counts use current balances, so a snapshot taken after a
//! patron tops up may show fewer contestants than one taken right after admission.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::museum::Museum;
use crate::types::{ExhibitId, Money};

/// Attendance figures for one exhibit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitAttendance {
    /// Exhibit identity
    pub exhibit_id: ExhibitId,
    /// Exhibit name
    pub name: String,
    /// Admission cost
    pub cost: Money,
    /// Number of paid admissions
    pub attendees: usize,
    /// Number of admitted patrons interested in the exhibit
    pub interested: usize,
    /// Number of interested patrons who currently cannot afford it
    pub lottery_contestants: usize,
}

impl ExhibitAttendance {
    /// Revenue this exhibit brought in, saturating at [`Money::MAX`]
    pub fn revenue(&self) -> Money {
        let attendees = Money::try_from(self.attendees).unwrap_or(Money::MAX);
        self.cost.saturating_mul(attendees)
    }
}

/// Snapshot of a museum's attendance and revenue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumStatistics {
    /// Museum name
    pub museum_name: String,
    /// Number of exhibit entries
    pub total_exhibits: usize,
    /// Number of admissions, readmissions included
    pub total_admissions: usize,
    /// Number of distinct patrons admitted
    pub unique_patrons: usize,
    /// Number of exhibit tickets sold
    pub tickets_sold: usize,
    /// Total revenue
    pub revenue: Money,
    /// Distinct patrons who never bought a ticket
    pub patrons_without_tickets: usize,
    /// Per-exhibit figures in exhibit order
    pub exhibits: Vec<ExhibitAttendance>,
}

impl MuseumStatistics {
    /// Compute a snapshot from the museum's current state
    pub fn collect(museum: &Museum) -> Self {
        let paid = museum.patrons_of_exhibits();
        let interest = museum.patrons_by_exhibit_interest();

        let exhibits = museum
            .exhibits()
            .iter()
            .map(|exhibit| ExhibitAttendance {
                exhibit_id: exhibit.id(),
                name: exhibit.name().to_string(),
                cost: exhibit.cost(),
                attendees: paid.get(&exhibit.id()).map_or(0, Vec::len),
                interested: interest.get(&exhibit.id()).map_or(0, Vec::len),
                lottery_contestants: museum.ticket_lottery_contestants(exhibit).len(),
            })
            .collect();

        let patrons_without_tickets = museum
            .roster()
            .iter()
            .filter(|patron| !paid.values().any(|ids| ids.contains(&patron.id())))
            .count();

        Self {
            museum_name: museum.name().to_string(),
            total_exhibits: museum.exhibits().len(),
            total_admissions: museum.admission_count(),
            unique_patrons: museum.roster().len(),
            tickets_sold: paid.values().map(Vec::len).sum(),
            revenue: museum.revenue(),
            patrons_without_tickets,
            exhibits,
        }
    }

    /// Average revenue per admission
    pub fn revenue_per_admission(&self) -> f64 {
        if self.total_admissions == 0 {
            return 0.0;
        }
        self.revenue as f64 / self.total_admissions as f64
    }
}

impl fmt::Display for MuseumStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.museum_name)?;
        writeln!(f, "Exhibits:               {}", self.total_exhibits)?;
        writeln!(
            f,
            "Admissions:             {} ({} unique patrons)",
            self.total_admissions, self.unique_patrons
        )?;
        writeln!(f, "Tickets sold:           {}", self.tickets_sold)?;
        writeln!(
            f,
            "Revenue:                {} ({:.2} per admission)",
            self.revenue,
            self.revenue_per_admission()
        )?;
        writeln!(f, "Patrons without ticket: {}", self.patrons_without_tickets)?;
        for exhibit in &self.exhibits {
            writeln!(
                f,
                "  {} (cost {}): {} attended, {} interested, {} in lottery",
                exhibit.name,
                exhibit.cost,
                exhibit.attendees,
                exhibit.interested,
                exhibit.lottery_contestants
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::museum::Exhibit;
    use crate::patron::Patron;

    #[test]
    fn test_empty_museum_statistics() {
        let museum = Museum::new("Empty");
        let stats = museum.statistics();

        assert_eq!(stats.total_exhibits, 0);
        assert_eq!(stats.total_admissions, 0);
        assert_eq!(stats.revenue, 0);
        assert_eq!(stats.revenue_per_admission(), 0.0);
        assert!(stats.exhibits.is_empty());
    }

    #[test]
    fn test_statistics_counts() {
        let mut museum = Museum::new("DMNS");
        museum.add_exhibit(Exhibit::new("Dead Sea Scrolls", 10));
        museum.add_exhibit(Exhibit::new("IMAX", 15));

        let mut tj = Patron::new("TJ", 7);
        tj.add_interest("IMAX");
        tj.add_interest("Dead Sea Scrolls");
        let mut sally = Patron::new("Sally", 20);
        sally.add_interest("IMAX");
        sally.add_interest("Dead Sea Scrolls");

        museum.admit(tj);
        museum.admit(sally);

        let stats = museum.statistics();

        assert_eq!(stats.total_admissions, 2);
        assert_eq!(stats.unique_patrons, 2);
        assert_eq!(stats.tickets_sold, 1);
        assert_eq!(stats.revenue, 15);
        assert_eq!(stats.patrons_without_tickets, 1);
        assert_eq!(stats.revenue_per_admission(), 7.5);

        let scrolls = &stats.exhibits[0];
        assert_eq!(scrolls.attendees, 0);
        assert_eq!(scrolls.interested, 2);
        assert_eq!(scrolls.lottery_contestants, 2);

        let imax = &stats.exhibits[1];
        assert_eq!(imax.attendees, 1);
        assert_eq!(imax.revenue(), 15);
        assert_eq!(imax.lottery_contestants, 2);
    }

    #[test]
    fn test_statistics_display() {
        let mut museum = Museum::new("DMNS");
        museum.add_exhibit(Exhibit::new("IMAX", 15));
        let text = museum.statistics().to_string();

        assert!(text.contains("=== DMNS ==="));
        assert!(text.contains("Revenue:                0 (0.00 per admission)"));
        assert!(text.contains("IMAX (cost 15): 0 attended, 0 interested, 0 in lottery"));
    }

    #[test]
    fn test_exhibit_revenue_saturates() {
        let attendance = ExhibitAttendance {
            exhibit_id: ExhibitId::new(),
            name: "Vault".to_string(),
            cost: Money::MAX,
            attendees: 2,
            interested: 2,
            lottery_contestants: 0,
        };

        assert_eq!(attendance.revenue(), Money::MAX);
    }
}
