//! Exhibits offered by a museum

use crate::types::{ExhibitId, Money};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A named attraction with an admission cost
///
/// Equality and hashing use the id only: two exhibits created separately are
/// never equal, even when their name and cost match. A clone shares the
/// original's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exhibit {
    id: ExhibitId,
    name: String,
    cost: Money,
}

impl Exhibit {
    /// Create a new exhibit
    pub fn new(name: impl Into<String>, cost: Money) -> Self {
        Self { id: ExhibitId::new(), name: name.into(), cost }
    }

    /// Unique identifier of the exhibit
    pub fn id(&self) -> ExhibitId {
        self.id
    }

    /// Name patrons refer to in their interests
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Admission cost
    pub fn cost(&self) -> Money {
        self.cost
    }
}

impl PartialEq for Exhibit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Exhibit {}

impl Hash for Exhibit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
