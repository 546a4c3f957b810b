//! Static yard directory for the depots the fleet operates from.

use std::collections::HashMap;

use crate::domain::ports::{UNKNOWN_YARD, YardDirectory};

const KNOWN_YARDS: [(&str, &str); 5] = [
    ("loc1", "Detroit Yard"),
    ("loc2", "Chicago Terminal"),
    ("loc3", "Shop - Cleveland"),
    ("loc4", "Toledo Drop Yard"),
    ("loc5", "Customer Site - Acme Corp"),
];

/// Fixed lookup table from yard id to display name.
#[derive(Debug, Clone)]
pub struct StaticYardDirectory {
    yards: HashMap<String, String>,
}

impl StaticYardDirectory {
    /// Directory seeded with the fleet's yards.
    pub fn known_yards() -> Self {
        Self::from_entries(KNOWN_YARDS)
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            yards: entries
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }
}

impl Default for StaticYardDirectory {
    fn default() -> Self {
        Self::known_yards()
    }
}

impl YardDirectory for StaticYardDirectory {
    fn resolve_name(&self, yard_id: &str) -> String {
        self.yards
            .get(yard_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_YARD.to_owned())
    }
}
