//! Identity types and the entropy source used to mint them.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix of generated unit numbers.
pub const UNIT_NUMBER_PREFIX: &str = "TR";

/// Opaque storage identity of a trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrailerId(Uuid);

impl TrailerId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TrailerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for TrailerId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Source of the random values consumed while creating a trailer.
///
/// Injected so tests can pin identifiers.
pub trait TrailerIdentitySource: Send + Sync {
    /// A fresh entity identifier.
    fn entity_id(&self) -> TrailerId;

    /// A number in `1000..=9999` appended to [`UNIT_NUMBER_PREFIX`].
    fn unit_number_suffix(&self) -> u16;

    /// Generated unit number such as `TR4821`.
    fn unit_number(&self) -> String {
        format!("{UNIT_NUMBER_PREFIX}{}", self.unit_number_suffix())
    }
}

/// Production identity source backed by UUID v4 and the thread RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdentitySource;

impl TrailerIdentitySource for RandomIdentitySource {
    fn entity_id(&self) -> TrailerId {
        TrailerId(Uuid::new_v4())
    }

    fn unit_number_suffix(&self) -> u16 {
        rand::thread_rng().gen_range(1000..=9999)
    }
}
