use serde::Deserialize;

use crate::error::{NetworkError, Result};

/// Default capacity hint for the user and vertex maps.
pub const DEFAULT_CAPACITY: usize = 101;

const MIN_CAPACITY: usize = 1;
const MAX_CAPACITY: usize = 1_048_576;

/// Tunables for a `SocialNetwork`. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkSettings {
    /// Expected number of users; pre-sizes the profile map and graph.
    pub capacity: usize,
}

impl NetworkSettings {
    /// Reject values outside the accepted range.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&self.capacity) {
            return Err(NetworkError::OutOfRange {
                name: "capacity",
                value: self.capacity,
                min: MIN_CAPACITY,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
