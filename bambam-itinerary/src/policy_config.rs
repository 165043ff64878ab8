use serde::{Deserialize, Serialize};

/// fixed policy numbers attached to every output row. these are inputs to
/// the downstream scheduling tool and are not derived from the schedule.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PolicyConfig {
    /// minutes a trip may be moved earlier
    pub max_advance_min: u32,
    /// minutes a trip may be moved later
    pub max_delay_min: u32,
    /// shortest acceptable transfer wait at a hub
    pub min_wait_min: u32,
    /// longest acceptable transfer wait at a hub
    pub max_wait_min: u32,
    pub connection_weight: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_advance_min: 5,
            max_delay_min: 10,
            min_wait_min: 2,
            max_wait_min: 30,
            connection_weight: 1.0,
        }
    }
}
