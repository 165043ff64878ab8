use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{itinerary::MatchedLeg, policy_config::PolicyConfig};

/// a row of trips.csv: one scheduled trip used by at least one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRow {
    pub trip_id: String,
    pub route_id: String,
    pub route_short_name: String,
    pub max_advance_min: u32,
    pub max_delay_min: u32,
}

impl TripRow {
    /// one row per distinct trip id across all matched legs, in order of first use.
    pub fn from_matched_legs<'a>(
        legs: impl IntoIterator<Item = &'a MatchedLeg>,
        policy: &PolicyConfig,
    ) -> Vec<TripRow> {
        legs.into_iter()
            .unique_by(|leg| leg.trip_id.clone())
            .map(|leg| TripRow {
                trip_id: leg.trip_id.clone(),
                route_id: leg.route_id.clone(),
                route_short_name: leg.route_short_name.clone(),
                max_advance_min: policy.max_advance_min,
                max_delay_min: policy.max_delay_min,
            })
            .collect_vec()
    }
}
