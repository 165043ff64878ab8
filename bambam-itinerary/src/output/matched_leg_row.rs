use serde::{Deserialize, Serialize};

use crate::itinerary::MatchedLeg;

/// a row of legs.csv, the optional report of how each leg was matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedLegRow {
    pub itinerary: String,
    pub leg_index: usize,
    pub leg_label: String,
    pub trip_id: String,
    pub route_id: String,
    pub route_short_name: String,
    pub origin_stop_id: String,
    pub dest_stop_id: String,
    pub origin_dep_time: Option<String>,
    pub origin_dep_min: Option<f64>,
    pub dest_arr_time: Option<String>,
    pub dest_arr_min: Option<f64>,
}

impl From<&MatchedLeg> for MatchedLegRow {
    fn from(leg: &MatchedLeg) -> Self {
        MatchedLegRow {
            itinerary: leg.itinerary.clone(),
            leg_index: leg.leg_index,
            leg_label: leg.leg_label.clone(),
            trip_id: leg.trip_id.clone(),
            route_id: leg.route_id.clone(),
            route_short_name: leg.route_short_name.clone(),
            origin_stop_id: leg.origin_stop_id.clone(),
            dest_stop_id: leg.dest_stop_id.clone(),
            origin_dep_time: leg.origin.departure_time.clone(),
            origin_dep_min: leg.origin_dep_min(),
            dest_arr_time: leg.destination.arrival_time.clone(),
            dest_arr_min: leg.dest_arr_min(),
        }
    }
}
