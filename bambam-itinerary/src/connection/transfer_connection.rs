use serde::{Deserialize, Serialize};

/// a transfer at a hub stop from the trip of one leg to the trip of the next
/// leg of the same itinerary. serialized as a row of connections.csv.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferConnection {
    /// `C1`, `C2`, ... unique within a run
    pub conn_id: String,
    pub arr_trip_id: String,
    pub dep_trip_id: String,
    pub hub_id: String,
    /// arrival of the arriving trip at the hub, minutes since service day start
    pub arr_time_min: Option<f64>,
    /// departure of the departing trip from the hub
    pub dep_time_min: Option<f64>,
    pub min_wait_min: u32,
    pub max_wait_min: u32,
    pub weight: f64,
}

impl TransferConnection {
    pub fn format_id(n: usize) -> String {
        format!("C{n}")
    }
}
