use serde::{Deserialize, Serialize};

/// a single row from trips.txt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    /// route this trip belongs to
    pub route_id: String,

    /// service identifier, one service day in the feeds we process
    pub service_id: String,

    /// unique trip identifier
    pub trip_id: String,
}
