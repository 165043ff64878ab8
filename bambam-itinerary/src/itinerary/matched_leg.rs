use crate::{
    itinerary::itinerary_input::Leg,
    schedule::{ScheduledTrip, StopVisit},
};

/// the scheduled trip chosen for a leg, along with the visits where the rider
/// boards and alights. borrows from the schedule index.
#[derive(Debug, Clone, Copy)]
pub struct TripMatch<'a> {
    pub trip: &'a ScheduledTrip,
    pub origin: &'a StopVisit,
    pub destination: &'a StopVisit,
}

/// a leg of an itinerary bound to a specific scheduled trip.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedLeg {
    pub itinerary: String,
    /// position of the leg in its itinerary, as authored
    pub leg_index: usize,
    pub leg_label: String,
    pub trip_id: String,
    pub route_id: String,
    pub route_short_name: String,
    /// origin stop as declared by the itinerary author
    pub origin_stop_id: String,
    /// destination stop as declared by the itinerary author
    pub dest_stop_id: String,
    pub origin: StopVisit,
    pub destination: StopVisit,
}

impl MatchedLeg {
    pub fn new(
        itinerary: &str,
        leg_index: usize,
        leg: &Leg,
        trip_match: TripMatch<'_>,
    ) -> MatchedLeg {
        let route_short_name = trip_match
            .trip
            .route_short_name
            .clone()
            .unwrap_or_else(|| leg.route_short_name.clone());
        MatchedLeg {
            itinerary: itinerary.to_string(),
            leg_index,
            leg_label: leg.label_or_default(leg_index),
            trip_id: trip_match.trip.trip_id.clone(),
            route_id: trip_match.trip.route_id.clone(),
            route_short_name,
            origin_stop_id: leg.origin_stop_id.clone(),
            dest_stop_id: leg.dest_stop_id.clone(),
            origin: trip_match.origin.clone(),
            destination: trip_match.destination.clone(),
        }
    }

    pub fn origin_dep_min(&self) -> Option<f64> {
        self.origin.departure_min
    }

    pub fn dest_arr_min(&self) -> Option<f64> {
        self.destination.arrival_min
    }
}
