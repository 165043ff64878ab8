use std::collections::BinaryHeap;

use crate::schedule::{
    record::{RouteRecord, TripRecord},
    stop_visit::StopVisit,
};

/// a trip running on the target service day, joined with its route names and
/// prepared for leg matching.
#[derive(Debug, Clone)]
pub struct ScheduledTrip {
    /// GTFS trip identifier
    pub trip_id: String,
    /// GTFS route_id associated with this trip
    pub route_id: String,
    /// short name of the route, if the route is listed in routes.txt
    pub route_short_name: Option<String>,
    /// list of [`StopVisit`] values associated with this trip in stop_sequence order
    pub stop_visits: Vec<StopVisit>,
}

impl ScheduledTrip {
    pub fn new(
        trip: &TripRecord,
        route: Option<&RouteRecord>,
        stop_visits: Vec<StopVisit>,
    ) -> ScheduledTrip {
        Self {
            trip_id: trip.trip_id.clone(),
            route_id: trip.route_id.clone(),
            route_short_name: route.and_then(|r| r.route_short_name.clone()),
            stop_visits: get_ordered_visits(stop_visits),
        }
    }
}

/// Returns the visits in ascending stop_sequence order. Internally uses [BinaryHeap] to sort;
/// visits sharing a stop_sequence keep their stop_times.txt order.
fn get_ordered_visits(stop_visits: Vec<StopVisit>) -> Vec<StopVisit> {
    // Get ordered indices
    let visit_queue_order: BinaryHeap<(u32, usize)> = stop_visits
        .iter()
        .enumerate()
        .map(|(i, v)| (v.stop_sequence, i))
        .collect();

    let mut slots: Vec<Option<StopVisit>> = stop_visits.into_iter().map(Some).collect();
    visit_queue_order
        .into_sorted_vec() // Ascending according to documentation
        .into_iter()
        .filter_map(|(_, idx)| slots.get_mut(idx).and_then(Option::take))
        .collect()
}

#[cfg(test)]
mod test {
    use super::ScheduledTrip;
    use crate::schedule::{
        record::{RouteRecord, TripRecord},
        stop_visit::StopVisit,
    };

    fn visit(stop_id: &str, stop_sequence: u32, row_index: usize) -> StopVisit {
        StopVisit {
            trip_id: String::from("T1"),
            stop_id: String::from(stop_id),
            stop_sequence,
            arrival_time: None,
            departure_time: None,
            arrival_min: None,
            departure_min: None,
            row_index,
        }
    }

    #[test]
    fn test_visits_ordered_by_stop_sequence() {
        let trip = TripRecord {
            route_id: String::from("R1"),
            service_id: String::from("S"),
            trip_id: String::from("T1"),
        };
        let route = RouteRecord {
            route_id: String::from("R1"),
            route_short_name: Some(String::from("21")),
        };
        let visits = vec![visit("C", 30, 0), visit("A", 10, 1), visit("B", 20, 2)];
        let result = ScheduledTrip::new(&trip, Some(&route), visits);
        let stops: Vec<&str> = result.stop_visits.iter().map(|v| v.stop_id.as_str()).collect();
        assert_eq!(stops, vec!["A", "B", "C"]);
        assert!(result
            .stop_visits
            .iter()
            .map(|v| v.stop_sequence)
            .collect::<Vec<u32>>()
            .is_sorted());
        assert_eq!(result.route_short_name.as_deref(), Some("21"));
    }

    #[test]
    fn test_missing_route_has_no_names() {
        let trip = TripRecord {
            route_id: String::from("R9"),
            service_id: String::from("S"),
            trip_id: String::from("T1"),
        };
        let result = ScheduledTrip::new(&trip, None, vec![]);
        assert_eq!(result.route_short_name, None);
        assert!(result.stop_visits.is_empty());
    }
}
