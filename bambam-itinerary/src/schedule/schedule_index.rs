use std::collections::{HashMap, HashSet};

use crate::schedule::{
    gtfs_source::{GtfsSource, ROUTES_TABLE, STOPS_TABLE, STOP_TIMES_TABLE, TRIPS_TABLE},
    record::{RouteRecord, StopRecord, StopTimeRecord, TripRecord},
    schedule_error::ScheduleError,
    scheduled_trip::ScheduledTrip,
    stop_visit::StopVisit,
};

/// the schedule of a single service day, indexed for leg matching.
///
/// built once per run and never modified afterward.
pub struct ScheduleIndex {
    service_id: String,
    trips: HashMap<String, ScheduledTrip>,
    /// route_short_name -> trip ids, in trips.txt order
    route_trips: HashMap<String, Vec<String>>,
    /// trip_id -> stop_id -> positions into that trip's sorted stop visits
    visit_lookup: HashMap<String, HashMap<String, Vec<usize>>>,
    stops: HashMap<String, StopRecord>,
}

impl ScheduleIndex {
    /// reads stops, routes, trips and stop_times from a GTFS source and
    /// builds the index for `service_id`.
    pub fn from_source(source: &GtfsSource, service_id: &str) -> Result<Self, ScheduleError> {
        log::info!("loading GTFS tables from {}", source.path().display());
        let stops: Vec<StopRecord> = source.read_table(STOPS_TABLE)?;
        let routes: Vec<RouteRecord> = source.read_table(ROUTES_TABLE)?;
        let trips: Vec<TripRecord> = source.read_table(TRIPS_TABLE)?;
        let stop_times: Vec<StopTimeRecord> = source.read_table(STOP_TIMES_TABLE)?;
        Self::new(service_id, stops, routes, trips, stop_times)
    }

    /// builds the index from already-loaded GTFS rows.
    ///
    /// fails with [`ScheduleError::NoTripsForService`] when no trip runs on
    /// `service_id`, since no leg could ever be matched.
    pub fn new(
        service_id: &str,
        stops: Vec<StopRecord>,
        routes: Vec<RouteRecord>,
        trips: Vec<TripRecord>,
        stop_times: Vec<StopTimeRecord>,
    ) -> Result<Self, ScheduleError> {
        let service_trips: Vec<TripRecord> = trips
            .into_iter()
            .filter(|t| t.service_id == service_id)
            .collect();
        if service_trips.is_empty() {
            return Err(ScheduleError::NoTripsForService(service_id.to_string()));
        }
        let service_trip_ids: HashSet<&str> =
            service_trips.iter().map(|t| t.trip_id.as_str()).collect();

        let mut trip_visits: HashMap<String, Vec<StopVisit>> = HashMap::new();
        for (row_index, record) in stop_times.into_iter().enumerate() {
            if !service_trip_ids.contains(record.trip_id.as_str()) {
                continue;
            }
            let visit = StopVisit::try_from_record(record, row_index)?;
            trip_visits
                .entry(visit.trip_id.clone())
                .or_default()
                .push(visit);
        }

        let route_lookup: HashMap<&str, &RouteRecord> =
            routes.iter().map(|r| (r.route_id.as_str(), r)).collect();

        let mut trips: HashMap<String, ScheduledTrip> = HashMap::new();
        let mut route_trips: HashMap<String, Vec<String>> = HashMap::new();
        let mut visit_lookup: HashMap<String, HashMap<String, Vec<usize>>> = HashMap::new();
        for trip in service_trips.iter() {
            if trips.contains_key(&trip.trip_id) {
                log::warn!("trip_id '{}' listed more than once in trips.txt", trip.trip_id);
                continue;
            }
            let route = route_lookup.get(trip.route_id.as_str()).copied();
            if route.is_none() {
                log::warn!(
                    "trip_id '{}' references route_id '{}' not found in routes.txt",
                    trip.trip_id,
                    trip.route_id
                );
            }
            let visits = trip_visits.remove(&trip.trip_id).unwrap_or_default();
            let scheduled = ScheduledTrip::new(trip, route, visits);

            let stop_positions = visit_lookup.entry(scheduled.trip_id.clone()).or_default();
            for (position, visit) in scheduled.stop_visits.iter().enumerate() {
                stop_positions
                    .entry(visit.stop_id.clone())
                    .or_default()
                    .push(position);
            }
            if let Some(short_name) = &scheduled.route_short_name {
                route_trips
                    .entry(short_name.clone())
                    .or_default()
                    .push(scheduled.trip_id.clone());
            }
            trips.insert(scheduled.trip_id.clone(), scheduled);
        }

        let stops = stops
            .into_iter()
            .map(|s| (s.stop_id.clone(), s))
            .collect::<HashMap<_, _>>();

        log::info!(
            "schedule index for service_id={}: {} trips on {} routes",
            service_id,
            trips.len(),
            route_trips.len()
        );

        Ok(Self {
            service_id: service_id.to_string(),
            trips,
            route_trips,
            visit_lookup,
            stops,
        })
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn n_trips(&self) -> usize {
        self.trips.len()
    }

    pub fn get_trip(&self, trip_id: &str) -> Option<&ScheduledTrip> {
        self.trips.get(trip_id)
    }

    /// trip ids running on the route with this short name, in trips.txt order.
    pub fn trips_on_route(&self, route_short_name: &str) -> &[String] {
        self.route_trips
            .get(route_short_name)
            .map(|ids| ids.as_slice())
            .unwrap_or_default()
    }

    /// visits of one trip at one stop, ascending by stop_sequence. a trip that
    /// loops back to a stop has more than one entry.
    pub fn visits_at(&self, trip_id: &str, stop_id: &str) -> Vec<&StopVisit> {
        let trip = match self.trips.get(trip_id) {
            Some(trip) => trip,
            None => return vec![],
        };
        self.visit_lookup
            .get(trip_id)
            .and_then(|by_stop| by_stop.get(stop_id))
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|p| trip.stop_visits.get(*p))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_stop(&self, stop_id: &str) -> Option<&StopRecord> {
        self.stops.get(stop_id)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::ScheduleIndex;
    use crate::schedule::{
        record::{RouteRecord, StopRecord, StopTimeRecord, TripRecord},
        schedule_error::ScheduleError,
    };

    pub fn route(route_id: &str, short_name: &str) -> RouteRecord {
        RouteRecord {
            route_id: route_id.to_string(),
            route_short_name: Some(short_name.to_string()),
        }
    }

    pub fn trip(trip_id: &str, route_id: &str, service_id: &str) -> TripRecord {
        TripRecord {
            route_id: route_id.to_string(),
            service_id: service_id.to_string(),
            trip_id: trip_id.to_string(),
        }
    }

    pub fn stop(stop_id: &str, stop_name: &str, parent_station: Option<&str>) -> StopRecord {
        StopRecord {
            stop_id: stop_id.to_string(),
            stop_name: Some(stop_name.to_string()),
            parent_station: parent_station.map(String::from),
        }
    }

    pub fn stop_time(
        trip_id: &str,
        stop_id: &str,
        stop_sequence: u32,
        arrival_time: &str,
        departure_time: &str,
    ) -> StopTimeRecord {
        let opt = |s: &str| match s {
            "" => None,
            _ => Some(s.to_string()),
        };
        StopTimeRecord {
            trip_id: trip_id.to_string(),
            arrival_time: opt(arrival_time),
            departure_time: opt(departure_time),
            stop_id: stop_id.to_string(),
            stop_sequence,
        }
    }

    #[test]
    fn test_filters_to_service_id() {
        let index = ScheduleIndex::new(
            "WEEKDAY",
            vec![],
            vec![route("R1", "21")],
            vec![trip("T1", "R1", "WEEKDAY"), trip("T2", "R1", "SATURDAY")],
            vec![
                stop_time("T1", "A", 1, "10:00:00", "10:00:00"),
                stop_time("T2", "A", 1, "11:00:00", "11:00:00"),
            ],
        )
        .expect("should build");
        assert_eq!(index.n_trips(), 1);
        assert_eq!(index.trips_on_route("21"), &[String::from("T1")]);
        assert!(index.get_trip("T2").is_none());
        assert!(index.visits_at("T2", "A").is_empty());
    }

    #[test]
    fn test_no_trips_for_service_is_fatal() {
        let result = ScheduleIndex::new(
            "HOLIDAY",
            vec![],
            vec![route("R1", "21")],
            vec![trip("T1", "R1", "WEEKDAY")],
            vec![],
        );
        assert!(matches!(result, Err(ScheduleError::NoTripsForService(id)) if id == "HOLIDAY"));
    }

    #[test]
    fn test_visits_at_looping_trip() {
        let index = ScheduleIndex::new(
            "S",
            vec![stop("A", "Alpha", None)],
            vec![route("R1", "21")],
            vec![trip("T1", "R1", "S")],
            vec![
                stop_time("T1", "A", 5, "10:20:00", "10:21:00"),
                stop_time("T1", "B", 2, "10:10:00", "10:10:00"),
                stop_time("T1", "A", 1, "", "10:00:30"),
            ],
        )
        .expect("should build");
        let visits = index.visits_at("T1", "A");
        assert_eq!(visits.len(), 2);
        assert_eq!(visits[0].stop_sequence, 1);
        assert_eq!(visits[0].arrival_min, None);
        assert_eq!(visits[0].departure_min, Some(600.5));
        assert_eq!(visits[1].stop_sequence, 5);
        assert_eq!(visits[1].departure_min, Some(621.0));
        assert_eq!(
            index.get_stop("A").and_then(|s| s.stop_name.as_deref()),
            Some("Alpha")
        );
    }

    #[test]
    fn test_unknown_route_not_reachable_by_name() {
        let index = ScheduleIndex::new(
            "S",
            vec![],
            vec![route("R1", "21")],
            vec![trip("T1", "R1", "S"), trip("T2", "R404", "S")],
            vec![stop_time("T2", "A", 1, "10:00:00", "10:00:00")],
        )
        .expect("should build");
        assert_eq!(index.n_trips(), 2);
        assert_eq!(index.trips_on_route("21").len(), 1);
        assert_eq!(index.visits_at("T2", "A").len(), 1);
        assert!(index.trips_on_route("404").is_empty());
    }

    #[test]
    fn test_malformed_time_is_error() {
        let result = ScheduleIndex::new(
            "S",
            vec![],
            vec![route("R1", "21")],
            vec![trip("T1", "R1", "S")],
            vec![stop_time("T1", "A", 1, "10:00", "10:00")],
        );
        assert!(matches!(result, Err(ScheduleError::InvalidTime(_))));
    }
}
