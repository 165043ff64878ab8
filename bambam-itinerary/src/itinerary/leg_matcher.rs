use crate::{
    itinerary::{
        itinerary_input::{Itinerary, Leg},
        leg_match_failure::LegMatchFailure,
        matched_leg::{MatchedLeg, TripMatch},
    },
    run_log::RunLog,
    schedule::{time_ops, ScheduleIndex, StopVisit},
};

/// the +/- minutes around a leg's desired departure in which a scheduled
/// departure is accepted.
pub const DEFAULT_MATCH_WINDOW_MIN: f64 = 10.0;

/// binds itinerary legs to scheduled trips of one service day.
pub struct LegMatcher<'a> {
    index: &'a ScheduleIndex,
    window_min: f64,
}

impl<'a> LegMatcher<'a> {
    pub fn new(index: &'a ScheduleIndex, window_min: f64) -> LegMatcher<'a> {
        LegMatcher { index, window_min }
    }

    /// matches every leg of an itinerary, in leg order. legs that fail to
    /// match are reported to the run log and left out of the result.
    pub fn match_itinerary(&self, itinerary: &Itinerary, run_log: &mut RunLog) -> Vec<MatchedLeg> {
        if itinerary.legs.is_empty() {
            run_log.warn(format!(
                "Itinerary '{}' has no legs defined.",
                itinerary.name
            ));
            return vec![];
        }
        let mut matched = Vec::with_capacity(itinerary.legs.len());
        for (leg_index, leg) in itinerary.legs.iter().enumerate() {
            let label = leg.label_or_default(leg_index);
            self.check_leg_stops(&itinerary.name, &label, leg, run_log);
            match self.match_leg(
                &leg.route_short_name,
                &leg.origin_stop_id,
                &leg.dest_stop_id,
                &leg.dep_time_str,
                run_log,
            ) {
                Ok(trip_match) => {
                    log::debug!(
                        "itinerary '{}' leg '{}' matched trip_id={}",
                        itinerary.name,
                        label,
                        trip_match.trip.trip_id
                    );
                    matched.push(MatchedLeg::new(
                        &itinerary.name,
                        leg_index,
                        leg,
                        trip_match,
                    ));
                }
                Err(_) => {
                    run_log.error(format!(
                        "Itinerary '{}', leg '{}' could not be matched.",
                        itinerary.name, label
                    ));
                }
            }
        }
        matched
    }

    /// finds the scheduled trip on `route_short_name` departing `origin_stop_id`
    /// closest to `dep_time_str` (within the match window) which later visits
    /// `dest_stop_id`.
    ///
    /// candidates are tried closest departure first, ties in stop_times.txt
    /// order. a candidate whose trip does not reach the destination after the
    /// origin is skipped in favor of the next closest. every failure is also
    /// written to the run log as a warning.
    ///
    /// identifiers are compared as given. [`Leg`] values read from JSON are
    /// already trimmed.
    pub fn match_leg(
        &self,
        route_short_name: &str,
        origin_stop_id: &str,
        dest_stop_id: &str,
        dep_time_str: &str,
        run_log: &mut RunLog,
    ) -> Result<TripMatch<'a>, LegMatchFailure> {
        let result = self.find_trip(route_short_name, origin_stop_id, dest_stop_id, dep_time_str);
        if let Err(failure) = &result {
            run_log.warn(failure.to_string());
        }
        result
    }

    fn find_trip(
        &self,
        route_short_name: &str,
        origin_stop_id: &str,
        dest_stop_id: &str,
        dep_time_str: &str,
    ) -> Result<TripMatch<'a>, LegMatchFailure> {
        let index: &'a ScheduleIndex = self.index;
        let desired = parse_desired_departure(route_short_name, dep_time_str)?;

        let trip_ids = index.trips_on_route(route_short_name);
        if trip_ids.is_empty() {
            return Err(LegMatchFailure::NoTripsOnRoute {
                route_short_name: route_short_name.to_string(),
            });
        }

        let origin_visits: Vec<&'a StopVisit> = trip_ids
            .iter()
            .flat_map(|trip_id| index.visits_at(trip_id, origin_stop_id))
            .collect();
        if origin_visits.is_empty() {
            return Err(LegMatchFailure::NoOriginStopTimes {
                route_short_name: route_short_name.to_string(),
                origin_stop_id: origin_stop_id.to_string(),
            });
        }

        let lower = desired - self.window_min;
        let upper = desired + self.window_min;
        let mut candidates: Vec<(f64, &'a StopVisit)> = origin_visits
            .into_iter()
            .filter_map(|visit| {
                visit
                    .departure_min
                    .filter(|dep| *dep >= lower && *dep <= upper)
                    .map(|dep| ((dep - desired).abs(), visit))
            })
            .collect();
        if candidates.is_empty() {
            return Err(LegMatchFailure::NoDepartureInWindow {
                route_short_name: route_short_name.to_string(),
                origin_stop_id: origin_stop_id.to_string(),
                dep_time_str: dep_time_str.to_string(),
                window_min: self.window_min,
            });
        }
        candidates.sort_by(|(diff_a, a), (diff_b, b)| {
            diff_a
                .total_cmp(diff_b)
                .then_with(|| a.row_index.cmp(&b.row_index))
        });

        for (_, origin) in candidates {
            let destination = index
                .visits_at(&origin.trip_id, dest_stop_id)
                .into_iter()
                .find(|visit| visit.stop_sequence >= origin.stop_sequence);
            let trip = index.get_trip(&origin.trip_id);
            if let (Some(destination), Some(trip)) = (destination, trip) {
                return Ok(TripMatch {
                    trip,
                    origin,
                    destination,
                });
            }
        }

        Err(LegMatchFailure::NoTripServesDestination {
            route_short_name: route_short_name.to_string(),
            origin_stop_id: origin_stop_id.to_string(),
            dest_stop_id: dest_stop_id.to_string(),
            dep_time_str: dep_time_str.to_string(),
        })
    }

    /// warns about leg stops missing from stops.txt. a common authoring mistake
    /// is picking the id of a different platform or entrance of the same station.
    fn check_leg_stops(&self, itinerary: &str, label: &str, leg: &Leg, run_log: &mut RunLog) {
        for (role, stop_id) in [("origin", &leg.origin_stop_id), ("destination", &leg.dest_stop_id)] {
            if self.index.get_stop(stop_id).is_none() {
                run_log.warn(format!(
                    "stop_id={stop_id} ({role} of leg '{label}' in itinerary '{itinerary}') not found in stops.txt"
                ));
            }
        }
    }
}

fn parse_desired_departure(
    route_short_name: &str,
    dep_time_str: &str,
) -> Result<f64, LegMatchFailure> {
    let invalid = |message: String| LegMatchFailure::InvalidDepartureTime {
        route_short_name: route_short_name.to_string(),
        dep_time_str: dep_time_str.to_string(),
        message,
    };
    match time_ops::parse_minutes(dep_time_str) {
        Ok(Some(minutes)) => Ok(minutes),
        Ok(None) => Err(invalid(String::from("departure time is empty"))),
        Err(e) => Err(invalid(e.to_string())),
    }
}
