use crate::{
    connection::transfer_connection::TransferConnection,
    itinerary::MatchedLeg,
    policy_config::PolicyConfig,
    run_log::RunLog,
    schedule::ScheduleIndex,
};

/// builds transfer connections between consecutive matched legs.
///
/// one deriver is used for the whole run so that connection ids keep counting
/// up across itineraries.
pub struct ConnectionDeriver<'a> {
    index: &'a ScheduleIndex,
    policy: &'a PolicyConfig,
    next_id: usize,
}

impl<'a> ConnectionDeriver<'a> {
    pub fn new(index: &'a ScheduleIndex, policy: &'a PolicyConfig) -> ConnectionDeriver<'a> {
        ConnectionDeriver {
            index,
            policy,
            next_id: 1,
        }
    }

    /// derives the connections of one itinerary from its matched legs. legs are
    /// paired in authored leg order; an itinerary with fewer than two matched
    /// legs has no connections.
    ///
    /// the hub of each transfer is the destination of the arriving leg, even
    /// when the next leg declares a different origin.
    pub fn derive_connections(
        &mut self,
        itinerary: &str,
        legs: &[MatchedLeg],
        run_log: &mut RunLog,
    ) -> Vec<TransferConnection> {
        let index: &'a ScheduleIndex = self.index;
        let mut ordered: Vec<&MatchedLeg> = legs.iter().collect();
        ordered.sort_by_key(|leg| leg.leg_index);

        let mut connections = vec![];
        for pair in ordered.windows(2) {
            let (from_leg, to_leg) = (pair[0], pair[1]);
            let hub_stop_id = &from_leg.dest_stop_id;

            if *hub_stop_id != to_leg.origin_stop_id {
                run_log.warn(format!(
                    "Transfer stop mismatch in itinerary '{}' between legs '{}' and '{}'. Using hub_stop_id={}{}",
                    itinerary,
                    from_leg.leg_label,
                    to_leg.leg_label,
                    hub_stop_id,
                    self.describe_mismatch(hub_stop_id, &to_leg.origin_stop_id)
                ));
            }

            let departure = index
                .visits_at(&to_leg.trip_id, hub_stop_id)
                .into_iter()
                .next();
            let departure = match departure {
                Some(visit) => visit,
                None => {
                    run_log.error(format!(
                        "Could not find departure at hub={} for trip={} in itinerary '{}'",
                        hub_stop_id, to_leg.trip_id, itinerary
                    ));
                    continue;
                }
            };

            connections.push(TransferConnection {
                conn_id: TransferConnection::format_id(self.next_id),
                arr_trip_id: from_leg.trip_id.clone(),
                dep_trip_id: to_leg.trip_id.clone(),
                hub_id: hub_stop_id.clone(),
                arr_time_min: from_leg.dest_arr_min(),
                dep_time_min: departure.departure_min,
                min_wait_min: self.policy.min_wait_min,
                max_wait_min: self.policy.max_wait_min,
                weight: self.policy.connection_weight,
            });
            self.next_id += 1;
        }
        connections
    }

    /// extra context for a hub mismatch: stop names, and whether both stops
    /// belong to the same station.
    fn describe_mismatch(&self, hub_stop_id: &str, declared_origin: &str) -> String {
        let hub = self.index.get_stop(hub_stop_id);
        let origin = self.index.get_stop(declared_origin);
        match (hub, origin) {
            (Some(hub), Some(origin)) => {
                let shared_parent = match (&hub.parent_station, &origin.parent_station) {
                    (Some(a), Some(b)) if a == b => format!(", both at parent_station={a}"),
                    _ => String::new(),
                };
                format!(
                    " ({} '{}' vs {} '{}'{})",
                    hub.stop_id,
                    hub.stop_name.as_deref().unwrap_or_default(),
                    origin.stop_id,
                    origin.stop_name.as_deref().unwrap_or_default(),
                    shared_parent
                )
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ConnectionDeriver;
    use crate::{
        itinerary::MatchedLeg,
        policy_config::PolicyConfig,
        run_log::{LogLevel, RunLog},
        schedule::{
            fixtures::{route, stop, stop_time, trip},
            ScheduleIndex,
        },
    };

    /// bus T_BUS runs H -> X, train T_TRAIN runs X -> W (visiting X twice),
    /// train T_OTHER never stops at X.
    fn index() -> ScheduleIndex {
        ScheduleIndex::new(
            "S",
            vec![
                stop("X", "Hub North", Some("HUB")),
                stop("X2", "Hub South", Some("HUB")),
            ],
            vec![route("RB", "BUS"), route("RT", "TRAIN")],
            vec![
                trip("T_BUS", "RB", "S"),
                trip("T_TRAIN", "RT", "S"),
                trip("T_OTHER", "RT", "S"),
            ],
            vec![
                stop_time("T_BUS", "H", 1, "08:00:00", "08:00:00"),
                stop_time("T_BUS", "X", 2, "08:20:00", "08:21:00"),
                stop_time("T_TRAIN", "X", 1, "08:29:00", "08:30:00"),
                stop_time("T_TRAIN", "Y", 2, "08:40:00", "08:40:00"),
                stop_time("T_TRAIN", "X", 3, "08:50:00", "08:51:00"),
                stop_time("T_TRAIN", "W", 4, "09:00:00", "09:00:00"),
                stop_time("T_OTHER", "Y", 1, "08:35:00", "08:35:00"),
                stop_time("T_OTHER", "W", 2, "08:55:00", "08:55:00"),
            ],
        )
        .expect("should build")
    }

    fn matched(index: &ScheduleIndex, leg_index: usize, trip_id: &str, o: &str, d: &str) -> MatchedLeg {
        let origin = index.visits_at(trip_id, o)[0].clone();
        let destination = index
            .visits_at(trip_id, d)
            .into_iter()
            .find(|v| v.stop_sequence >= origin.stop_sequence)
            .cloned()
            .unwrap_or_else(|| origin.clone());
        MatchedLeg {
            itinerary: String::from("Home-to-Work"),
            leg_index,
            leg_label: format!("leg_{leg_index}"),
            trip_id: trip_id.to_string(),
            route_id: String::from("R"),
            route_short_name: String::from("R"),
            origin_stop_id: o.to_string(),
            dest_stop_id: d.to_string(),
            origin,
            destination,
        }
    }

    #[test]
    fn test_two_leg_transfer() {
        let index = index();
        let policy = PolicyConfig::default();
        let mut deriver = ConnectionDeriver::new(&index, &policy);
        let mut run_log = RunLog::new();
        let legs = vec![
            matched(&index, 0, "T_BUS", "H", "X"),
            matched(&index, 1, "T_TRAIN", "X", "W"),
        ];
        let result = deriver.derive_connections("Home-to-Work", &legs, &mut run_log);
        assert_eq!(result.len(), 1);
        let conn = &result[0];
        assert_eq!(conn.conn_id, "C1");
        assert_eq!(conn.arr_trip_id, "T_BUS");
        assert_eq!(conn.dep_trip_id, "T_TRAIN");
        assert_eq!(conn.hub_id, "X");
        assert_eq!(conn.arr_time_min, Some(500.0));
        // earliest visit of T_TRAIN at X, not the later loop
        assert_eq!(conn.dep_time_min, Some(510.0));
        assert_eq!(conn.min_wait_min, 2);
        assert_eq!(conn.max_wait_min, 30);
        assert_eq!(conn.weight, 1.0);
        assert!(run_log.is_empty());
    }

    #[test]
    fn test_ids_continue_across_itineraries() {
        let index = index();
        let policy = PolicyConfig::default();
        let mut deriver = ConnectionDeriver::new(&index, &policy);
        let mut run_log = RunLog::new();
        let legs = vec![
            matched(&index, 0, "T_BUS", "H", "X"),
            matched(&index, 1, "T_TRAIN", "X", "W"),
        ];
        let first = deriver.derive_connections("a", &legs, &mut run_log);
        let single = deriver.derive_connections("b", &legs[..1], &mut run_log);
        let second = deriver.derive_connections("c", &legs, &mut run_log);
        assert_eq!(first[0].conn_id, "C1");
        assert!(single.is_empty());
        assert_eq!(second[0].conn_id, "C2");
    }

    #[test]
    fn test_pairs_follow_leg_order() {
        let index = index();
        let policy = PolicyConfig::default();
        let mut deriver = ConnectionDeriver::new(&index, &policy);
        let mut run_log = RunLog::new();
        let legs = vec![
            matched(&index, 1, "T_TRAIN", "X", "W"),
            matched(&index, 0, "T_BUS", "H", "X"),
        ];
        let result = deriver.derive_connections("Home-to-Work", &legs, &mut run_log);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].arr_trip_id, "T_BUS");
    }

    #[test]
    fn test_hub_mismatch_is_tolerated() {
        let index = index();
        let policy = PolicyConfig::default();
        let mut deriver = ConnectionDeriver::new(&index, &policy);
        let mut run_log = RunLog::new();
        let mut second = matched(&index, 1, "T_TRAIN", "X", "W");
        second.origin_stop_id = String::from("X2");
        let legs = vec![matched(&index, 0, "T_BUS", "H", "X"), second];
        let result = deriver.derive_connections("Home-to-Work", &legs, &mut run_log);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].hub_id, "X");
        assert_eq!(run_log.count(LogLevel::Warn), 1);
        assert_eq!(
            run_log.messages()[0].message,
            "Transfer stop mismatch in itinerary 'Home-to-Work' between legs 'leg_0' and 'leg_1'. Using hub_stop_id=X (X 'Hub North' vs X2 'Hub South', both at parent_station=HUB)"
        );
    }

    #[test]
    fn test_missing_departure_at_hub_skips_connection() {
        let index = index();
        let policy = PolicyConfig::default();
        let mut deriver = ConnectionDeriver::new(&index, &policy);
        let mut run_log = RunLog::new();
        let legs = vec![
            matched(&index, 0, "T_BUS", "H", "X"),
            matched(&index, 1, "T_OTHER", "Y", "W"),
            matched(&index, 2, "T_BUS", "H", "X"),
        ];
        let result = deriver.derive_connections("Home-to-Work", &legs, &mut run_log);
        assert!(result.is_empty());
        assert_eq!(run_log.count(LogLevel::Error), 2);
        assert_eq!(run_log.count(LogLevel::Warn), 2);

        // the skipped pairs did not consume ids
        let legs = vec![
            matched(&index, 0, "T_BUS", "H", "X"),
            matched(&index, 1, "T_TRAIN", "X", "W"),
        ];
        let result = deriver.derive_connections("again", &legs, &mut run_log);
        assert_eq!(result[0].conn_id, "C1");
    }
}
