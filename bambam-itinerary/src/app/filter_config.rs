use serde::{Deserialize, Serialize};

use crate::{
    app::filter_error::FilterError, itinerary::DEFAULT_MATCH_WINDOW_MIN,
    policy_config::PolicyConfig,
};

/// defines the inputs, outputs and fixed policy values of an itinerary filter run
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// unzipped GTFS directory or GTFS .zip archive
    pub gtfs_path: String,
    /// JSON file with the list of itineraries
    pub itineraries_file: String,
    pub output_directory: String,
    /// trips.txt service_id of the service day to match against
    pub target_service_id: String,
    /// accepted +/- minutes between a leg's desired and scheduled departure
    pub match_window_min: f64,
    /// also write legs.csv
    pub write_matched_legs: bool,
    pub overwrite: bool,
    pub policy: PolicyConfig,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            gtfs_path: String::from("GO-GTFS"),
            itineraries_file: String::from("input.json"),
            output_directory: String::from("output"),
            target_service_id: String::from("20251121"),
            match_window_min: DEFAULT_MATCH_WINDOW_MIN,
            write_matched_legs: false,
            overwrite: true,
            policy: PolicyConfig::default(),
        }
    }
}

impl FilterConfig {
    pub fn validate(&self) -> Result<(), FilterError> {
        if !self.match_window_min.is_finite() || self.match_window_min < 0.0 {
            return Err(FilterError::Configuration(format!(
                "match_window_min must be a non-negative number of minutes, found {}",
                self.match_window_min
            )));
        }
        if self.policy.min_wait_min > self.policy.max_wait_min {
            return Err(FilterError::Configuration(format!(
                "policy.min_wait_min ({}) exceeds policy.max_wait_min ({})",
                self.policy.min_wait_min, self.policy.max_wait_min
            )));
        }
        if self.target_service_id.trim().is_empty() {
            return Err(FilterError::Configuration(String::from(
                "target_service_id must not be empty",
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for FilterConfig {
    type Error = FilterError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                FilterError::Configuration(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                FilterError::Configuration(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                FilterError::Configuration(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                FilterError::Configuration(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(FilterError::Configuration(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
