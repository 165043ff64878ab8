use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// counts and output locations of a completed filter run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSummary {
    pub n_itineraries: usize,
    pub n_legs: usize,
    pub n_legs_matched: usize,
    pub n_trips: usize,
    pub n_connections: usize,
    pub n_warnings: usize,
    pub n_errors: usize,
    pub output_directory: PathBuf,
}

impl std::fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "matched {}/{} legs across {} itineraries, {} trips, {} connections ({} warnings, {} errors) written to {}",
            self.n_legs_matched,
            self.n_legs,
            self.n_itineraries,
            self.n_trips,
            self.n_connections,
            self.n_warnings,
            self.n_errors,
            self.output_directory.display()
        )
    }
}
