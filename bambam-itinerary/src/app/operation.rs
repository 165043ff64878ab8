use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::app::{filter_config::FilterConfig, filter_error::FilterError, filter_ops};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ItineraryOperation {
    /// match itinerary legs to trips of one service day and write trips.csv,
    /// connections.csv and log.txt
    Filter {
        /// TOML or JSON run configuration. flags below override its values.
        #[arg(long)]
        config: Option<String>,
        /// unzipped GTFS directory or GTFS .zip archive
        #[arg(long)]
        gtfs_path: Option<String>,
        /// JSON file with a list of itineraries
        #[arg(long)]
        itineraries_file: Option<String>,
        #[arg(long)]
        output_directory: Option<String>,
        /// trips.txt service_id to match against
        #[arg(long)]
        service_id: Option<String>,
        /// also write legs.csv with one row per matched leg
        #[arg(long, default_value_t = false)]
        write_legs: bool,
    },
}

impl ItineraryOperation {
    pub fn run(&self) -> Result<(), FilterError> {
        match self {
            Self::Filter {
                config,
                gtfs_path,
                itineraries_file,
                output_directory,
                service_id,
                write_legs,
            } => {
                let mut filter_config = match config {
                    Some(f) => FilterConfig::try_from(f)?,
                    None => FilterConfig::default(),
                };
                if let Some(gtfs_path) = gtfs_path {
                    filter_config.gtfs_path = gtfs_path.clone();
                }
                if let Some(itineraries_file) = itineraries_file {
                    filter_config.itineraries_file = itineraries_file.clone();
                }
                if let Some(output_directory) = output_directory {
                    filter_config.output_directory = output_directory.clone();
                }
                if let Some(service_id) = service_id {
                    filter_config.target_service_id = service_id.clone();
                }
                if *write_legs {
                    filter_config.write_matched_legs = true;
                }
                let summary = filter_ops::run_filter(&filter_config)?;
                log::info!("{summary}");
                Ok(())
            }
        }
    }
}
