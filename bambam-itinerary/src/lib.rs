pub mod app;
pub mod connection;
pub mod itinerary;
pub mod output;
pub mod policy_config;
pub mod run_log;
pub mod schedule;
