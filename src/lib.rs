// Library entry point
#[cfg(feature = "chart")]
pub mod chart;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod logging;
pub mod menu;
pub mod report;
