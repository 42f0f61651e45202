pub mod cli;
pub mod config;
pub mod data_paths;
pub mod format;
pub mod investments;
pub mod logging;
pub mod profile;
pub mod transport;
pub mod ui;
