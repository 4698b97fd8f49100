pub mod app;
pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod scheduler;
pub mod state;
pub mod views;
