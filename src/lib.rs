pub mod activation;
pub mod api;
pub mod configuration;
pub mod startup;
pub mod telemetry;
pub mod ui;
