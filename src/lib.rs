pub mod configuration;
pub mod connectors;
pub mod db;
pub mod handlers;
mod helpers;
pub mod models;
pub mod routes;
pub mod startup;
pub mod telemetry;
