pub mod app_state;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod upstream;
