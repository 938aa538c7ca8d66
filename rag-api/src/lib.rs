pub mod api;
pub mod config;
pub mod endpoints;
pub mod router;
pub mod server;
pub mod sources;
