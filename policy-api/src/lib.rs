pub mod api;
pub mod apply;
pub mod config;
pub mod endpoints;
pub mod router;
pub mod server;
pub mod store;
