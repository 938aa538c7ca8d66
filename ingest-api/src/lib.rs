pub mod actions;
pub mod api;
pub mod classify;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod index;
pub mod router;
pub mod scan;
pub mod server;
