pub mod auth;
pub mod binder;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
