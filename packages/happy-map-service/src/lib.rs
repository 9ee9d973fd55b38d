pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod routes;
pub mod services;
