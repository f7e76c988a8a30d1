pub mod app;
pub mod auth;
pub mod config;
pub mod dogs;
pub mod error;
pub mod extract;
pub mod session;
pub mod state;
pub mod stats;
pub mod users;
