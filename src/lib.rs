pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod migration;
pub mod payloads;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_helpers;
