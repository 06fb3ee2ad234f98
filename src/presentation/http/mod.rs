//! HTTP API
//!
//! Route table and handlers for the REST endpoints.

pub mod handlers;
pub mod routes;
