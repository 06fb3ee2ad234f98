//! Presentation Layer
//!
//! HTTP routes, handlers and the middleware stack in front of them.

pub mod http;
pub mod middleware;
