//! HTTP transport for the TaskHub auth service
//!
//! Library exports for the binary and the integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;
