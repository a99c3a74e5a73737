//! Network reachability probe.
//!
//! Answers `GET /` with a small JSON document naming the project, the host
//! and the current UTC time, so an operator can confirm that port mapping,
//! service discovery or load balancer routing reaches the process.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
