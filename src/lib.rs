//! Steptrack API Library
//!
//! REST backend for tracking teams and their step counters: domain
//! entities and services, persistence ports with Postgres and in-memory
//! adapters, and the axum HTTP layer.

pub mod api;
pub mod domain;
pub mod infrastructure;
