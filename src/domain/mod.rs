// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod counter;
pub mod error;
pub mod repositories;
pub mod services;
pub mod team;
