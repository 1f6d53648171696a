// Persistence ports consumed by the domain services
// Implemented by adapters in the infrastructure layer

pub mod counter_repository;
pub mod team_repository;

pub use counter_repository::{CounterRepository, CounterSummary};
pub use team_repository::{TeamRepository, TeamStepsSummary};
