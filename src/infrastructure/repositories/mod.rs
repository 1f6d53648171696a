// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_counter_repository;
pub mod postgres_team_repository;

pub use in_memory::{InMemoryCounterRepository, InMemoryStore, InMemoryTeamRepository};
pub use postgres_counter_repository::PostgresCounterRepository;
pub use postgres_team_repository::PostgresTeamRepository;
