// Domain services orchestrating invariant-preserving transitions
// over the persistence ports

pub mod counter_service;
pub mod team_service;

pub use counter_service::CounterService;
pub use team_service::TeamService;
