// Team domain module

#![allow(clippy::module_inception)]

pub mod team;

pub use team::{NewTeam, Team, MAX_NAME_LEN};
