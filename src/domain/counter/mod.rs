// Counter domain module

#![allow(clippy::module_inception)]

pub mod counter;

pub use counter::{Counter, NewCounter};
