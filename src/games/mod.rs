//! Game implementations built on the core types and rules.

pub mod set;
