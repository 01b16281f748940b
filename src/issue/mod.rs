//! Issue tracking: issues, their lifecycle, and who should work on them.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types, the role capability table, and the status state machine
//!   in [`domain`]
//! - Storage contracts in [`ports`]
//! - In-memory and `PostgreSQL` implementations in [`adapters`]
//! - The lifecycle service, assignee recommendation, and statistics in
//!   [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
