//! Issue tracker core: issue lifecycle, role-gated mutations, assignee
//! recommendation, and project statistics.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`issue`]: Issues, users, projects, and the lifecycle service
//! - [`telemetry`]: Tracing subscriber setup

pub mod issue;
pub mod telemetry;
