//! Adapter implementations of the issue tracking ports.

pub mod memory;
pub mod postgres;
