//! Unit tests for the issue tracking module.

mod statistics_tests;
