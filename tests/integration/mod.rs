//! Integration tests for rank-manager
//!
//! These tests drive the registry through its public API only.

pub mod concurrency_tests;
