//! Shared test utilities

pub mod mocks;
