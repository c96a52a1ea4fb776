//! Shared fixtures for the integration suites.

pub mod fixtures;
pub mod resolvers;
