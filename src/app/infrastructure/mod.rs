//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - The user settings store
//! - Tracing setup
//! - Error types

pub mod error;
pub mod logging;
pub mod store;
