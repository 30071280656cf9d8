//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the host editor:
//! - Key map registration and dispatch
//! - Editor sessions following the settings store

pub mod keymap;
pub mod session;
