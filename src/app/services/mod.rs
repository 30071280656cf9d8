//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Preference resolution
//! - Tab / Shift-Tab / Backspace policy
//! - Text operations

pub mod indent_keys;
pub mod settings_resolver;
pub mod text_ops;
