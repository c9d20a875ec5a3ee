//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the shim:
//! - Capacity-managed collections
//! - Logging utilities

pub mod collections;
pub mod logging;
