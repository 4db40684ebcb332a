//! Name Ribbon WASM API
//!
//! This module provides the JavaScript-facing API for the name ribbon.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion, and logging
//! - `ribbon`: Curve sampling, layout, and canvas drawing entry points

pub mod helpers;
pub mod ribbon;

pub use ribbon::{draw_name, get_ribbon_defaults, layout_ribbon_js, sample_curve_js};
