//! Export module for visualizing graphs in external tools.
//!
//! Supports:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools
//!
//! Exports are one-way renderings; there is no import path.

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{export_json, export_json_filtered};
