//! Comparative charting of factorized vs conventional designs.
//!
//! This module provides:
//! - Metric extraction, SI scaling, and size sweeps
//! - Explicit chart values rendered to PNG

pub mod render;
pub mod series;
