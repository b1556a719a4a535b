//! Application layer - Use case implementations
//!
//! This module runs the exercises on fixed samples and renders console reports.

pub mod showcase;
