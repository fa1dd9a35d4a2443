//! Workflow modules grouped by business capability.

pub mod intake;
