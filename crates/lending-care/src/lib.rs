//! Core library for the Lending CARE customer intake service.
//!
//! The intake workflow computes indicative loan eligibility from a handful
//! of income inputs and records every accepted submission into an
//! append-only CSV ledger, one log per record category. Edge surfaces
//! (HTTP routes, CLI) live in the `services/api` crate and consume the
//! workflow through [`workflows::intake`].

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
