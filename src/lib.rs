//! advisor-stats core library.
//!
//! Fetches Trusted Advisor check metadata and summaries, folds the summaries
//! into one aggregate per check category (worst status plus summed resource
//! counters), and renders the result.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `aggregate`: Category lookup and the per-category fold.
//! - `stats`: Fetch-then-aggregate pipeline producing a `StatsReport`.
//! - `provider`: The `AdvisorApi` seam and snapshot replay.
//! - `support`: AWS Support API implementation of `AdvisorApi`.
//! - `models`: Catalog, summary, snapshot, and severity types.
//! - `output`: Human/JSON printers.
//! - `error`: Crate error type.
//! - `utils`: Supporting helpers.
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod provider;
pub mod stats;
pub mod support;
pub mod utils;
