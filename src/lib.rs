//! # Shiftrack - hourly shift tracking
//!
//! A command-line client for a remote shift service. It records work shifts
//! (date, start, end, optional hourly rate), marks them completed, and shows
//! hours and pay per month as a table or a calendar grid.
//!
//! ## Features
//!
//! - **Time arithmetic**: shift durations from clock times, with end-before-start rejected
//! - **Rates**: per-shift overrides falling back to a monthly default, bounded to 1-1000
//! - **Reconciliation**: a local store kept in step with the service, with
//!   optimistic deletes, server-confirmed saves and stale-fetch protection
//! - **Views**: month tables, calendar grids and totals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
