//! Core library modules for shiftrack.
//!
//! - **Domain**: time arithmetic, months, rates, shifts and their totals
//! - **State**: the shift store and the controller that reconciles it with the service
//! - **Infrastructure**: configuration, data storage, messaging
//! - **Presentation**: calendar layout, formatting and console views
//!
//! ## Usage
//!
//! ```rust
//! use shiftrack::libs::shift::ShiftDraft;
//!
//! let draft = ShiftDraft::parse("2025-03-04", "09:00", "17:30", "")?;
//! assert_eq!(draft.hourly_rate(), None);
//! # Ok::<(), shiftrack::libs::error::ValidationError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod controller;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod month;
pub mod rate;
pub mod shift;
pub mod store;
pub mod summary;
pub mod time;
pub mod view;
