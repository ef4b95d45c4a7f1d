#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hotspot metrics derived from data grids.
//!
//! Two grids are read per region:
//!
//! * the current-period grid, giving today's count, the month-to-date total
//!   and last year's total for the same month ([`current::current_period`]);
//! * the historical grid, giving the monthly mean and record
//!   ([`historical::monthly_stats`]).
//!
//! Everything here is a pure function of its inputs. Missing or malformed
//! cells degrade to absent values; nothing in this crate can fail.

pub mod current;
pub mod historical;

pub use current::{current_period, days_in_month, month_of};
pub use historical::{monthly_stats, monthly_stats_for, record_year};
