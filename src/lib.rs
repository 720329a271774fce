//! Piecewise-linear lookup tables for calibration curves.
//!
//! A [`LookupTable`] borrows a slice of [`Breakpoint`]s sorted by `x`
//! and maps any `i32` input onto the curve they describe. Inputs
//! between breakpoints are linearly interpolated; inputs outside the
//! table clamp to the nearest end point.
//!
//! [`AdcInterpolator`] pairs a table with an `embedded-hal` ADC channel,
//! and [`Config`] / [`pair`] build tables from millivolt calibrations.
//!
//! ```
//! use lookup_table::{Breakpoint, LookupTable};
//!
//! let curve = [
//!     Breakpoint::new(0, 0),
//!     Breakpoint::new(10, 100),
//! ];
//! let table = LookupTable::new(&curve)?;
//!
//! assert_eq!(table.query(-5), 0);
//! assert_eq!(table.query(5), 50);
//! assert_eq!(table.query(15), 100);
//! # Ok::<(), lookup_table::Error>(())
//! ```
#![cfg_attr(not(test), no_std)]

mod adc_interpolator;
mod breakpoint;
mod calibration;
mod error;
mod interpolate;
mod lookup_table;

pub use adc_interpolator::AdcInterpolator;
pub use breakpoint::{is_sorted, Breakpoint};
pub use calibration::{pair, Config};
pub use error::Error;
pub use lookup_table::LookupTable;
