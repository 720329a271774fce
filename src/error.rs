use core::fmt;

/// Errors returned when building or loading a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The breakpoint table has no entries.
    EmptyTable,
    /// A calibration was given a full-scale voltage of zero.
    ZeroFullScale,
    /// A calibrated ADC value does not fit the target type.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyTable => f.write_str("breakpoint table is empty"),
            Error::ZeroFullScale => f.write_str("full-scale voltage must be non-zero"),
            Error::OutOfRange => f.write_str("calibrated value is out of range"),
        }
    }
}
