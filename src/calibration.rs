use crate::{Breakpoint, Error};

/// Converts a voltage and corresponding value into a [`Breakpoint`]
/// whose `x` is the ADC reading for that voltage.
///
/// # Arguments
///
/// - `max_voltage`: The voltage corresponding to the largest value possible for the ADC (mV)
/// - `precision`: The precision of the ADC in bits (eg. for 10-bit precision, use `10`)
/// - `voltage`: The voltage to convert (mV)
/// - `value`: The value to use in the breakpoint
///
/// # Examples
///
/// ```
/// use lookup_table::{pair, Breakpoint};
///
/// assert_eq!(
///     pair(
///         1000, // 1 V max voltage
///         12,   // 12 bits of precision
///         150,  // 0.15 V
///         35,   // value
///     ),
///     Ok(Breakpoint::new(614, 35)),
/// );
/// ```
pub fn pair(max_voltage: u32, precision: u32, voltage: u32, value: i32) -> Result<Breakpoint, Error> {
    if max_voltage == 0 {
        return Err(Error::ZeroFullScale);
    }

    let max_adc_value = 2u64.checked_pow(precision).ok_or(Error::OutOfRange)?;
    let adc_value = u64::from(voltage)
        .checked_mul(max_adc_value)
        .ok_or(Error::OutOfRange)?
        / u64::from(max_voltage);

    let x = i32::try_from(adc_value).map_err(|_| Error::OutOfRange)?;

    Ok(Breakpoint::new(x, value))
}

/// Calibration for an ADC-backed lookup table.
///
/// - `max_voltage`: The voltage corresponding to the largest value possible for the ADC (mV)
/// - `precision`: The precision of the ADC in bits (eg. for 10-bit precision, use `10`)
/// - `voltage_to_values`: An array of tuples of `(voltage in mV, value)` which will be used for the interpolation
///
/// # Examples
///
/// ```
/// use lookup_table::{Config, LookupTable};
///
/// let config = Config {
///     max_voltage: 3300, // 3.3 V
///     precision: 10,     // 10 bits of precision
///     voltage_to_values: [
///         (100, 5),   // 100 mV  -> 5
///         (500, 10),  // 500 mV  -> 10
///         (2000, 15), // 2000 mV -> 15
///     ],
/// };
///
/// let breakpoints = config.table()?;
/// let table = LookupTable::new(&breakpoints)?;
/// assert_eq!(table.query(0), 5);
/// # Ok::<(), lookup_table::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config<const LENGTH: usize> {
    pub max_voltage: u32,
    pub precision: u32,
    pub voltage_to_values: [(u32, i32); LENGTH],
}

impl<const LENGTH: usize> Config<LENGTH> {
    /// Returns the breakpoints in ADC counts, in the same order as
    /// `voltage_to_values`.
    pub fn table(&self) -> Result<[Breakpoint; LENGTH], Error> {
        let mut table = [Breakpoint::default(); LENGTH];

        for (entry, (voltage, value)) in table.iter_mut().zip(self.voltage_to_values) {
            *entry = pair(self.max_voltage, self.precision, voltage, value)?;
        }

        Ok(table)
    }
}
