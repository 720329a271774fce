use crate::{Breakpoint, Error, LookupTable};
use embedded_hal::adc::{Channel, OneShot};

/// Reads an ADC channel and converts the reading through a
/// [`LookupTable`].
#[derive(Debug)]
pub struct AdcInterpolator<'a, Pin> {
    pin: Pin,
    table: LookupTable<'a>,
}

impl<'a, Pin> AdcInterpolator<'a, Pin> {
    /// Returns an interpolator using the provided table, whose `x`
    /// values are raw ADC readings.
    ///
    /// Returns [`Error::EmptyTable`] if `table` has no entries. An
    /// unsorted table is accepted; see
    /// [`is_valid`](AdcInterpolator::is_valid).
    ///
    /// # Examples
    ///
    /// Use [`Config`](crate::Config) to build the table from voltages:
    ///
    /// ```
    /// use lookup_table::{AdcInterpolator, Config};
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let config = Config {
    ///     max_voltage: 1000,
    ///     precision: 12,
    ///     voltage_to_values: [
    ///         (100, 40),
    ///         (200, 30),
    ///         (300, 10),
    ///     ],
    /// };
    ///
    /// let table = config.table()?;
    /// let interpolator = AdcInterpolator::new(pin, &table)?;
    /// assert!(interpolator.is_valid());
    /// # Ok::<(), lookup_table::Error>(())
    /// ```
    pub fn new<ADC>(pin: Pin, table: &'a [Breakpoint]) -> Result<Self, Error>
    where
        Pin: Channel<ADC>,
    {
        Ok(Self {
            pin,
            table: LookupTable::new(table)?,
        })
    }

    /// Destroys the interpolator and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    /// Returns a value based on the table, using linear interpolation
    /// between values in the table if necessary. Readings outside the
    /// table return the value of the nearest end point.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookup_table::{AdcInterpolator, pair};
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 614)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let table = [
    ///     pair(1000, 12, 100, 40)?,
    ///     pair(1000, 12, 200, 30)?,
    ///     pair(1000, 12, 300, 10)?,
    /// ];
    ///
    /// let mut interpolator = AdcInterpolator::new(pin, &table)?;
    ///
    /// // With voltage at 0.15V, the value is 35
    /// assert_eq!(interpolator.read(&mut adc), Ok(35));
    /// # Ok::<(), lookup_table::Error>(())
    /// ```
    pub fn read<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<i32, nb::Error<<Adc as OneShot<ADC, Word, Pin>>::Error>>
    where
        Word: Into<i32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let adc_value = adc.read(&mut self.pin)?;

        Ok(self.table.query(adc_value.into()))
    }

    /// Returns `true` if the table is sorted by ADC reading.
    pub fn is_valid(&self) -> bool {
        self.table.is_valid()
    }

    pub fn table(&self) -> &LookupTable<'a> {
        &self.table
    }

    /// Returns the smallest value that can be returned by
    /// [`read`](AdcInterpolator::read).
    pub fn min_value(&self) -> i32 {
        self.table.min_value()
    }

    /// Returns the largest value that can be returned by
    /// [`read`](AdcInterpolator::read).
    pub fn max_value(&self) -> i32 {
        self.table.max_value()
    }
}
