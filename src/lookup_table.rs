use crate::{breakpoint::is_sorted, interpolate::interpolate, Breakpoint, Error};

/// A piecewise-linear lookup table over a borrowed slice of breakpoints.
///
/// Inputs between two breakpoints are linearly interpolated. Inputs
/// outside the table return the `y` of the nearest end point.
///
/// The table never copies or mutates the breakpoints. The slice must
/// outlive the `LookupTable`, which the `'a` lifetime enforces.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LookupTable<'a> {
    table: &'a [Breakpoint],
    valid: bool,
}

impl<'a> LookupTable<'a> {
    /// Returns a lookup table using the provided breakpoints.
    ///
    /// Returns [`Error::EmptyTable`] if `table` has no entries. A table
    /// that is not sorted by `x` is still accepted; check
    /// [`is_valid`](LookupTable::is_valid) to reject it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookup_table::{Breakpoint, LookupTable};
    ///
    /// let breakpoints = [Breakpoint::new(0, 0), Breakpoint::new(10, 100)];
    /// let table = LookupTable::new(&breakpoints)?;
    ///
    /// assert!(table.is_valid());
    /// assert_eq!(table.query(5), 50);
    /// # Ok::<(), lookup_table::Error>(())
    /// ```
    pub fn new(table: &'a [Breakpoint]) -> Result<Self, Error> {
        let mut lookup = Self { table, valid: true };
        lookup.load(table)?;
        Ok(lookup)
    }

    /// Replaces the active breakpoints with `table`.
    ///
    /// Returns `Ok(false)` if `table` is not in ascending order by `x`.
    /// The table is stored either way and later queries use it.
    ///
    /// An empty `table` returns [`Error::EmptyTable`] and leaves the
    /// previously loaded breakpoints active.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookup_table::{Breakpoint, LookupTable};
    ///
    /// let sorted: [Breakpoint; 3] = [(0, 0).into(), (5, 3).into(), (10, 5).into()];
    /// let unsorted: [Breakpoint; 3] = [(0, 0).into(), (10, 5).into(), (5, 3).into()];
    ///
    /// let mut table = LookupTable::new(&sorted)?;
    /// assert_eq!(table.load(&unsorted), Ok(false));
    /// assert_eq!(table.load(&sorted), Ok(true));
    /// # Ok::<(), lookup_table::Error>(())
    /// ```
    pub fn load(&mut self, table: &'a [Breakpoint]) -> Result<bool, Error> {
        if table.is_empty() {
            return Err(Error::EmptyTable);
        }

        let valid = is_sorted(table);

        if !valid {
            #[cfg(feature = "defmt")]
            defmt::warn!("lookup table of {} entries is not sorted by x", table.len());
        }

        self.table = table;
        self.valid = valid;

        Ok(valid)
    }

    /// Returns the value for `x`, interpolating between the two
    /// breakpoints that bracket it.
    ///
    /// The bracket is the first pair, scanning from the low end, whose
    /// upper `x` is greater than `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookup_table::{Breakpoint, LookupTable};
    ///
    /// let breakpoints = [
    ///     Breakpoint::new(0, 0),
    ///     Breakpoint::new(5, 3),
    ///     Breakpoint::new(10, 5),
    /// ];
    /// let table = LookupTable::new(&breakpoints)?;
    ///
    /// assert_eq!(table.query(-20), 0);
    /// assert_eq!(table.query(2), 1);
    /// assert_eq!(table.query(7), 3);
    /// assert_eq!(table.query(20), 5);
    /// # Ok::<(), lookup_table::Error>(())
    /// ```
    pub fn query(&self, x: i32) -> i32 {
        let first = self.first();
        let last = self.last();

        if x <= first.x {
            return first.y;
        }

        if x >= last.x {
            return last.y;
        }

        self.table
            .windows(2)
            .find(|w| x < w[1].x)
            .map_or(last.y, |w| interpolate(w[0].x, w[1].x, w[0].y, w[1].y, x))
    }

    /// Returns `true` if the loaded breakpoints are sorted by `x`.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the number of breakpoints. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn entries(&self) -> &'a [Breakpoint] {
        self.table
    }

    /// Returns the smallest value that can be returned by
    /// [`query`](LookupTable::query) for a sorted table.
    pub fn min_value(&self) -> i32 {
        self.table.iter().map(|b| b.y).min().unwrap_or(self.first().y)
    }

    /// Returns the largest value that can be returned by
    /// [`query`](LookupTable::query) for a sorted table.
    pub fn max_value(&self) -> i32 {
        self.table.iter().map(|b| b.y).max().unwrap_or(self.first().y)
    }

    // `table` is non-empty: `new` and `load` reject empty slices.
    fn first(&self) -> Breakpoint {
        self.table[0]
    }

    fn last(&self) -> Breakpoint {
        self.table[self.table.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points<const LENGTH: usize>(pairs: [(i32, i32); LENGTH]) -> [Breakpoint; LENGTH] {
        pairs.map(Breakpoint::from)
    }

    fn table_two_point() -> [Breakpoint; 2] {
        points([(0, 0), (10, 100)])
    }

    fn table_sorted() -> [Breakpoint; 3] {
        points([(0, 0), (5, 3), (10, 5)])
    }

    fn table_unsorted() -> [Breakpoint; 3] {
        points([(0, 0), (10, 5), (5, 3)])
    }

    fn table_negative() -> [Breakpoint; 3] {
        points([(100, 40), (200, 30), (300, 10)])
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(LookupTable::new(&[]).unwrap_err(), Error::EmptyTable);
    }

    #[test]
    fn empty_load_keeps_previous_table() {
        let breakpoints = table_two_point();
        let mut table = LookupTable::new(&breakpoints).unwrap();

        assert_eq!(table.load(&[]), Err(Error::EmptyTable));
        assert_eq!(table.len(), 2);
        assert_eq!(table.query(5), 50);
    }

    #[test]
    fn load_reports_ordering() {
        let sorted = table_sorted();
        let unsorted = table_unsorted();
        let mut table = LookupTable::new(&sorted).unwrap();

        assert_eq!(table.load(&unsorted), Ok(false));
        assert!(!table.is_valid());
        assert_eq!(table.load(&sorted), Ok(true));
        assert!(table.is_valid());
    }

    #[test]
    fn unsorted_table_still_answers() {
        let unsorted = table_unsorted();
        let table = LookupTable::new(&unsorted).unwrap();

        assert!(!table.is_valid());
        assert_eq!(table.entries(), &unsorted);
        assert_eq!(table.query(-1), 0);
        assert_eq!(table.query(7), 3);
        assert_eq!(table.query(2), 1);
    }

    #[test]
    fn equal_x_breakpoints_are_valid() {
        let breakpoints = points([(0, 0), (5, 10), (5, 20), (10, 30)]);
        let table = LookupTable::new(&breakpoints).unwrap();

        assert!(table.is_valid());
        assert_eq!(table.query(4), 8);
        assert_eq!(table.query(5), 20);
        assert_eq!(table.query(6), 22);
    }

    #[test]
    fn two_point_table() {
        let breakpoints = table_two_point();
        let table = LookupTable::new(&breakpoints).unwrap();

        assert_eq!(table.query(5), 50);
        assert_eq!(table.query(0), 0);
        assert_eq!(table.query(10), 100);
        assert_eq!(table.query(-5), 0);
        assert_eq!(table.query(15), 100);
    }

    #[test]
    fn single_point_table() {
        let breakpoints = points([(5, 42)]);
        let table = LookupTable::new(&breakpoints).unwrap();

        for x in [i32::MIN, -100, 4, 5, 6, 100, i32::MAX] {
            assert_eq!(table.query(x), 42);
        }
    }

    #[test]
    fn clamps_outside_range() {
        let breakpoints = table_negative();
        let table = LookupTable::new(&breakpoints).unwrap();

        assert_eq!(table.query(i32::MIN), 40);
        assert_eq!(table.query(99), 40);
        assert_eq!(table.query(100), 40);
        assert_eq!(table.query(300), 10);
        assert_eq!(table.query(301), 10);
        assert_eq!(table.query(i32::MAX), 10);
    }

    #[test]
    fn matching_exact_values() {
        let breakpoints = table_negative();
        let table = LookupTable::new(&breakpoints).unwrap();

        assert_eq!(table.query(100), 40);
        assert_eq!(table.query(200), 30);
        assert_eq!(table.query(300), 10);
    }

    #[test]
    fn interpolates_within_bracketing_segment() {
        let breakpoints = table_negative();
        let table = LookupTable::new(&breakpoints).unwrap();

        assert_eq!(table.query(150), 35);
        assert_eq!(table.query(123), 38);
        assert_eq!(table.query(250), 20);
        assert_eq!(table.query(299), 11);

        let breakpoints = table_sorted();
        let table = LookupTable::new(&breakpoints).unwrap();

        assert_eq!(table.query(2), 1);
        assert_eq!(table.query(4), 2);
        assert_eq!(table.query(8), 4);
    }

    #[test]
    fn repeated_queries_match() {
        let breakpoints = table_sorted();
        let table = LookupTable::new(&breakpoints).unwrap();
        let first = table.query(3);

        for _ in 0..10 {
            assert_eq!(table.query(3), first);
        }
    }

    #[test]
    fn monotonic_for_increasing_table() {
        let breakpoints = points([(-50, -200), (0, 0), (20, 15), (75, 90), (100, 1000)]);
        let table = LookupTable::new(&breakpoints).unwrap();

        let mut previous = table.query(-60);
        for x in -60..=110 {
            let y = table.query(x);
            assert!(y >= previous, "query({}) = {} < {}", x, y, previous);
            previous = y;
        }
    }

    #[test]
    fn clamps_to_end_points_for_any_table() {
        let tables = [
            points([(-3, 7), (0, 1), (4, 9), (9, -2)]),
            points([(1, 1), (1, 2), (2, 3), (2, 4)]),
        ];

        for breakpoints in &tables {
            let table = LookupTable::new(breakpoints).unwrap();
            let first = breakpoints[0];
            let last = breakpoints[breakpoints.len() - 1];

            for offset in 0..5 {
                assert_eq!(table.query(first.x - offset), first.y);
                assert_eq!(table.query(last.x + offset), last.y);
            }
        }
    }

    #[test]
    fn min_value() {
        let breakpoints = table_negative();
        assert_eq!(LookupTable::new(&breakpoints).unwrap().min_value(), 10);

        let breakpoints = points([(0, 5), (1, -3), (2, 8)]);
        assert_eq!(LookupTable::new(&breakpoints).unwrap().min_value(), -3);
    }

    #[test]
    fn max_value() {
        let breakpoints = table_negative();
        assert_eq!(LookupTable::new(&breakpoints).unwrap().max_value(), 40);

        let breakpoints = points([(0, 5), (1, 12), (2, 8)]);
        assert_eq!(LookupTable::new(&breakpoints).unwrap().max_value(), 12);
    }
}
