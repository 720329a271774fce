/// One `(x, y)` anchor of a lookup curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Breakpoint {
    pub x: i32,
    pub y: i32,
}

impl Breakpoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Breakpoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Returns `true` if `table` is in non-decreasing order by `x`.
///
/// # Examples
///
/// ```
/// use lookup_table::{is_sorted, Breakpoint};
///
/// assert!(is_sorted(&[Breakpoint::new(0, 0), Breakpoint::new(5, 3)]));
/// assert!(!is_sorted(&[Breakpoint::new(5, 3), Breakpoint::new(0, 0)]));
/// ```
pub fn is_sorted(table: &[Breakpoint]) -> bool {
    table.windows(2).all(|w| w[0].x <= w[1].x)
}
