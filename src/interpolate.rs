/// Maps `x` from `[x0, x1]` onto `[y0, y1]`, truncating toward zero.
///
/// The product is computed in `i64` so steep segments near the ends of
/// the `i32` range cannot overflow. A zero-width segment yields `y0`.
pub fn interpolate(x0: i32, x1: i32, y0: i32, y1: i32, x: i32) -> i32 {
    let dx = i64::from(x1) - i64::from(x0);

    if dx == 0 {
        return y0;
    }

    let offset = (i64::from(x) - i64::from(x0)) * (i64::from(y1) - i64::from(y0)) / dx;
    let y = i64::from(y0) + offset;

    y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
