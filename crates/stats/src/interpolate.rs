//! Piecewise-linear interpolation over parallel coordinate arrays.

/// Interpolates the value at `x` from the parallel arrays `x_data` / `y_data`.
///
/// `x_data` must have at least two elements and be sorted ascending. The
/// bracketing segment is found by linear scan; the arrays here are bin
/// edges and CDF levels with at most a few hundred entries, so a binary
/// search would not pay off. Queries at or beyond the second-to-last
/// x-value reuse the final segment.
///
/// With `extrapolate` set, the final segment's slope is extended past the
/// data range. Without it, out-of-range queries are clamped to the nearest
/// endpoint value. A zero-width segment yields a zero slope rather than a
/// division error.
pub fn interpolate(x_data: &[f64], y_data: &[f64], x: f64, extrapolate: bool) -> f64 {
    let size = x_data.len();

    let i = if x >= x_data[size - 2] {
        size - 2
    } else {
        let mut i = 0;
        while x > x_data[i + 1] {
            i += 1;
        }
        i
    };

    let (x_left, x_right) = (x_data[i], x_data[i + 1]);
    let (mut y_left, mut y_right) = (y_data[i], y_data[i + 1]);

    if !extrapolate {
        if x < x_left {
            y_right = y_left;
        }
        if x > x_right {
            y_left = y_right;
        }
    }

    let slope = if x_right - x_left == 0.0 {
        0.0
    } else {
        (y_right - y_left) / (x_right - x_left)
    };
    y_left + slope * (x - x_left)
}
