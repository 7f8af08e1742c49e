//! Day-of-year window pooling for seasonal scaling statistics.
//!
//! The scaling methods compute long-term statistics per calendar day
//! rather than over the whole series, so that seasonally varying biases
//! are corrected with seasonally varying factors. For each of the 365
//! days of the no-leap calendar, the pooled sample is the ±15-day
//! neighborhood around that day collected across every year of the
//! series. Neighborhoods of interior years cross year boundaries;
//! neighborhoods at the very start and end of the series are truncated
//! instead of wrapped, because the series is not circular.

mod error;

pub use error::WindowError;

/// Days per year in the no-leap calendar.
pub const DAYS_PER_YEAR: usize = 365;

/// Half-width of the pooling window: 15 days either side of the center
/// day, 31 days total.
pub const WINDOW_HALF_WIDTH: usize = 15;

fn check_whole_years(series: &[f64]) -> Result<usize, WindowError> {
    if series.is_empty() || series.len() % DAYS_PER_YEAR != 0 {
        return Err(WindowError::NotWholeYears { len: series.len() });
    }
    Ok(series.len() / DAYS_PER_YEAR)
}

/// Pools `series` into 365 day-of-year samples.
///
/// Entry `d` of the result concatenates, across all years, the values in
/// the ±15-day neighborhood around day-of-year `d` (0-based). Windows
/// reaching past the first or last element of the series are truncated.
///
/// # Errors
///
/// Returns [`WindowError::NotWholeYears`] if the series length is zero or
/// not a multiple of 365.
pub fn pooled_day_of_year(series: &[f64]) -> Result<Vec<Vec<f64>>, WindowError> {
    let n_years = check_whole_years(series)?;
    let n = series.len();

    let mut pooled = Vec::with_capacity(DAYS_PER_YEAR);
    for day in 0..DAYS_PER_YEAR {
        // 31 values per year except at the truncated ends
        let mut sample = Vec::with_capacity(n_years * (2 * WINDOW_HALF_WIDTH + 1));
        for year in 0..n_years {
            let center = year * DAYS_PER_YEAR + day;
            let start = center.saturating_sub(WINDOW_HALF_WIDTH);
            let end = (center + WINDOW_HALF_WIDTH).min(n - 1);
            sample.extend_from_slice(&series[start..=end]);
        }
        pooled.push(sample);
    }
    Ok(pooled)
}

/// Long-term mean per day-of-year over the pooled 31-day windows.
///
/// # Errors
///
/// Returns [`WindowError::NotWholeYears`] if the series length is zero or
/// not a multiple of 365.
pub fn doy_means(series: &[f64]) -> Result<Vec<f64>, WindowError> {
    let pooled = pooled_day_of_year(series)?;
    Ok(pooled.iter().map(|s| debias_stats::mean(s)).collect())
}

/// Long-term standard deviation per day-of-year over the pooled 31-day
/// windows.
///
/// # Errors
///
/// Returns [`WindowError::NotWholeYears`] if the series length is zero or
/// not a multiple of 365.
pub fn doy_sds(series: &[f64]) -> Result<Vec<f64>, WindowError> {
    let pooled = pooled_day_of_year(series)?;
    Ok(pooled.iter().map(|s| debias_stats::sd(s)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_partial_year() {
        assert_eq!(
            pooled_day_of_year(&vec![0.0; 366]).unwrap_err(),
            WindowError::NotWholeYears { len: 366 }
        );
    }

    #[test]
    fn rejects_empty_series() {
        assert_eq!(
            pooled_day_of_year(&[]).unwrap_err(),
            WindowError::NotWholeYears { len: 0 }
        );
    }

    #[test]
    fn single_year_window_sizes() {
        let series: Vec<f64> = (0..365).map(|i| i as f64).collect();
        let pooled = pooled_day_of_year(&series).unwrap();

        assert_eq!(pooled.len(), 365);
        // day 0: truncated left, days 0..=15
        assert_eq!(pooled[0].len(), 16);
        // interior day: full 31-day window
        assert_eq!(pooled[182].len(), 31);
        // day 364: truncated right, days 349..=364
        assert_eq!(pooled[364].len(), 16);
    }

    #[test]
    fn single_year_window_contents() {
        let series: Vec<f64> = (0..365).map(|i| i as f64).collect();
        let pooled = pooled_day_of_year(&series).unwrap();

        let expected: Vec<f64> = (5..=35).map(|i| i as f64).collect();
        assert_eq!(pooled[20], expected);
    }

    #[test]
    fn interior_year_windows_cross_year_boundary() {
        let series: Vec<f64> = (0..730).map(|i| i as f64).collect();
        let pooled = pooled_day_of_year(&series).unwrap();

        // day 0: year 0 truncated (16), year 1 full window 350..=380 (31)
        assert_eq!(pooled[0].len(), 16 + 31);
        assert_relative_eq!(pooled[0][16], 350.0, epsilon = 1e-12);
        assert_relative_eq!(pooled[0][46], 380.0, epsilon = 1e-12);
    }

    #[test]
    fn means_of_constant_series() {
        let series = vec![7.5; 730];
        let means = doy_means(&series).unwrap();
        assert_eq!(means.len(), 365);
        for &m in &means {
            assert_relative_eq!(m, 7.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn sds_of_constant_series_are_zero() {
        let series = vec![3.0; 365];
        let sds = doy_sds(&series).unwrap();
        for &s in &sds {
            assert_relative_eq!(s, 0.0, epsilon = 1e-12);
        }
    }
}
