//! Empirical probability and cumulative distribution functions over fixed
//! bin edges.
//!
//! The binning policy is deliberately non-textbook and must not be
//! "corrected": the first bucket also catches values at or below the first
//! edge, the last bucket catches values at or above the second-to-last
//! edge, and the scan bound excludes the final bucket index so a two-edge
//! vector bins nothing. Quantile mapping results depend on exactly this
//! assignment of boundary values.

/// Per-bucket sample counts of `arr` over the bin edges `bins`.
///
/// Returns `bins.len() - 1` buckets. Each sample increments exactly one
/// bucket: the first bucket for values `<= bins[0]`, interior buckets for
/// the half-open ranges `[bins[i], bins[i+1])`, and the last bucket for
/// values `>= bins[bins.len() - 2]`.
///
/// `bins` must hold at least two ascending edges; this is checked with a
/// debug assertion.
pub fn get_pdf(arr: &[f64], bins: &[f64]) -> Vec<usize> {
    debug_assert!(bins.len() >= 2, "get_pdf: bins must hold at least 2 edges");
    let mut pdf = vec![0usize; bins.len() - 1];
    for &value in arr {
        for i in 0..pdf.len() - 1 {
            if i == 0 && value <= bins[i] {
                pdf[i] += 1;
                break;
            } else if value >= bins[i] && value < bins[i + 1] {
                pdf[i] += 1;
                break;
            } else if i == pdf.len() - 2 && value >= bins[i + 1] {
                pdf[i + 1] += 1;
                break;
            }
        }
    }
    pdf
}

/// Cumulative sum of [`get_pdf`] with a leading zero.
///
/// The result has `bins.len()` entries, starts at 0, is non-decreasing,
/// and ends at `arr.len()` whenever every sample lands in a bucket.
pub fn get_cdf(arr: &[f64], bins: &[f64]) -> Vec<usize> {
    let pdf = get_pdf(arr, bins);
    let mut cdf = vec![0usize; pdf.len() + 1];
    for (i, &count) in pdf.iter().enumerate() {
        cdf[i + 1] = cdf[i] + count;
    }
    cdf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_reference_fixture() {
        let arr = [1.0, 0.0, -1.0, 2.0, 0.0, -2.0];
        let bins = [-5.0, 0.0, 5.0];
        assert_eq!(get_pdf(&arr, &bins), vec![2, 4]);
    }

    #[test]
    fn cdf_reference_fixture() {
        let arr = [1.0, 0.0, -1.0, 2.0, 0.0, -2.0];
        let bins = [-5.0, 0.0, 5.0];
        assert_eq!(get_cdf(&arr, &bins), vec![0, 2, 6]);
    }

    #[test]
    fn pdf_value_at_first_edge_goes_to_first_bucket() {
        let bins = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(get_pdf(&[0.0], &bins), vec![1, 0, 0]);
    }

    #[test]
    fn pdf_value_below_range_goes_to_first_bucket() {
        let bins = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(get_pdf(&[-10.0], &bins), vec![1, 0, 0]);
    }

    #[test]
    fn pdf_value_above_range_goes_to_last_bucket() {
        let bins = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(get_pdf(&[100.0], &bins), vec![0, 0, 1]);
    }

    #[test]
    fn pdf_interior_edges_are_half_open() {
        let bins = [0.0, 1.0, 2.0, 3.0];
        // 1.0 belongs to [1, 2), not [0, 1)
        assert_eq!(get_pdf(&[1.0], &bins), vec![0, 1, 0]);
    }

    #[test]
    fn cdf_properties_hold() {
        let arr: Vec<f64> = (0..100).map(|i| (i as f64) * 0.37 - 5.0).collect();
        let bins: Vec<f64> = (0..=20).map(|i| i as f64 * 2.0 - 6.0).collect();
        let cdf = get_cdf(&arr, &bins);

        assert_eq!(cdf[0], 0);
        assert_eq!(*cdf.last().unwrap(), arr.len());
        for w in cdf.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    #[should_panic(expected = "bins must hold at least 2 edges")]
    fn pdf_rejects_single_edge() {
        get_pdf(&[1.0], &[0.0]);
    }

    #[test]
    fn cdf_empty_series() {
        let bins = [0.0, 1.0, 2.0];
        assert_eq!(get_cdf(&[], &bins), vec![0, 0, 0]);
    }
}
