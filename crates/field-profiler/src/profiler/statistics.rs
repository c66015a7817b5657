//! Descriptive statistics over plain value slices.

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
///
/// `None` with fewer than two values, where the estimate is undefined.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Quantile of an ascending slice, linearly interpolated between the two
/// closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Median of an ascending slice.
pub fn median(sorted: &[f64]) -> Option<f64> {
    quantile(sorted, 0.5)
}

/// Copy and sort values ascending. NaN-free input is expected.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== mean / std tests ====================

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_sample_std_basic() {
        // Mean = 3, Variance = 10 / 4 = 2.5, Std = sqrt(2.5) ~ 1.58
        let std = sample_std(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((std - 1.5811).abs() < 1e-3);
    }

    #[test]
    fn test_sample_std_undefined_below_two_values() {
        assert_eq!(sample_std(&[5.0]), None);
        assert_eq!(sample_std(&[]), None);
    }

    #[test]
    fn test_sample_std_identical_values() {
        assert_eq!(sample_std(&[5.0, 5.0, 5.0, 5.0]), Some(0.0));
    }

    // ==================== quantile tests ====================

    #[test]
    fn test_quantile_interpolates() {
        let values = sorted(&[10.0, 12.0, 11.0, 13.0, 1000.0]);
        assert_eq!(quantile(&values, 0.25), Some(11.0));
        assert_eq!(quantile(&values, 0.75), Some(13.0));
        assert_eq!(median(&values), Some(12.0));

        // Even count: halfway between ranks
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(median(&values), Some(2.5));
        assert_eq!(quantile(&values, 0.25), Some(1.75));
    }

    #[test]
    fn test_quantile_single_and_empty() {
        assert_eq!(quantile(&[7.0], 0.25), Some(7.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_quartiles_bracket_median() {
        let values = sorted(&[3.0, -1.0, 8.5, 2.0, 2.0, 40.0, 0.0, 7.0, 6.0]);
        let q1 = quantile(&values, 0.25).unwrap();
        let q3 = quantile(&values, 0.75).unwrap();
        let median = median(&values).unwrap();
        assert!(q1 <= median && median <= q3);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.345_67), 2.35);
        assert_eq!(round2(-1.004), -1.0);
        assert_eq!(round2(10.0), 10.0);
    }
}
