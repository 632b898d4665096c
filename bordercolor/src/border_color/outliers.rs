use crate::utils::math::median;

/// Removes the values that lie more than `m` median absolute deviations away from the
/// median of `data`. The survivors keep their original order.
///
/// When the median absolute deviation is zero every value counts as close and nothing is
/// removed.
pub fn reject_outliers(data: &[i64], m: f64) -> Vec<i64> {
    let Some(mid) = median(data.iter().map(|&v| v as f64)) else {
        return Vec::new();
    };

    let deviations: Vec<f64> = data.iter().map(|&v| (v as f64 - mid).abs()).collect();
    let mdev = median(deviations.iter().copied()).unwrap_or(0.0);

    data.iter()
        .zip(&deviations)
        .filter(|&(_, &d)| {
            let score = if mdev != 0.0 { d / mdev } else { 0.0 };
            score < m
        })
        .map(|(&v, _)| v)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identical_values_are_kept() {
        let data = vec![42; 17];
        assert_eq!(data, reject_outliers(&data, 6.0));
    }

    #[test]
    fn mostly_identical_keeps_everything() {
        // mdev is zero since more than half of the deviations are zero
        let data = [10, 10, 10, 10, 250];
        assert_eq!(data.to_vec(), reject_outliers(&data, 6.0));
    }

    #[test]
    fn far_away_value_is_removed() {
        // median 12.5, mdev 1.5
        let data = [10, 11, 12, 13, 14, 240];
        assert_eq!(vec![10, 11, 12, 13, 14], reject_outliers(&data, 6.0));
    }

    #[test]
    fn keeps_order() {
        let data = [14, 240, 10, 13, 0, 11, 12];
        let out = reject_outliers(&data, 2.0);
        assert_eq!(vec![14, 10, 13, 11, 12], out);
    }

    #[test]
    fn median_survives() {
        let data = [1, 50, 100, 150, 255];
        let out = reject_outliers(&data, 0.5);
        assert!(out.contains(&100));
    }

    #[test]
    fn empty() {
        assert!(reject_outliers(&[], 6.0).is_empty());
    }
}
