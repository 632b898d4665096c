/// The middle value of `values`, or the mean of the two middle values if there is an
/// even number of them. `None` if `values` is empty.
pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sorted: Vec<f64> = values.into_iter().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Arithmetic mean of `values`. The sum is exact, only the final division is done in
/// floating point.
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Rounds to the nearest integer, ties to even. Every rounding in the crate goes through
/// here so the results are reproducible.
pub fn round(value: f64) -> f64 {
    value.round_ties_even()
}

#[cfg(test)]
mod test {
    use super::*;

    fn float_cmp(a: f64, b: f64) -> bool {
        (a - b).abs() <= 0.01
    }

    #[test]
    fn median_odd() {
        assert_eq!(Some(3.0), median([5.0, 1.0, 3.0]));
    }

    #[test]
    fn median_even() {
        assert!(float_cmp(2.5, median([4.0, 1.0, 3.0, 2.0]).unwrap()));
    }

    #[test]
    fn median_empty() {
        assert_eq!(None, median([]));
    }

    #[test]
    fn mean_exact() {
        assert_eq!(None, mean(&[]));
        assert!(float_cmp(2.0, mean(&[1, 2, 3]).unwrap()));
        assert!(float_cmp(127.5, mean(&[0, 255]).unwrap()));
    }

    #[test]
    fn ties_to_even() {
        assert_eq!(2.0, round(2.5));
        assert_eq!(4.0, round(3.5));
        assert_eq!(3.0, round(2.6));
        assert_eq!(-2.0, round(-2.5));
    }
}
