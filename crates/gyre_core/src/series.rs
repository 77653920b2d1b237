//! Series normalization: raw values in, proportional slices out.
//!
//! The chart never sees raw values. Everything downstream of this module
//! works in fractions of one full turn, so the draw routine stays a dumb
//! multiply.

/// Normalized view of one value series.
///
/// Holds one fraction per slice, in input order, plus an optional
/// trailing fraction for the unfilled remainder. Fractions sum to 1
/// whenever the total is usable; a zero or non-finite total collapses
/// every fraction to 0 instead of poisoning the frame with NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Proportions {
    /// One fraction per slice, unfilled remainder last when present.
    fractions: Vec<f32>,
    /// True if the last fraction is the unfilled remainder.
    has_unfilled: bool,
    /// Fraction of the ring covered by real data.
    filled: f32,
}

impl Proportions {
    /// Normalizes a value series against its own sum plus `unfilled`.
    ///
    /// `unfilled` widens the denominator so the series covers only part
    /// of the ring. With `include_unfilled` set, the remainder becomes a
    /// visible trailing slice; otherwise it is just dead angle.
    ///
    /// Total for any input. Negative values pass through as negative
    /// fractions; the caller asked for them.
    #[must_use]
    pub fn normalize(values: &[f32], unfilled: f32, include_unfilled: bool) -> Self {
        let data_sum: f32 = values.iter().sum();
        let total = data_sum + unfilled;

        if total == 0.0 || !total.is_finite() {
            let mut fractions = vec![0.0; values.len()];
            if include_unfilled {
                fractions.push(0.0);
            }
            return Self {
                fractions,
                has_unfilled: include_unfilled,
                filled: 0.0,
            };
        }

        let mut fractions: Vec<f32> = values.iter().map(|value| value / total).collect();
        if include_unfilled {
            fractions.push(unfilled / total);
        }

        Self {
            fractions,
            has_unfilled: include_unfilled,
            filled: data_sum / total,
        }
    }

    /// Slice fractions in input order, unfilled remainder last when present.
    #[must_use]
    pub fn fractions(&self) -> &[f32] {
        &self.fractions
    }

    /// Fraction of the ring covered by real data. Drives the center label.
    #[must_use]
    pub fn filled_fraction(&self) -> f32 {
        self.filled
    }

    /// True if a trailing unfilled slice is present.
    #[must_use]
    pub fn has_unfilled(&self) -> bool {
        self.has_unfilled
    }

    /// True if `index` addresses the trailing unfilled slice.
    #[must_use]
    pub fn is_unfilled_index(&self, index: usize) -> bool {
        self.has_unfilled && index + 1 == self.fractions.len()
    }

    /// Number of slices, trailing unfilled slice included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    /// True if there are no slices at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_equal_values_split_evenly() {
        let proportions = Proportions::normalize(&[1.0, 1.0, 1.0, 1.0], 0.0, false);

        assert_eq!(proportions.len(), 4);
        for &fraction in proportions.fractions() {
            assert_close(fraction, 0.25);
        }
        assert_close(proportions.filled_fraction(), 1.0);
        assert!(!proportions.has_unfilled());
    }

    #[test]
    fn test_unfilled_widens_the_denominator() {
        let proportions = Proportions::normalize(&[3.0], 1.0, true);

        assert_eq!(proportions.fractions(), &[0.75, 0.25]);
        assert_close(proportions.filled_fraction(), 0.75);
        assert!(proportions.has_unfilled());
        assert!(proportions.is_unfilled_index(1));
        assert!(!proportions.is_unfilled_index(0));
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let series: &[&[f32]] = &[
            &[500.0, 500.0, 500.0, 500.0],
            &[1.0, 2.0, 3.0],
            &[0.25, 0.125, 4000.0, 17.5, 0.0],
        ];

        for values in series {
            let proportions = Proportions::normalize(values, 250.0, true);
            let sum: f32 = proportions.fractions().iter().sum();
            assert_close(sum, 1.0);
        }
    }

    #[test]
    fn test_empty_series_is_empty() {
        let proportions = Proportions::normalize(&[], 0.0, false);

        assert!(proportions.is_empty());
        assert_eq!(proportions.filled_fraction(), 0.0);
        assert!(!proportions.is_unfilled_index(0));
    }

    #[test]
    fn test_zero_total_degenerates_to_zero_fractions() {
        let proportions = Proportions::normalize(&[0.0, 0.0], 0.0, true);

        assert_eq!(proportions.fractions(), &[0.0, 0.0, 0.0]);
        assert_eq!(proportions.filled_fraction(), 0.0);
        assert!(proportions.fractions().iter().all(|f| f.is_finite()));
    }

    #[test]
    fn test_negative_values_stay_finite() {
        let proportions = Proportions::normalize(&[-1.0, 2.0], 0.0, false);

        assert!(proportions.fractions().iter().all(|f| f.is_finite()));
        assert_close(proportions.filled_fraction(), 1.0);
    }

    #[test]
    fn test_infinite_total_degenerates() {
        let proportions = Proportions::normalize(&[f32::INFINITY, 1.0], 0.0, false);

        assert_eq!(proportions.fractions(), &[0.0, 0.0]);
        assert_eq!(proportions.filled_fraction(), 0.0);
    }
}
