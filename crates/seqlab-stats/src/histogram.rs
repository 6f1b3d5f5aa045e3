use std::ops::Range;

/// An equal-width histogram of a sequence.
///
/// The data range `[min, max]` is divided into `num_bins` bins of equal
/// width. Bins are contiguous, bounds strictly increase, and the final bin
/// includes the maximum value, so every value lands in exactly one bin.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, ordered by bound.
    pub bins: Vec<HistogramBin>,
}

/// A single histogram bin.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive
    /// end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates an equal-width histogram over the range of the values.
    ///
    /// A sequence whose values are all identical has a zero-width range; it
    /// is widened to a unit-width span centred on the value so the occupied
    /// bin keeps a printable interval.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to count
    /// * `num_bins` - The number of bins; with zero bins (or no values) the
    ///   histogram is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqlab_stats::histogram::Histogram;
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(&values, 5);
    /// assert_eq!(histogram.bins.len(), 5);
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new(values: &[f64], num_bins: usize) -> Self {
        if values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (low, width) = if max - min == 0.0 {
            (min - 0.5, 1.0)
        } else {
            (min, max - min)
        };
        let bin_width = width / num_bins as f64;

        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute boundaries from the full range instead of
                // accumulating bin_width, so adjacent bounds stay identical
                let bin_start = low + (bin_idx as f64) * width / (num_bins as f64);
                let mut bin_end = low + ((bin_idx + 1) as f64) * width / (num_bins as f64);
                if bin_idx == num_bins - 1 {
                    // next_up() keeps the maximum value inside the final bin
                    bin_end = bin_end.next_up();
                }
                HistogramBin {
                    range: bin_start..bin_end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &value in values {
            let normalized_position = (value - low) / bin_width;
            let idx = (normalized_position as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Total number of counted values, `sum` of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_sequence_length() {
        let values = [0.3, 1.7, 2.9, 0.1, 4.4, 3.8, 2.2, 1.1, 0.6, 3.3, 2.5];
        for num_bins in 1..=8 {
            let histogram = Histogram::new(&values, num_bins);
            assert_eq!(histogram.total_count(), values.len() as u64);
        }
    }

    #[test]
    fn test_uniform_values_fill_bins_evenly() {
        let values = (1..=10).map(f64::from).collect::<Vec<_>>();
        let histogram = Histogram::new(&values, 5);
        let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
        assert_eq!(counts, vec![2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_bounds_are_contiguous_and_increasing() {
        let values = [0.4, 2.6, 1.3, 9.8, 5.5, 7.1, 3.2];
        let histogram = Histogram::new(&values, 6);
        for bin in &histogram.bins {
            assert!(bin.range.start < bin.range.end);
        }
        for pair in histogram.bins.windows(2) {
            assert_eq!(pair[0].range.end, pair[1].range.start);
        }
    }

    #[test]
    fn test_range_covers_min_and_max() {
        let values = [0.4, 2.6, 1.3, 9.8, 5.5, 7.1, 3.2];
        let histogram = Histogram::new(&values, 4);
        let first = histogram.bins.first().unwrap();
        let last = histogram.bins.last().unwrap();
        assert_eq!(first.range.start, 0.4);
        assert!(last.range.contains(&9.8));
    }

    #[test]
    fn test_maximum_value_lands_in_final_bin() {
        // 0 and 10 span the range; 10 sits on the closing bound and must
        // not fall off the end
        let values = [0.0, 10.0];
        let histogram = Histogram::new(&values, 5);
        assert_eq!(histogram.bins.last().unwrap().count, 1);
        assert_eq!(histogram.total_count(), 2);
    }

    #[test]
    fn test_constant_values_occupy_a_single_bin() {
        let values = [6.5; 9];
        let histogram = Histogram::new(&values, 4);
        assert_eq!(histogram.total_count(), 9);
        let occupied = histogram.bins.iter().filter(|b| b.count > 0).count();
        assert_eq!(occupied, 1);
    }

    #[test]
    fn test_empty_input_or_zero_bins() {
        assert!(Histogram::new(&[], 5).bins.is_empty());
        assert!(Histogram::new(&[1.0, 2.0], 0).bins.is_empty());
    }
}
