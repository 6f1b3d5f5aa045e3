//! Table output for the analyze command.

use seqlab_analysis::{
    comparison::{FitQuality, SequenceComparison},
    sample::SampleSizeStudy,
};
use seqlab_stats::{correlation::AutocorrelationProfile, histogram::Histogram};

/// Print legend explaining table rows and marks.
pub(super) fn print_legend() {
    println!("Legend:");
    println!("  deviation, %  : Relative deviation from the reference sample (largest size)");
    println!("  CI L          : Half-width of the two-sided confidence interval at level L");
    println!("  *             : Coefficient magnitude above the 1.96/sqrt(n) bound");
}

/// Print the characteristics of every profiled sample size, one column per
/// size, with a deviation row under each characteristic.
pub(super) fn print_characteristics_table(study: &SampleSizeStudy) {
    let deviations = study.deviations();

    print!("{:<26}", "Characteristic");
    for profile in &study.profiles {
        print!(" {:>10}", format!("n={}", profile.sample_size));
    }
    println!();
    println!("{}", "-".repeat(26 + 11 * study.profiles.len()));

    print_metric_rows(
        "Mean",
        study.profiles.iter().map(|p| p.statistics.mean),
        deviations.iter().map(|d| d.statistics.mean),
    );
    for (index, interval) in study.reference().confidence_intervals.iter().enumerate() {
        print_metric_rows(
            &format!("CI {:.2} half-width", interval.confidence_level),
            study
                .profiles
                .iter()
                .map(|p| p.confidence_intervals[index].half_width),
            deviations.iter().map(|d| d.confidence_intervals[index]),
        );
    }
    print_metric_rows(
        "Variance",
        study.profiles.iter().map(|p| p.statistics.variance),
        deviations.iter().map(|d| d.statistics.variance),
    );
    print_metric_rows(
        "Std deviation",
        study.profiles.iter().map(|p| p.statistics.std_dev),
        deviations.iter().map(|d| d.statistics.std_dev),
    );
    print_metric_rows(
        "Coefficient of variation",
        study
            .profiles
            .iter()
            .map(|p| p.statistics.coefficient_of_variation),
        deviations
            .iter()
            .map(|d| d.statistics.coefficient_of_variation),
    );
}

fn print_metric_rows<V, D>(label: &str, values: V, deviations: D)
where
    V: Iterator<Item = f64>,
    D: Iterator<Item = f64>,
{
    print!("{label:<26}");
    for value in values {
        print!(" {value:>10.4}");
    }
    println!();
    print!("{:<26}", "  deviation, %");
    for deviation in deviations {
        print!(" {deviation:>9.2}%");
    }
    println!();
}

/// Print the autocorrelation coefficients with significance marks.
pub(super) fn print_autocorrelation_table(profile: &AutocorrelationProfile, threshold: f64) {
    println!("{:<6} {:>12}  {}", "Lag", "Coefficient", "Significant");
    println!("{}", "-".repeat(32));
    for coefficient in &profile.coefficients {
        let mark = if coefficient.coefficient.abs() > threshold {
            "*"
        } else {
            ""
        };
        println!(
            "{:<6} {:>12.4}  {mark}",
            coefficient.lag, coefficient.coefficient
        );
    }
    println!(
        "Significant lags: {} of {} (bound {threshold:.4})",
        profile.significant_lag_count(threshold),
        profile.coefficients.len(),
    );
}

/// Print histogram intervals with counts and shares.
#[expect(clippy::cast_precision_loss)]
pub(super) fn print_interval_table(histogram: &Histogram) {
    let total = histogram.total_count();
    println!("{:<28} {:>8} {:>9}", "Interval", "Count", "Share");
    println!("{}", "-".repeat(47));
    for bin in &histogram.bins {
        let share = if total == 0 {
            0.0
        } else {
            100.0 * bin.count as f64 / total as f64
        };
        let interval = format!("[{:.4}, {:.4})", bin.range.start, bin.range.end);
        println!("{interval:<28} {:>8} {share:>8.2}%", bin.count);
    }
}

/// Print the original and the synthetic sequence side by side.
pub(super) fn print_comparison_table(comparison: &SequenceComparison) {
    println!(
        "{:<26} {:>10} {:>10} {:>10}",
        "Characteristic", "Original", "Generated", "Deviation"
    );
    println!("{}", "-".repeat(59));
    print_comparison_row(
        "Mean",
        comparison.original.mean,
        comparison.generated.mean,
        comparison.deviations.mean,
    );
    print_comparison_row(
        "Variance",
        comparison.original.variance,
        comparison.generated.variance,
        comparison.deviations.variance,
    );
    print_comparison_row(
        "Std deviation",
        comparison.original.std_dev,
        comparison.generated.std_dev,
        comparison.deviations.std_dev,
    );
    print_comparison_row(
        "Coefficient of variation",
        comparison.original.coefficient_of_variation,
        comparison.generated.coefficient_of_variation,
        comparison.deviations.coefficient_of_variation,
    );
    println!();

    if !comparison.autocorrelation.is_empty() {
        println!(
            "{:<6} {:>10} {:>10} {:>10}",
            "Lag", "Original", "Generated", "|Diff|"
        );
        println!("{}", "-".repeat(39));
        for pair in &comparison.autocorrelation {
            println!(
                "{:<6} {:>10.4} {:>10.4} {:>10.4}",
                pair.lag, pair.original, pair.generated, pair.absolute_difference
            );
        }
        println!();
    }

    println!("Cross-correlation: {:.4}", comparison.cross_correlation);
    println!(
        "Fit quality: {} (mean deviation {:.2}%, bound {}%)",
        comparison.quality,
        comparison.deviations.mean,
        FitQuality::MEAN_DEVIATION_THRESHOLD
    );
}

fn print_comparison_row(label: &str, original: f64, generated: f64, deviation: f64) {
    println!("{label:<26} {original:>10.4} {generated:>10.4} {deviation:>9.2}%");
}
