//! Sequence analysis command
//!
//! Profiles a numeric sequence at several sample sizes, reports its
//! autocorrelation and value distribution, fits a distribution family, and
//! holds a synthetic sequence against the original.

mod table;

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Args;
use seqlab_analysis::{comparison::SequenceComparison, sample::SampleSizeStudy};
use seqlab_model::{
    fit::DistributionFit, generator::SequenceGenerator, hyperexponential::HyperexponentialParams,
};
use seqlab_stats::{correlation::AutocorrelationProfile, histogram::Histogram};

use crate::{data, plot, schema::AnalysisReport, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the sequence file (one value per line)
    pub input: PathBuf,

    /// Prefix sample sizes to profile (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = [10, 20, 50, 100, 200, 300])]
    pub sizes: Vec<usize>,

    /// Confidence levels for the mean intervals (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = [0.90, 0.95, 0.99])]
    pub confidence_levels: Vec<f64>,

    /// Largest autocorrelation lag to compute
    #[arg(long, default_value_t = 10)]
    pub max_lag: usize,

    /// Number of histogram bins
    #[arg(long, default_value_t = 18)]
    pub bins: usize,

    /// Probability of the first branch in the hyperexponential fit
    #[arg(long, default_value_t = HyperexponentialParams::DEFAULT_BRANCH_PROBABILITY)]
    pub branch_probability: f64,

    /// Seed for the synthetic sequence (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for PNG plots
    #[arg(long)]
    pub plot_dir: Option<PathBuf>,

    /// Path for the JSON report
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let values = data::load_sequence(&arg.input)?;
    eprintln!("Loaded {} values from {}", values.len(), arg.input.display());

    let study = SampleSizeStudy::new(&values, &arg.sizes, &arg.confidence_levels)
        .context("no values to analyze")?;
    let reference = study.reference();
    let sample = &values[..reference.sample_size];
    let stats = reference.statistics;

    println!("Sequence analysis for {}", arg.input.display());
    println!("==========================================\n");
    table::print_legend();
    println!();

    println!("Characteristics by sample size");
    table::print_characteristics_table(&study);
    println!();

    let profile = AutocorrelationProfile::new(sample, arg.max_lag);
    let threshold = AutocorrelationProfile::significance_threshold(sample.len());
    println!("Autocorrelation (reference sample, n={})", sample.len());
    table::print_autocorrelation_table(&profile, threshold);
    println!();

    let histogram = Histogram::new(sample, arg.bins);
    println!("Value distribution ({} bins)", arg.bins);
    table::print_interval_table(&histogram);
    println!();

    println!("Distribution fitting");
    println!(
        "  Coefficient of variation: {:.4}",
        stats.coefficient_of_variation
    );
    let fit = DistributionFit::from_stats(&stats, arg.branch_probability)?;
    println!("  Family: {}", fit.family());
    match &fit {
        DistributionFit::Exponential { scale } => println!("  Scale: {scale:.4}"),
        DistributionFit::Hyperexponential(params) => {
            println!("  Branch probability q: {:.4}", params.q);
            println!(
                "  Branch scales: t1 = {:.4}, t2 = {:.4}",
                params.t1, params.t2
            );
        }
        DistributionFit::ErlangNormalized | DistributionFit::Hypoexponential => {}
    }
    println!();

    let mut generator = match arg.seed {
        Some(seed) => SequenceGenerator::with_seed(seed),
        None => SequenceGenerator::new(),
    };
    let (generated, comparison) = match generator.from_fit(&fit, sample.len()) {
        Ok(generated) => {
            let comparison = SequenceComparison::new(sample, &generated, arg.max_lag)
                .context("comparison needs non-empty sequences")?;
            (Some(generated), Some(comparison))
        }
        Err(err) => {
            println!("Synthetic sequence comparison skipped: {err}");
            (None, None)
        }
    };
    if let Some(comparison) = &comparison {
        println!("Synthetic sequence comparison");
        table::print_comparison_table(comparison);
        println!();
    }

    if let Some(dir) = &arg.plot_dir {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
        plot::plot_sequence(&dir.join("sequence.png"), sample)?;
        plot::plot_correlogram(&dir.join("correlogram.png"), &profile, threshold)?;
        plot::plot_histogram(&dir.join("histogram.png"), &histogram)?;
        if let Some(generated) = &generated {
            plot::plot_comparison(&dir.join("comparison.png"), sample, generated, arg.bins)?;
        }
        eprintln!("Plots written to {}", dir.display());
    }

    if let Some(path) = &arg.report {
        let report = AnalysisReport::new(
            &arg.input,
            values.len(),
            &study,
            &profile,
            &histogram,
            &fit,
            comparison.as_ref(),
        );
        Output::save_json(&report, Some(path.clone()))?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}
