//! Synthetic sequence generation command
//!
//! Fits a distribution model to an input sequence and writes a synthetic
//! sequence drawn from it, one value per line, in the same format the
//! analyze command reads.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use seqlab_model::{
    fit::DistributionFit, generator::SequenceGenerator, hyperexponential::HyperexponentialParams,
};
use seqlab_stats::descriptive::SummaryStatistics;

use crate::{data, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct GenerateArg {
    /// Path to the sequence file to model (one value per line)
    pub input: PathBuf,

    /// Number of values to generate (defaults to the input length)
    #[arg(long)]
    pub count: Option<usize>,

    /// Probability of the first branch in the hyperexponential fit
    #[arg(long, default_value_t = HyperexponentialParams::DEFAULT_BRANCH_PROBABILITY)]
    pub branch_probability: f64,

    /// Seed for the synthetic sequence (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let values = data::load_sequence(&arg.input)?;
    eprintln!("Loaded {} values from {}", values.len(), arg.input.display());

    let stats = SummaryStatistics::new(&values).context("no values to model")?;
    let fit = DistributionFit::from_stats(&stats, arg.branch_probability)?;
    eprintln!("Fitted family: {}", fit.family());

    let mut generator = match arg.seed {
        Some(seed) => SequenceGenerator::with_seed(seed),
        None => SequenceGenerator::new(),
    };
    let count = arg.count.unwrap_or(values.len());
    let generated = generator.from_fit(&fit, count)?;

    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_sequence(&generated)?;
    eprintln!("Wrote {} values to {}", generated.len(), output.display_path());

    Ok(())
}
