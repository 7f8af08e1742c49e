use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use debias_adjust::{Kind, Method};

/// Bias adjustment of climate model output against observations.
#[derive(Parser)]
#[command(
    name = "debias",
    version,
    about = "Bias adjustment of climate model output"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the reference (observation) NetCDF file.
    #[arg(long)]
    pub reference: PathBuf,

    /// Path to the control (modeled, same period as reference) NetCDF file.
    #[arg(long)]
    pub control: PathBuf,

    /// Path to the scenario (modeled, to be corrected) NetCDF file.
    #[arg(long)]
    pub scenario: PathBuf,

    /// Path for the corrected output NetCDF file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Name of the data variable in all three input files.
    #[arg(long)]
    pub variable: String,

    /// Adjustment method.
    #[arg(short, long)]
    pub method: MethodArg,

    /// Whether the variable's bias is an offset or a factor.
    #[arg(short, long, default_value = "add")]
    pub kind: KindArg,

    /// Number of quantiles for the quantile-based methods.
    #[arg(short = 'q', long, default_value_t = 250)]
    pub quantiles: usize,

    /// Cap on the magnitude of multiplicative scaling factors.
    #[arg(long, default_value_t = 10.0)]
    pub max_scaling_factor: f64,

    /// Disable 31-day interval scaling for the scaling-based methods.
    #[arg(long)]
    pub no_group: bool,

    /// Treat the inputs as plain time series instead of lat/lon grids.
    #[arg(long)]
    pub one_dim: bool,

    /// Number of parallel worker threads for grid runs.
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,
}

/// CLI spelling of the adjustment methods.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum MethodArg {
    LinearScaling,
    VarianceScaling,
    DeltaMethod,
    QuantileMapping,
    QuantileDeltaMapping,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::LinearScaling => Method::LinearScaling,
            MethodArg::VarianceScaling => Method::VarianceScaling,
            MethodArg::DeltaMethod => Method::DeltaMethod,
            MethodArg::QuantileMapping => Method::QuantileMapping,
            MethodArg::QuantileDeltaMapping => Method::QuantileDeltaMapping,
        }
    }
}

/// CLI spelling of the adjustment kinds.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Additive adjustment (temperature-like variables).
    #[value(alias = "+")]
    Add,
    /// Multiplicative adjustment (precipitation-like variables).
    #[value(alias = "*")]
    Mult,
}

impl From<KindArg> for Kind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Add => Kind::Additive,
            KindArg::Mult => Kind::Multiplicative,
        }
    }
}
