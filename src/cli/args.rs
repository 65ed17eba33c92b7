//! Command-line argument parsing for conduit-estimator
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::cli::config::JobConfig;
use crate::estimator::{ComplexityTier, ConduitType, EstimateInput, InstallLocation};
use crate::pricing::PriceTable;
use crate::report::OutputFormat;

/// conduit-estimator - Material and labor estimates for conduit runs
#[derive(Parser, Debug)]
#[command(name = "conduit-estimator")]
#[command(version)]
#[command(about = "Estimate conduit materials and labor cost", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate materials and labor for a conduit job
    Estimate(EstimateArgs),

    /// Show the active unit price table
    Prices {
        /// Price sheet to read instead of the configured prices
        #[arg(short, long)]
        prices: Option<PathBuf>,
    },

    /// Display current configuration
    Config,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Job parameters. Anything omitted comes from the `[job]` config section.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Total linear footage of conduit
    #[arg(short, long, allow_negative_numbers = true)]
    pub footage: Option<f64>,

    /// Conduit type: EMT, PVC, RMC or FMC
    #[arg(short = 't', long = "conduit-type")]
    pub conduit_type: Option<ConduitType>,

    /// Install location: indoor, outdoor or underground
    #[arg(short, long)]
    pub location: Option<InstallLocation>,

    /// Trade size in inches
    #[arg(short, long, allow_negative_numbers = true)]
    pub size: Option<f64>,

    /// Total number of bends
    #[arg(short, long)]
    pub bends: Option<u32>,

    /// Crew size (people)
    #[arg(long)]
    pub crew: Option<NonZeroU32>,

    /// Labor rate in $/hr
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub labor_rate: Option<f64>,

    /// Install complexity: light, standard or complex
    #[arg(long)]
    pub complexity: Option<ComplexityTier>,

    /// Price sheet (TOML or JSON) to use instead of the configured prices
    #[arg(short, long)]
    pub prices: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl EstimateArgs {
    /// Merge flags over the configured job defaults
    pub fn build_input(&self, job: &JobConfig, prices: PriceTable) -> EstimateInput {
        EstimateInput {
            footage_feet: self.footage.unwrap_or(job.footage_feet),
            conduit_type: self.conduit_type.unwrap_or(job.conduit_type),
            location: self.location.unwrap_or(job.location),
            trade_size_inches: self.size.unwrap_or(job.trade_size_inches),
            bend_count: self.bends.unwrap_or(job.bend_count),
            crew_size: self.crew.unwrap_or(job.crew_size),
            labor_rate_per_hour: self.labor_rate.unwrap_or(job.labor_rate_per_hour),
            complexity: self.complexity.unwrap_or(job.complexity),
            prices,
        }
    }
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity_or(Verbosity::Normal)
    }

    /// Verbosity from flags, or `fallback` when no flag was given
    pub fn verbosity_or(&self, fallback: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => fallback,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the config-file spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }
}
