use anyhow::{bail, Context, Result};
use clap::Parser;

use conduit_estimator::cli::{Args, Commands, Config, EstimateArgs};
use conduit_estimator::estimator::estimate;
use conduit_estimator::report::{self, render};
use conduit_estimator::telemetry;
use conduit_estimator::validation::validate_input;

fn main() -> Result<()> {
    let args = Args::parse();

    // `init` must work before any config file exists.
    if let Some(Commands::Init { force }) = &args.command {
        telemetry::init_tracing(args.verbosity());
        return init_config(&args, *force);
    }

    let config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    telemetry::init_tracing(args.verbosity_or(config.verbosity()));

    let color = !args.no_color && config.output.color_output;
    if !color {
        colored::control::set_override(false);
    }

    match &args.command {
        Some(Commands::Estimate(est)) => {
            run_estimate(est, &config, color)?;
        }
        Some(Commands::Prices { prices }) => {
            let provider = config.price_provider(prices.as_deref());
            let table = provider
                .latest_prices()
                .with_context(|| format!("Failed to fetch prices from {}", provider.name()))?;
            print!("{}", report::render_prices(provider.name(), &table, color));
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
        }
        Some(Commands::Init { .. }) => {}
        None => {
            println!("conduit-estimator v{} - Conduit Estimator", env!("CARGO_PKG_VERSION"));
            println!("\nUsage:");
            println!("  conduit-estimator estimate [OPTIONS]   Estimate a conduit job");
            println!("  conduit-estimator prices               Show unit prices");
            println!("  conduit-estimator config               Show configuration");
            println!("  conduit-estimator init                 Write default config");
            println!("\nExample:");
            println!("  conduit-estimator estimate --footage 200 --bends 6 --location indoor");
            println!();
        }
    }

    Ok(())
}

fn run_estimate(est: &EstimateArgs, config: &Config, color: bool) -> Result<()> {
    // Prices are fetched once per run; the estimator only sees the table.
    let provider = config.price_provider(est.prices.as_deref());
    let prices = provider
        .latest_prices()
        .with_context(|| format!("Failed to fetch prices from {}", provider.name()))?;
    tracing::info!(source = provider.name(), "Using price table");

    let input = est.build_input(&config.job, prices);
    validate_input(&input).context("Invalid estimate input")?;

    let result = estimate(&input);
    tracing::info!(
        footage = input.footage_feet,
        bends = input.bend_count,
        material_cost = %result.material_cost,
        labor_cost = %result.labor_cost,
        total_cost = %result.total_cost,
        "Estimate computed"
    );

    let format = est.format.unwrap_or(config.output.format);
    print!("{}", render(&input, &result, format, color)?);
    Ok(())
}

fn init_config(args: &Args, force: bool) -> Result<()> {
    let path = match args.config.clone().or_else(Config::default_path) {
        Some(path) => path,
        None => bail!("Could not determine home directory; pass --config <FILE>"),
    };

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
