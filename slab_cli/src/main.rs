//! slabcalc - one-way slab design from the command line
//!
//! Exit codes: 0 when a design is produced (including the compression
//! reinforcement outcome), 1 when the inputs are rejected, 2 for usage or
//! configuration errors.

mod cli;
mod config;
mod output;

use std::process::ExitCode;

use clap::Parser;
use slab_core::equations::EquationTracker;
use slab_core::{respond_with_traced, CalculatorSettings, DesignResponse};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands, DesignArgs};

fn init_tracing(verbose: u8) {
    let filter = if verbose > 0 {
        tracing_subscriber::EnvFilter::new("slab_core=debug,slabcalc=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_design(args: &DesignArgs, mut settings: CalculatorSettings) -> anyhow::Result<ExitCode> {
    let base = match &args.input {
        Some(path) => Some(config::load_request(path)?),
        None => None,
    };
    let request = args.to_request(base)?;
    if args.no_limits {
        settings.enforce_limits = false;
    }
    debug!(?request, enforce_limits = settings.enforce_limits, "design request");

    let mut tracker = EquationTracker::new();
    let (input, response) = respond_with_traced(&request, &settings, &mut tracker);

    match response {
        DesignResponse::Success { result } => {
            let input = input.ok_or_else(|| anyhow::anyhow!("design computed without a mapped input"))?;
            info!(status = result.status(), "design complete");
            print!("{}", output::render_design(args.format, &input, result, tracker)?);
            if args.format == cli::OutputFormat::Json {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
        failure => {
            let rendered = output::render_failure(args.format, &failure)?;
            if args.format == cli::OutputFormat::Json {
                println!("{}", rendered);
            } else {
                eprint!("{}", rendered);
            }
            Ok(ExitCode::from(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::Design(args) => {
            let settings = config::load_settings(cli.config.as_deref())?;
            run_design(args, settings)
        }
        Commands::Grades => {
            print!("{}", output::render_grades()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
