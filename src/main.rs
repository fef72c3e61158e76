// src/main.rs

use std::io;
use std::process::ExitCode;
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info};
use euler_toolkit::actions::{print_action, print_timing_report, Action};
use euler_toolkit::benchmark::{BenchmarkRunner, BenchmarkSuite};
use euler_toolkit::cli::Cli;
use euler_toolkit::config::EulerConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EulerConfig::load_from_file(path),
        None => EulerConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: cannot load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize the logger; RUST_LOG overrides the configured level
    env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_level)).init();
    debug!("Configuration: {:?}", config);

    let mut runner = match BenchmarkRunner::from_config(&config) {
        Ok(runner) => runner,
        Err(e) => {
            error!("Invalid timing budget: {}", e);
            eprintln!("error: invalid timing budget: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&cli, &mut runner) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli, runner: &mut BenchmarkRunner) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for problem_id in cli.problem_ids() {
        print_action(&mut out, problem_id, cli.action, cli.solver_prefixes(), runner)?;
    }

    if cli.action != Action::Time {
        return Ok(());
    }

    let suite = runner.suite();
    let baseline = cli.baseline.as_ref().map(BenchmarkSuite::load_from_file).transpose()?;
    print_timing_report(&mut out, suite, baseline.as_ref())?;
    if let Some(path) = &cli.report {
        suite.save_to_file(path)?;
        info!("Results saved to: {}", path.display());
    }
    Ok(())
}
