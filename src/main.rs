use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod paths;
mod prompt;
mod runner;
mod templates;
mod util;
mod workflow;

use cli::RootArgs;
use config::{load_config, resolve_config, ConfigOverrides};
use runner::SystemRunner;
use workflow::{enforce_policy, run_pipeline, write_report, RunOutcome, StageContext};

const LOG_ENV: &str = "STACKFORGE_LOG";

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.into());
    let filter = tracing_subscriber::EnvFilter::new(directives);

    // stdout carries the prompt; logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    let file_config = args.config.as_deref().map(load_config).transpose()?;
    let overrides = ConfigOverrides {
        package_manager: args.package_manager.clone(),
        package_runner: args.package_runner.clone(),
        strict: args.strict,
    };
    let config = resolve_config(&overrides, file_config.as_ref())?;

    let project_name = match args.name.as_deref() {
        Some(name) => prompt::normalize_project_name(name)?,
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            prompt::read_project_name(&mut stdin.lock(), &mut stdout.lock())?
        }
    };

    let runner = SystemRunner;
    let ctx = StageContext::new(&project_name, &args.dir, &config, &runner);
    tracing::debug!(
        root = %ctx.paths.root().display(),
        policy = %config.failure_policy,
        "scaffolding"
    );
    let report = run_pipeline(&ctx);

    if let Some(path) = &args.report {
        write_report(path, &report)?;
        tracing::info!("Wrote run report to {}", path.display());
    }
    if report.outcome == RunOutcome::Completed {
        tracing::info!("Project {} is ready", ctx.paths.root().display());
    }
    enforce_policy(&report)
}
