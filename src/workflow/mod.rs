//! Scaffolding pipeline.
//!
//! Stages run strictly in [`Stage::ALL`] order. Each returns a
//! [`StageOutcome`]; the runner stops at the first halt and records every
//! later stage as skipped. A filesystem error aborts the run the same way but
//! always fails the process.
mod backend;
mod context;
mod frontend;
mod report;
mod writers;

pub use context::StageContext;
pub use report::{write_report, RunOutcome, RunReport};
use report::{StageRecord, StageStatus};

use crate::config::FailurePolicy;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::fmt;

/// One step of the scaffolding pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ProjectRoot,
    BackendInit,
    BackendDependencies,
    BackendScaffold,
    FrontendInit,
    FrontendDependencies,
    StylingSetup,
    StylingConfig,
    ViteProxy,
    Readme,
}

impl Stage {
    pub const ALL: [Stage; 10] = [
        Stage::ProjectRoot,
        Stage::BackendInit,
        Stage::BackendDependencies,
        Stage::BackendScaffold,
        Stage::FrontendInit,
        Stage::FrontendDependencies,
        Stage::StylingSetup,
        Stage::StylingConfig,
        Stage::ViteProxy,
        Stage::Readme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::ProjectRoot => "project_root",
            Stage::BackendInit => "backend_init",
            Stage::BackendDependencies => "backend_dependencies",
            Stage::BackendScaffold => "backend_scaffold",
            Stage::FrontendInit => "frontend_init",
            Stage::FrontendDependencies => "frontend_dependencies",
            Stage::StylingSetup => "styling_setup",
            Stage::StylingConfig => "styling_config",
            Stage::ViteProxy => "vite_proxy",
            Stage::Readme => "readme",
        }
    }

    fn run(self, ctx: &StageContext<'_>) -> Result<StageOutcome> {
        match self {
            Stage::ProjectRoot => backend::create_project_root(ctx),
            Stage::BackendInit => backend::init_backend(ctx),
            Stage::BackendDependencies => backend::install_backend_dependencies(ctx),
            Stage::BackendScaffold => backend::scaffold_backend(ctx),
            Stage::FrontendInit => frontend::init_frontend(ctx),
            Stage::FrontendDependencies => frontend::install_frontend_dependencies(ctx),
            Stage::StylingSetup => frontend::setup_styling(ctx),
            Stage::StylingConfig => writers::write_styling_config(ctx),
            Stage::ViteProxy => writers::patch_vite_proxy(ctx),
            Stage::Readme => writers::write_readme(ctx),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single stage that did not hit a fatal filesystem error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Continue,
    /// Logged, but the pipeline proceeds.
    SoftFailed(String),
    /// Stop the pipeline; no later stage runs.
    Halt(String),
}

impl StageOutcome {
    pub fn halts(&self) -> bool {
        matches!(self, StageOutcome::Halt(_))
    }
}

/// Run every stage in order, stopping at the first halt.
///
/// A fatal filesystem error is recorded as a failed stage with the run marked
/// aborted, so the report still covers the stages that already ran.
pub fn run_pipeline(ctx: &StageContext<'_>) -> RunReport {
    let mut stages = Vec::with_capacity(Stage::ALL.len());
    let mut outcome = RunOutcome::Completed;

    for stage in Stage::ALL {
        if outcome != RunOutcome::Completed {
            stages.push(StageRecord {
                stage,
                status: StageStatus::Skipped,
                detail: None,
            });
            continue;
        }
        tracing::debug!(stage = %stage, "stage start");
        let record = match stage.run(ctx) {
            Ok(StageOutcome::Continue) => StageRecord {
                stage,
                status: StageStatus::Completed,
                detail: None,
            },
            Ok(StageOutcome::SoftFailed(detail)) => StageRecord {
                stage,
                status: StageStatus::SoftFailed,
                detail: Some(detail),
            },
            Ok(StageOutcome::Halt(detail)) => {
                outcome = RunOutcome::Halted;
                StageRecord {
                    stage,
                    status: StageStatus::Failed,
                    detail: Some(detail),
                }
            }
            Err(err) => {
                tracing::error!(stage = %stage, "{err:#}");
                outcome = RunOutcome::Aborted;
                StageRecord {
                    stage,
                    status: StageStatus::Failed,
                    detail: Some(format!("{err:#}")),
                }
            }
        };
        stages.push(record);
    }

    RunReport {
        project_name: ctx.project_name.to_string(),
        project_root: ctx.paths.root().to_path_buf(),
        failure_policy: ctx.config.failure_policy,
        stages,
        outcome,
    }
}

/// Apply the failure policy to a finished run.
///
/// Aborted runs always fail; halted runs fail only under the strict policy.
pub fn enforce_policy(report: &RunReport) -> Result<()> {
    let Some(failed) = report.halted_at() else {
        return Ok(());
    };
    let detail = failed.detail.as_deref().unwrap_or("stage failed");
    match (report.outcome, report.failure_policy) {
        (RunOutcome::Aborted, _) => Err(anyhow!(
            "scaffolding aborted at {}: {detail}",
            failed.stage
        )),
        (_, FailurePolicy::BestEffort) => {
            tracing::warn!(stage = %failed.stage, "scaffolding halted at {}", failed.stage);
            Ok(())
        }
        (_, FailurePolicy::Strict) => Err(anyhow!(
            "scaffolding halted at {}: {detail}",
            failed.stage
        )),
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
