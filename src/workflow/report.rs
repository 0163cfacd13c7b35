//! Run report persisted with `--report`.
use super::Stage;
use crate::config::FailurePolicy;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Completed,
    SoftFailed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageRecord {
    pub stage: Stage,
    pub status: StageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    /// An external command failed.
    Halted,
    /// A filesystem error stopped the run.
    Aborted,
}

/// Summary of one scaffolding run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub project_name: String,
    pub project_root: PathBuf,
    pub failure_policy: FailurePolicy,
    pub stages: Vec<StageRecord>,
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Return the stage that halted or aborted the run, if any.
    pub fn halted_at(&self) -> Option<&StageRecord> {
        self.stages
            .iter()
            .find(|record| record.status == StageStatus::Failed)
    }
}

/// Write the report as pretty JSON.
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let text = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
