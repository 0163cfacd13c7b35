use super::StageOutcome;
use crate::config::ScaffoldConfig;
use crate::paths::ProjectPaths;
use crate::runner::{CommandOutput, CommandRunner, Invocation};
use crate::util::clip_output;
use anyhow::Result;
use std::path::Path;

/// Upper bound on captured stderr carried into stage records.
const MAX_DETAIL_BYTES: usize = 2048;

/// Everything a stage needs: where to write and how to run commands.
pub struct StageContext<'a> {
    pub project_name: &'a str,
    pub paths: ProjectPaths,
    pub config: &'a ScaffoldConfig,
    pub runner: &'a dyn CommandRunner,
}

impl<'a> StageContext<'a> {
    pub fn new(
        project_name: &'a str,
        base_dir: &Path,
        config: &'a ScaffoldConfig,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            project_name,
            paths: ProjectPaths::for_project(base_dir, project_name),
            config,
            runner,
        }
    }

    /// Build a package-manager invocation (`npm <args>`).
    pub fn package_manager(&self, args: &[&str]) -> Result<Invocation> {
        Invocation::from_prefix(&self.config.package_manager, args)
    }

    /// Build a package-runner invocation (`npx <args>`).
    pub fn package_runner(&self, args: &[&str]) -> Result<Invocation> {
        Invocation::from_prefix(&self.config.package_runner, args)
    }

    /// Run an external command and map its result onto a stage outcome.
    ///
    /// Non-zero exits and spawn failures are logged under `failure_prefix` and
    /// halt the pipeline; captured stdout of a successful run is logged.
    pub fn run_external(
        &self,
        failure_prefix: &str,
        invocation: &Invocation,
        cwd: &Path,
    ) -> StageOutcome {
        tracing::info!(command = %invocation, "running");
        match self.runner.run(invocation, cwd) {
            Ok(output) if output.success() => {
                let stdout = output.stdout.trim_end();
                if !stdout.is_empty() {
                    tracing::info!("{stdout}");
                }
                StageOutcome::Continue
            }
            Ok(output) => {
                let detail = failure_detail(&output);
                tracing::error!("{failure_prefix}: {detail}");
                StageOutcome::Halt(format!(
                    "{failure_prefix}: {}",
                    clip_output(&detail, MAX_DETAIL_BYTES)
                ))
            }
            Err(err) => {
                tracing::error!("{failure_prefix}: {err:#}");
                StageOutcome::Halt(format!("{failure_prefix}: {err:#}"))
            }
        }
    }
}

fn failure_detail(output: &CommandOutput) -> String {
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    match output.code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
