//! Scaffolder configuration.
//!
//! Values are resolved per field in priority order:
//! 1. CLI flag
//! 2. `--config` JSON file
//! 3. `STACKFORGE_*` environment variable
//! 4. built-in default
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";
pub const DEFAULT_PACKAGE_RUNNER: &str = "npx";

pub const PACKAGE_MANAGER_ENV: &str = "STACKFORGE_PACKAGE_MANAGER";
pub const PACKAGE_RUNNER_ENV: &str = "STACKFORGE_PACKAGE_RUNNER";
pub const FAILURE_POLICY_ENV: &str = "STACKFORGE_FAILURE_POLICY";

/// What a halted pipeline means for the process exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Log the halt and exit successfully.
    #[default]
    BestEffort,
    /// Treat a halt as an error (non-zero exit).
    Strict,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::BestEffort => write!(f, "best-effort"),
            FailurePolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "best-effort" => Ok(FailurePolicy::BestEffort),
            "strict" => Ok(FailurePolicy::Strict),
            other => Err(anyhow!(
                "failure policy must be \"best-effort\" or \"strict\" (got {other:?})"
            )),
        }
    }
}

/// On-disk config file; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub package_manager: Option<String>,
    #[serde(default)]
    pub package_runner: Option<String>,
    #[serde(default)]
    pub failure_policy: Option<FailurePolicy>,
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub package_manager: Option<String>,
    pub package_runner: Option<String>,
    pub strict: bool,
}

/// Fully resolved settings used by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Command prefix for the package manager, already split into words.
    pub package_manager: Vec<String>,
    /// Command prefix for the package runner (`npx` equivalent).
    pub package_runner: Vec<String>,
    pub failure_policy: FailurePolicy,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            package_manager: vec![DEFAULT_PACKAGE_MANAGER.to_string()],
            package_runner: vec![DEFAULT_PACKAGE_RUNNER.to_string()],
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Load a config file from disk.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: FileConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

/// Resolve settings from the process environment.
pub fn resolve_config(
    overrides: &ConfigOverrides,
    file: Option<&FileConfig>,
) -> Result<ScaffoldConfig> {
    resolve_config_with_env(overrides, file, |key| std::env::var(key).ok())
}

/// Resolve settings with an explicit environment lookup.
pub fn resolve_config_with_env<F>(
    overrides: &ConfigOverrides,
    file: Option<&FileConfig>,
    env: F,
) -> Result<ScaffoldConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let package_manager = pick(
        overrides.package_manager.clone(),
        file.and_then(|f| f.package_manager.clone()),
        env(PACKAGE_MANAGER_ENV),
    )
    .unwrap_or_else(|| DEFAULT_PACKAGE_MANAGER.to_string());
    let package_runner = pick(
        overrides.package_runner.clone(),
        file.and_then(|f| f.package_runner.clone()),
        env(PACKAGE_RUNNER_ENV),
    )
    .unwrap_or_else(|| DEFAULT_PACKAGE_RUNNER.to_string());

    let failure_policy = if overrides.strict {
        FailurePolicy::Strict
    } else if let Some(policy) = file.and_then(|f| f.failure_policy) {
        policy
    } else if let Some(raw) = env(FAILURE_POLICY_ENV).filter(|v| !v.trim().is_empty()) {
        raw.parse::<FailurePolicy>()
            .with_context(|| format!("parse {FAILURE_POLICY_ENV}"))?
    } else {
        FailurePolicy::default()
    };

    Ok(ScaffoldConfig {
        package_manager: split_command(&package_manager, "package manager")?,
        package_runner: split_command(&package_runner, "package runner")?,
        failure_policy,
    })
}

fn pick(flag: Option<String>, file: Option<String>, env: Option<String>) -> Option<String> {
    flag.or(file).or(env.filter(|value| !value.trim().is_empty()))
}

fn split_command(raw: &str, label: &str) -> Result<Vec<String>> {
    let words =
        shell_words::split(raw).with_context(|| format!("parse {label} command: {raw}"))?;
    if words.is_empty() {
        return Err(anyhow!("{label} command is empty"));
    }
    Ok(words)
}
