//! Project root and Express backend stages.
use super::{StageContext, StageOutcome};
use crate::templates;
use crate::util::{ensure_dir, write_file};
use anyhow::{Context, Result};
use std::fs;

/// Backend libraries installed into the project root.
pub const BACKEND_PACKAGES: [&str; 2] = ["express", "dotenv"];

pub(super) fn create_project_root(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    let root = ctx.paths.root();
    if root.exists() {
        tracing::info!(
            "Project directory {} already exists, reusing it",
            ctx.project_name
        );
        return Ok(StageOutcome::Continue);
    }
    fs::create_dir_all(root).with_context(|| format!("create {}", root.display()))?;
    tracing::info!("Project directory {} created!", ctx.project_name);
    Ok(StageOutcome::Continue)
}

pub(super) fn init_backend(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    let invocation = ctx.package_manager(&["init", "-y"])?;
    Ok(ctx.run_external("Error initializing project", &invocation, ctx.paths.root()))
}

pub(super) fn install_backend_dependencies(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    let mut args = vec!["install"];
    args.extend(BACKEND_PACKAGES);
    let invocation = ctx.package_manager(&args)?;
    Ok(ctx.run_external("Error installing dependencies", &invocation, ctx.paths.root()))
}

pub(super) fn scaffold_backend(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    for dir in ctx.paths.server_subdirs() {
        ensure_dir(&dir)?;
    }
    write_file(&ctx.paths.server_entry_path(), templates::SERVER_INDEX_JS)?;
    write_file(&ctx.paths.server_config_path(), templates::SERVER_CONFIG_JS)?;
    write_file(&ctx.paths.server_env_path(), templates::SERVER_ENV)?;
    Ok(StageOutcome::Continue)
}
