//! Static content writers for the frontend config and project README.
use super::{StageContext, StageOutcome};
use crate::templates;
use crate::util::{relative_to_root, write_file};
use anyhow::Result;

pub(super) fn write_styling_config(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    write_file(
        &ctx.paths.tailwind_config_path(),
        templates::TAILWIND_CONFIG_JS,
    )?;
    write_file(&ctx.paths.stylesheet_path(), templates::TAILWIND_INDEX_CSS)?;
    tracing::info!("Tailwind CSS setup completed.");
    Ok(StageOutcome::Continue)
}

/// Replace the Vite config with one that proxies `/api` to the backend.
///
/// A missing config is logged and skipped; the pipeline keeps going.
pub(super) fn patch_vite_proxy(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    let path = ctx.paths.vite_config_path();
    let shown = relative_to_root(&path, ctx.paths.root());
    if !path.is_file() {
        tracing::error!("vite.config.js not found at {shown}");
        return Ok(StageOutcome::SoftFailed(format!(
            "vite.config.js not found at {shown}"
        )));
    }
    write_file(&path, templates::VITE_PROXY_CONFIG_JS)?;
    tracing::info!("Added proxy configuration to {shown}");
    Ok(StageOutcome::Continue)
}

pub(super) fn write_readme(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    write_file(&ctx.paths.readme_path(), templates::PROJECT_README_MD)?;
    tracing::info!("README.md created with project documentation.");
    Ok(StageOutcome::Continue)
}
