//! Vite + React frontend stages. All of these shell out.
use super::{StageContext, StageOutcome};
use crate::paths::CLIENT_DIR;
use anyhow::Result;

/// Dev dependencies needed by Tailwind CSS.
pub const STYLING_PACKAGES: [&str; 3] = ["tailwindcss", "postcss", "autoprefixer"];

const TAILWIND_FAILURE: &str = "Error installing Tailwind CSS";

pub(super) fn init_frontend(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    let invocation = ctx.package_manager(&[
        "create",
        "vite@latest",
        CLIENT_DIR,
        "--",
        "--template",
        "react",
    ])?;
    Ok(ctx.run_external(
        "Error initializing Vite React app",
        &invocation,
        ctx.paths.root(),
    ))
}

pub(super) fn install_frontend_dependencies(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    let invocation = ctx.package_manager(&["install"])?;
    Ok(ctx.run_external(
        "Error installing client dependencies",
        &invocation,
        &ctx.paths.client_dir(),
    ))
}

/// Install Tailwind and generate its config; the init only runs after a
/// successful install.
pub(super) fn setup_styling(ctx: &StageContext<'_>) -> Result<StageOutcome> {
    let client_dir = ctx.paths.client_dir();

    let mut args = vec!["install", "-D"];
    args.extend(STYLING_PACKAGES);
    let install = ctx.package_manager(&args)?;
    let outcome = ctx.run_external(TAILWIND_FAILURE, &install, &client_dir);
    if outcome.halts() {
        return Ok(outcome);
    }

    let init = ctx.package_runner(&["tailwindcss", "init", "-p"])?;
    Ok(ctx.run_external(TAILWIND_FAILURE, &init, &client_dir))
}
