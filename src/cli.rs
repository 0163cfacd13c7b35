//! CLI argument parsing.
//!
//! With no arguments the tool behaves like the classic interactive scaffolder:
//! it prompts for a project name and builds it in the current directory.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stackforge",
    version,
    about = "Scaffold an Express + React (Vite) + Tailwind CSS project",
    after_help = "Examples:\n  stackforge                      Prompt for a name, scaffold into ./<name>\n  stackforge my-app --dir ~/src   Scaffold into ~/src/my-app\n  stackforge my-app --strict      Exit non-zero if any setup command fails\n  stackforge my-app --package-manager pnpm --package-runner 'pnpm dlx'"
)]
pub struct RootArgs {
    /// Project name; prompted for on stdin when omitted
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Directory the project root is created in
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// JSON config file (package_manager, package_runner, failure_policy)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Package manager command used for init/install/create
    #[arg(long, value_name = "CMD")]
    pub package_manager: Option<String>,

    /// Package runner command used for tool initializers
    #[arg(long, value_name = "CMD")]
    pub package_runner: Option<String>,

    /// Exit non-zero when a setup command fails
    #[arg(long)]
    pub strict: bool,

    /// Write a JSON report of every stage to this path (also on failed runs)
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Emit debug-level logs
    #[arg(long)]
    pub verbose: bool,
}
