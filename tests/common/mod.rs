//! Shared test infrastructure for integration tests.
//!
//! Runs the compiled `stackforge` binary against fake `npm`/`npx` scripts placed
//! first on `PATH`. The scripts append each command line to a log and mimic the
//! files Vite and Tailwind would generate.

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const FAKE_NPM: &str = r#"#!/bin/sh
echo "npm $*" >> "$FAKE_TOOL_LOG"
if [ -n "$FAKE_FAIL" ] && [ "npm $*" = "$FAKE_FAIL" ]; then
  echo "npm ERR! simulated failure" >&2
  exit 1
fi
if [ "$1" = "create" ]; then
  if [ -z "$FAKE_NO_CLIENT_SRC" ]; then
    mkdir -p "$3/src"
    echo ":root {}" > "$3/src/index.css"
  else
    mkdir -p "$3"
  fi
  if [ -z "$FAKE_NO_VITE_CONFIG" ]; then
    echo "export default {};" > "$3/vite.config.js"
  fi
fi
echo "done: npm $*"
"#;

const FAKE_NPX: &str = r#"#!/bin/sh
echo "npx $*" >> "$FAKE_TOOL_LOG"
if [ -n "$FAKE_FAIL" ] && [ "npx $*" = "$FAKE_FAIL" ]; then
  echo "npx ERR! simulated failure" >&2
  exit 1
fi
if [ "$1" = "tailwindcss" ]; then
  echo "module.exports = {};" > tailwind.config.js
  echo "module.exports = {};" > postcss.config.js
fi
"#;

/// Scratch workspace with fake tools on `PATH`.
pub struct Workspace {
    _temp: TempDir,
    pub base: PathBuf,
    bin_dir: PathBuf,
    log_path: PathBuf,
}

impl Workspace {
    pub fn create() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let base = temp.path().join("work");
        let bin_dir = temp.path().join("bin");
        std::fs::create_dir_all(&base).expect("create work dir");
        std::fs::create_dir_all(&bin_dir).expect("create bin dir");
        write_script(&bin_dir.join("npm"), FAKE_NPM);
        write_script(&bin_dir.join("npx"), FAKE_NPX);
        let log_path = temp.path().join("tools.log");
        Self {
            base,
            bin_dir,
            log_path,
            _temp: temp,
        }
    }

    pub fn project(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }

    /// Command lines the fake tools received, in order.
    pub fn tool_calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log_path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Build a `stackforge` command rooted in this workspace.
    pub fn command(&self, args: &[&str]) -> Command {
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut dirs = vec![self.bin_dir.clone()];
                dirs.extend(std::env::split_paths(&existing));
                std::env::join_paths(dirs).expect("join PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stackforge"));
        cmd.args(args)
            .arg("--dir")
            .arg(&self.base)
            .env("PATH", path)
            .env("FAKE_TOOL_LOG", &self.log_path)
            .env_remove("STACKFORGE_PACKAGE_MANAGER")
            .env_remove("STACKFORGE_PACKAGE_RUNNER")
            .env_remove("STACKFORGE_FAILURE_POLICY")
            .env_remove("STACKFORGE_LOG")
            .env_remove("RUST_LOG")
            .env_remove("FAKE_FAIL")
            .env_remove("FAKE_NO_VITE_CONFIG")
            .env_remove("FAKE_NO_CLIENT_SRC");
        cmd
    }
}

/// Run a prepared command, feeding `stdin` to it.
pub fn run_with_stdin(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn stackforge");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for stackforge")
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, body).expect("write fake tool");
    let mut perms = std::fs::metadata(path).expect("stat fake tool").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("chmod fake tool");
}
