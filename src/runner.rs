//! External command execution.
//!
//! Stages describe the commands they need as [`Invocation`]s and hand them to a
//! [`CommandRunner`]. The system runner resolves the program on `PATH` and
//! captures its output; tests substitute a recording fake.
use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// A program plus its arguments, run in an explicit working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Build an invocation from a command prefix (e.g. `["corepack", "npm"]`)
    /// followed by extra arguments.
    pub fn from_prefix(prefix: &[String], args: &[&str]) -> Result<Self> {
        let (program, rest) = prefix
            .split_first()
            .ok_or_else(|| anyhow!("command prefix is empty"))?;
        let mut all_args = rest.to_vec();
        all_args.extend(args.iter().map(|arg| arg.to_string()));
        Ok(Self {
            program: program.clone(),
            args: all_args,
        })
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(self.program.as_str());
        words.extend(self.args.iter().map(String::as_str));
        write!(f, "{}", shell_words::join(words))
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability for running external commands.
///
/// `Err` means the command could not be started at all; a started command that
/// exits non-zero is reported through [`CommandOutput::code`].
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation, cwd: &Path) -> Result<CommandOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, cwd: &Path) -> Result<CommandOutput> {
        let program = which::which(&invocation.program)
            .map_err(|_| anyhow!("{} not found on PATH", invocation.program))?;

        let start = Instant::now();
        let output = Command::new(&program)
            .args(&invocation.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("spawn {}", invocation.program))?;
        let elapsed_ms = start.elapsed().as_millis();

        tracing::debug!(
            elapsed_ms,
            command = %invocation,
            cwd = %cwd.display(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "command complete"
        );

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn from_prefix_appends_arguments() {
        let invocation =
            Invocation::from_prefix(&prefix(&["corepack", "npm"]), &["install", "express"])
                .expect("invocation");
        assert_eq!(invocation.program, "corepack");
        assert_eq!(invocation.args, vec!["npm", "install", "express"]);
    }

    #[test]
    fn from_prefix_rejects_empty_prefix() {
        assert!(Invocation::from_prefix(&[], &["init"]).is_err());
    }

    #[test]
    fn display_quotes_arguments() {
        let invocation = Invocation {
            program: "npm".to_string(),
            args: prefix(&["run", "say hi"]),
        };
        assert_eq!(invocation.to_string(), "npm run 'say hi'");
    }

    #[test]
    fn system_runner_reports_missing_program() {
        let temp = tempfile::tempdir().expect("tempdir");
        let invocation = Invocation {
            program: "stackforge-definitely-not-installed".to_string(),
            args: Vec::new(),
        };
        let err = SystemRunner
            .run(&invocation, temp.path())
            .expect_err("program is missing");
        assert!(err.to_string().contains("not found on PATH"));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_exit_code_and_streams() {
        let Ok(_) = which::which("sh") else {
            return;
        };
        let temp = tempfile::tempdir().expect("tempdir");
        let invocation = Invocation {
            program: "sh".to_string(),
            args: prefix(&["-c", "echo out; echo err >&2; exit 3"]),
        };
        let output = SystemRunner.run(&invocation, temp.path()).expect("run sh");
        assert_eq!(output.code, Some(3));
        assert!(!output.success());
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }
}
