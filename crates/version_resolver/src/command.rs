// crates/version_resolver/src/command.rs

use std::process::{Command, Stdio};

use crate::error::CommandError;

/// Command selected by the short SHA shortcut.
pub const SHORT_SHA_COMMAND: &str = "git rev-parse --short HEAD";

/// Command selected by the full SHA shortcut.
pub const GIT_SHA_COMMAND: &str = "git rev-parse HEAD";

/// Runs a version command and hands back its raw standard output.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<String, CommandError>;
}

/// Runs commands through the platform shell in the current working directory.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String, CommandError> {
        let output = shell(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command: command.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

/// Removes the first `'\n'` in `output` and nothing else.
///
/// This is not a trim: a `"\r"` before the newline, further newlines and any
/// text after the first one all survive.
pub fn strip_first_newline(output: &str) -> String {
    output.replacen('\n', "", 1)
}

/// Runs `command` with `runner` and returns its output with the first newline removed.
pub fn execute<R: CommandRunner + ?Sized>(runner: &R, command: &str) -> Result<String, CommandError> {
    log::debug!("running version command: {}", command);
    let stdout = runner.run(command)?;
    Ok(strip_first_newline(&stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CannedRunner {
        stdout: &'static str,
        seen: RefCell<Vec<String>>,
    }

    impl CommandRunner for CannedRunner {
        fn run(&self, command: &str) -> Result<String, CommandError> {
            self.seen.borrow_mut().push(command.to_string());
            Ok(self.stdout.to_string())
        }
    }

    #[test]
    fn test_strip_removes_single_trailing_newline() {
        assert_eq!(strip_first_newline("1.0.0\n"), "1.0.0");
    }

    #[test]
    fn test_strip_only_touches_first_newline() {
        assert_eq!(strip_first_newline("a\nb\n"), "ab\n");
        assert_eq!(strip_first_newline("\n\n"), "\n");
    }

    #[test]
    fn test_strip_keeps_carriage_return_and_spaces() {
        assert_eq!(strip_first_newline("1.0.0\r\n"), "1.0.0\r");
        assert_eq!(strip_first_newline("1.0.0 \n  "), "1.0.0   ");
    }

    #[test]
    fn test_strip_without_newline_is_identity() {
        assert_eq!(strip_first_newline("abc"), "abc");
        assert_eq!(strip_first_newline(""), "");
    }

    #[test]
    fn test_execute_strips_runner_output() {
        let runner = CannedRunner {
            stdout: "deadbeef\n",
            seen: RefCell::new(Vec::new()),
        };
        let out = execute(&runner, SHORT_SHA_COMMAND).unwrap();
        assert_eq!(out, "deadbeef");
        assert_eq!(*runner.seen.borrow(), vec![SHORT_SHA_COMMAND.to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_runner_reports_exit_status() {
        let err = ShellRunner.run("echo nope >&2; exit 3").unwrap_err();
        match err {
            CommandError::Failed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "nope");
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
