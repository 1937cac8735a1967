use std::{
    io,
    process::{Command, Stdio},
};

use crate::{error::ConfigError, ui};

// ── Internal helpers ──────────────────────────────────────────────────────────

fn not_found_or_io(program: &str, err: io::Error) -> ConfigError {
    if err.kind() == io::ErrorKind::NotFound {
        ConfigError::CommandNotFound(program.to_string())
    } else {
        ConfigError::Io(err)
    }
}

fn print_captured_output(stdout: &[u8], stderr: &[u8]) {
    let out = String::from_utf8_lossy(stdout);
    let err = String::from_utf8_lossy(stderr);
    if !out.trim().is_empty() {
        eprintln!("{}", out.trim());
    }
    if !err.trim().is_empty() {
        eprintln!("{}", err.trim());
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Runs a command **silently** while displaying a spinner.
/// On success prints `done_msg` with a ✓.
/// On failure prints captured output and returns an error.
pub fn run_with_spinner(
    program: &str,
    args: &[&str],
    spin_msg: &str,
    done_msg: &str,
) -> Result<(), ConfigError> {
    let pb = ui::spinner(spin_msg);
    let result = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| not_found_or_io(program, e));
    pb.finish_and_clear();

    let output = result?;
    if !output.status.success() {
        print_captured_output(&output.stdout, &output.stderr);
        return Err(ConfigError::CommandFailed(
            program.to_string(),
            output.status.code().unwrap_or(-1),
        ));
    }

    ui::print_success(done_msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success() {
        assert!(run_with_spinner("true", &[], "running", "done").is_ok());
    }

    #[test]
    fn nonzero_exit_carries_the_code() {
        match run_with_spinner("sh", &["-c", "exit 3"], "running", "done") {
            Err(ConfigError::CommandFailed(program, 3)) => assert_eq!(program, "sh"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_reported_by_name() {
        match run_with_spinner("kernel-config-no-such-tool", &[], "running", "done") {
            Err(ConfigError::CommandNotFound(program)) => {
                assert_eq!(program, "kernel-config-no-such-tool")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
