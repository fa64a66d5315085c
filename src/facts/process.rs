//! Subprocess helpers shared by the collectors.

use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use std::process::{Output, Stdio};
use tokio::process::Command;

const LOG_TARGET: &str = "   process";

/// Check whether an executable can be resolved on the search path.
#[must_use]
pub fn bin_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Strip every carriage return and line feed.
#[must_use]
pub fn normalize(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace(['\r', '\n'], "")
}

/// Normalize and split on single spaces, preserving empty fields.
///
/// Tools print versions like `Python 3.8.1` or `go version go1.13 linux/amd64`, so callers
/// pick a fixed token position out of the result.
#[must_use]
pub fn fields(bytes: &[u8]) -> Vec<String> {
    normalize(bytes).split(' ').map(str::to_string).collect()
}

/// The token at `index` of [`fields`], or `None` when the output has fewer tokens.
#[must_use]
pub fn field(bytes: &[u8], index: usize) -> Option<String> {
    fields(bytes).into_iter().nth(index)
}

/// Run a program to completion with an empty stdin, capturing stdout and stderr.
///
/// A launch failure, a non-zero exit status, or exceeding `timeout` is reported as an error
/// carrying whatever the process wrote to stderr.
pub async fn run_command(program: &str, args: &[&str], timeout: Option<Duration>) -> Result<Output> {
    let display = if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    };

    log::debug!(target: LOG_TARGET, "Running '{display}'");

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .into_app_err_with(|| format!("could not spawn '{display}'"))?;

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(result) => result,
            Err(_) => bail!("'{display}' timed out after {} seconds", limit.as_secs()),
        },
        None => child.wait_with_output().await,
    }
    .into_app_err_with(|| format!("'{display}' failed to run"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let stderr = if stderr.is_empty() { "<no output>" } else { stderr };
        log::debug!(target: LOG_TARGET, "Command error: {stderr}");
        bail!("'{display}' exited with {}: {stderr}", output.status);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_exists_true() {
        assert!(bin_exists("sh"));
    }

    #[test]
    fn test_bin_exists_false() {
        assert!(!bin_exists("jk3rlkdal3r93"));
    }

    #[test]
    fn test_normalize() {
        let cases: &[(&[u8], &str)] = &[
            (b"", ""),
            (b" ", " "),
            (b"abc", "abc"),
            (b"abc def", "abc def"),
            (b"abc\ndef", "abcdef"),
            (b"abc\rdef", "abcdef"),
            (b"abc\r\ndef", "abcdef"),
            (b"\r\nabc\r\ndef\n\n\n\n", "abcdef"),
            (b"\r\nabc \r\ndef\n\n\n\n", "abc def"),
            (b"\r\r\n\r\n\n\n\n\r", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize(input), *expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_fields() {
        assert_eq!(fields(b""), [""]);
        assert_eq!(fields(b" a "), ["", "a", ""]);
        assert_eq!(fields(b"a b c"), ["a", "b", "c"]);
        assert_eq!(fields(b"\r\n a\r\n b\r\n c\r\n"), ["", "a", "b", "c"]);
        assert_eq!(fields(b"a\nb\nc"), ["abc"]);
        assert_eq!(fields(b"Python 3.8.1\n"), ["Python", "3.8.1"]);
    }

    #[test]
    fn test_field() {
        assert_eq!(field(b"go version go1.13 linux/amd64\n", 2).as_deref(), Some("go1.13"));
        assert_eq!(field(b"Python 3.8.1\n", 1).as_deref(), Some("3.8.1"));
        assert_eq!(field(b"Python\n", 1), None);
    }

    #[tokio::test]
    async fn test_run_command_captures_stdout() {
        let output = run_command("echo", &["hello"], None).await.unwrap();
        assert_eq!(output.stdout, b"hello\n");
    }

    #[tokio::test]
    async fn test_run_command_non_zero_exit() {
        let err = run_command("ls", &["xyz-nonexistent"], None).await.unwrap_err();
        assert!(format!("{err}").contains("ls xyz-nonexistent"));
    }

    #[tokio::test]
    async fn test_run_command_missing_program() {
        let _ = run_command("jk3rlkdal3r93", &[], None).await.unwrap_err();
    }

    #[tokio::test]
    async fn test_run_command_timeout() {
        let err = run_command("sleep", &["5"], Some(Duration::from_millis(50))).await.unwrap_err();
        assert!(format!("{err}").contains("timed out"));
    }
}
