//! # Test Harness Module / 测试执行器模块
//!
//! Runs the configured test-suite command as one opaque unit and reduces its
//! output to the aggregate `(tests_run, failures)` pair the generator needs.
//!
//! 将配置的测试套件命令作为一个不透明的整体运行，
//! 并将其输出归约为生成器所需的汇总 `(tests_run, failures)`。

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::core::models::SuiteOutcome;

/// Counts collected from libtest's `test result:` summary lines.
/// 从 libtest 的 `test result:` 汇总行收集的计数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibtestCounts {
    pub passed: u64,
    pub failed: u64,
    /// Number of summary lines seen, one per test binary.
    /// 看到的汇总行数量，每个测试二进制文件一行。
    pub summaries: usize,
}

/// Sums every libtest summary line in `output`.
///
/// ```text
/// test result: ok. 3 passed; 0 failed; 1 ignored; 0 measured; 0 filtered out; finished in 0.00s
/// test result: FAILED. 1 passed; 2 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.01s
/// ```
///
/// 累加 `output` 中的每一行 libtest 汇总。
pub fn parse_libtest_summary(output: &str) -> LibtestCounts {
    let mut counts = LibtestCounts::default();

    for line in output.lines() {
        let Some(rest) = line.trim().strip_prefix("test result:") else {
            continue;
        };
        counts.summaries += 1;

        // "ok. 3 passed; 0 failed; ..." -> ["ok. 3 passed", " 0 failed", ...]
        for part in rest.split(';') {
            let mut words = part.split_whitespace().rev();
            let (Some(label), Some(number)) = (words.next(), words.next()) else {
                continue;
            };
            let Ok(n) = number.parse::<u64>() else {
                continue;
            };
            match label {
                "passed" => counts.passed += n,
                "failed" => counts.failed += n,
                _ => {}
            }
        }
    }

    counts
}

/// Folds the harness output and exit status into a suite outcome.
///
/// A run that exits unsuccessfully without reporting any failed test (a build error,
/// a crash) is still recorded as failed, with one failure.
///
/// 将执行器输出和退出状态合并为套件结果。
/// 如果运行以失败状态退出却没有报告任何失败的测试（构建错误、崩溃），
/// 仍会记录为失败，计一次失败。
pub fn outcome_from_output(output: &str, exit_success: bool) -> SuiteOutcome {
    let counts = parse_libtest_summary(output);
    let tests_run = counts.passed + counts.failed;
    let failures = if !exit_success && counts.failed == 0 {
        1
    } else {
        counts.failed
    };
    SuiteOutcome::new(tests_run, failures)
}

/// Splits a suite command line into program and arguments.
/// Environment variables and `~` are expanded first.
///
/// 将套件命令行拆分为程序和参数。会先展开环境变量和 `~`。
pub fn split_command(command: &str) -> Result<(String, Vec<String>)> {
    let expanded = shellexpand::full(command)
        .with_context(|| format!("Failed to expand command: {command}"))?
        .to_string();

    let mut parts = shlex::split(&expanded)
        .ok_or_else(|| anyhow!("Failed to parse command: {}", expanded))?
        .into_iter();

    let program = parts
        .next()
        .ok_or_else(|| anyhow!("Empty command after parsing."))?;
    Ok((program, parts.collect()))
}

/// Runs the whole suite once in `project_dir` and returns the captured output
/// together with the aggregate outcome.
///
/// 在 `project_dir` 中运行一次整个套件，返回捕获的输出以及汇总结果。
pub async fn run_suite(command: &str, project_dir: &Path) -> Result<(SuiteOutcome, String)> {
    let (program, args) = split_command(command)?;
    tracing::debug!(%program, ?args, dir = %project_dir.display(), "running test suite");

    let mut cmd = tokio::process::Command::new(&program);
    cmd.args(&args).kill_on_drop(true).current_dir(project_dir);

    let (status_res, output) = spawn_and_capture(cmd).await;
    let status = status_res.with_context(|| format!("Failed to run test suite: {command}"))?;

    let outcome = outcome_from_output(&output, status.success());
    tracing::debug!(
        tests_run = outcome.tests_run,
        failures = outcome.failures,
        exit = ?status.code(),
        "test suite finished"
    );
    Ok((outcome, output))
}

/// Spawns a command, captures its stdout and stderr.
/// The output streams are read concurrently and combined into a single string.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
///
/// 派生一个命令，捕获其 stdout 和 stderr。
/// 输出流被并发读取并合并到一个字符串中。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String) {
    // Configure the command to capture stdout and stderr.
    // 配置命令以捕获 stdout 和 stderr。
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return (Err(e), String::new()),
    };

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        return (
            Err(std::io::Error::other("Failed to capture test suite output")),
            String::new(),
        );
    };

    // Both pipes must be drained while the child runs, or it can block on a full buffer.
    // 子进程运行期间必须同时读取两个管道，否则它可能因缓冲区已满而阻塞。
    let output = Arc::new(tokio::sync::Mutex::new(String::new()));

    let stdout_output = Arc::clone(&output);
    let stdout_handle = tokio::spawn(async move {
        let mut lines = BufReader::new(stdout).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let mut output = stdout_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    let stderr_output = Arc::clone(&output);
    let stderr_handle = tokio::spawn(async move {
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let mut output = stderr_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    let status = child.wait().await;

    if let Err(e) = stdout_handle.await {
        tracing::warn!("failed to join stdout reader: {e}");
    }
    if let Err(e) = stderr_handle.await {
        tracing::warn!("failed to join stderr reader: {e}");
    }

    let captured = output.lock().await.clone();
    (status, captured)
}
