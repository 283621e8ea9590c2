use crate::domain::errors::StandardsError;
use crate::domain::models::DelegateReport;
use anyhow::Context;
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Runs a delegated command to completion.
pub trait Spawn {
    /// `Ok` whenever the program started, whatever its exit status.
    fn run(&self, invocation: &Invocation) -> anyhow::Result<DelegateReport>;
}

pub struct ProcessRunner {
    /// Keeps our stdout free for `--json` reports.
    pub stdout_to_stderr: bool,
}

impl Spawn for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> anyhow::Result<DelegateReport> {
        tracing::info!(
            program = %invocation.program,
            args = ?invocation.args,
            "running delegate"
        );
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).current_dir(&invocation.cwd);
        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(std::io::stderr()));
        }
        let status = cmd
            .status()
            .with_context(|| format!("failed to launch {}", invocation.program))?;
        Ok(DelegateReport {
            program: invocation.program.clone(),
            args: invocation.args.clone(),
            exit_code: status.code(),
            success: status.success(),
        })
    }
}

/// A failing delegate is only logged unless `strict` is set.
pub fn settle(report: &DelegateReport, strict: bool) -> anyhow::Result<()> {
    if report.success {
        return Ok(());
    }
    tracing::warn!(
        program = %report.program,
        exit_code = ?report.exit_code,
        strict,
        "delegate exited unsuccessfully"
    );
    if strict {
        return Err(StandardsError::DelegateFailed {
            program: report.program.clone(),
            code: report.exit_code,
        }
        .into());
    }
    Ok(())
}
