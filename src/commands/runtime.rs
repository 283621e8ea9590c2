use crate::cli::{effective_sources_dir, Cli, Commands};
use crate::domain::errors::StandardsError;
use crate::domain::models::{JsonOut, Settings, VerifyReport};
use crate::remote::HttpFetcher;
use crate::services::bootstrap::bootstrap;
use crate::services::enforcer::enforce;
use crate::services::output::print_one;
use crate::services::requirements::{first_missing, inspect_required_files};
use crate::services::runner::{settle, ProcessRunner};
use std::path::Path;

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings, root: &Path) -> anyhow::Result<()> {
    let strict = cli.strict || settings.general.strict_exit;
    let fetcher = HttpFetcher::new(settings.general.timeout_ms);
    let spawner = ProcessRunner {
        stdout_to_stderr: cli.json,
    };

    match &cli.command {
        Commands::Check { sources_dir } => {
            let dir = effective_sources_dir(sources_dir.as_deref());
            let report = bootstrap(root, dir, &settings.bootstrap, &fetcher, &spawner)?;
            settle(&report.delegate, strict)?;
            print_one(cli.json, report, |r| {
                format!(
                    "{} {} exited with {}",
                    r.delegate.program,
                    r.script.path,
                    exit_label(r.delegate.exit_code)
                )
            })?;
        }
        Commands::Enforce { sources_dir } => {
            let dir = effective_sources_dir(sources_dir.as_deref());
            if !cli.json {
                println!("Sources dir set to: {}", dir);
            }
            let report = enforce(root, dir, &settings.enforce, &fetcher, &spawner)?;
            settle(&report.runner, strict)?;
            print_one(cli.json, report, |r| {
                format!(
                    "{} {} exited with {}",
                    r.runner.program,
                    r.sources_dir,
                    exit_label(r.runner.exit_code)
                )
            })?;
        }
        Commands::Verify => {
            let checks = inspect_required_files(root)?;
            let missing = first_missing(&checks);
            let report = VerifyReport {
                overall: if missing.is_none() {
                    "ok"
                } else {
                    "needs_attention"
                }
                .to_string(),
                checks,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: missing.is_none(),
                        data: &report
                    })?
                );
            } else {
                for c in &report.checks {
                    println!(
                        "{}\t{}\t{}",
                        c.name,
                        c.status,
                        c.matched.as_deref().unwrap_or("-")
                    );
                }
                println!("overall: {}", report.overall);
            }
            if let Some(required) = missing {
                return Err(StandardsError::MissingArtifact(required).into());
            }
        }
    }

    Ok(())
}

fn exit_label(code: Option<i32>) -> String {
    code.map(|c| format!("code {}", c))
        .unwrap_or_else(|| "signal".to_string())
}
