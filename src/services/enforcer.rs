use crate::domain::models::{EnforceReport, EnforceSettings};
use crate::remote::{download_to, Fetch};
use crate::services::requirements::ensure_required_files;
use crate::services::runner::{Invocation, Spawn};
use std::path::Path;

/// Validates the project root, installs the runner configuration and runs the runner.
///
/// A missing required file aborts before anything is fetched or spawned.
pub fn enforce(
    root: &Path,
    sources_dir: &str,
    settings: &EnforceSettings,
    fetcher: &dyn Fetch,
    spawner: &dyn Spawn,
) -> anyhow::Result<EnforceReport> {
    tracing::debug!(sources_dir, "sources dir resolved");
    let checks = ensure_required_files(root)?;

    let config = download_to(
        fetcher,
        &settings.source,
        &settings.sha256,
        root,
        &settings.file_name,
    )?;

    let mut args = settings.runner_args.clone();
    args.push(sources_dir.to_string());
    let runner = spawner.run(&Invocation {
        program: settings.runner.clone(),
        args,
        cwd: root.to_path_buf(),
    })?;

    Ok(EnforceReport {
        sources_dir: sources_dir.to_string(),
        checks,
        config,
        runner,
    })
}
