use crate::domain::models::{BootstrapReport, BootstrapSettings};
use crate::remote::{download_to, Fetch};
use crate::services::runner::{Invocation, Spawn};
use std::path::Path;

/// Installs the enforcement script in `root` and hands control to it.
pub fn bootstrap(
    root: &Path,
    sources_dir: &str,
    settings: &BootstrapSettings,
    fetcher: &dyn Fetch,
    spawner: &dyn Spawn,
) -> anyhow::Result<BootstrapReport> {
    let script = download_to(
        fetcher,
        &settings.source,
        &settings.sha256,
        root,
        &settings.file_name,
    )?;

    let mut args = settings.interpreter_args.clone();
    args.push(settings.file_name.clone());
    args.push(sources_dir.to_string());
    let delegate = spawner.run(&Invocation {
        program: settings.interpreter.clone(),
        args,
        cwd: root.to_path_buf(),
    })?;

    Ok(BootstrapReport {
        sources_dir: sources_dir.to_string(),
        script,
        delegate,
    })
}
