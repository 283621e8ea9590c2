use crate::domain::errors::StandardsError;
use crate::domain::models::{CheckItem, RequiredFile};
use anyhow::Context;
use globset::Glob;
use std::path::Path;

/// Name of the root entry satisfying `required`, if any.
///
/// Exact names must be regular files. The README glob matches any entry
/// (file or directory) except dot-prefixed ones, like a shell `*` would.
pub fn find_required(root: &Path, required: RequiredFile) -> anyhow::Result<Option<String>> {
    match required {
        RequiredFile::Requirements | RequiredFile::Setup => {
            let name = required.pattern();
            Ok(root.join(name).is_file().then(|| name.to_string()))
        }
        RequiredFile::Readme => {
            let matcher = Glob::new(required.pattern())?.compile_matcher();
            let entries = std::fs::read_dir(root)
                .with_context(|| format!("failed to list {}", root.display()))?;
            let mut matches = Vec::new();
            for entry in entries {
                let name = entry?.file_name().to_string_lossy().to_string();
                if !name.starts_with('.') && matcher.is_match(&name) {
                    matches.push(name);
                }
            }
            matches.sort();
            Ok(matches.into_iter().next())
        }
    }
}

/// Checks the required-file set in order and stops at the first missing entry.
pub fn ensure_required_files(root: &Path) -> anyhow::Result<Vec<CheckItem>> {
    let mut checks = Vec::new();
    for required in RequiredFile::ALL {
        match find_required(root, required)? {
            Some(found) => {
                tracing::debug!(requirement = required.pattern(), %found, "required file present");
                checks.push(present(required, found));
            }
            None => {
                tracing::debug!(requirement = required.pattern(), "required file missing");
                return Err(StandardsError::MissingArtifact(required).into());
            }
        }
    }
    Ok(checks)
}

/// Reports every entry of the required-file set without stopping early.
pub fn inspect_required_files(root: &Path) -> anyhow::Result<Vec<CheckItem>> {
    RequiredFile::ALL
        .into_iter()
        .map(|required| -> anyhow::Result<CheckItem> {
            Ok(match find_required(root, required)? {
                Some(found) => present(required, found),
                None => CheckItem {
                    name: required.pattern().to_string(),
                    status: "missing".to_string(),
                    matched: None,
                },
            })
        })
        .collect()
}

/// First requirement whose check item is missing, in set order.
pub fn first_missing(checks: &[CheckItem]) -> Option<RequiredFile> {
    RequiredFile::ALL.into_iter().find(|r| {
        checks
            .iter()
            .any(|c| c.name == r.pattern() && c.status == "missing")
    })
}

fn present(required: RequiredFile, found: String) -> CheckItem {
    CheckItem {
        name: required.pattern().to_string(),
        status: "present".to_string(),
        matched: Some(found),
    }
}
