use crate::domain::errors::StandardsError;
use crate::domain::models::FetchedArtifact;
use anyhow::Context;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Duration;

/// Retrieves the raw bytes behind a configured artifact source.
pub trait Fetch {
    fn fetch(&self, source: &str) -> anyhow::Result<Vec<u8>>;
}

/// HTTP(S) sources go over the network, anything else is read as a local path.
pub struct HttpFetcher {
    timeout_ms: u64,
}

impl HttpFetcher {
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, source: &str) -> anyhow::Result<Vec<u8>> {
        if is_remote(source) {
            fetch_remote_bytes(source, self.timeout_ms)
                .with_context(|| format!("failed to download {}", source))
        } else {
            std::fs::read(source).with_context(|| format!("failed to read {}", source))
        }
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch_remote_bytes(url: &str, timeout_ms: u64) -> anyhow::Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()?;
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.bytes()?.to_vec())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// An empty pin accepts any content.
pub fn verify_pin(artifact: &str, bytes: &[u8], pin: &str) -> Result<String, StandardsError> {
    let actual = sha256_hex(bytes);
    let pin = pin.trim();
    if pin.is_empty() {
        return Ok(actual);
    }
    if pin.len() != 64 || hex::decode(pin).is_err() {
        return Err(StandardsError::InvalidPin {
            artifact: artifact.to_string(),
            pin: pin.to_string(),
        });
    }
    let expected = pin.to_ascii_lowercase();
    if expected != actual {
        return Err(StandardsError::ChecksumMismatch {
            artifact: artifact.to_string(),
            expected,
            actual,
        });
    }
    Ok(actual)
}

/// Fetches `source`, checks it against `pin` and writes it to `root/file_name`,
/// replacing any existing file. Nothing is written when the pin does not match.
pub fn download_to(
    fetcher: &dyn Fetch,
    source: &str,
    pin: &str,
    root: &Path,
    file_name: &str,
) -> anyhow::Result<FetchedArtifact> {
    tracing::info!(source, file_name, "fetching artifact");
    let body = fetcher.fetch(source)?;
    let sha256 = verify_pin(file_name, &body, pin)?;
    let dest = root.join(file_name);
    std::fs::write(&dest, &body).with_context(|| format!("failed to write {}", dest.display()))?;
    tracing::debug!(path = %dest.display(), bytes = body.len(), %sha256, "artifact saved");
    Ok(FetchedArtifact {
        source: source.to_string(),
        path: dest.to_string_lossy().to_string(),
        sha256,
        bytes: body.len(),
    })
}
