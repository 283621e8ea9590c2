use crate::domain::models::RequiredFile;

#[derive(thiserror::Error, Debug)]
pub enum StandardsError {
    #[error("{}", .0.policy_message())]
    MissingArtifact(RequiredFile),
    #[error("checksum mismatch for {artifact}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        artifact: String,
        expected: String,
        actual: String,
    },
    #[error("invalid sha256 pin for {artifact}: `{pin}` is not 64 hex characters")]
    InvalidPin { artifact: String, pin: String },
    #[error("{program} exited with status {}", status_label(.code))]
    DelegateFailed { program: String, code: Option<i32> },
}

fn status_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "signal".to_string(),
    }
}
