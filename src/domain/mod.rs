//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep settings, report and error types in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — settings, required-file set, report/output structs.
//! - `constants.rs` — default sources, file names and programs.
//! - `errors.rs` — user-facing failure taxonomy.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in the report structs affect `--json` outputs.
//! Keep them synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
