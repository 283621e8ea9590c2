//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `bootstrap.rs` — fetch the enforcement script and delegate to it.
//! - `enforcer.rs` — required-file gate, runner configuration, runner.
//! - `requirements.rs` — required-file set lookup (exact names + README glob).
//! - `runner.rs` — subprocess seam and exit-status policy.
//! - `settings.rs` — TOML settings loading.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Flows take the project root explicitly; nothing reads the cwd here.
//! - Network and process side effects go through `Fetch` / `Spawn`.
//! - Keep command handlers thin; delegate to services.

pub mod bootstrap;
pub mod enforcer;
pub mod output;
pub mod requirements;
pub mod runner;
pub mod settings;

#[cfg(test)]
pub mod support;
