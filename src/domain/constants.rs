pub const DEFAULT_SOURCES_DIR: &str = "src";

pub const ENFORCE_SCRIPT_SOURCE: &str =
    "https://raw.githubusercontent.com/provizio/coding_standards/master/python/code_standards_enforce.py";
pub const ENFORCE_SCRIPT_FILE: &str = "code_standards_enforce.py";
pub const DEFAULT_INTERPRETER: &str = "python";

pub const RUNNER_CONFIG_SOURCE: &str =
    "https://raw.githubusercontent.com/provizio/coding_standards/master/python/tox.ini";
pub const RUNNER_CONFIG_FILE: &str = "tox.ini";
pub const DEFAULT_RUNNER: &str = "tox";

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Relative to `$HOME`.
pub const DEFAULT_SETTINGS_PATH: &str = ".config/code-standards/config.toml";
