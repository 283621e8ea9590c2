use crate::domain::constants::{
    DEFAULT_INTERPRETER, DEFAULT_RUNNER, DEFAULT_TIMEOUT_MS, ENFORCE_SCRIPT_FILE,
    ENFORCE_SCRIPT_SOURCE, RUNNER_CONFIG_FILE, RUNNER_CONFIG_SOURCE,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One entry of the required-file set, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredFile {
    Requirements,
    Setup,
    Readme,
}

impl RequiredFile {
    pub const ALL: [RequiredFile; 3] = [
        RequiredFile::Requirements,
        RequiredFile::Setup,
        RequiredFile::Readme,
    ];

    /// Exact file name, or a shell glob for `Readme`.
    pub fn pattern(self) -> &'static str {
        match self {
            RequiredFile::Requirements => "requirements.txt",
            RequiredFile::Setup => "setup.py",
            RequiredFile::Readme => "*README*",
        }
    }

    pub fn policy_message(self) -> &'static str {
        match self {
            RequiredFile::Requirements => {
                "A `requirements.txt` file was not found. According to coding standards, \
                 a requirements file must be present in the root folder of the project."
            }
            RequiredFile::Setup => {
                "A `setup.py` file was not found. According to coding standards, \
                 a setup file must be present in the root folder of the project."
            }
            RequiredFile::Readme => {
                "A `README` file was not found. According to coding standards, \
                 a README file must be present in the root folder of the project."
            }
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub bootstrap: BootstrapSettings,
    #[serde(default)]
    pub enforce: EnforceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralSettings {
    #[serde(default)]
    pub strict_exit: bool,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            strict_exit: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Where the enforcement script comes from and how it is run.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BootstrapSettings {
    pub source: String,
    /// Empty means unpinned.
    pub sha256: String,
    pub file_name: String,
    pub interpreter: String,
    pub interpreter_args: Vec<String>,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            source: ENFORCE_SCRIPT_SOURCE.to_string(),
            sha256: String::new(),
            file_name: ENFORCE_SCRIPT_FILE.to_string(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
            interpreter_args: Vec::new(),
        }
    }
}

/// Where the runner configuration comes from and which runner consumes it.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EnforceSettings {
    pub source: String,
    pub sha256: String,
    pub file_name: String,
    pub runner: String,
    pub runner_args: Vec<String>,
}

impl Default for EnforceSettings {
    fn default() -> Self {
        Self {
            source: RUNNER_CONFIG_SOURCE.to_string(),
            sha256: String::new(),
            file_name: RUNNER_CONFIG_FILE.to_string(),
            runner: DEFAULT_RUNNER.to_string(),
            runner_args: Vec::new(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
    pub matched: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct FetchedArtifact {
    pub source: String,
    pub path: String,
    pub sha256: String,
    pub bytes: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct DelegateReport {
    pub program: String,
    pub args: Vec<String>,
    pub exit_code: Option<i32>,
    pub success: bool,
}

#[derive(Serialize, Debug)]
pub struct BootstrapReport {
    pub sources_dir: String,
    pub script: FetchedArtifact,
    pub delegate: DelegateReport,
}

#[derive(Serialize, Debug)]
pub struct EnforceReport {
    pub sources_dir: String,
    pub checks: Vec<CheckItem>,
    pub config: FetchedArtifact,
    pub runner: DelegateReport,
}

#[derive(Serialize, Debug)]
pub struct VerifyReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
