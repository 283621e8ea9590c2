#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const VENDORED_TOX_INI: &str = "[tox]\nenvlist = lint\n";
pub const VENDORED_SCRIPT: &str = "echo \"enforce script got $1\"\n";
pub const UNREACHABLE: &str = "http://127.0.0.1:9/unreachable";

/// Isolated HOME, a project checkout and vendored artifacts, wired through a
/// settings file so no test touches the network or needs tox/python.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
    pub vendor: PathBuf,
    pub settings: PathBuf,
}

pub struct SettingsSpec<'a> {
    pub script_source: &'a str,
    pub config_source: &'a str,
    pub config_sha256: &'a str,
    pub runner: &'a str,
    pub strict_exit: bool,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let project = tmp.path().join("project");
        let vendor = tmp.path().join("vendor");
        for d in [&home, &project, &vendor] {
            fs::create_dir_all(d).expect("create fixture dir");
        }
        fs::write(vendor.join("tox.ini"), VENDORED_TOX_INI).expect("write tox.ini");
        fs::write(vendor.join("enforce.sh"), VENDORED_SCRIPT).expect("write script");

        let env = Self {
            settings: tmp.path().join("settings.toml"),
            _tmp: tmp,
            home,
            project,
            vendor,
        };
        let script = env.vendor_path("enforce.sh");
        let config = env.vendor_path("tox.ini");
        env.write_settings(&SettingsSpec {
            script_source: &script,
            config_source: &config,
            config_sha256: "",
            runner: "echo",
            strict_exit: false,
        });
        env
    }

    pub fn with_project_files(files: &[&str]) -> Self {
        let env = Self::new();
        for f in files {
            fs::write(env.project.join(f), "").expect("write project file");
        }
        env
    }

    pub fn complete() -> Self {
        Self::with_project_files(&["requirements.txt", "setup.py", "README.md"])
    }

    pub fn vendor_path(&self, name: &str) -> String {
        self.vendor
            .join(name)
            .to_str()
            .expect("vendor path utf8")
            .to_string()
    }

    pub fn write_settings(&self, spec: &SettingsSpec) {
        let raw = format!(
            r#"[general]
strict_exit = {strict}
timeout_ms = 2000

[bootstrap]
source = "{script}"
interpreter = "sh"

[enforce]
source = "{config}"
sha256 = "{sha}"
runner = "{runner}"
runner_args = ["runner-called-with"]
"#,
            strict = spec.strict_exit,
            script = spec.script_source,
            config = spec.config_source,
            sha = spec.config_sha256,
            runner = spec.runner,
        );
        fs::write(&self.settings, raw).expect("write settings");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = self.cmd_without_config();
        cmd.arg("--config").arg(&self.settings);
        cmd
    }

    /// Leaves settings discovery to `$HOME`.
    pub fn cmd_without_config(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("code-standards");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.project);
        cmd
    }

    /// Copies the fixture settings to the per-user default location.
    pub fn install_home_settings(&self) {
        let dest = self.home.join(".config/code-standards/config.toml");
        fs::create_dir_all(dest.parent().expect("settings dir")).expect("create settings dir");
        fs::copy(&self.settings, dest).expect("copy settings");
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn project_file(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.project.join(name)).ok()
    }
}
