use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_anrar"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

/// An archive directory next to a scratch directory for the fake tool,
/// its call log and the settings file.
pub struct Fixture {
    pub archives: TempDir,
    pub scratch: TempDir,
}

impl Fixture {
    pub fn new(names: &[&str]) -> Self {
        let archives = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(archives.path().join(name), b"rar").unwrap();
        }
        Self {
            archives,
            scratch: tempfile::tempdir().unwrap(),
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.archives.path().join(name).exists()
    }

    pub fn calls_path(&self) -> PathBuf {
        self.scratch.path().join("calls.log")
    }

    /// One line per tool invocation, holding its arguments.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.calls_path())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Install a fake extraction tool that records its arguments and exits
    /// with `fail_code` when the archive is `fail_on`.
    #[cfg(unix)]
    pub fn install_tool(&self, fail_on: Option<&str>, fail_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.scratch.path().join("fake-unrar");
        let body = format!(
            "#!/bin/sh\n\
             for last; do :; done\n\
             echo \"$*\" >> '{calls}'\n\
             if [ \"$last\" = '{fail}' ]; then exit {fail_code}; fi\n\
             exit 0\n",
            calls = self.calls_path().display(),
            fail = fail_on.unwrap_or(""),
        );
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let settings = self.settings_path();
        let json = serde_json::json!({ "program": script.to_string_lossy() });
        fs::write(&settings, json.to_string()).unwrap();
        script
    }

    pub fn settings_path(&self) -> PathBuf {
        self.scratch.path().join("anrar.json")
    }

    /// Run the binary against the archive directory with the fake tool.
    pub fn run(&self, extra: &[&str]) -> Output {
        run_in(self.archives.path(), &self.settings_path(), extra)
    }
}

pub fn run_in(dir: &Path, settings: &Path, extra: &[&str]) -> Output {
    Command::new(binary_path())
        .arg("--directory")
        .arg(dir)
        .arg("--config")
        .arg(settings)
        .args(extra)
        .output()
        .expect("failed to spawn binary")
}

pub fn run_bare(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("failed to spawn binary")
}

pub fn normalized_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
