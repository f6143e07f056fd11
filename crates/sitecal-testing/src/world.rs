//! TestWorld pattern for declarative integration test setup.

use anyhow::{Context, Result};
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use sitecal_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_jobs();
/// let result = world.run(&["job", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory next to the data dir, for export output.
    pub fn out_dir(&self) -> PathBuf {
        self.temp_dir.path().join("out")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `value` as the stored collection under `key` (`projects`, `staff`, ...).
    pub fn with_collection(self, key: &str, value: &Value) -> Self {
        self.write_json(&format!("{}.json", key), value)
            .expect("Failed to write collection");
        self
    }

    pub fn with_sample_jobs(self) -> Self {
        self.with_collection("projects", &crate::fixtures::sample_jobs())
    }

    pub fn with_sample_staff(self) -> Self {
        self.with_collection("staff", &crate::fixtures::sample_staff())
    }

    /// Write a file inside the data directory.
    pub fn write_json(&self, name: &str, value: &Value) -> Result<()> {
        let path = self.data_dir.join(name);
        std::fs::write(&path, serde_json::to_string_pretty(value)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Read a stored collection back, or `Value::Null` when absent.
    pub fn read_collection(&self, key: &str) -> Result<Value> {
        let path = self.data_dir.join(format!("{}.json", key));
        if !path.exists() {
            return Ok(Value::Null);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.current_dir(self.temp_dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SITECAL_PATH");
        cmd.env_remove("SITECAL_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `sitecal` binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("sitecal")
            .map_err(|e| anyhow::anyhow!("Failed to find sitecal binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout; fails when the command fails.
    pub fn run_json(&self, args: &[&str]) -> Result<Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("sitecal {:?} failed: {}", args, result.stderr);
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.stdout)
            .with_context(|| format!("stdout is not JSON:\n{}", self.stdout))
    }
}
