//! Shared test helpers for checker integration tests

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Fixture directory holding an output file and a fragment list
pub struct Fixture {
    pub dir: TempDir,
    pub output_path: PathBuf,
    pub spec_path: PathBuf,
}

impl Fixture {
    /// Write `output` to `saida.txt` and `spec` to `entrada.txt` in a fresh temp dir
    pub fn new(output: &str, spec: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let output_path = dir.path().join("saida.txt");
        let spec_path = dir.path().join("entrada.txt");
        std::fs::write(&output_path, output).expect("Failed to write output file");
        std::fs::write(&spec_path, spec).expect("Failed to write spec file");
        Self {
            dir,
            output_path,
            spec_path,
        }
    }

    /// Write an extra file into the fixture directory
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Run the checker on this fixture's two files with extra arguments
    pub fn run(&self, extra_args: &[&str]) -> RunResult {
        run_checker(&self.output_path, &self.spec_path, extra_args)
    }
}

/// Captured result of one checker invocation
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl RunResult {
    fn from_output(output: Output) -> Self {
        Self {
            stdout: String::from_utf8(output.stdout).expect("stdout is not UTF-8"),
            stderr: String::from_utf8(output.stderr).expect("stderr is not UTF-8"),
            code: output.status.code(),
        }
    }

    pub fn failure_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|line| line.starts_with("FALHOU:"))
            .collect()
    }
}

/// Run the binary with the two positional paths followed by `extra_args`
pub fn run_checker(output_path: &Path, spec_path: &Path, extra_args: &[&str]) -> RunResult {
    let output = Command::new(env!("CARGO_BIN_EXE_ssp-checker"))
        .arg(output_path)
        .arg(spec_path)
        .args(extra_args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ssp-checker");
    RunResult::from_output(output)
}

/// Run the binary with arbitrary arguments
pub fn run_raw(args: &[&str]) -> RunResult {
    let output = Command::new(env!("CARGO_BIN_EXE_ssp-checker"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run ssp-checker");
    RunResult::from_output(output)
}
