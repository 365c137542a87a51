//! Test environment builder for isolated docker-deploy testing.
//!
//! Provides `TestEnv` - a temp project directory named `shop` and a fake
//! `docker` executable that records its arguments, environment and stdin.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Name of the project directory, and so the default stack name
pub const PROJECT_DIR: &str = "shop";

const FAKE_DOCKER: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$FAKE_DOCKER_OUT/args"
env > "$FAKE_DOCKER_OUT/env"
cat > "$FAKE_DOCKER_OUT/stdin"
exit "${FAKE_DOCKER_EXIT:-0}"
"#;

/// Result of running the docker-deploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Isolated test environment
pub struct TestEnv {
    /// Holds `shop/` (the project), `bin/` (fake docker) and `out/`
    root: TempDir,
    extra_env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        for dir in [PROJECT_DIR, "bin", "out"] {
            std::fs::create_dir_all(root.path().join(dir)).expect("Failed to create directory");
        }

        let docker = root.path().join("bin/docker");
        std::fs::write(&docker, FAKE_DOCKER).expect("Failed to write fake docker");
        make_executable(&docker);

        Self {
            root,
            extra_env: Vec::new(),
        }
    }

    /// Make the fake docker exit with `code`
    pub fn with_docker_exit(mut self, code: i32) -> Self {
        self.extra_env
            .push(("FAKE_DOCKER_EXIT".to_string(), code.to_string()));
        self
    }

    /// Set an extra variable in docker-deploy's environment
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.extra_env.push((key.to_string(), value.to_string()));
        self
    }

    /// The project directory (working directory of every run)
    pub fn project(&self) -> PathBuf {
        self.root.path().join(PROJECT_DIR)
    }

    /// The directory above the project
    pub fn parent(&self) -> &Path {
        self.root.path()
    }

    /// Write a file relative to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project().join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run docker-deploy from the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, None)
    }

    /// Run docker-deploy, feeding `stdin` to it
    pub fn run_with_stdin(&self, args: &[&str], stdin: Option<&str>) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_docker-deploy"));
        cmd.current_dir(self.project())
            .args(args)
            .env("PATH", self.path_with_fake_docker())
            .env("FAKE_DOCKER_OUT", self.root.path().join("out"))
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in &self.extra_env {
            cmd.env(key, value);
        }

        let output = match stdin {
            Some(input) => {
                cmd.stdin(Stdio::piped());
                let mut child = cmd.spawn().expect("Failed to spawn docker-deploy");
                child
                    .stdin
                    .take()
                    .expect("stdin is piped")
                    .write_all(input.as_bytes())
                    .expect("Failed to write stdin");
                child.wait_with_output().expect("Failed to wait for docker-deploy")
            }
            None => {
                cmd.stdin(Stdio::null());
                cmd.output().expect("Failed to execute docker-deploy")
            }
        };

        output_to_result(output)
    }

    /// Whether the fake docker was started
    pub fn docker_invoked(&self) -> bool {
        self.out_path("args").exists()
    }

    /// Arguments the fake docker received
    pub fn docker_args(&self) -> Vec<String> {
        self.read_out("args").lines().map(str::to_string).collect()
    }

    /// Value of `name` in the fake docker's environment
    pub fn docker_env(&self, name: &str) -> Option<String> {
        let prefix = format!("{}=", name);
        self.read_out("env")
            .lines()
            .find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
    }

    /// Bytes the fake docker read from its stdin
    pub fn docker_stdin(&self) -> String {
        self.read_out("stdin")
    }

    fn out_path(&self, name: &str) -> PathBuf {
        self.root.path().join("out").join(name)
    }

    fn read_out(&self, name: &str) -> String {
        let path = self.out_path(name);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    fn path_with_fake_docker(&self) -> std::ffi::OsString {
        let bin = self.root.path().join("bin");
        let mut paths = vec![bin];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to build PATH")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
