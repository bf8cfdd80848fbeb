//! Shared testing utilities for prwm CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use std::path::Path;

/// Testing harness providing an isolated repository checkout and a mocked GitHub API.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: ChildPath,
    server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.child("work");
        work_dir
            .child(".github/workflows")
            .create_dir_all()
            .expect("Failed to create workflows directory");

        Self { root, work_dir, server: mockito::Server::new() }
    }

    /// Path to the checkout used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.path()
    }

    /// Event payload file.
    pub fn event_file(&self) -> ChildPath {
        self.root.child("event.json")
    }

    /// Step output file.
    pub fn output_file(&self) -> ChildPath {
        self.root.child("github_output")
    }

    /// Write a workflow file under `.github/workflows/`.
    pub fn write_workflow(&self, name: &str, content: &str) {
        self.work_dir
            .child(".github/workflows")
            .child(name)
            .write_str(content)
            .expect("Failed to write workflow");
    }

    /// Write a pull request event payload.
    pub fn write_pr_event(&self, action: &str, base: &str, number: u64) {
        let payload = serde_json::json!({
            "action": action,
            "number": number,
            "pull_request": {
                "number": number,
                "html_url": format!("https://github.com/octo/repo/pull/{}", number),
                "base": { "ref": base },
            },
        });
        self.write_event(&payload.to_string());
    }

    /// Write an arbitrary event payload.
    pub fn write_event(&self, payload: &str) {
        self.event_file().write_str(payload).expect("Failed to write event payload");
    }

    /// Serve `files` as the single page of changed files for `number`.
    pub fn mock_pr_files(&mut self, number: u64, files: &[&str]) -> mockito::Mock {
        let body: Vec<serde_json::Value> =
            files.iter().map(|f| serde_json::json!({ "filename": f })).collect();
        self.server
            .mock("GET", format!("/repos/octo/repo/pulls/{}/files", number).as_str())
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::Value::Array(body).to_string())
            .create()
    }

    /// Respond to the changed files request for `number` with an error.
    pub fn mock_pr_files_error(
        &mut self,
        number: u64,
        status: usize,
        message: &str,
    ) -> mockito::Mock {
        self.server
            .mock("GET", format!("/repos/octo/repo/pulls/{}/files", number).as_str())
            .match_query(mockito::Matcher::Any)
            .with_status(status)
            .with_body(serde_json::json!({ "message": message }).to_string())
            .create()
    }

    /// Build a command for invoking the compiled `prwm` binary inside the checkout.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prwm").expect("Failed to locate prwm binary");
        cmd.current_dir(self.work_dir())
            .env("GITHUB_EVENT_PATH", self.event_file().path())
            .env("GITHUB_REPOSITORY", "octo/repo")
            .env("GITHUB_API_URL", self.server.url())
            .env("GITHUB_TOKEN", "test-token")
            .env("RUST_LOG", "info")
            .env_remove("GH_TOKEN")
            .env_remove("GITHUB_OUTPUT");
        cmd
    }
}
