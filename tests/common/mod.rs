//! Common test utilities for bfprofile integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that change CLI defaults
const BFPROFILE_ENV: [&str; 4] = [
    "BFPROFILE_CATALOG",
    "BFPROFILE_STUDIO",
    "BFPROFILE_JOBS",
    "BFPROFILE_BSP_PATH",
];

/// A scratch directory holding profiles for one test
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Copy a fixture profile into the workspace, returning its file name
    #[allow(dead_code)]
    pub fn copy_fixture(&self, name: &str) -> String {
        let fixture = fixture_path(name);
        std::fs::copy(&fixture, self.path.join(name)).expect("Failed to copy fixture");
        name.to_string()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to a file under tests/common/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(name)
}

/// The real binary, with a clean environment, running inside the workspace
#[allow(deprecated)]
pub fn bfprofile_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("bfprofile").expect("Failed to find bfprofile binary");
    for var in BFPROFILE_ENV {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(&workspace.path);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("nested/profile.yaml", "architectures: [tofino]\n");
        assert!(workspace.file_exists("nested/profile.yaml"));
        assert_eq!(
            workspace.read_file("nested/profile.yaml"),
            "architectures: [tofino]\n"
        );
    }

    #[test]
    fn test_fixtures_exist() {
        assert!(fixture_path("switch.yaml").exists());
    }
}
