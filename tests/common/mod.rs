#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the agents-md binary.
#[macro_export]
macro_rules! agents_md {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("agents-md"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the fixture.
    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Reads a file inside the fixture.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    /// Parses the analysis JSON written by `scan`.
    pub fn read_json(&self, relative_path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(relative_path)).expect("Failed to parse JSON")
    }

    /// Writes a `.agents-md.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".agents-md.toml", content);
    }

    /// A small Python project with pytest tests and a Dockerfile.
    pub fn python_project(&self) {
        self.create_file("pyproject.toml", "[project]\nname = \"demo\"\n");
        self.create_file("requirements.txt", "requests\n");
        self.create_file("Dockerfile", "FROM python:3.12\n");
        self.create_file("README.md", "# demo\n");
        self.create_file("src/demo/__init__.py", "");
        self.create_file("src/demo/app.py", "def main():\n    return 1\n");
        self.create_file("tests/test_app.py", "def test_main():\n    assert True\n");
        self.create_file("tests/conftest.py", "");
    }
}
