use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};


pub use data::{generate_random_data, BINARY_DATA, REPETITIVE_DATA, SAMPLE_TEXT};

/// Type of binary to execute
#[derive(Debug, Clone)]
pub enum BinaryType {
    /// Our own binary built by cargo
    Cargo,
    /// System binary available in PATH
    System(String),
}

impl BinaryType {
    /// Returns the path to the binary for this variant.
    ///
    /// # Panics
    ///
    /// Panics if a system binary cannot be found.
    fn get_path(&self) -> PathBuf {
        match self {
            BinaryType::Cargo => PathBuf::from(env!("CARGO_BIN_EXE_brotli-compress")),
            BinaryType::System(name) => find_system_binary(name)
                .unwrap_or_else(|| panic!("Binary {name} not found in PATH")),
        }
    }
}

/// Find a system binary in PATH
fn find_system_binary(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Output from running a binary command
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create fixture with multiple files
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if any fixture file
    /// cannot be written.
    pub fn with_files(names: &[&str], contents: &[&[u8]]) -> Self {
        let root_dir = tempfile::TempDir::new().unwrap();
        for (name, contents) in names.iter().zip(contents) {
            fs::write(root_dir.path().join(name), contents).unwrap();
        }

        Self { root_dir }
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        Self::with_files(&[name], &[contents])
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        self.root_dir.path().join(name).to_string_lossy().into_owned()
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    /// Write a file into the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, contents: &[u8]) {
        fs::write(self.root_dir.path().join(name), contents).unwrap();
    }

    /// Assert that a file has the expected contents
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read or if its contents don't match.
    pub fn assert_file(&self, name: &str, expected: &[u8]) {
        let actual = fs::read(self.root_dir.path().join(name)).unwrap_or_default();
        assert!(actual == expected, "contents of {name} differ");
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run our binary with the specified arguments
    pub async fn run_cargo(&mut self, args: &[&str]) -> Output {
        self.run(BinaryType::Cargo, args).await
    }

    /// Run a system binary with the specified arguments if available
    pub async fn run_system(&mut self, name: &str, args: &[&str]) -> Option<Output> {
        if find_system_binary(name).is_some() {
            Some(self.run(BinaryType::System(name.to_string()), args).await)
        } else {
            None
        }
    }

    /// Run a binary with the specified arguments
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or if awaiting its output fails.
    async fn run(&mut self, binary_type: BinaryType, args: &[&str]) -> Output {
        let raw_output = tokio::process::Command::new(binary_type.get_path())
            .args(args)
            .current_dir(self.root_dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .unwrap();

        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
