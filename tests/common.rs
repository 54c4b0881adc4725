#![allow(dead_code)]
use apotekhjelper::backend::{MemoryBackend, SheetBackend};
use apotekhjelper::errors::{AppError, AppResult};
use assert_cmd::{Command, cargo_bin_cmd};
use regex::Regex;
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const SECRET: &str = "apotek123";

/// CLI command running against a throwaway home directory.
pub fn app(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("apotekhjelper");
    cmd.env("HOME", home)
        .env_remove("APOTEKHJELPER_PASSWORD")
        .env("RUST_LOG", "off");
    cmd
}

/// Same as [`app`] with the shared password already supplied.
pub fn authed(home: &Path) -> Command {
    let mut cmd = app(home);
    cmd.args(["--password", SECRET]);
    cmd
}

/// Create an empty home directory inside the system temp dir.
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("apotekhjelper_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Home with config, workbook and headers in place.
pub fn init_home(name: &str) -> PathBuf {
    let home = setup_home(name);
    app(&home)
        .args(["init", "--secret", SECRET])
        .assert()
        .success();
    home
}

pub fn workbook(home: &Path) -> PathBuf {
    home.join(".apotekhjelper").join("apotekhjelper.sqlite")
}

/// First generated id in CLI output.
pub fn extract_id(stdout: &str) -> String {
    let re = Regex::new(r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}").unwrap();
    re.find(stdout)
        .map(|m| m.as_str().to_string())
        .expect("no id in output")
}

/// Run a command and return its stdout.
pub fn stdout_of(mut cmd: Command) -> String {
    let out = cmd.output().expect("run command");
    assert!(
        out.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Backend wrapper that counts reads and records deleted positions.
pub struct RecordingBackend {
    pub inner: MemoryBackend,
    pub reads: Cell<usize>,
    pub deleted: Vec<usize>,
    /// 1-based `delete_row` call that fails instead of deleting.
    pub fail_delete_call: Option<usize>,
}

impl RecordingBackend {
    pub fn new(inner: MemoryBackend) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
            deleted: Vec::new(),
            fail_delete_call: None,
        }
    }

    pub fn failing_delete(inner: MemoryBackend, call: usize) -> Self {
        Self {
            fail_delete_call: Some(call),
            ..Self::new(inner)
        }
    }
}

impl SheetBackend for RecordingBackend {
    fn sheet_name(&self) -> &str {
        self.inner.sheet_name()
    }

    fn read_all(&self) -> AppResult<Vec<Vec<String>>> {
        self.reads.set(self.reads.get() + 1);
        self.inner.read_all()
    }

    fn append_row(&mut self, cells: &[String]) -> AppResult<()> {
        self.inner.append_row(cells)
    }

    fn write_range(
        &mut self,
        position: usize,
        first_column: usize,
        values: &[String],
    ) -> AppResult<()> {
        self.inner.write_range(position, first_column, values)
    }

    fn delete_row(&mut self, position: usize) -> AppResult<()> {
        if self.fail_delete_call == Some(self.deleted.len() + 1) {
            return Err(AppError::Backend(format!("connection lost at row {position}")));
        }
        self.deleted.push(position);
        self.inner.delete_row(position)
    }

    fn col_values(&self, column: usize) -> AppResult<Vec<String>> {
        self.inner.col_values(column)
    }
}

pub fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}
