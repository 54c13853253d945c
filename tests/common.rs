#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rollcall::models::{Cell, RawRow};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rc() -> Command {
    cargo_bin_cmd!("rollcall")
}

/// Write a fixture file inside the system temp dir and return its path.
/// `name` must carry the extension; the import layer gates on it.
pub fn write_fixture(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rollcall_{}", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, contents).expect("write fixture");
    p
}

/// Create a temporary output file path and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rollcall_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Standard two-person roster used by several tests.
pub const ROSTER_CSV: &str = "Legajo,Alumno\n1,Ana\n2,Beto\n";

/// Build a raw row from header/value pairs; empty values become empty cells.
pub fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| {
            let cell = if v.is_empty() {
                Cell::Empty
            } else {
                Cell::Text((*v).to_string())
            };
            ((*k).to_string(), cell)
        })
        .collect()
}
