//! Bundle fixtures.
//!
//! Real `.tar.gz` bundles are built with the system `tar`, the same tool the
//! local executor extracts them with. Tests that need one skip themselves
//! when `tar` is not installed.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Whether a usable `tar` is on PATH
pub fn tar_available() -> bool {
    Command::new("tar")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Build `<dir>/<name>` containing `files` (relative path, content)
///
/// Only the top-level names are passed to `tar`, so the archive has no `./`
/// entry and extracts to exactly those names.
pub fn make_bundle(dir: &Path, name: &str, files: &[(&str, &str)]) -> PathBuf {
    let source = dir.join(format!("{name}.src"));
    std::fs::create_dir_all(&source).unwrap();

    let mut top_level: Vec<String> = Vec::new();
    for (path, content) in files {
        let full = source.join(path);
        std::fs::create_dir_all(full.parent().unwrap()).unwrap();
        std::fs::write(&full, content).unwrap();

        let first = path.split('/').next().unwrap().to_string();
        if !top_level.contains(&first) {
            top_level.push(first);
        }
    }

    let bundle = dir.join(name);
    let status = Command::new("tar")
        .arg("-czf")
        .arg(&bundle)
        .arg("-C")
        .arg(&source)
        .args(&top_level)
        .status()
        .expect("Failed to run tar");
    assert!(status.success(), "tar failed building {name}");

    std::fs::remove_dir_all(&source).unwrap();
    bundle
}

/// Top-level names in `dir`, sorted, without the `.cast` metadata dir
pub fn visible_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name != ".cast")
        .collect();
    names.sort();
    names
}
