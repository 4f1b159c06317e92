//! Scenario: deploying again over files an earlier deployment delivered.

use std::path::Path;

use cast::application::{DeployRequest, DeployUseCase};
use cast::domain::ports::{ConflictDecision, SnapshotStore};
use cast::infrastructure::fs::MemoryFs;
use cast::infrastructure::repositories::JsonSnapshotStore;
use cast::Lang;

use crate::common::{target_path, BundleExec, CountingPrompter, TARGET};

fn deploy(fs: &MemoryFs, prompter: &CountingPrompter, name: &str, files: &[(&str, &str)]) {
    let exec = BundleExec::new(fs, TARGET, files);
    DeployUseCase::new(
        fs,
        &exec,
        JsonSnapshotStore::new(fs),
        prompter.clone(),
        Lang::En,
    )
    .execute(&DeployRequest::new(
        format!("/tmp/{name}"),
        TARGET,
        name,
        format!("hash-{name}"),
    ))
    .unwrap();
}

#[test]
fn managed_files_are_replaced_without_prompt_or_backup() {
    let fs = MemoryFs::new();
    fs.add_dir(TARGET);
    let prompter = CountingPrompter::new(ConflictDecision::backup(".bak"));

    deploy(&fs, &prompter, "v1.tgz", &[("index.html", "v1"), ("app.js", "v1")]);
    deploy(&fs, &prompter, "v2.tgz", &[("index.html", "v2"), ("app.js", "v2")]);

    assert_eq!(prompter.calls(), 0);
    assert_eq!(fs.file_content(target_path("index.html")).as_deref(), Some("v2"));
    assert_eq!(fs.file_content(target_path("app.js")).as_deref(), Some("v2"));
    assert!(!fs.is_file(target_path("index.html.bak")));
    assert!(!fs.is_file(target_path("app.js.bak")));
}

#[test]
fn history_accumulates_one_entry_per_deploy() {
    let fs = MemoryFs::new();
    fs.add_dir(TARGET);
    let prompter = CountingPrompter::new(ConflictDecision::Remove);

    deploy(&fs, &prompter, "v1.tgz", &[("index.html", "v1")]);
    deploy(&fs, &prompter, "v2.tgz", &[("index.html", "v2")]);

    let snapshot = JsonSnapshotStore::new(&fs)
        .load(Path::new(TARGET))
        .unwrap()
        .unwrap();
    let names: Vec<&str> = snapshot.entries().iter().map(|e| e.bundle_name()).collect();
    assert_eq!(names, vec!["v1.tgz", "v2.tgz"]);
    assert_eq!(snapshot.entries()[1].bundle_hash(), "hash-v2.tgz");
}

#[test]
fn file_managed_by_any_earlier_deploy_stays_managed() {
    let fs = MemoryFs::new();
    fs.add_dir(TARGET);
    let prompter = CountingPrompter::new(ConflictDecision::Remove);

    deploy(&fs, &prompter, "v1.tgz", &[("legacy.cfg", "old")]);
    deploy(&fs, &prompter, "v2.tgz", &[("index.html", "v2")]);
    deploy(&fs, &prompter, "v3.tgz", &[("legacy.cfg", "new")]);

    assert_eq!(prompter.calls(), 0);
    assert_eq!(fs.file_content(target_path("legacy.cfg")).as_deref(), Some("new"));
}

#[test]
fn only_unmanaged_part_of_a_mixed_conflict_is_prompted() {
    let fs = MemoryFs::new();
    fs.add_dir(TARGET);
    let prompter = CountingPrompter::new(ConflictDecision::backup(".bak"));

    deploy(&fs, &prompter, "v1.tgz", &[("index.html", "v1")]);
    fs.add_file(target_path("README.md"), "hand written");
    deploy(
        &fs,
        &prompter,
        "v2.tgz",
        &[("README.md", "generated"), ("index.html", "v2")],
    );

    assert_eq!(prompter.calls(), 1);
    assert_eq!(prompter.files_seen(), vec![vec!["README.md".to_string()]]);
    assert_eq!(
        fs.file_content(target_path("README.md.bak")).as_deref(),
        Some("hand written")
    );
    assert_eq!(fs.file_content(target_path("README.md")).as_deref(), Some("generated"));
    assert!(!fs.is_file(target_path("index.html.bak")));
}
