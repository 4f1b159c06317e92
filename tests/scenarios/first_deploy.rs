//! Scenario: deploying into a directory cast has never touched.

use cast::application::{DeployRequest, DeployUseCase};
use cast::domain::ports::{ConflictDecision, SnapshotStore};
use cast::infrastructure::fs::MemoryFs;
use cast::infrastructure::repositories::JsonSnapshotStore;
use cast::Lang;

use crate::common::{target_path, BundleExec, CountingPrompter, TARGET};

#[test]
fn first_deploy_places_files_and_creates_history() {
    let fs = MemoryFs::new();
    fs.add_dir(TARGET);
    let exec = BundleExec::new(
        &fs,
        TARGET,
        &[("index.html", "<h1>v1</h1>"), ("assets/app.js", "console.log(1)")],
    );
    let prompter = CountingPrompter::new(ConflictDecision::Remove);
    let use_case = DeployUseCase::new(
        &fs,
        &exec,
        JsonSnapshotStore::new(&fs),
        prompter.clone(),
        Lang::En,
    );

    let report = use_case
        .execute(&DeployRequest::new("/tmp/v1.tgz", TARGET, "v1.tgz", "h1"))
        .unwrap();

    assert_eq!(report.deployed, vec!["assets", "index.html"]);
    assert!(report.snapshot_created);
    assert_eq!(report.snapshot_entries, 1);
    assert!(!report.had_conflicts());
    assert_eq!(prompter.calls(), 0);

    assert_eq!(
        fs.file_content(target_path("index.html")).as_deref(),
        Some("<h1>v1</h1>")
    );
    assert_eq!(
        fs.file_content(target_path("assets/app.js")).as_deref(),
        Some("console.log(1)")
    );
    assert!(!fs.is_dir(target_path(".cast/tmp")));

    let snapshot = JsonSnapshotStore::new(&fs)
        .load(TARGET.as_ref())
        .unwrap()
        .unwrap();
    let entry = snapshot.latest().unwrap();
    assert_eq!(entry.bundle_name(), "v1.tgz");
    assert_eq!(entry.bundle_hash(), "h1");
    let recorded: Vec<&str> = entry.files().iter().map(|f| f.path()).collect();
    assert_eq!(recorded, vec!["assets", "index.html"]);
}

#[test]
fn empty_bundle_records_an_entry_without_files() {
    let fs = MemoryFs::new();
    fs.add_dir(TARGET);
    let exec = BundleExec::new(&fs, TARGET, &[]);
    let prompter = CountingPrompter::new(ConflictDecision::Remove);
    let use_case = DeployUseCase::new(
        &fs,
        &exec,
        JsonSnapshotStore::new(&fs),
        prompter.clone(),
        Lang::Zh,
    );

    let report = use_case
        .execute(&DeployRequest::new("/tmp/empty.tgz", TARGET, "empty.tgz", "h0"))
        .unwrap();

    assert!(report.deployed.is_empty());
    assert_eq!(report.snapshot_entries, 1);
    assert_eq!(prompter.calls(), 0);

    let snapshot = JsonSnapshotStore::new(&fs)
        .load(TARGET.as_ref())
        .unwrap()
        .unwrap();
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.entries()[0].files().is_empty());
}

#[test]
fn staging_is_extracted_then_cleaned_up() {
    let fs = MemoryFs::new();
    fs.add_dir(TARGET);
    let exec = BundleExec::new(&fs, TARGET, &[("a.txt", "a")]);
    let use_case = DeployUseCase::new(
        &fs,
        &exec,
        JsonSnapshotStore::new(&fs),
        CountingPrompter::new(ConflictDecision::Remove),
        Lang::En,
    );

    use_case
        .execute(&DeployRequest::new("/tmp/a.tgz", TARGET, "a.tgz", "h"))
        .unwrap();

    let commands = exec.commands();
    assert_eq!(commands.len(), 2);
    assert!(commands[0].contains("tar -xzf '/tmp/a.tgz' -C '/srv/app/.cast/tmp'"));
    assert_eq!(commands[1], "rm -rf '/srv/app/.cast/tmp'");
}
