//! Scenario: the target already holds files cast never deployed.
//!
//! Uses the line prompter with scripted answers, as a piped stdin would.

use std::io::Cursor;
use std::sync::Arc;

use cast::application::{DeployRequest, DeployUseCase};
use cast::domain::ports::{Localizer, UserPrompter};
use cast::infrastructure::conflict::LinePrompter;
use cast::infrastructure::fs::MemoryFs;
use cast::infrastructure::i18n::Catalog;
use cast::infrastructure::repositories::JsonSnapshotStore;
use cast::Lang;

use crate::common::{target_path, BundleExec, TARGET};

fn deploy_with_answers<P: UserPrompter>(fs: &MemoryFs, prompter: P, files: &[(&str, &str)]) {
    let exec = BundleExec::new(fs, TARGET, files);
    DeployUseCase::new(fs, &exec, JsonSnapshotStore::new(fs), prompter, Lang::En)
        .execute(&DeployRequest::new("/tmp/b.tgz", TARGET, "b.tgz", "h"))
        .unwrap();
}

fn prompter(answers: &'static str) -> LinePrompter<Cursor<&'static [u8]>, Vec<u8>> {
    let localizer: Arc<dyn Localizer> = Arc::new(Catalog::new());
    LinePrompter::new(Cursor::new(answers.as_bytes()), Vec::new(), localizer)
}

#[test]
fn default_answer_backs_up_with_default_suffix() {
    let fs = MemoryFs::new();
    fs.add_file(target_path("index.html"), "user page");

    deploy_with_answers(&fs, prompter("\n\n"), &[("index.html", "deployed page")]);

    assert_eq!(
        fs.file_content(target_path("index.html.bak")).as_deref(),
        Some("user page")
    );
    assert_eq!(
        fs.file_content(target_path("index.html")).as_deref(),
        Some("deployed page")
    );
}

#[test]
fn backup_skips_taken_names() {
    let fs = MemoryFs::new();
    fs.add_file(target_path("index.html"), "user page");
    fs.add_file(target_path("index.html.bak"), "older backup");
    fs.add_file(target_path("index.html.bak.2"), "even older");

    deploy_with_answers(&fs, prompter("1\n\n"), &[("index.html", "deployed page")]);

    assert_eq!(
        fs.file_content(target_path("index.html.bak.3")).as_deref(),
        Some("user page")
    );
    assert_eq!(
        fs.file_content(target_path("index.html.bak")).as_deref(),
        Some("older backup")
    );
}

#[test]
fn custom_suffix_is_used() {
    let fs = MemoryFs::new();
    fs.add_file(target_path("app.js"), "user js");

    deploy_with_answers(&fs, prompter("1\n.orig\n"), &[("app.js", "deployed js")]);

    assert_eq!(
        fs.file_content(target_path("app.js.orig")).as_deref(),
        Some("user js")
    );
}

#[test]
fn remove_answer_deletes_without_backup() {
    let fs = MemoryFs::new();
    fs.add_file(target_path("index.html"), "user page");
    fs.add_file(target_path("assets/old.css"), "user css");

    deploy_with_answers(
        &fs,
        prompter("2\n"),
        &[("index.html", "deployed page"), ("assets/app.css", "deployed css")],
    );

    assert_eq!(
        fs.file_content(target_path("index.html")).as_deref(),
        Some("deployed page")
    );
    assert!(!fs.is_file(target_path("index.html.bak")));
    assert!(!fs.is_file(target_path("assets/old.css")));
    assert!(fs.is_file(target_path("assets/app.css")));
}

#[test]
fn unmanaged_files_become_managed_after_deploy() {
    let fs = MemoryFs::new();
    fs.add_file(target_path("index.html"), "user page");

    deploy_with_answers(&fs, prompter("2\n"), &[("index.html", "v1")]);
    // No answers left: a second prompt would fail the deploy.
    deploy_with_answers(&fs, prompter(""), &[("index.html", "v2")]);

    assert_eq!(fs.file_content(target_path("index.html")).as_deref(), Some("v2"));
}
