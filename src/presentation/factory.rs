//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use is_terminal::IsTerminal;

use crate::application::{DeployUseCase, HistoryUseCase};
use crate::domain::ports::{
    DeployEventSink, FixedPrompter, Localizer, RemoteExec, RemoteFs, UserPrompter,
};
use crate::domain::value_objects::Lang;
use crate::infrastructure::{
    Catalog, ConsoleEventSink, DialoguerPrompter, JsonEventSink, JsonSnapshotStore, LinePrompter,
    LocalExec, LocalFs, SshExec, SshRemoteFs, SshSession,
};

use super::cli::OnConflict;

/// Type alias for the deploy use case as the CLI runs it
pub type ConcreteDeployUseCase = DeployUseCase<
    Arc<dyn RemoteFs>,
    Box<dyn RemoteExec>,
    JsonSnapshotStore<Arc<dyn RemoteFs>>,
    Box<dyn UserPrompter>,
>;

/// Type alias for the history use case as the CLI runs it
pub type ConcreteHistoryUseCase = HistoryUseCase<JsonSnapshotStore<Arc<dyn RemoteFs>>>;

/// The built-in message catalog
pub fn create_localizer() -> Arc<dyn Localizer> {
    Arc::new(Catalog::new())
}

/// File system of the deploy host: SSH when `host` is given, local otherwise
pub fn create_file_system(host: Option<&str>) -> Arc<dyn RemoteFs> {
    match host {
        Some(host) => Arc::new(SshRemoteFs::new(SshSession::new(host))),
        None => Arc::new(LocalFs::new()),
    }
}

/// Command executor of the deploy host
pub fn create_executor(host: Option<&str>) -> Box<dyn RemoteExec> {
    match host {
        Some(host) => Box::new(SshExec::new(SshSession::new(host))),
        None => Box::new(LocalExec::new()),
    }
}

/// Prompter for unmanaged conflicts
///
/// - `--on-conflict` given: answer without asking
/// - stdin is a terminal: dialoguer menu
/// - otherwise: plain line prompts on stdin/stderr
pub fn create_prompter(
    on_conflict: Option<OnConflict>,
    localizer: Arc<dyn Localizer>,
    backup_suffix: &str,
) -> Box<dyn UserPrompter> {
    if let Some(answer) = on_conflict {
        return Box::new(FixedPrompter(answer.decision(backup_suffix)));
    }

    if std::io::stdin().is_terminal() {
        Box::new(DialoguerPrompter::new(localizer).with_default_suffix(backup_suffix))
    } else {
        Box::new(LinePrompter::stdio(localizer).with_default_suffix(backup_suffix))
    }
}

/// NDJSON events on stdout for `--json`, localized progress on stderr otherwise
pub fn create_event_sink(
    json: bool,
    localizer: Arc<dyn Localizer>,
    lang: Lang,
) -> Arc<dyn DeployEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(localizer, lang))
    }
}

/// Create a deploy use case with all dependencies wired up
///
/// The snapshot store shares the file system handle with the use case.
pub fn create_deploy_use_case(
    host: Option<&str>,
    prompter: Box<dyn UserPrompter>,
    events: Arc<dyn DeployEventSink>,
    lang: Lang,
) -> ConcreteDeployUseCase {
    let file_system = create_file_system(host);
    let snapshots = JsonSnapshotStore::new(Arc::clone(&file_system));
    let executor = create_executor(host);

    DeployUseCase::new(file_system, executor, snapshots, prompter, lang).with_events(events)
}

/// Create a history use case reading the snapshot on `host`
pub fn create_history_use_case(host: Option<&str>) -> ConcreteHistoryUseCase {
    HistoryUseCase::new(JsonSnapshotStore::new(create_file_system(host)))
}
