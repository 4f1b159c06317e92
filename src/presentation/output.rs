//! Output Rendering
//!
//! Text and JSON forms of command results. Deploy progress is rendered by
//! the event sinks; this covers what is printed once a command is done.

use std::path::Path;

use crate::application::{DeployError, HistoryResult};
use crate::config::UserConfig;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Human-readable deployment history
pub fn render_history_text(history: &HistoryResult, target: &Path) -> String {
    if !history.recorded {
        return format!("No deployments recorded in {}\n", target.display());
    }

    let mut out = format!(
        "Deployments in {} ({} total",
        target.display(),
        history.total
    );
    if history.entries.len() < history.total {
        out.push_str(&format!(", showing last {}", history.entries.len()));
    }
    out.push_str(")\n");

    let first_number = history.total - history.entries.len() + 1;
    for (offset, entry) in history.entries.iter().enumerate() {
        out.push_str(&format!(
            "\n  #{} {}  {}\n",
            first_number + offset,
            entry.deployed_at().format("%Y-%m-%d %H:%M:%S UTC"),
            entry.bundle_name()
        ));
        if !entry.bundle_hash().is_empty() {
            out.push_str(&format!("     hash: {}\n", entry.bundle_hash()));
        }
        for file in entry.files() {
            let hash = if file.hash().is_empty() {
                "-"
            } else {
                file.hash()
            };
            out.push_str(&format!("     → {}  {}\n", file.path(), hash));
        }
    }

    if !history.managed.is_empty() {
        out.push_str(&format!("\n  Managed: {}\n", history.managed.join(", ")));
    }

    out
}

/// JSON form of the deployment history
pub fn history_to_json(history: &HistoryResult, target: &Path) -> serde_json::Value {
    let entries: Vec<_> = history
        .entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "bundle_name": entry.bundle_name(),
                "bundle_hash": entry.bundle_hash(),
                "deployed_at": entry.deployed_at().to_rfc3339(),
                "files": entry
                    .files()
                    .iter()
                    .map(|file| serde_json::json!({
                        "path": file.path(),
                        "hash": file.hash(),
                        "mod_time": file.mod_time().to_rfc3339(),
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    serde_json::json!({
        "event": "complete",
        "command": "history",
        "target": target.display().to_string(),
        "recorded": history.recorded,
        "total": history.total,
        "entries": entries,
        "managed": history.managed,
    })
}

/// JSON form of a failed deploy
pub fn deploy_error_to_json(err: &DeployError) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "command": "deploy",
        "stage": err.stage().as_str(),
        "message": err.to_string(),
    })
}

/// Human-readable effective configuration
pub fn render_config_text(config: &UserConfig, path: Option<&Path>) -> String {
    let location = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no home directory)".to_string());
    format!(
        "config: {}\nlang = {}\nbackup_suffix = {}\n",
        location,
        config.lang(),
        config.backup_suffix()
    )
}

/// JSON form of the effective configuration
pub fn config_to_json(config: &UserConfig, path: Option<&Path>) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "config",
        "path": path.map(|p| p.display().to_string()),
        "lang": config.lang().code(),
        "backup_suffix": config.backup_suffix(),
    })
}
