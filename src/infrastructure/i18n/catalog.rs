//! Built-in zh/en message catalog

use crate::domain::ports::{Localizer, Message};
use crate::domain::value_objects::Lang;

/// Message table compiled into the binary
///
/// Language codes without a table are mapped to English by
/// `Lang::from_code_or_en` before they reach the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    fn zh(message: &Message<'_>) -> String {
        match *message {
            Message::ConflictFound { files } => {
                format!("⚠ 目标目录发现非 Cast 管理的同名文件：{}", files.join(", "))
            }
            Message::ChooseAction => "  [1] 备份（默认）\n  [2] 移除\n请选择 [1]: ".to_string(),
            Message::ActionBackup => "备份".to_string(),
            Message::ActionRemove => "移除".to_string(),
            Message::ActionQuestion => "如何处理这些文件？".to_string(),
            Message::BackupSuffix { default } => format!("备份后缀 [{default}]: "),
            Message::Deploying { bundle, target } => format!("🚀 部署 {bundle} → {target}"),
            Message::ReplacingManaged { file } => format!("  ♻  替换: {file}"),
            Message::BackingUp { from, to } => format!("  📦 备份: {from} → {to}"),
            Message::Removing { file } => format!("  🗑  移除: {file}"),
            Message::SkippedReserved { name } => format!("  ⏭  跳过保留名称: {name}"),
            Message::Moved { file } => format!("  ✔ {file}"),
            Message::HashUnavailable { file } => format!("  ⚠ 无法计算哈希: {file}"),
            Message::ModTimeUnavailable { file } => format!("  ⚠ 无法读取修改时间: {file}"),
            Message::SnapshotCreated => "  📝 创建 snapshot: .cast/snapshot.json".to_string(),
            Message::SnapshotUpdated { .. } => {
                "  📝 更新 snapshot: .cast/snapshot.json".to_string()
            }
            Message::DeployComplete { .. } => "  ✅ 部署完成".to_string(),
        }
    }

    fn en(message: &Message<'_>) -> String {
        match *message {
            Message::ConflictFound { files } => {
                format!("⚠ Non-Cast-managed file conflicts: {}", files.join(", "))
            }
            Message::ChooseAction => "  [1] Backup (default)\n  [2] Remove\nChoose [1]: ".to_string(),
            Message::ActionBackup => "Backup".to_string(),
            Message::ActionRemove => "Remove".to_string(),
            Message::ActionQuestion => "How should these files be handled?".to_string(),
            Message::BackupSuffix { default } => format!("Backup suffix [{default}]: "),
            Message::Deploying { bundle, target } => format!("🚀 Deploying {bundle} → {target}"),
            Message::ReplacingManaged { file } => format!("  ♻  Replace: {file}"),
            Message::BackingUp { from, to } => format!("  📦 Backup: {from} → {to}"),
            Message::Removing { file } => format!("  🗑  Remove: {file}"),
            Message::SkippedReserved { name } => format!("  ⏭  Skipped reserved name: {name}"),
            Message::Moved { file } => format!("  ✔ {file}"),
            Message::HashUnavailable { file } => format!("  ⚠ Could not hash: {file}"),
            Message::ModTimeUnavailable { file } => {
                format!("  ⚠ Could not read modification time: {file}")
            }
            Message::SnapshotCreated => "  📝 Created snapshot: .cast/snapshot.json".to_string(),
            Message::SnapshotUpdated { entries } => {
                format!("  📝 Updated snapshot: .cast/snapshot.json ({entries} entries)")
            }
            Message::DeployComplete { files } => format!("  ✅ Deploy complete ({files} entries)"),
        }
    }
}

impl Localizer for Catalog {
    fn render(&self, message: &Message<'_>, lang: Lang) -> String {
        match lang {
            Lang::Zh => Self::zh(message),
            Lang::En => Self::en(message),
        }
    }
}
