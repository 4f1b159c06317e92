//! Console Event Sink
//!
//! Prints localized, human-readable progress lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{DegradedField, DeployEvent, DeployEventSink, Localizer, Message};
use crate::domain::value_objects::Lang;

/// Event sink that renders deploy progress through the localizer
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    localizer: Arc<dyn Localizer>,
    lang: Lang,
}

impl ConsoleEventSink {
    /// Progress on stderr, leaving stdout to command output
    pub fn stderr(localizer: Arc<dyn Localizer>, lang: Lang) -> Self {
        Self::with_writer(io::stderr(), localizer, lang)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        localizer: Arc<dyn Localizer>,
        lang: Lang,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            localizer,
            lang,
        }
    }

    fn line(&self, message: Message<'_>) {
        let text = self.localizer.render(&message, self.lang);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{text}");
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started { bundle, target, .. } => self.line(Message::Deploying {
                bundle: &bundle.display().to_string(),
                target: &target.display().to_string(),
            }),
            DeployEvent::ReservedSkipped { name } => {
                self.line(Message::SkippedReserved { name: &name })
            }
            DeployEvent::ManagedReplaced { name } => {
                self.line(Message::ReplacingManaged { file: &name })
            }
            DeployEvent::BackedUp { name, backup } => self.line(Message::BackingUp {
                from: &name,
                to: &backup,
            }),
            DeployEvent::Removed { name } => self.line(Message::Removing { file: &name }),
            DeployEvent::Moved { name } => self.line(Message::Moved { file: &name }),
            DeployEvent::MetadataDegraded { name, field, .. } => match field {
                DegradedField::Hash => self.line(Message::HashUnavailable { file: &name }),
                DegradedField::ModTime => self.line(Message::ModTimeUnavailable { file: &name }),
            },
            DeployEvent::SnapshotRecorded { created: true, .. } => {
                self.line(Message::SnapshotCreated)
            }
            DeployEvent::SnapshotRecorded { entries, .. } => {
                self.line(Message::SnapshotUpdated { entries })
            }
            DeployEvent::Completed { deployed } => {
                self.line(Message::DeployComplete { files: deployed })
            }
            // the prompter already lists unmanaged conflicts
            DeployEvent::StageEntered { .. }
            | DeployEvent::Staged { .. }
            | DeployEvent::ConflictsClassified { .. } => {}
        }

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
