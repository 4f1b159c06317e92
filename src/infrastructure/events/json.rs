//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// NDJSON form of one event
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            bundle,
            target,
            bundle_name,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "bundle": bundle.display().to_string(),
            "target": target.display().to_string(),
            "bundle_name": bundle_name,
        }),

        DeployEvent::StageEntered { stage } => serde_json::json!({
            "event": "stage",
            "command": "deploy",
            "stage": stage.as_str(),
        }),

        DeployEvent::Staged { entries } => serde_json::json!({
            "event": "staged",
            "command": "deploy",
            "entries": entries,
        }),

        DeployEvent::ReservedSkipped { name } => serde_json::json!({
            "event": "item_skipped",
            "command": "deploy",
            "path": name,
            "reason": "reserved",
        }),

        DeployEvent::ConflictsClassified { managed, unmanaged } => serde_json::json!({
            "event": "conflicts",
            "command": "deploy",
            "managed": managed,
            "unmanaged": unmanaged,
        }),

        DeployEvent::ManagedReplaced { name } => serde_json::json!({
            "event": "item_replaced",
            "command": "deploy",
            "path": name,
        }),

        DeployEvent::BackedUp { name, backup } => serde_json::json!({
            "event": "item_backed_up",
            "command": "deploy",
            "path": name,
            "backup": backup,
        }),

        DeployEvent::Removed { name } => serde_json::json!({
            "event": "item_removed",
            "command": "deploy",
            "path": name,
        }),

        DeployEvent::Moved { name } => serde_json::json!({
            "event": "item_moved",
            "command": "deploy",
            "path": name,
        }),

        DeployEvent::MetadataDegraded {
            name,
            field,
            reason,
        } => serde_json::json!({
            "event": "item_degraded",
            "command": "deploy",
            "path": name,
            "field": field.as_str(),
            "reason": reason,
        }),

        DeployEvent::SnapshotRecorded { created, entries } => serde_json::json!({
            "event": "snapshot",
            "command": "deploy",
            "created": created,
            "entries": entries,
        }),

        DeployEvent::Completed { deployed } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "success",
            "deployed": deployed,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DegradedField;
    use crate::domain::value_objects::DeployStage;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let text = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        text.lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Started {
            bundle: PathBuf::from("/tmp/app.tar.gz"),
            target: PathBuf::from("/srv/app"),
            bundle_name: "app.tar.gz".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["target"], "/srv/app");
        assert_eq!(events[0]["bundle_name"], "app.tar.gz");
    }

    #[test]
    fn json_sink_writes_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::StageEntered {
            stage: DeployStage::Moving,
        });
        sink.on_event(DeployEvent::BackedUp {
            name: "config.yml".to_string(),
            backup: "config.yml.bak".to_string(),
        });
        sink.on_event(DeployEvent::Completed { deployed: 3 });

        let events = lines(&buffer);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["stage"], "move");
        assert_eq!(events[1]["event"], "item_backed_up");
        assert_eq!(events[1]["backup"], "config.yml.bak");
        assert_eq!(events[2]["deployed"], 3);
    }

    #[test]
    fn degraded_event_names_field() {
        let value = event_to_json(&DeployEvent::MetadataDegraded {
            name: "app.js".to_string(),
            field: DegradedField::ModTime,
            reason: "stat failed".to_string(),
        });
        assert_eq!(value["field"], "mod_time");
        assert_eq!(value["reason"], "stat failed");
    }
}
