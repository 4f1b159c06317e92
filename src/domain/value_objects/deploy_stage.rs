//! Deploy Stage Value Object
//!
//! Names the step of the deploy sequence an event or error belongs to.

use std::fmt;

/// Steps of one deploy, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeployStage {
    Extracting,
    Listing,
    ReadingSnapshot,
    ClassifyingConflicts,
    ResolvingConflicts,
    Moving,
    RecordingSnapshot,
    Done,
}

impl DeployStage {
    pub fn as_str(self) -> &'static str {
        match self {
            DeployStage::Extracting => "extract",
            DeployStage::Listing => "list",
            DeployStage::ReadingSnapshot => "read-snapshot",
            DeployStage::ClassifyingConflicts => "classify",
            DeployStage::ResolvingConflicts => "resolve-conflicts",
            DeployStage::Moving => "move",
            DeployStage::RecordingSnapshot => "record-snapshot",
            DeployStage::Done => "done",
        }
    }
}

impl fmt::Display for DeployStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
