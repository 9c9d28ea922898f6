//! Narration pipeline stages

use std::fmt;

use serde::{Deserialize, Serialize};

/// Progress of a single narration request
///
/// Stages advance strictly in declaration order; `Failed` is terminal and
/// reachable from any non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationStage {
    /// Image accepted, nothing called yet
    Received,
    /// Labels and faces detected
    VisionDone,
    /// English description composed
    Described,
    /// Description translated (or fallen back to English)
    Translated,
    /// Speech audio synthesized
    Synthesized,
    /// Response assembled for the client
    Responded,
    /// Processing aborted
    Failed,
}

impl NarrationStage {
    /// The stage that follows this one on success
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Received => Some(Self::VisionDone),
            Self::VisionDone => Some(Self::Described),
            Self::Described => Some(Self::Translated),
            Self::Translated => Some(Self::Synthesized),
            Self::Synthesized => Some(Self::Responded),
            Self::Responded | Self::Failed => None,
        }
    }

    /// Check if the stage ends the request
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Responded | Self::Failed)
    }
}

impl fmt::Display for NarrationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Received => "received",
            Self::VisionDone => "vision_done",
            Self::Described => "described",
            Self::Translated => "translated",
            Self::Synthesized => "synthesized",
            Self::Responded => "responded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_in_order() {
        let mut stage = NarrationStage::Received;
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            seen.push(next);
            stage = next;
        }
        assert_eq!(
            seen,
            vec![
                NarrationStage::Received,
                NarrationStage::VisionDone,
                NarrationStage::Described,
                NarrationStage::Translated,
                NarrationStage::Synthesized,
                NarrationStage::Responded,
            ]
        );
    }

    #[test]
    fn failed_has_no_successor() {
        assert!(NarrationStage::Failed.next().is_none());
        assert!(NarrationStage::Failed.is_terminal());
    }

    #[test]
    fn only_responded_and_failed_are_terminal() {
        assert!(NarrationStage::Responded.is_terminal());
        assert!(!NarrationStage::Received.is_terminal());
        assert!(!NarrationStage::Synthesized.is_terminal());
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(NarrationStage::VisionDone.to_string(), "vision_done");
        assert_eq!(NarrationStage::Failed.to_string(), "failed");
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&NarrationStage::VisionDone).unwrap();
        assert_eq!(json, "\"vision_done\"");
    }
}
