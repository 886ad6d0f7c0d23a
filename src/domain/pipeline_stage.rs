use std::fmt;

/// Where an interaction stopped. `Failed` is reachable only from
/// `Validating`, `Transcribing` and `Analyzing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Validating,
    Transcribing,
    Analyzing,
    Synthesizing,
    Logging,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Validating => "VALIDATING",
            PipelineStage::Transcribing => "TRANSCRIBING",
            PipelineStage::Analyzing => "ANALYZING",
            PipelineStage::Synthesizing => "SYNTHESIZING",
            PipelineStage::Logging => "LOGGING",
            PipelineStage::Done => "DONE",
            PipelineStage::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Failed)
    }

    pub fn can_fail(&self) -> bool {
        matches!(
            self,
            PipelineStage::Validating | PipelineStage::Transcribing | PipelineStage::Analyzing
        )
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
