/// Hard failures that stop the interaction pipeline. The display form is the
/// text shown to the user in place of the missing artifact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoachError {
    #[error("Error: {0}")]
    InvalidInput(String),
    #[error("Error transcribing audio: {0}")]
    TranscriptionFailure(String),
    #[error("Error analyzing communication: {0}")]
    AnalysisFailure(String),
}
