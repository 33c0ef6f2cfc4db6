mod transcription_service;

pub use transcription_service::{PipelineError, TranscriptionOutcome, TranscriptionService};
