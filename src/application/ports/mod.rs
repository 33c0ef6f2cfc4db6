mod audio_host;
mod media_acquirer;
mod transcriber;

pub use audio_host::{AudioHost, AudioHostError};
pub use media_acquirer::{AcquisitionError, MediaAcquirer};
pub use transcriber::{Transcriber, TranscriberError};
