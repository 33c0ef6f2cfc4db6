mod media_source;
mod temp_audio;
mod transcript;

pub use media_source::MediaSource;
pub use temp_audio::TempAudio;
pub use transcript::extract_text;
