mod runpod_client;

pub use runpod_client::RunpodTranscriber;
