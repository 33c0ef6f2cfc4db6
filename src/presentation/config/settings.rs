use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_MODEL: &str = "ivrit-ai/whisper-large-v3-turbo-ct2";
const DEFAULT_RUNPOD_API_BASE: &str = "https://api.runpod.ai";
const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com";
const DEFAULT_YTDLP_BIN: &str = "yt-dlp";

/// Immutable process configuration, read once from the environment at
/// startup and handed to the adapters explicitly.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub inference: InferenceSettings,
    pub media: MediaSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub api_base: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone)]
pub struct InferenceSettings {
    pub api_base: String,
    pub endpoint_id: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct MediaSettings {
    pub ytdlp_bin: String,
    pub work_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerSettings {
                host: optional("SERVER_HOST", DEFAULT_HOST),
                port,
            },
            storage: StorageSettings {
                api_base: optional("CLOUDINARY_API_BASE", DEFAULT_CLOUDINARY_API_BASE),
                cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
                api_key: required("CLOUDINARY_API_KEY")?,
                api_secret: required("CLOUDINARY_API_SECRET")?,
            },
            inference: InferenceSettings {
                api_base: optional("RUNPOD_API_BASE", DEFAULT_RUNPOD_API_BASE),
                endpoint_id: required("RUNPOD_ENDPOINT_ID")?,
                api_key: required("RUNPOD_API_KEY")?,
                model: optional("RUNPOD_MODEL", DEFAULT_MODEL),
            },
            media: MediaSettings {
                ytdlp_bin: optional("YTDLP_BIN", DEFAULT_YTDLP_BIN),
                work_dir: std::env::var("MEDIA_WORK_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| std::env::temp_dir()),
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, SettingsError> {
    std::env::var(name).map_err(|_| SettingsError::Missing(name))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
