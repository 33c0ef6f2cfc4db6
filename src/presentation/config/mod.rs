mod settings;

pub use settings::{
    InferenceSettings, MediaSettings, ServerSettings, Settings, SettingsError, StorageSettings,
};
