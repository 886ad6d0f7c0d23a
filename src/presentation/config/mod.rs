mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    CoachSettings, GoogleSettings, HttpSettings, InteractionLogProviderSetting,
    InteractionLogSettings, LlmSettings, LoggingSettings, ProviderSetting, ServerSettings,
    Settings, SpeechSettings, StorageSettings, TtsSettings,
};
