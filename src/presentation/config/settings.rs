use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::{Environment, ScaffoldConfig};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub google: GoogleSettings,
    pub speech: SpeechSettings,
    pub llm: LlmSettings,
    pub tts: TtsSettings,
    pub interaction_log: InteractionLogSettings,
    pub storage: StorageSettings,
    pub http: HttpSettings,
    pub coach: CoachSettings,
    pub logging: LoggingSettings,
    pub scaffold: ScaffoldConfig,
}

impl Settings {
    /// Layers `appsettings.{Environment}.toml` (optional) under `APP_*`
    /// environment variables, e.g. `APP_SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_upload_mb: 25,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoogleSettings {
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSetting {
    #[default]
    Google,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub provider: ProviderSetting,
    pub base_url: Option<String>,
    pub language_code: String,
    pub model: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            provider: ProviderSetting::Google,
            base_url: None,
            language_code: "en-US".to_string(),
            model: "latest_long".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: ProviderSetting,
    pub base_url: Option<String>,
    pub model: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: ProviderSetting::Google,
            base_url: None,
            model: "gemini-2.0-flash-exp".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TtsSettings {
    pub provider: ProviderSetting,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionLogProviderSetting {
    #[default]
    Firestore,
    Postgres,
    #[serde(rename = "none")]
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InteractionLogSettings {
    pub provider: InteractionLogProviderSetting,
    pub firestore_base_url: Option<String>,
    pub database_id: String,
    pub collection: String,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Default for InteractionLogSettings {
    fn default() -> Self {
        Self {
            provider: InteractionLogProviderSetting::Firestore,
            firestore_base_url: None,
            database_id: "(default)".to_string(),
            collection: "interactions".to_string(),
            database_url: None,
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub local_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            local_path: "data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoachSettings {
    pub user_id: String,
}

impl Default for CoachSettings {
    fn default() -> Self {
        Self {
            user_id: "demo_user".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub enable_json: bool,
}
