use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use intake_diagnosis::DiagnosisConfig;
use intake_interview::InterviewConfig;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 2;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub region: String,
    pub model_id: String,
    /// Bound on every classifier call. Added in v1.
    #[serde(default = "default_classifier_timeout_ms")]
    pub classifier_timeout_ms: u64,
    /// Use the keyword heuristics only; no model calls.
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub storage: StorageBackend,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Queued messages per session awaiting symptom extraction. Added in v2.
    #[serde(default = "default_symptom_channel_capacity")]
    pub symptom_channel_capacity: usize,
    #[serde(default)]
    pub interview: InterviewConfig,
    #[serde(default)]
    pub diagnosis: DiagnosisConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Memory,
    S3 {
        bucket: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

fn default_classifier_timeout_ms() -> u64 {
    8000
}

fn default_symptom_channel_capacity() -> usize {
    32
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            classifier_timeout_ms: default_classifier_timeout_ms(),
            offline: false,
            storage: StorageBackend::default(),
            log_format: LogFormat::default(),
            symptom_channel_capacity: default_symptom_channel_capacity(),
            interview: InterviewConfig::default(),
            diagnosis: DiagnosisConfig::default(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("intake"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config file if present, otherwise defaults, then apply
/// environment overrides.
pub fn load_config() -> eyre::Result<IntakeConfig> {
    let path = config_path()?;
    let mut config = if path.exists() {
        load_from(&path)?
    } else {
        IntakeConfig::default()
    };
    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

pub fn load_from(path: &Path) -> eyre::Result<IntakeConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = on_disk_version(&json);
    let migrated = migrate(json, on_disk_version)?;
    let config: IntakeConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// The `config_version` stamped in a raw config. Missing means v0; a value
/// past `u32::MAX` saturates so it is rejected as too new.
pub fn on_disk_version(json: &serde_json::Value) -> u32 {
    json.get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update intake."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: timeout moved from whole seconds to milliseconds
    if from_version < 1 {
        match obj.remove("classifier_timeout_secs").and_then(|v| v.as_u64()) {
            Some(secs) => {
                obj.insert("classifier_timeout_ms".to_string(), secs.saturating_mul(1000).into());
            }
            None => {
                obj.entry("classifier_timeout_ms")
                    .or_insert(default_classifier_timeout_ms().into());
            }
        }
        obj.insert("config_version".to_string(), 1.into());
        tracing::info!("migrated config v0 → v1 (classifier timeout in milliseconds)");
    }

    // v1 → v2: add symptom_channel_capacity
    if from_version < 2 {
        obj.entry("symptom_channel_capacity")
            .or_insert(default_symptom_channel_capacity().into());
        obj.insert("config_version".to_string(), 2.into());
        tracing::info!("migrated config v1 → v2 (added symptom_channel_capacity)");
    }

    Ok(json)
}

/// Apply `INTAKE_*` overrides read through `lookup`.
pub fn apply_overrides(
    config: &mut IntakeConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> eyre::Result<()> {
    if let Some(region) = lookup("INTAKE_REGION").or_else(|| lookup("AWS_REGION")) {
        config.region = region;
    }
    if let Some(model_id) = lookup("INTAKE_MODEL_ID") {
        config.model_id = model_id;
    }
    if let Some(ms) = lookup("INTAKE_CLASSIFIER_TIMEOUT_MS") {
        config.classifier_timeout_ms = ms
            .parse()
            .map_err(|e| eyre::eyre!("invalid INTAKE_CLASSIFIER_TIMEOUT_MS {ms:?}: {e}"))?;
    }
    if let Some(bucket) = lookup("INTAKE_BUCKET") {
        config.storage = StorageBackend::S3 { bucket };
    }
    if let Some(format) = lookup("INTAKE_LOG_FORMAT") {
        config.log_format = match format.as_str() {
            "plain" => LogFormat::Plain,
            "json" => LogFormat::Json,
            other => return Err(eyre::eyre!("invalid INTAKE_LOG_FORMAT {other:?}")),
        };
    }
    if let Some(offline) = lookup("INTAKE_OFFLINE") {
        config.offline = matches!(offline.as_str(), "1" | "true" | "yes");
    }
    Ok(())
}

pub fn save_config(config: &IntakeConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_to(config, &path)?;
    Ok(path)
}

pub fn save_to(config: &IntakeConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
