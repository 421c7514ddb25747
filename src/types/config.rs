use serde::Deserialize;

pub const DEFAULT_SCAN_DELAY_MS: u64 = 900;
pub const DEFAULT_STORE_PATH: &str = ".readiness/storage.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadinessConfig {
    pub upload: Option<UploadConfig>,
    pub storage: Option<StorageConfig>,
    pub red_flags: Option<RedFlagConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub scan_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedFlagConfig {
    pub min_language: Option<f64>,
    pub gpa_average: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl ReadinessConfig {
    pub fn scan_delay_ms(&self) -> u64 {
        self.upload
            .as_ref()
            .and_then(|upload| upload.scan_delay_ms)
            .unwrap_or(DEFAULT_SCAN_DELAY_MS)
    }

    pub fn store_path(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|storage| storage.path.as_deref())
            .unwrap_or(DEFAULT_STORE_PATH)
    }

    pub fn red_flags(&self) -> RedFlagConfig {
        self.red_flags.clone().unwrap_or_default()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }
}
