// --- File: crates/ptslot_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

// --- Venue Config ---
// The branch this instance serves and the calendar it lives in.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VenueConfig {
    #[serde(default)]
    pub branch_id: Option<String>,
    /// IANA zone name, e.g. "Europe/Zurich".
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            branch_id: None,
            time_zone: default_time_zone(),
        }
    }
}

// --- Weekly Grid Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GridSettings {
    /// First cell of the day, "HH:MM".
    #[serde(default = "default_min_time")]
    pub min_time: String,
    /// End of the last cell of the day, "HH:MM" (exclusive).
    #[serde(default = "default_max_time")]
    pub max_time: String,
    #[serde(default = "default_cell_minutes")]
    pub cell_minutes: u16,
    /// Presses released faster than this are clicks, not drags.
    #[serde(default = "default_drag_threshold_ms")]
    pub drag_threshold_ms: u64,
    #[serde(default = "default_capacity")]
    pub default_capacity: u32,
}

fn default_min_time() -> String {
    "06:00".to_string()
}
fn default_max_time() -> String {
    "22:00".to_string()
}
fn default_cell_minutes() -> u16 {
    30
}
fn default_drag_threshold_ms() -> u64 {
    200
}
fn default_capacity() -> u32 {
    1
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            min_time: default_min_time(),
            max_time: default_max_time(),
            cell_minutes: default_cell_minutes(),
            drag_threshold_ms: default_drag_threshold_ms(),
            default_capacity: default_capacity(),
        }
    }
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

// --- Availability Backend Config ---
// The REST backend that owns approved slots and the approval workflow.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AvailabilityApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    // May be "secret_from_env", resolved from AVAILABILITY_API_API_TOKEN
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_timeout_secs() -> u64 {
    15
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub venue: VenueConfig,
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub logging: LoggingConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub availability_api: Option<AvailabilityApiConfig>,
}
