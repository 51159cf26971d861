//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Live Google Sheets mode.
pub const SOURCE_SHEET: &str = "sheet";
/// Fixture-only mode, no network access.
pub const SOURCE_FIXTURE: &str = "fixture";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Google Sheets Source ===
    /// Spreadsheet ID of the orders sheet.
    #[serde(default)]
    pub sheet_id: Option<String>,

    /// Optional API key for the Sheets values API.
    #[serde(default)]
    pub sheets_api_key: Option<String>,

    /// Base URL of the Sheets API.
    #[serde(default = "default_sheets_api_url")]
    pub sheets_api_url: String,

    /// Worksheet (tab) holding order rows.
    #[serde(default = "default_worksheet")]
    pub orders_worksheet: String,

    // === Data Source Selection ===
    /// Data source mode: "sheet" or "fixture".
    #[serde(default = "default_data_source")]
    pub data_source: String,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream HTTP timeout in milliseconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_sheets_api_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_worksheet() -> String {
    "Orders".to_string()
}

fn default_data_source() -> String {
    SOURCE_SHEET.to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_http_timeout() -> u64 {
    10_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        match self.data_source.as_str() {
            SOURCE_SHEET => {
                if self.sheet_id.as_deref().unwrap_or("").is_empty() {
                    return Err("SHEET_ID is required when DATA_SOURCE=sheet".to_string());
                }
            }
            SOURCE_FIXTURE => {}
            other => {
                return Err(format!(
                    "DATA_SOURCE must be \"sheet\" or \"fixture\", got \"{}\"",
                    other
                ));
            }
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Check if the service runs purely on fixture data.
    pub fn is_fixture_mode(&self) -> bool {
        self.data_source == SOURCE_FIXTURE
    }
}
