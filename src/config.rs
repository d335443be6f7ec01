use std::time::Duration;

// =============================================================================
// Check constants
// =============================================================================

/// Filename of the driver currently installed
pub const KNOWN_DRIVER: &str = "Mackie_USB_Driver_v4_47_0.zip";

/// Mackie file explorer listing for the USB driver folder
pub const API_URL: &str = "https://mackie.com/file-explorer.json?folder=19783";

/// Browser-like user agent sent with the listing request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Timeout for the listing request in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Settings for a single check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Filename whose embedded version is the baseline
    pub known_driver: String,
    /// Listing endpoint
    pub endpoint: String,
    pub user_agent: String,
    /// Upper bound for the whole request, body included
    pub timeout: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            known_driver: KNOWN_DRIVER.to_string(),
            endpoint: API_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }
}
