//! Client configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DASHBOARD_API_URL | http://localhost:5000 | Backend base URL |
//! | DASHBOARD_TIMEOUT_SECS | 30 | Request timeout (seconds) |
//! | MENU_PAGE_SIZE | 25 | Items requested per menu page |
//! | MENU_FALLBACK_PAGE_SIZE | 10 | Page size for the first-page retry |
//! | MENU_MAX_PAGES | 10 | Hard cap on menu page fetches |
//! | SLOT_COLLISION_POLICY | last-wins | `last-wins`, `warn` or `reject` |
//! | SLOT_UTC_OFFSET | local | Clock for reservation times: `local`, `utc` or `+02:00` |
//! | PREFERENCES_PATH | dashboard-preferences.json | UI preference file |
//! | LOG_LEVEL | info | Default log level when RUST_LOG is unset |
//! | LOG_DIR | (unset) | Daily rolling log files when the directory exists |
//! | CURRENCY_SYMBOL | € | Suffix for rendered prices |

use crate::menu::PaginationPolicy;
use shared::{BusinessHours, CollisionPolicy, SlotZone};
use std::path::PathBuf;
use std::str::FromStr;

/// Client configuration for the dashboard backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Menu pagination limits
    pub pagination: PaginationPolicy,

    /// Opening hours used to build reservation slots
    pub business_hours: BusinessHours,

    /// Double-booking handling
    pub collision_policy: CollisionPolicy,

    /// Wall clock reservation start times are read on
    pub slot_zone: SlotZone,

    pub preferences_path: PathBuf,

    pub log_level: String,
    pub log_dir: Option<String>,

    pub currency_symbol: String,
}

impl ClientConfig {
    /// Create a new client configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            pagination: PaginationPolicy::default(),
            business_hours: BusinessHours::default(),
            collision_policy: CollisionPolicy::default(),
            slot_zone: SlotZone::default(),
            preferences_path: PathBuf::from("dashboard-preferences.json"),
            log_level: "info".to_string(),
            log_dir: None,
            currency_symbol: "€".to_string(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::new("http://localhost:5000");
        let pagination = PaginationPolicy {
            page_size: env_or("MENU_PAGE_SIZE", defaults.pagination.page_size),
            fallback_page_size: env_or(
                "MENU_FALLBACK_PAGE_SIZE",
                defaults.pagination.fallback_page_size,
            ),
            max_pages: env_or("MENU_MAX_PAGES", defaults.pagination.max_pages),
        }
        .normalized();

        Self {
            base_url: std::env::var("DASHBOARD_API_URL").unwrap_or(defaults.base_url),
            timeout: env_or("DASHBOARD_TIMEOUT_SECS", defaults.timeout),
            pagination,
            business_hours: defaults.business_hours,
            collision_policy: env_or("SLOT_COLLISION_POLICY", defaults.collision_policy),
            slot_zone: env_or("SLOT_UTC_OFFSET", defaults.slot_zone),
            preferences_path: std::env::var("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.preferences_path),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok(),
            currency_symbol: std::env::var("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationPolicy) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_business_hours(mut self, hours: BusinessHours) -> Self {
        self.business_hours = hours;
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn with_slot_zone(mut self, zone: SlotZone) -> Self {
        self.slot_zone = zone;
        self
    }

    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = path.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid configuration value, using default");
            default
        }),
        Err(_) => default,
    }
}
