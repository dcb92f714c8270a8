//! Dashboard client - typed access to the restaurant dashboard backend
//!
//! Fetches orders, the paginated menu and the day's reservations, and turns
//! them into display-ready lists using the reconciliation logic in `shared`.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod logger;
pub mod menu;
pub mod preferences;
pub mod render;

pub use api::DashboardApi;
pub use config::ClientConfig;
pub use dashboard::Dashboard;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use menu::{AssemblyStatus, MenuAssembly, MenuPageSource, PaginationPolicy, assemble_menu};
pub use preferences::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

// Re-export shared types for convenience
pub use shared::{MenuItem, MenuPage, Reservation, ScheduleEntry, ScheduleReport};
