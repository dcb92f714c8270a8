//! Shared types for the restaurant dashboard
//!
//! Wire models for the backend API plus the pure reconciliation logic
//! (menu catalog de-duplication, reservation slot reconciliation, order
//! summaries). Nothing in this crate touches the network.

pub mod catalog;
pub mod fields;
pub mod models;
pub mod price;
pub mod schedule;
pub mod ui;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use catalog::{IngestStats, MenuCatalog};
pub use models::{
    Availability, BadgeTone, EventTime, MenuItem, MenuPage, OrderStatus, OrderSummary, PageInfo,
    Reservation, Scalar, ScheduleEntry, SkipReason, SlotZone,
};
pub use schedule::{
    BusinessHours, CollisionPolicy, ScheduleError, ScheduleReconciler, ScheduleReport,
    ServiceWindow, SlotConflict, reconcile_schedule,
};
pub use ui::{DARK_MODE_KEY, Theme, UiState};
