//! Data models
//!
//! Wire shapes returned by the dashboard backend and the canonical,
//! display-ready records derived from them.

pub mod menu;
pub mod order;
pub mod page;
pub mod reservation;

// Re-exports
pub use menu::*;
pub use order::*;
pub use page::*;
pub use reservation::*;
