//! Order feed summaries
//!
//! Orders are spreadsheet rows, most recent first. The dashboard only shows
//! a short preview of each.

use crate::fields::{Aliases, first_present, first_text};
use crate::models::Scalar;
use crate::price;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CUSTOMER_ALIASES: Aliases = &[
    "Cliente", "client", "customer", "nombre", "name", "Client", "Customer", "Nombre",
];
pub const FOOD_ALIASES: Aliases = &["Comida", "food"];
pub const TOTAL_ALIASES: Aliases = &["Total", "total"];
pub const STATUS_ALIASES: Aliases = &["Estado", "status"];

/// Number of orders shown on the dashboard
pub const RECENT_ORDER_LIMIT: usize = 10;

/// Characters of the food description shown before "..."
const FOOD_PREVIEW_CHARS: usize = 20;

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Info,
    Warning,
    Danger,
    Secondary,
}

/// Order status as written in the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Completed,
    InProgress,
    Pending,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Missing status means the order has not been picked up yet
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::Pending;
        };
        match raw.to_lowercase().as_str() {
            "completado" | "completed" => Self::Completed,
            "en proceso" | "in progress" => Self::InProgress,
            "pendiente" | "pending" => Self::Pending,
            "cancelado" | "cancelled" => Self::Cancelled,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Completed => BadgeTone::Success,
            Self::InProgress => BadgeTone::Info,
            Self::Pending => BadgeTone::Warning,
            Self::Cancelled => BadgeTone::Danger,
            Self::Other(_) => BadgeTone::Secondary,
        }
    }
}

/// Display-ready order row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub customer: String,
    /// Full food description
    pub food: String,
    /// Truncated food description, `None` when it fits
    pub food_preview: Option<String>,
    /// Two-decimal total, empty when missing
    pub total: String,
    pub status: OrderStatus,
    /// Status text as written, or "Pending"
    pub status_label: String,
}

impl OrderSummary {
    /// Build a summary from the row at `index` (0-based) of the feed
    pub fn from_row(index: usize, row: &Value) -> Self {
        let empty = Map::new();
        let map = row.as_object().unwrap_or(&empty);

        let customer =
            first_text(map, CUSTOMER_ALIASES).unwrap_or_else(|| format!("Customer {}", index + 1));
        let food = first_text(map, FOOD_ALIASES).unwrap_or_default();
        let food_preview = (food.chars().count() > FOOD_PREVIEW_CHARS).then(|| {
            let head: String = food.chars().take(FOOD_PREVIEW_CHARS).collect();
            format!("{}...", head)
        });
        let total = first_present(map, TOTAL_ALIASES)
            .and_then(Scalar::from_value)
            .map(|raw| price::format_price(Some(&raw)))
            .unwrap_or_default();
        let raw_status = first_text(map, STATUS_ALIASES);
        let status = OrderStatus::parse(raw_status.as_deref());
        let status_label = raw_status.unwrap_or_else(|| "Pending".to_string());

        Self {
            customer,
            food,
            food_preview,
            total,
            status,
            status_label,
        }
    }
}

/// Summaries for the first `limit` rows of the feed
pub fn recent_orders(rows: &[Value], limit: usize) -> Vec<OrderSummary> {
    rows.iter()
        .take(limit)
        .enumerate()
        .map(|(index, row)| OrderSummary::from_row(index, row))
        .collect()
}
