//! Reservation Model
//!
//! Reservations are calendar events for the selected day. Only the start time
//! matters for slot reconciliation.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accepted layouts for timestamps that carry no UTC offset
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Wall clock that offset-bearing start times are converted to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotZone {
    /// The machine's local time zone
    #[default]
    Local,
    /// A fixed UTC offset, e.g. `+02:00`
    Fixed(FixedOffset),
}

impl SlotZone {
    /// Wall-clock `HH:MM` of `at` in this zone
    pub fn clock_time(self, at: &DateTime<FixedOffset>) -> String {
        match self {
            Self::Local => at.with_timezone(&Local).format("%H:%M").to_string(),
            Self::Fixed(offset) => at.with_timezone(&offset).format("%H:%M").to_string(),
        }
    }
}

impl FromStr for SlotZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "local" | "" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::Fixed(FixedOffset::east_opt(0).ok_or("invalid offset")?)),
            _ => s
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|e| format!("invalid UTC offset '{}': {}", s, e)),
        }
    }
}

impl fmt::Display for SlotZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Event start (calendar API shape)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// Timed events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// All-day events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Reservation entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default)]
    pub start: Option<EventTime>,
    /// Guest name as written on the booking
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Reservation {
    /// Timed reservation starting at `date_time`
    pub fn at(date_time: impl Into<String>, summary: Option<&str>) -> Self {
        Self {
            start: Some(EventTime {
                date_time: Some(date_time.into()),
                ..Default::default()
            }),
            summary: summary.map(str::to_string),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Start as `HH:MM` (24-hour) on the local wall clock
    pub fn slot_time(&self) -> Option<String> {
        self.slot_time_in(SlotZone::Local)
    }

    /// Start as `HH:MM` (24-hour) on the wall clock of `zone`.
    ///
    /// Timestamps with an offset are converted; naive ones are taken as
    /// written. All-day events and unparseable timestamps have no slot time.
    pub fn slot_time_in(&self, zone: SlotZone) -> Option<String> {
        let raw = self.start.as_ref()?.date_time.as_deref()?.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(zone.clock_time(&at));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|at| at.format("%H:%M").to_string())
    }

    /// Guest label, falling back when the booking has no name
    pub fn label(&self) -> String {
        non_blank(self.summary.as_deref()).unwrap_or("No name").to_string()
    }

    pub fn description_text(&self) -> String {
        non_blank(self.description.as_deref()).unwrap_or_default().to_string()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// One canonical slot of the day, free or booked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// `HH:MM`
    pub time: String,
    pub label: String,
    pub description: String,
    pub is_available: bool,
}

impl ScheduleEntry {
    pub fn available(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            label: "Available".to_string(),
            description: "Open slot".to_string(),
            is_available: true,
        }
    }

    pub fn booked(time: impl Into<String>, reservation: &Reservation) -> Self {
        Self {
            time: time.into(),
            label: reservation.label(),
            description: reservation.description_text(),
            is_available: false,
        }
    }
}
