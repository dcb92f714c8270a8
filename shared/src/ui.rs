//! Dashboard UI state
//!
//! Toggle state lives in an explicit value handed to the renderer instead of
//! being read back from the page. Persistence is the caller's concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Preference key for the theme (`"true"` = dark)
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Read the persisted flag; anything but `"true"` is light
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("true") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_flag(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

/// Persisted dashboard state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub theme: Theme,
}

/// Heading for the reservations panel
pub fn reservations_title(selected: NaiveDate, today: NaiveDate) -> String {
    if selected == today {
        "Today's reservations".to_string()
    } else {
        format!("Reservations for {}", selected.format("%A, %B %-d, %Y"))
    }
}

/// Parse a `YYYY-MM-DD` date selection
pub fn parse_selected_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_and_flag() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert_eq!(Theme::from_flag(Some("true")), Theme::Dark);
        assert_eq!(Theme::from_flag(Some("yes")), Theme::Light);
        assert_eq!(Theme::from_flag(None), Theme::Light);
        assert_eq!(Theme::Dark.as_flag(), "true");
    }

    #[test]
    fn test_ui_state_defaults_to_light() {
        assert_eq!(UiState::default(), UiState { theme: Theme::Light });
        assert_eq!(
            serde_json::to_value(UiState::default()).unwrap(),
            serde_json::json!({ "theme": "light" })
        );
    }

    #[test]
    fn test_reservations_title() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        assert_eq!(reservations_title(today, today), "Today's reservations");

        let other = NaiveDate::from_ymd_opt(2024, 5, 4).unwrap();
        assert_eq!(
            reservations_title(other, today),
            "Reservations for Saturday, May 4, 2024"
        );
    }

    #[test]
    fn test_parse_selected_date() {
        assert_eq!(parse_selected_date("2024-05-04"), NaiveDate::from_ymd_opt(2024, 5, 4));
        assert_eq!(parse_selected_date("04/05/2024"), None);
    }
}
