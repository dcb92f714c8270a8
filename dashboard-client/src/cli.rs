//! Command-line arguments for the `dashboard` binary

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use shared::ui::parse_selected_date;

#[derive(Debug, Parser)]
#[command(name = "dashboard")]
#[command(about = "Restaurant dashboard: orders, menu and reservations", long_about = None)]
pub struct Cli {
    /// Panel to show (all panels when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn selected(&self) -> Command {
        self.command.clone().unwrap_or(Command::All)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Orders, menu and today's reservations
    All,
    /// Full menu with availability
    Menu,
    /// Ten most recent orders
    Orders,
    /// Reservation slots for a day
    Reservations {
        /// Day to show as YYYY-MM-DD (default: today)
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Show the current theme
    Theme {
        /// `toggle` flips and saves the theme
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Toggle,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_selected_date(raw).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        <Cli as CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_shows_everything() {
        let cli = Cli::try_parse_from(["dashboard"]).unwrap();
        assert_eq!(cli.selected(), Command::All);
    }

    #[test]
    fn test_reservations_date() {
        let cli = Cli::try_parse_from(["dashboard", "reservations", "2024-05-04"]).unwrap();
        assert_eq!(
            cli.selected(),
            Command::Reservations {
                date: NaiveDate::from_ymd_opt(2024, 5, 4)
            }
        );

        let cli = Cli::try_parse_from(["dashboard", "reservations"]).unwrap();
        assert_eq!(cli.selected(), Command::Reservations { date: None });

        assert!(Cli::try_parse_from(["dashboard", "reservations", "04/05/2024"]).is_err());
    }

    #[test]
    fn test_theme_toggle() {
        let cli = Cli::try_parse_from(["dashboard", "theme", "toggle"]).unwrap();
        assert_eq!(
            cli.selected(),
            Command::Theme {
                action: Some(ThemeAction::Toggle)
            }
        );
        assert!(Cli::try_parse_from(["dashboard", "theme", "flip"]).is_err());
        assert!(Cli::try_parse_from(["dashboard", "kitchen"]).is_err());
    }
}
