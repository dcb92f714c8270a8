mod cli;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Command, ThemeAction};
use dashboard_client::preferences::{load_ui_state, toggle_theme};
use dashboard_client::render::{RenderOptions, render_menu, render_orders, render_schedule};
use dashboard_client::{ClientConfig, Dashboard, JsonFilePreferenceStore, NetworkHttpClient};
use shared::ui::reservations_title;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    let config = ClientConfig::from_env();
    dashboard_client::logger::init_logger_with_file(
        Some(&config.log_level),
        config.log_dir.as_deref(),
    )?;

    let command = cli.selected();

    let store = JsonFilePreferenceStore::new(&config.preferences_path);
    let mut ui = load_ui_state(&store).context("loading preferences")?;

    if let Command::Theme { action } = command {
        if action == Some(ThemeAction::Toggle) {
            ui = toggle_theme(&store, ui).context("saving preferences")?;
        }
        println!("Theme: {:?}", ui.theme);
        return Ok(());
    }

    let options = RenderOptions {
        currency_symbol: config.currency_symbol.clone(),
        theme: ui.theme,
    };
    let dashboard = Dashboard::connect(config).context("building HTTP client")?;
    tracing::info!(base_url = %dashboard.config().base_url, "Dashboard client ready");

    let today = Local::now().date_naive();
    match command {
        Command::Orders => show_orders(&dashboard, &options).await,
        Command::Menu => show_menu(&dashboard, &options).await,
        Command::Reservations { date } => {
            show_reservations(&dashboard, &options, date.unwrap_or(today), today).await
        }
        Command::All => {
            show_orders(&dashboard, &options).await;
            show_menu(&dashboard, &options).await;
            show_reservations(&dashboard, &options, today, today).await;
        }
        Command::Theme { .. } => {}
    }

    Ok(())
}

// Each panel reports its own failure and leaves the others alone.

async fn show_orders(dashboard: &Dashboard<NetworkHttpClient>, options: &RenderOptions) {
    match dashboard.load_orders().await {
        Ok(orders) => print!("{}", render_orders(&orders, options)),
        Err(e) => {
            tracing::error!(error = %e, "Error loading orders");
            println!("Error loading orders");
        }
    }
}

async fn show_menu(dashboard: &Dashboard<NetworkHttpClient>, options: &RenderOptions) {
    match dashboard.load_menu().await {
        Ok(menu) => print!("{}", render_menu(&menu, options)),
        Err(e) => {
            tracing::error!(error = %e, "Error loading menu");
            println!("Error loading menu");
        }
    }
}

async fn show_reservations(
    dashboard: &Dashboard<NetworkHttpClient>,
    options: &RenderOptions,
    date: chrono::NaiveDate,
    today: chrono::NaiveDate,
) {
    match dashboard.load_schedule(date).await {
        Ok(report) => print!(
            "{}",
            render_schedule(&reservations_title(date, today), &report, options)
        ),
        Err(e) => {
            tracing::error!(error = %e, "Error loading reservations");
            println!("Error loading reservations");
        }
    }
}
