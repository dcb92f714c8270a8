//! Plain-text rendering of the dashboard panels

use crate::menu::{AssemblyStatus, MenuAssembly};
use shared::models::OrderSummary;
use shared::{Availability, BadgeTone, ScheduleReport, Theme};
use std::fmt::Write;

/// Terminal rendering options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub currency_symbol: String,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            theme: Theme::Light,
        }
    }
}

impl RenderOptions {
    fn money(&self, amount: &str) -> String {
        if amount.is_empty() {
            String::new()
        } else {
            format!("{}{}", amount, self.currency_symbol)
        }
    }

    fn heading(&self, title: &str) -> String {
        match self.theme {
            Theme::Light => format!("== {} ==", title),
            // reverse video
            Theme::Dark => format!("\x1b[7m {} \x1b[0m", title),
        }
    }
}

pub fn availability_badge(availability: Availability) -> Option<char> {
    match availability {
        Availability::Unknown => None,
        Availability::InStock => Some('✓'),
        Availability::OutOfStock => Some('✗'),
    }
}

fn tone_tag(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Success => "ok",
        BadgeTone::Info => "..",
        BadgeTone::Warning => "!!",
        BadgeTone::Danger => "xx",
        BadgeTone::Secondary => "--",
    }
}

/// Slot time as shown to staff ("12:00hs")
pub fn slot_label(time: &str) -> String {
    format!("{}hs", time)
}

pub fn render_orders(orders: &[OrderSummary], options: &RenderOptions) -> String {
    let mut out = options.heading("Recent orders");
    out.push('\n');
    if orders.is_empty() {
        out.push_str("No recent orders\n");
        return out;
    }
    for order in orders {
        let food = order.food_preview.as_deref().unwrap_or(&order.food);
        let _ = writeln!(
            out,
            "{:<16} {:<24} {:>10} [{}] {}",
            order.customer,
            food,
            options.money(&order.total),
            tone_tag(order.status.tone()),
            order.status_label
        );
    }
    out
}

pub fn render_menu(assembly: &MenuAssembly, options: &RenderOptions) -> String {
    let mut out = options.heading("Menu");
    out.push('\n');
    if assembly.items.is_empty() {
        out.push_str("No dishes available\n");
    }
    for item in &assembly.items {
        let badge = availability_badge(item.availability())
            .map(|c| format!("{} ", c))
            .unwrap_or_default();
        let mut line = format!("{}{}", badge, item.name);
        if let Some(desc) = &item.description {
            let _ = write!(line, " - {}", desc);
        }
        let _ = writeln!(out, "{:<48} {:>10}", line, options.money(&item.price_text()));
    }
    match &assembly.status {
        AssemblyStatus::Complete => {}
        AssemblyStatus::Truncated { max_pages } => {
            let _ = writeln!(out, "(stopped after {} pages)", max_pages);
        }
        AssemblyStatus::Partial { failed_page, .. } => {
            let _ = writeln!(out, "(incomplete: page {} could not be loaded)", failed_page);
        }
    }
    out
}

pub fn render_schedule(title: &str, report: &ScheduleReport, options: &RenderOptions) -> String {
    let mut out = options.heading(title);
    out.push('\n');
    for entry in &report.entries {
        let _ = writeln!(
            out,
            "{:<8} {:<32} {}",
            slot_label(&entry.time),
            entry.description,
            entry.label
        );
    }
    for conflict in &report.conflicts {
        let _ = writeln!(
            out,
            "warning: {} double-booked, '{}' hidden",
            slot_label(&conflict.time),
            conflict.dropped
        );
    }
    out
}
