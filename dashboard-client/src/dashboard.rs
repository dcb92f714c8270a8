//! Dashboard loaders
//!
//! One loader per panel. Each call is independent and holds no state between
//! invocations, so a newer request for the same panel simply supersedes an
//! older one on the caller's side.

use crate::api::DashboardApi;
use crate::menu::{MenuAssembly, assemble_menu};
use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};
use chrono::NaiveDate;
use shared::models::{OrderSummary, RECENT_ORDER_LIMIT, recent_orders};
use shared::{ScheduleReconciler, ScheduleReport};

#[derive(Debug, Clone)]
pub struct Dashboard<C> {
    api: DashboardApi<C>,
    config: ClientConfig,
}

impl Dashboard<NetworkHttpClient> {
    /// Build a dashboard talking to `config.base_url`
    pub fn connect(config: ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(&config)?;
        Ok(Self::new(DashboardApi::new(http), config))
    }
}

impl<C: HttpClient> Dashboard<C> {
    pub fn new(api: DashboardApi<C>, config: ClientConfig) -> Self {
        Self { api, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &DashboardApi<C> {
        &self.api
    }

    /// The most recent orders, summarized
    pub async fn load_orders(&self) -> ClientResult<Vec<OrderSummary>> {
        let rows = self.api.orders().await?;
        tracing::debug!(rows = rows.len(), "Orders fetched");
        Ok(recent_orders(&rows, RECENT_ORDER_LIMIT))
    }

    pub async fn load_menu(&self) -> ClientResult<MenuAssembly> {
        assemble_menu(&self.api, self.config.pagination).await
    }

    /// Canonical slots for `date` with that day's reservations laid over them
    pub async fn load_schedule(&self, date: NaiveDate) -> ClientResult<ScheduleReport> {
        let reservations = self.api.reservations(date).await?;
        let slots = self.config.business_hours.slots();
        let report = ScheduleReconciler::new(self.config.collision_policy)
            .with_zone(self.config.slot_zone)
            .reconcile(&slots, &reservations)?;
        tracing::info!(
            date = %date,
            reservations = reservations.len(),
            booked = report.entries.iter().filter(|e| !e.is_available).count(),
            unmatched = report.unmatched,
            "Schedule reconciled"
        );
        Ok(report)
    }
}
