//! Typed endpoints of the dashboard backend
//!
//! - `GET /api/menu?page=N&limit=L`
//! - `GET /api/orders`
//! - `GET /api/reservations?date=YYYY-MM-DD`

use crate::menu::MenuPageSource;
use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use shared::{MenuPage, Reservation};

#[derive(Debug, Clone)]
pub struct DashboardApi<C> {
    http: C,
}

impl<C: HttpClient> DashboardApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Raw order rows, most recent first
    pub async fn orders(&self) -> ClientResult<Vec<Value>> {
        self.http.get("api/orders", &[]).await
    }

    pub async fn menu_page(&self, page: u32, limit: u32) -> ClientResult<MenuPage> {
        self.http
            .get(
                "api/menu",
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    pub async fn reservations(&self, date: NaiveDate) -> ClientResult<Vec<Reservation>> {
        self.http
            .get("api/reservations", &[("date", date.format("%Y-%m-%d").to_string())])
            .await
    }
}

#[async_trait]
impl<C: HttpClient> MenuPageSource for DashboardApi<C> {
    async fn fetch_page(&self, page: u32, limit: u32) -> ClientResult<MenuPage> {
        self.menu_page(page, limit).await
    }
}
