//! Menu catalog assembly
//!
//! Walks `GET /api/menu` page by page and feeds every page into a
//! [`MenuCatalog`]. Pages are fetched strictly in sequence.
//!
//! Failure handling:
//! - first page fails: one retry with the smaller fallback page size, then
//!   [`ClientError::FetchFailure`]
//! - a later page fails: stop and keep what was collected
//!   ([`AssemblyStatus::Partial`])

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use serde::Serialize;
use shared::{MenuCatalog, MenuItem, MenuPage};

/// Paginated menu listing
#[async_trait]
pub trait MenuPageSource: Send + Sync {
    /// Fetch page `page` (1-based) holding at most `limit` items
    async fn fetch_page(&self, page: u32, limit: u32) -> ClientResult<MenuPage>;
}

/// Page size, fallback and runaway-loop guard for menu pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPolicy {
    pub page_size: u32,
    /// Page size for the single retry of a failed first page
    pub fallback_page_size: u32,
    /// Hard cap on page fetches
    pub max_pages: u32,
}

impl PaginationPolicy {
    /// Every limit raised to at least 1; one page is always fetched
    pub fn normalized(self) -> Self {
        Self {
            page_size: self.page_size.max(1),
            fallback_page_size: self.fallback_page_size.max(1),
            max_pages: self.max_pages.max(1),
        }
    }
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            page_size: 25,
            fallback_page_size: 10,
            max_pages: 10,
        }
    }
}

/// How pagination ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum AssemblyStatus {
    /// The source signalled the end of data
    Complete,
    /// Stopped at the page cap while more pages may exist
    Truncated { max_pages: u32 },
    /// A later page failed; earlier pages are kept
    Partial { failed_page: u32, reason: String },
}

/// Assembled menu plus pagination bookkeeping
#[derive(Debug, Clone, Serialize)]
pub struct MenuAssembly {
    /// First-seen order, unique by identity key
    pub items: Vec<MenuItem>,
    pub status: AssemblyStatus,
    pub pages_fetched: u32,
    /// Page size actually used (fallback size when the first page was retried)
    pub page_size: u32,
    pub skipped_invalid: usize,
    pub skipped_duplicates: usize,
}

impl MenuAssembly {
    pub fn is_partial(&self) -> bool {
        matches!(self.status, AssemblyStatus::Partial { .. })
    }
}

/// Fetch every menu page and return the de-duplicated catalog
pub async fn assemble_menu(
    source: &dyn MenuPageSource,
    policy: PaginationPolicy,
) -> ClientResult<MenuAssembly> {
    let policy = policy.normalized();
    let (first, limit) = fetch_first_page(source, policy).await?;

    let mut catalog = MenuCatalog::new();
    let mut pages_fetched = 1;
    let mut current = first;
    let mut page = 1;

    let status = loop {
        if current.items.is_empty() {
            tracing::debug!(page, "Empty menu page, stopping");
            break AssemblyStatus::Complete;
        }

        let stats = catalog.ingest(&current.items);
        tracing::debug!(
            page,
            accepted = stats.accepted,
            invalid = stats.invalid,
            duplicates = stats.duplicates,
            "Menu page ingested"
        );

        if current.is_final(page, limit) {
            break AssemblyStatus::Complete;
        }
        if pages_fetched >= policy.max_pages {
            tracing::warn!(max_pages = policy.max_pages, "Menu page cap reached");
            break AssemblyStatus::Truncated {
                max_pages: policy.max_pages,
            };
        }

        page += 1;
        match source.fetch_page(page, limit).await {
            Ok(next) => {
                pages_fetched += 1;
                current = next;
            }
            Err(e) => {
                tracing::warn!(
                    page,
                    error = %e,
                    kept = catalog.len(),
                    "Menu page failed, returning partial menu"
                );
                break AssemblyStatus::Partial {
                    failed_page: page,
                    reason: e.to_string(),
                };
            }
        }
    };

    let skipped_invalid = catalog.skipped_invalid();
    let skipped_duplicates = catalog.skipped_duplicates();
    tracing::info!(
        items = catalog.len(),
        pages = pages_fetched,
        skipped_invalid,
        skipped_duplicates,
        "Menu assembled"
    );

    Ok(MenuAssembly {
        items: catalog.into_items(),
        status,
        pages_fetched,
        page_size: limit,
        skipped_invalid,
        skipped_duplicates,
    })
}

/// First page with at most one fallback attempt at the reduced page size
async fn fetch_first_page(
    source: &dyn MenuPageSource,
    policy: PaginationPolicy,
) -> ClientResult<(MenuPage, u32)> {
    let error = match source.fetch_page(1, policy.page_size).await {
        Ok(page) => return Ok((page, policy.page_size)),
        Err(e) => e,
    };

    tracing::warn!(
        error = %error,
        limit = policy.fallback_page_size,
        "First menu page failed, retrying with fallback page size"
    );
    match source.fetch_page(1, policy.fallback_page_size).await {
        Ok(page) => Ok((page, policy.fallback_page_size)),
        Err(e) => {
            tracing::error!(error = %e, "Menu unavailable");
            Err(ClientError::FetchFailure {
                page: 1,
                source: Box::new(e),
            })
        }
    }
}
