//! Paginated menu listing

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of `GET /api/menu?page=N&limit=L`
///
/// Items are kept raw; validation happens when they enter a
/// [`MenuCatalog`](crate::catalog::MenuCatalog).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuPage {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default, rename = "pageInfo", skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
}

/// Pagination metadata (NocoDB style)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_last_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageInfo {
    /// Total pages, either explicit or derived from row count and page size
    pub fn effective_total_pages(&self) -> Option<u32> {
        if let Some(total) = self.total_pages {
            return Some(total);
        }
        match (self.total_rows, self.page_size) {
            (Some(rows), Some(size)) if size > 0 => Some(rows.div_ceil(u64::from(size)) as u32),
            _ => None,
        }
    }
}

impl MenuPage {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items,
            page_info: None,
        }
    }

    /// Attach an explicit last-page flag
    pub fn with_last_page(mut self, is_last_page: bool) -> Self {
        self.page_info.get_or_insert_with(PageInfo::default).is_last_page = Some(is_last_page);
        self
    }

    /// Attach a total page count
    pub fn with_total_pages(mut self, total_pages: u32) -> Self {
        self.page_info.get_or_insert_with(PageInfo::default).total_pages = Some(total_pages);
        self
    }

    pub fn explicit_last_page(&self) -> Option<bool> {
        self.page_info.as_ref().and_then(|info| info.is_last_page)
    }

    /// Whether pagination ends after this page.
    ///
    /// Precedence: empty page, explicit `isLastPage`, total page count,
    /// then the short-page heuristic (fewer items than requested).
    pub fn is_final(&self, page: u32, limit: u32) -> bool {
        if self.items.is_empty() {
            return true;
        }
        if let Some(last) = self.explicit_last_page() {
            return last;
        }
        if let Some(total) = self.page_info.as_ref().and_then(PageInfo::effective_total_pages) {
            return page >= total;
        }
        self.items.len() < limit as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(n: usize) -> Vec<Value> {
        (0..n).map(|i| json!({ "Nombre": format!("item {i}"), "Precio (€)": i })).collect()
    }

    #[test]
    fn test_decode_nocodb_shape() {
        let page: MenuPage = serde_json::from_value(json!({
            "items": [{ "Nombre": "Pan" }],
            "pageInfo": { "isLastPage": true, "totalRows": 1, "page": 1, "pageSize": 25 }
        }))
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.explicit_last_page(), Some(true));
        assert_eq!(page.page_info.unwrap().effective_total_pages(), Some(1));
    }

    #[test]
    fn test_decode_without_page_info() {
        let page: MenuPage = serde_json::from_value(json!({ "items": [] })).unwrap();
        assert!(page.page_info.is_none());
        assert!(page.is_final(1, 25));
    }

    #[test]
    fn test_explicit_flag_overrides_short_page() {
        let page = MenuPage::new(items(3)).with_last_page(false);
        assert!(!page.is_final(1, 25));

        let page = MenuPage::new(items(25)).with_last_page(true);
        assert!(page.is_final(1, 25));
    }

    #[test]
    fn test_total_pages_then_heuristic() {
        let page = MenuPage::new(items(2)).with_total_pages(3);
        assert!(!page.is_final(2, 25));
        assert!(page.is_final(3, 25));

        assert!(MenuPage::new(items(2)).is_final(1, 25));
        assert!(!MenuPage::new(items(25)).is_final(1, 25));
    }
}
