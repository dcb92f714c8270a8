// Menu pagination, fallback and de-duplication against a scripted page source

use async_trait::async_trait;
use dashboard_client::{
    AssemblyStatus, ClientError, ClientResult, MenuPage, MenuPageSource, PaginationPolicy,
    assemble_menu,
};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

enum Step {
    Page(MenuPage),
    Fail(&'static str),
}

/// Replays one step per call and records every (page, limit) requested
struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<(u32, u32)>>,
}

impl ScriptedSource {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(u32, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MenuPageSource for ScriptedSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> ClientResult<MenuPage> {
        self.calls.lock().unwrap().push((page, limit));
        match self.steps.lock().unwrap().pop_front() {
            Some(Step::Page(p)) => Ok(p),
            Some(Step::Fail(msg)) => Err(ClientError::Internal(msg.to_string())),
            None => panic!("unexpected fetch of page {page}"),
        }
    }
}

fn dish(name: &str, price: Value) -> Value {
    json!({ "Nombre": name, "Precio (€)": price })
}

fn names(items: &[dashboard_client::MenuItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[tokio::test]
async fn test_duplicate_across_pages_counted_once() {
    let a = dish("A", json!(1));
    let b = dish("B", json!("2,50"));
    let c = dish("C", json!(3));
    let source = ScriptedSource::new(vec![
        Step::Page(MenuPage::new(vec![a, b.clone()]).with_last_page(false)),
        Step::Page(MenuPage::new(vec![b, c]).with_last_page(true)),
    ]);

    let menu = assemble_menu(&source, PaginationPolicy::default()).await.unwrap();

    assert_eq!(names(&menu.items), vec!["A", "B", "C"]);
    assert_eq!(menu.status, AssemblyStatus::Complete);
    assert_eq!(menu.pages_fetched, 2);
    assert_eq!(menu.skipped_duplicates, 1);
    assert_eq!(source.calls(), vec![(1, 25), (2, 25)]);
}

#[tokio::test]
async fn test_empty_first_page_is_empty_menu() {
    let source = ScriptedSource::new(vec![Step::Page(MenuPage::new(vec![]).with_last_page(false))]);

    let menu = assemble_menu(&source, PaginationPolicy::default()).await.unwrap();

    assert!(menu.items.is_empty());
    assert_eq!(menu.status, AssemblyStatus::Complete);
    assert_eq!(source.calls().len(), 1);
}

#[tokio::test]
async fn test_empty_page_ends_pagination_despite_flag() {
    let source = ScriptedSource::new(vec![
        Step::Page(MenuPage::new(vec![dish("A", json!(1))]).with_last_page(false)),
        Step::Page(MenuPage::new(vec![]).with_last_page(false)),
    ]);

    let menu = assemble_menu(&source, PaginationPolicy::default()).await.unwrap();

    assert_eq!(names(&menu.items), vec!["A"]);
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn test_invalid_items_skipped() {
    let source = ScriptedSource::new(vec![Step::Page(
        MenuPage::new(vec![
            json!({ "Descripción": "nothing else" }),
            json!({ "Nombre": "Sin precio" }),
            dish("Tortilla", json!("7")),
        ])
        .with_last_page(true),
    )]);

    let menu = assemble_menu(&source, PaginationPolicy::default()).await.unwrap();

    assert_eq!(names(&menu.items), vec!["Tortilla"]);
    assert_eq!(menu.skipped_invalid, 2);
}

#[tokio::test]
async fn test_first_page_failure_retries_with_fallback_size() {
    let source = ScriptedSource::new(vec![
        Step::Fail("boom"),
        Step::Page(MenuPage::new(vec![dish("A", json!(1))]).with_last_page(false)),
        Step::Page(MenuPage::new(vec![dish("B", json!(2))]).with_last_page(true)),
    ]);

    let menu = assemble_menu(&source, PaginationPolicy::default()).await.unwrap();

    assert_eq!(names(&menu.items), vec!["A", "B"]);
    assert_eq!(menu.page_size, 10);
    assert_eq!(source.calls(), vec![(1, 25), (1, 10), (2, 10)]);
}

#[tokio::test]
async fn test_first_page_failure_after_fallback_is_fetch_failure() {
    let source = ScriptedSource::new(vec![Step::Fail("down"), Step::Fail("still down")]);

    let err = assemble_menu(&source, PaginationPolicy::default())
        .await
        .unwrap_err();

    match err {
        ClientError::FetchFailure { page, source: cause } => {
            assert_eq!(page, 1);
            assert!(cause.to_string().contains("still down"));
        }
        other => panic!("expected FetchFailure, got {other:?}"),
    }
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn test_later_page_failure_keeps_earlier_pages() {
    let source = ScriptedSource::new(vec![
        Step::Page(MenuPage::new(vec![dish("A", json!(1)), dish("B", json!(2))]).with_last_page(false)),
        Step::Fail("timeout"),
    ]);

    let menu = assemble_menu(&source, PaginationPolicy::default()).await.unwrap();

    assert_eq!(names(&menu.items), vec!["A", "B"]);
    assert!(menu.is_partial());
    match &menu.status {
        AssemblyStatus::Partial { failed_page, reason } => {
            assert_eq!(*failed_page, 2);
            assert!(reason.contains("timeout"));
        }
        other => panic!("expected partial, got {other:?}"),
    }
}

#[tokio::test]
async fn test_page_cap_bounds_runaway_pagination() {
    let steps = (0..3)
        .map(|i| Step::Page(MenuPage::new(vec![dish(&format!("D{i}"), json!(i))]).with_last_page(false)))
        .collect();
    let source = ScriptedSource::new(steps);
    let policy = PaginationPolicy {
        max_pages: 3,
        ..PaginationPolicy::default()
    };

    let menu = assemble_menu(&source, policy).await.unwrap();

    assert_eq!(menu.items.len(), 3);
    assert_eq!(menu.status, AssemblyStatus::Truncated { max_pages: 3 });
    assert_eq!(source.calls().len(), 3);
}

#[tokio::test]
async fn test_zero_page_cap_still_reports_one_page() {
    let source = ScriptedSource::new(vec![Step::Page(
        MenuPage::new(vec![dish("Solo", json!(4))]).with_last_page(false),
    )]);
    let policy = PaginationPolicy {
        max_pages: 0,
        ..PaginationPolicy::default()
    };

    let menu = assemble_menu(&source, policy).await.unwrap();

    assert_eq!(menu.pages_fetched, 1);
    assert_eq!(menu.items.len(), 1);
    assert_eq!(menu.status, AssemblyStatus::Truncated { max_pages: 1 });
    assert_eq!(source.calls(), vec![(1, 25)]);
}

#[tokio::test]
async fn test_short_page_heuristic_without_page_info() {
    let full: Vec<Value> = (0..3).map(|i| dish(&format!("F{i}"), json!(i))).collect();
    let source = ScriptedSource::new(vec![
        Step::Page(MenuPage::new(full)),
        Step::Page(MenuPage::new(vec![dish("Last", json!(9))])),
    ]);
    let policy = PaginationPolicy {
        page_size: 3,
        ..PaginationPolicy::default()
    };

    let menu = assemble_menu(&source, policy).await.unwrap();

    assert_eq!(menu.items.len(), 4);
    assert_eq!(menu.status, AssemblyStatus::Complete);
    assert_eq!(source.calls(), vec![(1, 3), (2, 3)]);
}
