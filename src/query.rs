//! Search-filter and pagination over an in-memory record collection.
//!
//! The engine never reorders records: matches are emitted in the order of the
//! source collection, and a page is a contiguous slice of those matches.

use serde::Serialize;
use std::sync::Arc;

/// Page length used when the caller gives none, or an unusable one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A record that can be matched against a free-text search.
///
/// Only the fields returned here take part in matching; everything else on
/// the record is passed through untouched.
pub trait Searchable {
    fn search_fields(&self) -> impl Iterator<Item = &str> + '_;
}

/// One page of matches plus the metadata a pager needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<T> {
    pub items: Vec<T>,
    /// Matches before pagination
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    /// Always at least 1, even when nothing matched
    pub total_pages: usize,
}

/// Normalized query inputs.
///
/// `page` and `page_size` are 1-based and non-zero once built through
/// [`PageRequest::new`] or [`PageRequest::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub search: String,
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Build a request, coercing a zero page to 1 and a zero page size to
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn new(search: impl Into<String>, page: usize, page_size: usize) -> Self {
        Self {
            search: search.into(),
            page: page.max(1),
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Build a request from raw query-string values.
    ///
    /// Missing, non-numeric, zero and negative numbers fall back to page 1
    /// and `default_page_size`. Decimals are truncated. Any positive page
    /// size is honoured as given.
    pub fn from_raw(
        search: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
        default_page_size: usize,
    ) -> Self {
        let default_page_size = coerce_page_size(default_page_size);
        Self {
            search: search.unwrap_or_default().to_string(),
            page: parse_positive(page).unwrap_or(1),
            page_size: parse_positive(page_size).unwrap_or(default_page_size),
        }
    }
}

/// Parse a raw numeric parameter, returning `None` unless it denotes a
/// positive whole number (after truncating decimals).
///
/// Unsigned `0x`, `0o` and `0b` literals are read in their radix.
pub fn parse_positive(raw: Option<&str>) -> Option<usize> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(n) = parse_radix_literal(raw) {
        return n.filter(|n| *n > 0);
    }

    if let Ok(n) = raw.parse::<i64>() {
        return usize::try_from(n).ok().filter(|n| *n > 0);
    }

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 1.0 => Some(n.trunc() as usize),
        _ => None,
    }
}

/// `Some(..)` when `raw` carries a radix prefix; the inner value is `None`
/// if the digits are invalid.
fn parse_radix_literal(raw: &str) -> Option<Option<usize>> {
    let prefix = raw.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &raw[2..];
    if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Some(None);
    }
    Some(usize::from_str_radix(digits, radix).ok())
}

fn coerce_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

/// Trimmed, lowercased needle, or `None` when the search matches everything.
fn normalize_search(search: &str) -> Option<String> {
    let trimmed = search.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn matches<T: Searchable>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Total page count for `total` matches, never less than 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Records matching `search`, in collection order.
///
/// A blank search (empty after trimming) matches every record.
pub fn filter<'a, T: Searchable>(records: &'a [T], search: &str) -> Vec<&'a T> {
    match normalize_search(search) {
        None => records.iter().collect(),
        Some(needle) => records.iter().filter(|r| matches(*r, &needle)).collect(),
    }
}

/// Filter `records` by `search` and cut out one page.
///
/// Zero `page` or `page_size` are coerced to 1 and [`DEFAULT_PAGE_SIZE`].
/// Pages past the end come back empty; they are not clamped.
pub fn query<T: Searchable + Clone>(
    records: &[T],
    search: &str,
    page: usize,
    page_size: usize,
) -> QueryPage<T> {
    paginate(records, &PageRequest::new(search, page, page_size))
}

fn paginate<T: Searchable + Clone>(records: &[T], request: &PageRequest) -> QueryPage<T> {
    let page = request.page.max(1);
    let page_size = coerce_page_size(request.page_size);

    let matched = filter(records, &request.search);
    let total = matched.len();
    let offset = (page - 1).saturating_mul(page_size);

    let items = matched
        .into_iter()
        .skip(offset)
        .take(page_size)
        .cloned()
        .collect();

    QueryPage {
        items,
        total,
        page,
        page_size,
        total_pages: total_pages(total, page_size),
    }
}

/// Query engine over a fixed, shared record collection.
#[derive(Debug, Clone)]
pub struct RecordQueryEngine<T> {
    records: Arc<[T]>,
    default_page_size: usize,
}

impl<T: Searchable + Clone> RecordQueryEngine<T> {
    pub fn new(records: impl Into<Arc<[T]>>) -> Self {
        Self {
            records: records.into(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size used when a request carries none.
    /// Zero resets it to [`DEFAULT_PAGE_SIZE`].
    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = coerce_page_size(page_size);
        self
    }

    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All matches, unpaginated.
    pub fn filter(&self, search: &str) -> Vec<&T> {
        filter(&self.records, search)
    }

    /// Run a query; `None` or zero inputs fall back to page 1 and the
    /// engine's default page size.
    pub fn query(
        &self,
        search: &str,
        page: Option<usize>,
        page_size: Option<usize>,
    ) -> QueryPage<T> {
        let request = PageRequest {
            search: search.to_string(),
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .filter(|n| *n > 0)
                .unwrap_or(self.default_page_size),
        };
        self.run(&request)
    }

    pub fn run(&self, request: &PageRequest) -> QueryPage<T> {
        paginate(&self.records, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
        email: String,
        role: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> impl Iterator<Item = &str> + '_ {
            [self.name.as_str(), self.email.as_str()].into_iter()
        }
    }

    fn row(id: u32, name: &str, email: &str, role: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    fn fixture() -> Vec<Row> {
        vec![
            row(1, "田中 太郎", "tanaka@example.com", "管理者"),
            row(2, "佐藤 花子", "sato@example.com", "ユーザー"),
            row(3, "鈴木 一郎", "suzuki@example.com", "ユーザー"),
            row(4, "高橋 美咲", "takahashi@example.com", "編集者"),
        ]
    }

    fn numbered(n: u32) -> Vec<Row> {
        (1..=n)
            .map(|i| row(i, &format!("Person {i}"), &format!("p{i}@example.com"), "user"))
            .collect()
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let rows = fixture();
        let result = query(&rows, "", 1, 10);
        assert_eq!(result.total, 4);
        assert_eq!(result.items, rows);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_whitespace_search_behaves_like_empty() {
        let rows = fixture();
        let result = query(&rows, "   ", 1, 10);
        assert_eq!(result.total, 4);
    }

    #[test]
    fn test_match_on_name() {
        let result = query(&fixture(), "田中", 1, 10);
        assert_eq!(result.total, 1);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.items[0].name, "田中 太郎");
    }

    #[test]
    fn test_match_on_email() {
        let result = query(&fixture(), "sato", 1, 10);
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].email, "sato@example.com");
    }

    #[test]
    fn test_partial_match_on_single_character() {
        let result = query(&fixture(), "太", 1, 10);
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id, 1);
    }

    #[test]
    fn test_shared_domain_matches_all() {
        let result = query(&fixture(), "@example.com", 1, 10);
        assert_eq!(result.total, 4);
        assert_eq!(result.items.len(), 4);
    }

    #[test]
    fn test_no_match_reports_one_page() {
        let result = query(&fixture(), "存在しない", 1, 10);
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_case_insensitive() {
        let rows = fixture();
        let upper = query(&rows, "TANAKA", 1, 10);
        let lower = query(&rows, "tanaka", 1, 10);
        assert_eq!(upper, lower);
        assert_eq!(upper.items[0].name, "田中 太郎");
    }

    #[test]
    fn test_search_is_trimmed_before_matching() {
        let result = query(&fixture(), "  Suzuki ", 1, 10);
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id, 3);
    }

    #[test]
    fn test_non_searchable_fields_ignored() {
        // role is display-only
        let rows = fixture();
        assert_eq!(rows[0].role, "管理者");
        let result = query(&rows, "管理者", 1, 10);
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_every_item_contains_needle() {
        let rows = numbered(30);
        let result = query(&rows, "1", 1, 100);
        assert!(result.total > 0);
        for item in &result.items {
            assert!(item.name.to_lowercase().contains('1') || item.email.contains('1'));
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let rows = numbered(30);
        let result = query(&rows, "p2", 1, 100);
        let ids: Vec<u32> = result.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29]);
    }

    #[test]
    fn test_pagination_slices() {
        let rows = numbered(25);
        let first = query(&rows, "", 1, 10);
        let third = query(&rows, "", 3, 10);

        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].id, 1);
        assert_eq!(third.items.len(), 5);
        assert_eq!(third.items[0].id, 21);
        assert_eq!(first.total_pages, 3);
        assert_eq!(third.total, 25);
    }

    #[test]
    fn test_page_past_end_is_empty_not_clamped() {
        let rows = numbered(25);
        let first = query(&rows, "", 1, 10);
        let far = query(&rows, "", 9, 10);

        assert!(far.items.is_empty());
        assert_eq!(far.page, 9);
        assert_eq!(far.total, first.total);
        assert_eq!(far.total_pages, first.total_pages);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let rows = numbered(5);
        let result = query(&rows, "", usize::MAX, 10);
        assert!(result.items.is_empty());
        assert_eq!(result.total, 5);
    }

    #[test]
    fn test_zero_inputs_coerced() {
        let rows = numbered(15);
        let result = query(&rows, "", 0, 0);
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(result.items.len(), 10);
    }

    #[test]
    fn test_hand_built_request_is_coerced() {
        let engine = RecordQueryEngine::new(numbered(3));
        let request = PageRequest {
            search: String::new(),
            page: 0,
            page_size: 0,
        };
        let result = engine.run(&request);
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(result.items.len(), 3);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(30, 8), 4);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_input_not_mutated() {
        let rows = fixture();
        let before = rows.clone();
        let _ = query(&rows, "田中", 2, 1);
        let _ = filter(&rows, "example");
        assert_eq!(rows, before);
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(Some("3")), Some(3));
        assert_eq!(parse_positive(Some(" 7 ")), Some(7));
        assert_eq!(parse_positive(Some("2.9")), Some(2));
        assert_eq!(parse_positive(Some("1e1")), Some(10));
        assert_eq!(parse_positive(Some("0")), None);
        assert_eq!(parse_positive(Some("-3")), None);
        assert_eq!(parse_positive(Some("0.5")), None);
        assert_eq!(parse_positive(Some("abc")), None);
        assert_eq!(parse_positive(Some("NaN")), None);
        assert_eq!(parse_positive(Some("inf")), None);
        assert_eq!(parse_positive(Some("")), None);
        assert_eq!(parse_positive(None), None);
    }

    #[test]
    fn test_request_from_raw_defaults() {
        let request = PageRequest::from_raw(None, Some("abc"), Some("-1"), 8);
        assert_eq!(request.search, "");
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 8);

        let request = PageRequest::from_raw(Some("x"), Some("4"), Some("7"), 10);
        assert_eq!(request.search, "x");
        assert_eq!(request.page, 4);
        assert_eq!(request.page_size, 7);

        let request = PageRequest::from_raw(None, None, None, 0);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_large_page_sizes_honoured() {
        let request = PageRequest::from_raw(None, None, Some("200"), 10);
        assert_eq!(request.page_size, 200);

        let request = PageRequest::from_raw(None, None, None, 200);
        assert_eq!(request.page_size, 200);

        let rows = numbered(150);
        let engine = RecordQueryEngine::new(rows.clone());
        let raw = engine.run(&PageRequest::from_raw(None, None, Some("200"), 10));
        let direct = query(&rows, "", 1, 200);
        assert_eq!(raw, direct);
        assert_eq!(raw.items.len(), 150);
        assert_eq!(raw.total_pages, 1);
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(parse_positive(Some("0x10")), Some(16));
        assert_eq!(parse_positive(Some("0X1f")), Some(31));
        assert_eq!(parse_positive(Some("0o17")), Some(15));
        assert_eq!(parse_positive(Some("0b101")), Some(5));
        assert_eq!(parse_positive(Some("0x0")), None);
        assert_eq!(parse_positive(Some("0xzz")), None);
        assert_eq!(parse_positive(Some("0x")), None);
        assert_eq!(parse_positive(Some("-0x10")), None);
        assert_eq!(parse_positive(Some("0x+5")), None);
    }

    #[test]
    fn test_engine_uses_its_default_page_size() {
        let engine = RecordQueryEngine::new(numbered(20)).with_default_page_size(8);
        let result = engine.query("", None, None);
        assert_eq!(result.page_size, 8);
        assert_eq!(result.items.len(), 8);
        assert_eq!(result.total_pages, 3);

        let result = engine.query("", Some(0), Some(0));
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, 8);
    }

    #[test]
    fn test_engine_filter_and_len() {
        let engine = RecordQueryEngine::new(fixture());
        assert_eq!(engine.len(), 4);
        assert!(!engine.is_empty());
        assert_eq!(engine.filter("takahashi").len(), 1);
        assert_eq!(engine.filter("").len(), 4);

        let empty: RecordQueryEngine<Row> = RecordQueryEngine::new(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.query("x", None, None).total_pages, 1);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = QueryPage::<u8> {
            items: vec![],
            total: 0,
            page: 1,
            page_size: 10,
            total_pages: 1,
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["pageSize"], 10);
        assert_eq!(value["totalPages"], 1);
    }
}
