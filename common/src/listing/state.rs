use crate::model::school::SchoolRecord;

use super::filter::filter_records;
use super::pagination::{page_slice, total_pages, PageSize, Pagination};

/// Fetch state of the listing page.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ListingStatus {
    #[default]
    Loading,
    Loaded(Vec<SchoolRecord>),
    /// The fetch failed; the reason is shown as page-level text.
    Failed(String),
}

/// What the listing should render right now, derived from records, query and pagination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView<'a> {
    pub records: Vec<&'a SchoolRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl PageView<'_> {
    /// Pagination controls are only worth showing past one page.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// State container for the listing page.
///
/// Holds the fetched records plus the search query and pagination; the visible page is
/// recomputed on demand by `view`, never stored. The page number is kept within range
/// whenever the query, page size or record set changes.
#[derive(Clone, Debug, Default)]
pub struct Listing {
    status: ListingStatus,
    query: String,
    pagination: Pagination,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListingStatus::Loading
    }

    /// Failure reason, when the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListingStatus::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Every fetched record. Empty while loading or after a failure.
    pub fn records(&self) -> &[SchoolRecord] {
        match &self.status {
            ListingStatus::Loaded(records) => records.as_slice(),
            ListingStatus::Loading | ListingStatus::Failed(_) => &[],
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Stores the fetched records. Ignored unless a fetch is pending.
    pub fn fetch_succeeded(&mut self, records: Vec<SchoolRecord>) {
        if !self.is_loading() {
            return;
        }
        self.status = ListingStatus::Loaded(records);
        self.clamp_page();
    }

    /// Records why the fetch failed. Ignored unless a fetch is pending.
    pub fn fetch_failed(&mut self, reason: String) {
        if !self.is_loading() {
            return;
        }
        self.status = ListingStatus::Failed(reason);
        self.pagination.reset();
    }

    /// Changes the search text and goes back to the first page.
    pub fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.pagination.reset();
        }
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.pagination.set_size(size);
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.pagination.next(total);
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    pub fn total_pages(&self) -> usize {
        total_pages(
            filter_records(self.records(), &self.query).len(),
            self.pagination.size(),
        )
    }

    /// The page to render, or `None` while the fetch is still pending.
    pub fn view(&self) -> Option<PageView<'_>> {
        if self.is_loading() {
            return None;
        }

        let filtered = filter_records(self.records(), &self.query);
        let size = self.pagination.size();
        let total = total_pages(filtered.len(), size);
        let page = self.pagination.page().min(total);

        Some(PageView {
            records: page_slice(&filtered, page, size).to_vec(),
            page,
            total_pages: total,
            filtered_count: filtered.len(),
        })
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.pagination.clamp(total);
    }
}
