/// Page sizes offered by the listing's selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Thirty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::Thirty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Thirty => 30,
        }
    }

    /// Maps a selector value back to a size; anything not offered is rejected.
    pub fn from_value(value: usize) -> Option<Self> {
        PageSize::ALL.into_iter().find(|size| size.get() == value)
    }
}

/// Number of pages needed for `count` items. Never less than one, so an empty result is a single
/// empty page.
pub fn total_pages(count: usize, size: PageSize) -> usize {
    count.div_ceil(size.get()).max(1)
}

/// The items on 1-based `page`, clipped to the slice. Page 0 is read as page 1.
pub fn page_slice<T>(items: &[T], page: usize, size: PageSize) -> &[T] {
    let size = size.get();
    let start = page.max(1).saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Current page and page size of the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    size: PageSize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            size: PageSize::default(),
        }
    }
}

impl Pagination {
    pub fn new(page: usize, size: PageSize) -> Self {
        Self {
            page: page.max(1),
            size,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn next(&mut self, total: usize) {
        self.page = (self.page + 1).min(total.max(1));
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Pulls the page back inside `1..=total`.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.clamp(1, total.max(1));
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn set_size(&mut self, size: PageSize) {
        self.size = size;
    }
}
