use common::listing::Listing;

/// State of the show-schools page.
pub struct ShowSchoolsComponent {
    /// Fetched records, query and pagination.
    pub listing: Listing,

    /// Guard so the fetch runs only on the first render.
    pub loaded: bool,
}

impl ShowSchoolsComponent {
    pub fn new() -> Self {
        Self {
            listing: Listing::new(),
            loaded: false,
        }
    }
}
