//! Listing page logic: search, pagination and the fetch state machine.
//!
//! `Listing` holds the fetched records (`Loading -> Loaded | Failed`) and the user's query and
//! page; `Listing::view` derives the slice to render from them on every call.

mod filter;
mod pagination;
mod state;

pub use filter::filter_records;
pub use pagination::{page_slice, total_pages, PageSize, Pagination};
pub use state::{Listing, ListingStatus, PageView};
