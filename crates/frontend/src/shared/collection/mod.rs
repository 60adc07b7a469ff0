//! Remote collection view: the state behind every list page.
//!
//! A page loads records once, hands them to [`CollectionView`] and renders
//! [`CollectionView::page_rows`]. Search, status filter, sorting, paging and
//! selection are all applied here, synchronously, without touching the
//! network.

pub mod pagination;
pub mod record;
pub mod selection;
pub mod view;

pub use pagination::{page_count, page_label, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use record::{status_options, CollectionRecord, StatusFilter, StatusOption};
pub use selection::{CheckState, Selection};
pub use view::{CollectionView, RowKey, SortState};
