pub mod collection_panel;
pub mod confirm_dialog;
pub mod list_header;
pub mod modal_frame;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod status_badge;
pub mod status_filter_tabs;
pub mod table;

pub use collection_panel::{CollectionPanel, Column};
pub use confirm_dialog::ConfirmDialog;
pub use list_header::ListHeader;
pub use modal_frame::ModalFrame;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
pub use status_badge::{cell_text, status_badge};
pub use status_filter_tabs::StatusFilterTabs;
