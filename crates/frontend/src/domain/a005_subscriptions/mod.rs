pub mod api;
pub mod checkout;
pub mod record;
pub mod ui;
