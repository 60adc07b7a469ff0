pub mod list;
pub mod roles;
