//! Wire types shared by the admin frontend and the MedBankr backends.
//!
//! Everything here mirrors backend JSON one-to-one. The only logic kept in
//! this crate is envelope normalisation and small display helpers that the
//! DTOs need regardless of which UI renders them.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
