pub mod envelope;
pub mod status;
