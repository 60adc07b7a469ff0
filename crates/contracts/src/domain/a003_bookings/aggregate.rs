use serde::{Deserialize, Serialize};

/// Appointment booked by a patient with a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
}

/// Statuses a booking can be moved to from the admin screen.
pub const BOOKING_TRANSITIONS: &[&str] = &["confirmed", "completed", "cancelled"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusDto {
    pub status: String,
}
