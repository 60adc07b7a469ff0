use contracts::domain::a003_bookings::{Booking, BookingStatusDto};
use serde_json::Value;

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_bookings(client: &ApiClient) -> Result<Vec<Booking>, ApiError> {
    client
        .get::<Option<Vec<Booking>>>(Backend::Core, "/bookings")
        .await
        .map(Option::unwrap_or_default)
}

/// Most recent bookings, newest first as returned by the backend.
pub async fn fetch_recent_bookings(client: &ApiClient, limit: usize) -> Result<Vec<Booking>, ApiError> {
    client
        .get::<Option<Vec<Booking>>>(Backend::Core, &format!("/bookings?limit={}&sort=-createdAt", limit))
        .await
        .map(Option::unwrap_or_default)
}

pub async fn set_booking_status(client: &ApiClient, id: &str, status: &str) -> Result<(), ApiError> {
    let dto = BookingStatusDto {
        status: status.to_string(),
    };
    client
        .patch::<Value, _>(
            Backend::Core,
            &format!("/bookings/{}/status", urlencoding::encode(id)),
            &dto,
        )
        .await
        .map(|_| ())
}
