use contracts::domain::a003_bookings::{Booking, BOOKING_TRANSITIONS};
use contracts::shared::status::status_eq;

use crate::shared::collection::CollectionRecord;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::ExcelExportable;
use crate::shared::list_utils::{Searchable, SortKey, Sortable};
use crate::shared::number_format::format_number;
use crate::shared::or_na;

pub const BOOKING_STATUSES: &[&str] = &["pending", "confirmed", "completed", "cancelled"];

/// Statuses a booking may move to from its current one.
pub fn available_transitions(status: &str) -> Vec<&'static str> {
    let allowed: &[&str] = match status.trim().to_lowercase().as_str() {
        "pending" => &["confirmed", "cancelled"],
        "confirmed" => &["completed", "cancelled"],
        _ => &[],
    };
    BOOKING_TRANSITIONS
        .iter()
        .copied()
        .filter(|t| allowed.iter().any(|a| status_eq(a, t)))
        .collect()
}

/// Button caption for moving to `status`.
pub fn transition_label(status: &str) -> &'static str {
    match status {
        "confirmed" => "Confirm",
        "completed" => "Complete",
        "cancelled" => "Cancel",
        _ => "Update",
    }
}

pub fn appointment_text(booking: &Booking) -> String {
    booking
        .appointment_date
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| or_na(None))
}

impl Searchable for Booking {
    fn search_text(&self) -> String {
        [
            self.id.as_str(),
            self.patient_name.as_deref().unwrap_or_default(),
            self.provider_name.as_deref().unwrap_or_default(),
            self.service.as_deref().unwrap_or_default(),
            self.status.as_str(),
        ]
        .join(" ")
    }
}

impl Sortable for Booking {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "patient" => SortKey::opt_text(self.patient_name.as_deref()),
            "provider" => SortKey::opt_text(self.provider_name.as_deref()),
            "service" => SortKey::opt_text(self.service.as_deref()),
            "appointment_date" => SortKey::opt_text(self.appointment_date.as_deref()),
            "amount" => SortKey::number(self.amount),
            "status" => SortKey::text(&self.status),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for Booking {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl ExcelExportable for Booking {
    fn headers() -> Vec<&'static str> {
        vec!["Booking ID", "Patient", "Provider", "Service", "Appointment", "Amount (NGN)", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            or_na(self.patient_name.as_deref()),
            or_na(self.provider_name.as_deref()),
            or_na(self.service.as_deref()),
            appointment_text(self),
            format_number(self.amount),
            self.status.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, amount: f64) -> Booking {
        Booking {
            id: id.into(),
            patient_name: Some("Chidi Eze".into()),
            provider_name: None,
            service: Some("Consultation".into()),
            appointment_date: None,
            amount,
            status: "pending".into(),
        }
    }

    #[test]
    fn test_transitions() {
        assert_eq!(available_transitions("pending"), vec!["confirmed", "cancelled"]);
        assert_eq!(available_transitions("Confirmed"), vec!["completed", "cancelled"]);
        assert!(available_transitions("completed").is_empty());
        assert!(available_transitions("cancelled").is_empty());
    }

    #[test]
    fn test_amount_sorts_numerically() {
        let small = booking("b1", 9_000.0);
        let large = booking("b2", 10_000.0);
        assert_eq!(small.compare_by_field(&large, "amount"), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_csv_row() {
        let row = booking("b1", 15_000.0).to_csv_row();
        assert_eq!(row[2], "N/A");
        assert_eq!(row[4], "N/A");
        assert_eq!(row[5], "15,000.00");
    }
}
