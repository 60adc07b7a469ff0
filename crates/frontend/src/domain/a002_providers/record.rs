use contracts::domain::a002_providers::Provider;

use crate::shared::collection::CollectionRecord;
use crate::shared::date_utils::format_opt_date;
use crate::shared::export::ExcelExportable;
use crate::shared::list_utils::{Searchable, SortKey, Sortable};
use crate::shared::or_na;

pub const PROVIDER_STATUSES: &[&str] = &["active", "inactive", "pending"];

pub fn verified_label(provider: &Provider) -> &'static str {
    if provider.verified {
        "Verified"
    } else {
        "Unverified"
    }
}

impl Searchable for Provider {
    fn search_text(&self) -> String {
        [
            self.name.as_str(),
            self.email.as_deref().unwrap_or_default(),
            self.phone.as_deref().unwrap_or_default(),
            self.specialty.as_deref().unwrap_or_default(),
            self.address.as_deref().unwrap_or_default(),
            self.status.as_str(),
        ]
        .join(" ")
    }
}

impl Sortable for Provider {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "name" => SortKey::text(&self.name),
            "email" => SortKey::opt_text(self.email.as_deref()),
            "specialty" => SortKey::opt_text(self.specialty.as_deref()),
            "verified" => SortKey::text(verified_label(self)),
            "status" => SortKey::text(&self.status),
            "created_at" => SortKey::opt_text(self.created_at.as_deref()),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for Provider {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl ExcelExportable for Provider {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Email", "Phone", "Specialty", "Address", "Verified", "Status", "Registered"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            or_na(self.email.as_deref()),
            or_na(self.phone.as_deref()),
            or_na(self.specialty.as_deref()),
            or_na(self.address.as_deref()),
            verified_label(self).to_string(),
            self.status.clone(),
            format_opt_date(self.created_at.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(name: &str, specialty: Option<&str>) -> Provider {
        Provider {
            id: name.to_lowercase(),
            name: name.into(),
            email: None,
            phone: None,
            specialty: specialty.map(Into::into),
            address: Some("12 Awolowo Rd, Ikoyi".into()),
            status: "pending".into(),
            verified: false,
            created_at: None,
        }
    }

    #[test]
    fn test_missing_specialty_sorts_first() {
        let a = provider("Alpha Clinic", Some("Dental"));
        let b = provider("Beta Labs", None);
        assert_eq!(a.compare_by_field(&b, "specialty"), std::cmp::Ordering::Greater);
    }

    #[test]
    fn test_search_by_address() {
        assert!(provider("Alpha Clinic", None).matches_filter("ikoyi"));
    }
}
