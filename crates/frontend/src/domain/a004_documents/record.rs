use contracts::domain::a004_documents::Document;
use contracts::shared::status::status_eq;

use crate::shared::collection::CollectionRecord;
use crate::shared::date_utils::format_opt_date;
use crate::shared::export::ExcelExportable;
use crate::shared::list_utils::{Searchable, SortKey, Sortable};
use crate::shared::or_na;

pub const DOCUMENT_STATUSES: &[&str] = &["pending", "approved", "rejected"];

pub fn is_reviewable(document: &Document) -> bool {
    status_eq(&document.status, "pending")
}

impl Searchable for Document {
    fn search_text(&self) -> String {
        [
            self.title.as_str(),
            self.provider_name.as_deref().unwrap_or_default(),
            self.document_type.as_deref().unwrap_or_default(),
            self.status.as_str(),
        ]
        .join(" ")
    }
}

impl Sortable for Document {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "title" => SortKey::text(&self.title),
            "provider" => SortKey::opt_text(self.provider_name.as_deref()),
            "document_type" => SortKey::opt_text(self.document_type.as_deref()),
            "status" => SortKey::text(&self.status),
            "uploaded_at" => SortKey::opt_text(self.uploaded_at.as_deref()),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for Document {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl ExcelExportable for Document {
    fn headers() -> Vec<&'static str> {
        vec!["Title", "Provider", "Type", "Status", "Uploaded", "File"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            or_na(self.provider_name.as_deref()),
            or_na(self.document_type.as_deref()),
            self.status.clone(),
            format_opt_date(self.uploaded_at.as_deref()),
            or_na(self.file_url.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_documents_are_reviewable() {
        let mut doc: Document = serde_json::from_str(
            r#"{"_id":"d1","title":"CAC certificate","status":"Pending","url":"https://files/x.pdf"}"#,
        )
        .unwrap();
        assert!(is_reviewable(&doc));
        assert_eq!(doc.to_csv_row()[5], "https://files/x.pdf");
        doc.status = "approved".into();
        assert!(!is_reviewable(&doc));
    }
}
