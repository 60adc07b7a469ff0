use contracts::domain::a006_transactions::Transaction;

use crate::shared::collection::CollectionRecord;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::ExcelExportable;
use crate::shared::list_utils::{Searchable, SortKey, Sortable};
use crate::shared::number_format::{format_money, format_number};
use crate::shared::or_na;

pub const TRANSACTION_STATUSES: &[&str] = &["success", "pending", "failed"];

pub fn amount_text(tx: &Transaction) -> String {
    format_money(&tx.currency, tx.amount)
}

pub fn created_text(tx: &Transaction) -> String {
    match tx.created_at.as_deref() {
        Some(v) if !v.trim().is_empty() => format_datetime(v),
        _ => or_na(None),
    }
}

impl Searchable for Transaction {
    fn search_text(&self) -> String {
        [
            self.reference.as_str(),
            self.user_email.as_deref().unwrap_or_default(),
            self.channel.as_deref().unwrap_or_default(),
            self.status.as_str(),
        ]
        .join(" ")
    }
}

impl Sortable for Transaction {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "reference" => SortKey::text(&self.reference),
            "user_email" => SortKey::opt_text(self.user_email.as_deref()),
            "amount" => SortKey::number(self.amount),
            "channel" => SortKey::opt_text(self.channel.as_deref()),
            "status" => SortKey::text(&self.status),
            "created_at" => SortKey::opt_text(self.created_at.as_deref()),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for Transaction {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl ExcelExportable for Transaction {
    fn headers() -> Vec<&'static str> {
        vec!["Reference", "User", "Amount", "Currency", "Channel", "Status", "Date"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            or_na(self.user_email.as_deref()),
            format_number(self.amount),
            self.currency.clone(),
            or_na(self.channel.as_deref()),
            self.status.clone(),
            created_text(self),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(reference: &str, currency: &str, amount: f64) -> Transaction {
        Transaction {
            id: reference.to_lowercase(),
            reference: reference.into(),
            user_email: Some("ada@medbankr.com".into()),
            amount,
            currency: currency.into(),
            channel: Some("card".into()),
            status: "success".into(),
            created_at: Some("2024-03-15T14:02:26Z".into()),
        }
    }

    #[test]
    fn test_amount_uses_currency() {
        assert_eq!(amount_text(&tx("T1", "NGN", 2_500.0)), "₦2,500.00");
        assert_eq!(amount_text(&tx("T2", "USD", 12.5)), "$12.50");
    }

    #[test]
    fn test_csv_row() {
        let row = tx("MBK-001", "NGN", 1_000_000.0).to_csv_row();
        assert_eq!(row, vec!["MBK-001", "ada@medbankr.com", "1,000,000.00", "NGN", "card", "success", "15 Mar 2024, 14:02"]);
    }
}
