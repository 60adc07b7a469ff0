use contracts::shared::status::status_label;
use leptos::prelude::*;

/// Coloured pill for a record status.
pub fn status_badge(status: &str) -> AnyView {
    let modifier = match status.trim().to_ascii_lowercase().as_str() {
        "active" | "approved" | "verified" | "published" | "success" | "successful"
        | "completed" | "confirmed" => "badge--success",
        "pending" | "draft" | "in_review" | "processing" => "badge--warning",
        "inactive" | "rejected" | "failed" | "cancelled" | "expired" | "suspended" => "badge--error",
        _ => "badge--neutral",
    };
    let label = if status.trim().is_empty() {
        crate::shared::NOT_AVAILABLE.to_string()
    } else {
        status_label(status)
    };
    view! { <span class=format!("badge {}", modifier)>{label}</span> }.into_any()
}

/// Plain text cell.
pub fn cell_text(value: impl Into<String>) -> AnyView {
    let value: String = value.into();
    view! { <span>{value}</span> }.into_any()
}
