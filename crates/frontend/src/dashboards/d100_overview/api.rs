use contracts::dashboards::d100_overview::{CountStat, DashboardStats, RevenueStat};

use crate::config::Backend;
use crate::shared::api::{ApiClient, ApiError};

/// Number of bookings shown under the KPI cards.
pub const RECENT_BOOKINGS: usize = 5;

fn assemble(users: CountStat, providers: CountStat, bookings: CountStat, revenue: RevenueStat) -> DashboardStats {
    DashboardStats {
        users: users.count,
        providers: providers.count,
        bookings: bookings.count,
        revenue: revenue.amount,
    }
}

/// Fetches all KPI endpoints at once; the first failure fails the whole set.
pub async fn fetch_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    let (users, providers, bookings, revenue) = futures::try_join!(
        client.get::<CountStat>(Backend::Core, "/dashboard/users/count"),
        client.get::<CountStat>(Backend::Provider, "/dashboard/providers/count"),
        client.get::<CountStat>(Backend::Core, "/dashboard/bookings/count"),
        client.get::<RevenueStat>(Backend::Core, "/dashboard/revenue"),
    )?;
    Ok(assemble(users, providers, bookings, revenue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_from_envelope_payloads() {
        let users: CountStat = serde_json::from_str(r#"{"count":1204}"#).unwrap();
        let providers: CountStat = serde_json::from_str(r#"{"total":87}"#).unwrap();
        let bookings: CountStat = serde_json::from_str(r#"{}"#).unwrap();
        let revenue: RevenueStat = serde_json::from_str(r#"{"amount":2500000.5}"#).unwrap();

        let stats = assemble(users, providers, bookings, revenue);
        assert_eq!(stats.users, 1204);
        assert_eq!(stats.providers, 87);
        assert_eq!(stats.bookings, 0);
        assert_eq!(stats.revenue, 2_500_000.5);
    }
}
