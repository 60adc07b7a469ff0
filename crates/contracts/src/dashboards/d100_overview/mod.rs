use serde::{Deserialize, Serialize};

/// Value returned by each `/dashboard/*-count` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CountStat {
    #[serde(default, alias = "total")]
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStat {
    #[serde(default, alias = "total")]
    pub amount: f64,
}

/// KPI set shown on the overview dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardStats {
    pub users: u64,
    pub providers: u64,
    pub bookings: u64,
    pub revenue: f64,
}
