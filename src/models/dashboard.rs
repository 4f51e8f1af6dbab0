use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tenants: u64,
    pub active_users: u64,
    pub monthly_revenue: Decimal,
    pub pending_payouts: Decimal,
    pub revenue_growth_pct: f64,
    pub user_growth_pct: f64,
}

/// One month of the revenue chart series
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub month: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub id: Uuid,
    pub actor: String,
    pub action: String,
    pub detail: String,
    pub at: DateTime<Utc>,
}
