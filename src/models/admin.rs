use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTenant {
    pub id: Uuid,
    pub name: String,
    pub plan: String,
    /// active | trialing | suspended
    pub status: String,
    pub users: u32,
    pub mrr: Decimal,
    pub created_at: DateTime<Utc>,
}

/// One row of the platform payment ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPayment {
    pub id: String,
    pub tenant: String,
    pub amount: Decimal,
    pub fee: Decimal,
    pub net: Decimal,
    pub currency: String,
    /// succeeded | pending | refunded | failed
    pub status: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_tenants: u64,
    pub active_tenants: u64,
    pub total_users: u64,
    pub platform_mrr: Decimal,
    pub volume_30d: Decimal,
}
