use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantProfile {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub plan: String,
    /// active | trialing | suspended
    pub status: String,
    pub seats: u32,
    pub seats_used: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// active | invited
    pub status: String,
    pub last_seen: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub balance: Decimal,
    pub pending: Decimal,
    pub lifetime_volume: Decimal,
    pub currency: String,
    pub next_payout_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: String,
    pub amount: Decimal,
    pub currency: String,
    /// paid | in_transit | pending
    pub status: String,
    pub initiated_at: DateTime<Utc>,
}
