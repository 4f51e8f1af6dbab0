use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceService {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price_monthly: Decimal,
    pub currency: String,
    pub enabled: bool,
}
