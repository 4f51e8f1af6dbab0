//! Wire models shared by the mock fixtures and the view components.
//! Field names follow the gateway API's camelCase JSON convention.

pub mod admin;
pub mod dashboard;
pub mod marketplace;
pub mod payment;
pub mod tenant;
pub mod user;

pub use admin::{AdminPayment, AdminTenant, PlatformStats};
pub use dashboard::{ActivityEvent, DashboardStats, RevenuePoint};
pub use marketplace::MarketplaceService;
pub use payment::{CheckoutSession, Invoice, PaymentMethod, PaymentRecord, Plan};
pub use tenant::{FinanceSummary, Payout, TenantMember, TenantProfile};
pub use user::{Identity, Preferences, PreferencesPatch, UserProfile};
