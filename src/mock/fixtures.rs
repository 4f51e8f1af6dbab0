//! Canned payloads for the demo backend. Amounts and counts are arbitrary but
//! deterministic so screenshots and tests stay stable.

use chrono::{Datelike, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::models::{
    ActivityEvent, AdminPayment, AdminTenant, CheckoutSession, DashboardStats, FinanceSummary,
    Identity, Invoice, MarketplaceService, PaymentMethod, PaymentRecord, Payout, PlatformStats,
    Plan, Preferences, RevenuePoint, TenantMember, TenantProfile, UserProfile,
};
use crate::types::Role;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn default_preferences() -> Preferences {
    Preferences {
        language: "en".to_string(),
        timezone: "UTC".to_string(),
        invoice_emails: true,
        theme: "light".to_string(),
    }
}

pub fn user_profile(identity: Identity, preferences: Preferences) -> UserProfile {
    UserProfile {
        id: identity.id,
        name: identity.name,
        email: identity.email,
        role: identity.role,
        tenant: identity.tenant,
        member_since: Utc::now() - Duration::days(412),
        preferences,
    }
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_tenants: 42,
        active_users: 1187,
        monthly_revenue: dec!(28450.00),
        pending_payouts: dec!(6120.50),
        revenue_growth_pct: 8.4,
        user_growth_pct: 3.1,
    }
}

/// Twelve months of revenue ending in the current month
pub fn revenue_series() -> Vec<RevenuePoint> {
    const TOTALS: [Decimal; 12] = [
        dec!(17200), dec!(18050), dec!(17940), dec!(19310), dec!(20125), dec!(21400),
        dec!(21080), dec!(22960), dec!(24530), dec!(25875), dec!(27210), dec!(28450),
    ];

    let now = Utc::now();
    let mut year = now.year();
    let mut month = now.month() as i32;
    let mut points = Vec::with_capacity(12);
    for total in TOTALS.iter().rev() {
        points.push(RevenuePoint {
            month: format!("{} {}", MONTHS[(month - 1) as usize], year),
            total: *total,
        });
        month -= 1;
        if month == 0 {
            month = 12;
            year -= 1;
        }
    }
    points.reverse();
    points
}

pub fn activity_feed() -> Vec<ActivityEvent> {
    let now = Utc::now();
    let event = |n: u128, actor: &str, action: &str, detail: &str, hours_ago: i64| ActivityEvent {
        id: Uuid::from_u128(0xac71_0000_0000_0000_0000_0000_0000_0000 + n),
        actor: actor.to_string(),
        action: action.to_string(),
        detail: detail.to_string(),
        at: now - Duration::hours(hours_ago),
    };

    vec![
        event(1, "Jordan Reyes", "invited", "maya@acme-robotics.test to Acme Robotics", 2),
        event(2, "Acme Robotics", "upgraded", "plan Starter -> Scale", 7),
        event(3, "Stripe", "payout.paid", "$2,310.00 to Northwind Labs", 11),
        event(4, "Sam Okafor", "payment.succeeded", "$49.00 invoice INV-2041", 26),
        event(5, "Avery Stone", "suspended", "tenant Globex Pty (payment failure)", 31),
        event(6, "Brightloop", "signed_up", "new tenant on Starter plan", 48),
        event(7, "Stripe", "payout.created", "$1,875.25 to Acme Robotics", 55),
        event(8, "Jordan Reyes", "enabled", "marketplace service Audit Trail", 73),
    ]
}

pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "pm_visa_4242".to_string(),
            brand: "visa".to_string(),
            last4: "4242".to_string(),
            exp_month: 11,
            exp_year: 2027,
            is_default: true,
        },
        PaymentMethod {
            id: "pm_mc_5100".to_string(),
            brand: "mastercard".to_string(),
            last4: "5100".to_string(),
            exp_month: 3,
            exp_year: 2026,
            is_default: false,
        },
    ]
}

pub fn invoices() -> Vec<Invoice> {
    let now = Utc::now();
    (1..=12)
        .map(|i| {
            let issued = now - Duration::days(30 * i);
            Invoice {
                id: format!("in_{:06}", 2053 - i),
                number: format!("INV-{}", 2053 - i),
                amount: if i % 3 == 0 { dec!(149.00) } else { dec!(49.00) },
                currency: "usd".to_string(),
                status: match i {
                    1 => "open".to_string(),
                    5 => "past_due".to_string(),
                    _ => "paid".to_string(),
                },
                issued_at: issued,
                due_at: issued + Duration::days(14),
            }
        })
        .collect()
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "plan_starter".to_string(),
            name: "Starter".to_string(),
            description: "For small teams getting set up".to_string(),
            price_monthly: dec!(49.00),
            currency: "usd".to_string(),
            features: vec![
                "Up to 10 seats".to_string(),
                "Community support".to_string(),
            ],
        },
        Plan {
            id: "plan_scale".to_string(),
            name: "Scale".to_string(),
            description: "Growing tenants with payment volume".to_string(),
            price_monthly: dec!(149.00),
            currency: "usd".to_string(),
            features: vec![
                "Up to 50 seats".to_string(),
                "Priority support".to_string(),
                "Custom payout schedule".to_string(),
            ],
        },
        Plan {
            id: "plan_enterprise".to_string(),
            name: "Enterprise".to_string(),
            description: "Dedicated infrastructure and SLAs".to_string(),
            price_monthly: dec!(499.00),
            currency: "usd".to_string(),
            features: vec![
                "Unlimited seats".to_string(),
                "Dedicated support".to_string(),
                "SSO and audit log".to_string(),
            ],
        },
    ]
}

pub fn checkout_session(plan_id: Option<&str>, amount: Option<Decimal>) -> CheckoutSession {
    let amount = amount.unwrap_or_else(|| {
        plans()
            .iter()
            .find(|p| Some(p.id.as_str()) == plan_id)
            .map(|p| p.price_monthly)
            .unwrap_or(dec!(49.00))
    });

    CheckoutSession {
        id: "cs_demo_8f3k2".to_string(),
        url: "https://checkout.platform-gateway.test/cs_demo_8f3k2".to_string(),
        amount,
        currency: "usd".to_string(),
        status: "requires_confirmation".to_string(),
    }
}

pub fn tenant_profile() -> TenantProfile {
    TenantProfile {
        id: Uuid::from_u128(0x7e01_0000_0000_0000_0000_0000_0000_0001),
        name: "Acme Robotics".to_string(),
        slug: "acme-robotics".to_string(),
        plan: "Scale".to_string(),
        status: "active".to_string(),
        seats: 50,
        seats_used: 23,
        created_at: Utc::now() - Duration::days(640),
    }
}

pub fn tenant_members() -> Vec<TenantMember> {
    let now = Utc::now();
    let member = |n: u128, name: &str, email: &str, role: Role, status: &str, seen: Option<i64>| {
        TenantMember {
            id: Uuid::from_u128(0x3e3b_0000_0000_0000_0000_0000_0000_0000 + n),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status: status.to_string(),
            last_seen: seen.map(|h| now - Duration::hours(h)),
        }
    };

    vec![
        member(1, "Jordan Reyes", "jordan@acme-robotics.test", Role::TenantOwner, "active", Some(1)),
        member(2, "Sam Okafor", "sam@acme-robotics.test", Role::User, "active", Some(3)),
        member(3, "Maya Lindqvist", "maya@acme-robotics.test", Role::User, "invited", None),
        member(4, "Diego Fuentes", "diego@acme-robotics.test", Role::User, "active", Some(26)),
        member(5, "Priya Natarajan", "priya@acme-robotics.test", Role::User, "active", Some(50)),
        member(6, "Tom Becker", "tom@acme-robotics.test", Role::User, "active", Some(170)),
    ]
}

pub fn finance_summary() -> FinanceSummary {
    FinanceSummary {
        balance: dec!(4310.75),
        pending: dec!(1875.25),
        lifetime_volume: dec!(182340.10),
        currency: "usd".to_string(),
        next_payout_at: Utc::now() + Duration::days(3),
    }
}

pub fn payouts() -> Vec<Payout> {
    let now = Utc::now();
    let payout = |id: &str, amount: Decimal, status: &str, days_ago: i64| Payout {
        id: id.to_string(),
        amount,
        currency: "usd".to_string(),
        status: status.to_string(),
        initiated_at: now - Duration::days(days_ago),
    };

    vec![
        payout("po_0291", dec!(1875.25), "in_transit", 1),
        payout("po_0284", dec!(2310.00), "paid", 8),
        payout("po_0277", dec!(1642.80), "paid", 15),
        payout("po_0268", dec!(2988.40), "paid", 22),
        payout("po_0260", dec!(1204.15), "paid", 29),
        payout("po_0251", dec!(2751.90), "paid", 36),
    ]
}

pub fn user_payments() -> Vec<PaymentRecord> {
    let now = Utc::now();
    let record = |id: &str, description: &str, amount: Decimal, status: &str, days_ago: i64| {
        PaymentRecord {
            id: id.to_string(),
            description: description.to_string(),
            amount,
            currency: "usd".to_string(),
            status: status.to_string(),
            method: "visa **** 4242".to_string(),
            at: now - Duration::days(days_ago),
        }
    };

    vec![
        record("py_7301", "Scale plan - monthly", dec!(149.00), "succeeded", 2),
        record("py_7188", "Audit Trail add-on", dec!(19.00), "succeeded", 9),
        record("py_7007", "Scale plan - monthly", dec!(149.00), "succeeded", 32),
        record("py_6894", "Seat overage (3 seats)", dec!(21.00), "refunded", 41),
        record("py_6710", "Scale plan - monthly", dec!(149.00), "succeeded", 62),
        record("py_6533", "Starter plan - monthly", dec!(49.00), "succeeded", 93),
    ]
}

pub fn admin_tenants() -> Vec<AdminTenant> {
    let now = Utc::now();
    let tenant = |n: u128, name: &str, plan: &str, status: &str, users: u32, mrr: Decimal, days: i64| {
        AdminTenant {
            id: Uuid::from_u128(0x7e01_0000_0000_0000_0000_0000_0000_0000 + n),
            name: name.to_string(),
            plan: plan.to_string(),
            status: status.to_string(),
            users,
            mrr,
            created_at: now - Duration::days(days),
        }
    };

    vec![
        tenant(1, "Acme Robotics", "Scale", "active", 23, dec!(149.00), 640),
        tenant(2, "Northwind Labs", "Enterprise", "active", 112, dec!(499.00), 1205),
        tenant(3, "Brightloop", "Starter", "trialing", 4, dec!(0.00), 12),
        tenant(4, "Globex Pty", "Scale", "suspended", 31, dec!(149.00), 430),
        tenant(5, "Kitsune Digital", "Starter", "active", 7, dec!(49.00), 220),
        tenant(6, "Verdant Analytics", "Scale", "active", 44, dec!(149.00), 530),
        tenant(7, "Hullabaloo Inc", "Starter", "active", 9, dec!(49.00), 95),
        tenant(8, "Polar Freight", "Enterprise", "active", 203, dec!(499.00), 890),
        tenant(9, "Quickstitch", "Starter", "trialing", 2, dec!(0.00), 6),
        tenant(10, "Mosaic Health", "Scale", "active", 58, dec!(149.00), 310),
        tenant(11, "Tandem Works", "Starter", "active", 11, dec!(49.00), 150),
        tenant(12, "Ferrous Metalworks", "Scale", "active", 27, dec!(149.00), 405),
    ]
}

/// Platform-wide ledger, big enough to exercise pagination
pub fn admin_payments() -> Vec<AdminPayment> {
    let now = Utc::now();
    let tenants = [
        "Acme Robotics",
        "Northwind Labs",
        "Verdant Analytics",
        "Polar Freight",
        "Mosaic Health",
        "Kitsune Digital",
    ];
    let amounts = [
        dec!(149.00), dec!(499.00), dec!(49.00), dec!(1240.00), dec!(320.50), dec!(89.99),
    ];

    (0..24)
        .map(|i| {
            let amount = amounts[i % amounts.len()];
            let fee = (amount * dec!(0.029) + dec!(0.30)).round_dp(2);
            AdminPayment {
                id: format!("py_{:05}", 9000 - i as u32 * 7),
                tenant: tenants[i % tenants.len()].to_string(),
                amount,
                fee,
                net: amount - fee,
                currency: "usd".to_string(),
                status: match i {
                    3 => "refunded".to_string(),
                    10 => "failed".to_string(),
                    0 | 7 => "pending".to_string(),
                    _ => "succeeded".to_string(),
                },
                at: now - Duration::hours(9 * i as i64 + 4),
            }
        })
        .collect()
}

pub fn platform_stats() -> PlatformStats {
    PlatformStats {
        total_tenants: 42,
        active_tenants: 37,
        total_users: 1187,
        platform_mrr: dec!(28450.00),
        volume_30d: dec!(412380.44),
    }
}

pub fn marketplace_services() -> Vec<MarketplaceService> {
    let service = |id: &str, name: &str, category: &str, description: &str, price: Decimal, enabled: bool| {
        MarketplaceService {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price_monthly: price,
            currency: "usd".to_string(),
            enabled,
        }
    };

    vec![
        service("svc_audit", "Audit Trail", "compliance", "Immutable event log for every admin action", dec!(19.00), true),
        service("svc_sso", "Single Sign-On", "security", "SAML and OIDC login for your workspace", dec!(39.00), false),
        service("svc_webhooks", "Webhook Relay", "integrations", "Signed webhooks with automatic retries", dec!(9.00), true),
        service("svc_reports", "Revenue Reports", "analytics", "Weekly revenue digests and CSV exports", dec!(14.00), false),
        service("svc_backup", "Data Export", "compliance", "Nightly exports to your object storage", dec!(24.00), false),
        service("svc_sandbox", "Sandbox Tenants", "developer", "Disposable tenants for integration testing", dec!(0.00), true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_series_covers_twelve_months_ending_now() {
        let points = revenue_series();
        assert_eq!(points.len(), 12);
        let current = format!(
            "{} {}",
            MONTHS[(Utc::now().month() - 1) as usize],
            Utc::now().year()
        );
        assert_eq!(points.last().unwrap().month, current);
    }

    #[test]
    fn admin_payment_fees_stay_consistent() {
        for payment in admin_payments() {
            assert_eq!(payment.amount - payment.fee, payment.net);
            assert!(payment.fee > Decimal::ZERO);
        }
    }

    #[test]
    fn exactly_one_default_payment_method() {
        let defaults = payment_methods().iter().filter(|m| m.is_default).count();
        assert_eq!(defaults, 1);
    }
}
