//! The demo backend: canned JSON payloads keyed by (method, endpoint).
//!
//! Dispatch is deliberately dumb. An exact (method, path) match wins; failing
//! that, a registered endpoint that is a path prefix of the request handles it
//! (so `tenant/users/123` is served by `tenant/users`). Anything else is an
//! "endpoint not found" failure envelope.
//!
//! The only mutable fixture is the current user's preferences, which
//! `PUT user/preferences` merges into so the profile form reflects writes.

pub mod fixtures;

use std::collections::HashMap;

use axum::http::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::api::{paginate, Envelope};
use crate::auth::demo_identity;
use crate::models::{Preferences, UserProfile};
use crate::types::Role;

/// Every (method, endpoint) pair the demo backend answers
pub const SUPPORTED_ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "auth/me"),
    ("GET", "dashboard/stats"),
    ("GET", "dashboard/revenue"),
    ("GET", "dashboard/activity"),
    ("GET", "payment/methods"),
    ("GET", "payment/invoices"),
    ("GET", "payment/plans"),
    ("POST", "payment/checkout"),
    ("GET", "tenant/profile"),
    ("GET", "tenant/users"),
    ("GET", "tenant/finance/summary"),
    ("GET", "tenant/finance/payouts"),
    ("GET", "user/profile"),
    ("PUT", "user/preferences"),
    ("GET", "user/payments"),
    ("GET", "admin/tenants"),
    ("GET", "admin/payments"),
    ("GET", "admin/stats"),
    ("GET", "marketplace/services"),
];

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("endpoint not found: {method} {path}")]
    UnknownEndpoint { method: String, path: String },
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutRequest {
    plan_id: Option<String>,
    amount: Option<Decimal>,
}

pub struct MockApi {
    preferences: RwLock<Preferences>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            preferences: RwLock::new(fixtures::default_preferences()),
        }
    }

    /// Serve one API call from the fixtures
    pub async fn respond(
        &self,
        method: &Method,
        path: &str,
        query: &HashMap<String, String>,
        body: Option<&Value>,
        role: Role,
    ) -> Result<Envelope, MockError> {
        let normalized = normalize(path);
        let endpoint = resolve_endpoint(method.as_str(), &normalized).ok_or_else(|| {
            MockError::UnknownEndpoint {
                method: method.to_string(),
                path: normalized.clone(),
            }
        })?;

        match (method.as_str(), endpoint) {
            ("GET", "auth/me") => ok(demo_identity(role)),
            ("GET", "dashboard/stats") => ok(fixtures::dashboard_stats()),
            ("GET", "dashboard/revenue") => ok(fixtures::revenue_series()),
            ("GET", "dashboard/activity") => ok(fixtures::activity_feed()),
            ("GET", "payment/methods") => ok(fixtures::payment_methods()),
            ("GET", "payment/invoices") => paged(fixtures::invoices(), query),
            ("GET", "payment/plans") => ok(fixtures::plans()),
            ("POST", "payment/checkout") => self.checkout(body),
            ("GET", "tenant/profile") => ok(fixtures::tenant_profile()),
            ("GET", "tenant/users") => paged(fixtures::tenant_members(), query),
            ("GET", "tenant/finance/summary") => ok(fixtures::finance_summary()),
            ("GET", "tenant/finance/payouts") => ok(fixtures::payouts()),
            ("GET", "user/profile") => ok(self.user_profile(role).await),
            ("PUT", "user/preferences") => self.update_preferences(body).await,
            ("GET", "user/payments") => ok(fixtures::user_payments()),
            ("GET", "admin/tenants") => paged(fixtures::admin_tenants(), query),
            ("GET", "admin/payments") => paged(fixtures::admin_payments(), query),
            ("GET", "admin/stats") => ok(fixtures::platform_stats()),
            ("GET", "marketplace/services") => ok(fixtures::marketplace_services()),
            _ => Err(MockError::UnknownEndpoint {
                method: method.to_string(),
                path: normalized,
            }),
        }
    }

    async fn user_profile(&self, role: Role) -> UserProfile {
        let preferences = self.preferences.read().await.clone();
        fixtures::user_profile(demo_identity(role), preferences)
    }

    async fn update_preferences(&self, body: Option<&Value>) -> Result<Envelope, MockError> {
        let body = body.ok_or_else(|| MockError::InvalidBody("missing body".to_string()))?;
        let patch = serde_json::from_value(body.clone())
            .map_err(|e| MockError::InvalidBody(e.to_string()))?;

        let mut preferences = self.preferences.write().await;
        preferences.apply(&patch);
        Ok(Envelope::ok(serde_json::to_value(&*preferences)?))
    }

    fn checkout(&self, body: Option<&Value>) -> Result<Envelope, MockError> {
        let body = body.ok_or_else(|| MockError::InvalidBody("missing body".to_string()))?;
        let request: CheckoutRequest = serde_json::from_value(body.clone())
            .map_err(|e| MockError::InvalidBody(e.to_string()))?;

        ok(fixtures::checkout_session(
            request.plan_id.as_deref(),
            request.amount,
        ))
    }
}

/// Trim slashes and an optional `api/` prefix so client and HTTP paths agree
fn normalize(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    trimmed.strip_prefix("api/").unwrap_or(trimmed).to_string()
}

fn resolve_endpoint(method: &str, path: &str) -> Option<&'static str> {
    // Exact match first
    if let Some((_, endpoint)) = SUPPORTED_ENDPOINTS
        .iter()
        .find(|(m, ep)| *m == method && *ep == path)
    {
        return Some(endpoint);
    }
    // Then longest registered prefix on a path-segment boundary
    SUPPORTED_ENDPOINTS
        .iter()
        .filter(|(m, ep)| *m == method && path.starts_with(&format!("{}/", ep)))
        .map(|(_, ep)| *ep)
        .max_by_key(|ep| ep.len())
}

fn ok<T: Serialize>(data: T) -> Result<Envelope, MockError> {
    Ok(Envelope::ok(serde_json::to_value(data)?))
}

fn paged<T: Serialize>(
    items: Vec<T>,
    query: &HashMap<String, String>,
) -> Result<Envelope, MockError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1u32);
    let limit = query
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(10u32);

    let values = items
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    let (slice, meta) = paginate(&values, page, limit);
    Ok(Envelope::ok_paged(Value::Array(slice), meta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn no_query() -> HashMap<String, String> {
        HashMap::new()
    }

    #[tokio::test]
    async fn every_supported_endpoint_returns_a_success_envelope() {
        let api = MockApi::new();
        for (method, endpoint) in SUPPORTED_ENDPOINTS {
            let method: Method = method.parse().unwrap();
            let body = match *endpoint {
                "payment/checkout" => Some(json!({ "planId": "plan_scale" })),
                "user/preferences" => Some(json!({ "theme": "dark" })),
                _ => None,
            };
            let envelope = api
                .respond(&method, endpoint, &no_query(), body.as_ref(), Role::SuperAdmin)
                .await
                .unwrap_or_else(|e| panic!("{} {} failed: {}", method, endpoint, e));
            assert!(envelope.success, "{} {} not successful", method, endpoint);
            assert!(envelope.data.is_some(), "{} {} has no data", method, endpoint);
            assert!(envelope.error.is_none());
        }
    }

    #[tokio::test]
    async fn unknown_endpoint_is_rejected() {
        let api = MockApi::new();
        let err = api
            .respond(&Method::GET, "billing/nope", &no_query(), None, Role::User)
            .await
            .unwrap_err();
        assert!(matches!(err, MockError::UnknownEndpoint { .. }));
        assert!(err.to_string().contains("billing/nope"));
    }

    #[tokio::test]
    async fn record_paths_fall_back_to_their_collection_prefix() {
        let api = MockApi::new();
        let envelope = api
            .respond(
                &Method::GET,
                "/api/tenant/users/42",
                &no_query(),
                None,
                Role::TenantOwner,
            )
            .await
            .unwrap();
        assert!(envelope.success);
        assert!(envelope.meta.is_some());
    }

    #[tokio::test]
    async fn invoice_list_is_paginated() {
        let api = MockApi::new();
        let mut query = HashMap::new();
        query.insert("page".to_string(), "2".to_string());
        query.insert("limit".to_string(), "5".to_string());

        let envelope = api
            .respond(&Method::GET, "payment/invoices", &query, None, Role::User)
            .await
            .unwrap();
        let meta = envelope.meta.unwrap();
        assert_eq!(meta.page, 2);
        assert_eq!(meta.limit, 5);
        assert_eq!(meta.total, fixtures::invoices().len() as u64);

        let rows = envelope.data.unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn auth_me_follows_the_active_role() {
        let api = MockApi::new();
        let envelope = api
            .respond(&Method::GET, "auth/me", &no_query(), None, Role::TenantOwner)
            .await
            .unwrap();
        let data = envelope.data.unwrap();
        assert_eq!(data["role"], json!("tenant_owner"));
        assert_eq!(data["tenant"], json!("Acme Robotics"));
    }

    #[tokio::test]
    async fn preference_write_round_trips_into_the_profile() {
        let api = MockApi::new();

        let patch = json!({ "timezone": "Europe/Berlin", "invoiceEmails": false });
        api.respond(
            &Method::PUT,
            "user/preferences",
            &no_query(),
            Some(&patch),
            Role::User,
        )
        .await
        .unwrap();

        let profile = api
            .respond(&Method::GET, "user/profile", &no_query(), None, Role::User)
            .await
            .unwrap()
            .data
            .unwrap();
        assert_eq!(profile["preferences"]["timezone"], json!("Europe/Berlin"));
        assert_eq!(profile["preferences"]["invoiceEmails"], json!(false));
        // Untouched keys keep their defaults
        assert_eq!(profile["preferences"]["language"], json!("en"));
    }

    #[tokio::test]
    async fn checkout_requires_a_body() {
        let api = MockApi::new();
        let err = api
            .respond(&Method::POST, "payment/checkout", &no_query(), None, Role::User)
            .await
            .unwrap_err();
        assert!(matches!(err, MockError::InvalidBody(_)));
    }
}
