//! Page dispatch: a path segment maps to a view, a title, and a role
//! visibility check. Unknown segments fall back to the dashboard, matching
//! the old hash router.

use serde::{Deserialize, Serialize};

use crate::types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Billing,
    Profile,
    Tenant,
    AdminPayments,
    TenantFinance,
    UserPayments,
}

impl Page {
    pub const ALL: &'static [Page] = &[
        Page::Dashboard,
        Page::Billing,
        Page::Profile,
        Page::Tenant,
        Page::AdminPayments,
        Page::TenantFinance,
        Page::UserPayments,
    ];

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|p| p.slug() == slug)
    }

    /// Hash-router behavior: anything unrecognized lands on the dashboard
    pub fn or_default(slug: &str) -> Page {
        Page::from_slug(slug).unwrap_or(Page::Dashboard)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Billing => "billing",
            Page::Profile => "profile",
            Page::Tenant => "tenant",
            Page::AdminPayments => "admin-payments",
            Page::TenantFinance => "tenant-finance",
            Page::UserPayments => "user-payments",
        }
    }

    /// Static title lookup, used for both the document title and the heading
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Billing => "Billing & Plans",
            Page::Profile => "Your Profile",
            Page::Tenant => "Tenant Management",
            Page::AdminPayments => "Payments Ledger",
            Page::TenantFinance => "Finance",
            Page::UserPayments => "My Payments",
        }
    }

    /// Mirror of the navigation tree; a visibility check, not enforcement
    pub fn visible_for(self, role: Role) -> bool {
        match self {
            Page::Dashboard | Page::Billing | Page::Profile => true,
            Page::Tenant => matches!(role, Role::SuperAdmin | Role::TenantOwner),
            Page::AdminPayments => matches!(role, Role::SuperAdmin),
            Page::TenantFinance => matches!(role, Role::TenantOwner),
            Page::UserPayments => matches!(role, Role::User),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(*page));
        }
    }

    #[test]
    fn unknown_slug_falls_back_to_dashboard() {
        assert_eq!(Page::or_default("no-such-page"), Page::Dashboard);
        assert_eq!(Page::or_default(""), Page::Dashboard);
    }

    #[test]
    fn titles_match_the_static_table() {
        assert_eq!(Page::Dashboard.title(), "Dashboard");
        assert_eq!(Page::AdminPayments.title(), "Payments Ledger");
        assert_eq!(Page::TenantFinance.title(), "Finance");
    }

    #[test]
    fn role_visibility_mirrors_navigation() {
        assert!(Page::AdminPayments.visible_for(Role::SuperAdmin));
        assert!(!Page::AdminPayments.visible_for(Role::User));
        assert!(!Page::TenantFinance.visible_for(Role::SuperAdmin));
        assert!(Page::UserPayments.visible_for(Role::User));
        for page in Page::ALL {
            // Every page is reachable by at least one role
            assert!(Role::ALL.iter().any(|r| page.visible_for(*r)));
        }
    }
}
