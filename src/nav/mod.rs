//! The sidebar: a static, hand-authored tree filtered by the active demo
//! role, with per-section expand/collapse flags persisted in the state store.

use crate::router::Page;
use crate::types::Role;

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon-font class
    pub icon: &'static str,
    pub roles: &'static [Role],
    pub items: &'static [NavItem],
}

pub static NAV_TREE: &[NavSection] = &[
    NavSection {
        id: "overview",
        label: "Overview",
        icon: "fa-gauge",
        roles: Role::ALL,
        items: &[NavItem {
            page: Page::Dashboard,
            label: "Dashboard",
        }],
    },
    NavSection {
        id: "billing",
        label: "Billing",
        icon: "fa-file-invoice-dollar",
        roles: Role::ALL,
        items: &[NavItem {
            page: Page::Billing,
            label: "Plans & Invoices",
        }],
    },
    NavSection {
        id: "management",
        label: "Management",
        icon: "fa-building-user",
        roles: &[Role::SuperAdmin],
        items: &[
            NavItem {
                page: Page::Tenant,
                label: "Tenants",
            },
            NavItem {
                page: Page::AdminPayments,
                label: "Payments Ledger",
            },
        ],
    },
    NavSection {
        id: "workspace",
        label: "Workspace",
        icon: "fa-people-group",
        roles: &[Role::TenantOwner],
        items: &[NavItem {
            page: Page::Tenant,
            label: "Team & Tenant",
        }],
    },
    NavSection {
        id: "finance",
        label: "Finance",
        icon: "fa-sack-dollar",
        roles: &[Role::TenantOwner],
        items: &[NavItem {
            page: Page::TenantFinance,
            label: "Balance & Payouts",
        }],
    },
    NavSection {
        id: "payments",
        label: "Payments",
        icon: "fa-credit-card",
        roles: &[Role::User],
        items: &[NavItem {
            page: Page::UserPayments,
            label: "My Payments",
        }],
    },
    NavSection {
        id: "account",
        label: "Account",
        icon: "fa-user-gear",
        roles: Role::ALL,
        items: &[NavItem {
            page: Page::Profile,
            label: "Profile",
        }],
    },
];

/// The subtree the given role is allowed to see
pub fn sections_for(role: Role) -> Vec<&'static NavSection> {
    NAV_TREE
        .iter()
        .filter(|section| section.roles.contains(&role))
        .collect()
}

pub fn section_ids_for(role: Role) -> Vec<&'static str> {
    sections_for(role).iter().map(|s| s.id).collect()
}

/// Render the sidebar HTML. A section shows its items when it has been
/// expanded or when it contains the active page.
pub fn render_sidebar(role: Role, active: Page, expanded: &[String]) -> String {
    let mut html = String::from(r#"<nav class="mt-4 space-y-1" id="sidebar-nav">"#);

    for section in sections_for(role) {
        let is_open = expanded.iter().any(|id| id == section.id)
            || section.items.iter().any(|item| item.page == active);
        let chevron = if is_open { "fa-chevron-down" } else { "fa-chevron-right" };

        html.push_str(&format!(
            r#"<div class="px-3" data-section="{id}">
  <button class="w-full flex items-center justify-between px-2 py-2 text-xs font-semibold uppercase tracking-wider text-slate-400 hover:text-slate-200" onclick="toggleSection('{id}')">
    <span><i class="fa-solid {icon} mr-2"></i>{label}</span>
    <i class="fa-solid {chevron} text-[10px]"></i>
  </button>"#,
            id = section.id,
            icon = section.icon,
            label = section.label,
            chevron = chevron,
        ));

        if is_open {
            html.push_str("<ul class=\"mb-2\">");
            for item in section.items {
                let active_class = if item.page == active {
                    "bg-slate-800 text-white"
                } else {
                    "text-slate-300 hover:bg-slate-800/60"
                };
                html.push_str(&format!(
                    r#"<li><a href="/console/{slug}" class="block rounded px-4 py-2 text-sm {active_class}">{label}</a></li>"#,
                    slug = item.page.slug(),
                    active_class = active_class,
                    label = item.label,
                ));
            }
            html.push_str("</ul>");
        }

        html.push_str("</div>");
    }

    html.push_str("</nav>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_sees_exactly_its_sections() {
        assert_eq!(
            section_ids_for(Role::SuperAdmin),
            vec!["overview", "billing", "management", "account"]
        );
        assert_eq!(
            section_ids_for(Role::TenantOwner),
            vec!["overview", "billing", "workspace", "finance", "account"]
        );
        assert_eq!(
            section_ids_for(Role::User),
            vec!["overview", "billing", "payments", "account"]
        );
    }

    #[test]
    fn user_role_never_sees_admin_or_management() {
        let ids = section_ids_for(Role::User);
        assert!(!ids.contains(&"management"));
        assert!(!ids.contains(&"admin"));
    }

    #[test]
    fn every_section_item_is_visible_for_the_section_roles() {
        for section in NAV_TREE {
            for role in section.roles {
                for item in section.items {
                    assert!(
                        item.page.visible_for(*role),
                        "{} links {} which {} cannot view",
                        section.id,
                        item.page.slug(),
                        role
                    );
                }
            }
        }
    }

    #[test]
    fn sidebar_marks_active_page_and_collapsed_sections() {
        let html = render_sidebar(Role::SuperAdmin, Page::Dashboard, &[]);
        // Active section renders its items even when not explicitly expanded
        assert!(html.contains("/console/dashboard"));
        // Collapsed management section hides its links
        assert!(!html.contains("/console/admin-payments"));

        let html = render_sidebar(
            Role::SuperAdmin,
            Page::Dashboard,
            &["management".to_string()],
        );
        assert!(html.contains("/console/admin-payments"));
    }
}
