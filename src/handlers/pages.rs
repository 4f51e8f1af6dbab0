// Console page handlers: resolve the slug, render the view for the active
// role, wrap it in the shell.

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::{demo_identity, ensure_demo_session};
use crate::nav;
use crate::router::Page;
use crate::server::AppState;
use crate::views::{self, shell};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// GET / - the console entry point
pub async fn index() -> Redirect {
    Redirect::to("/console/dashboard")
}

/// GET /console/:page
pub async fn console_page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let page = Page::or_default(&slug);
    let role = state.store.demo_role().await;

    // Auto-login keeps a valid token in the store; rendering continues on the
    // static identity even if minting fails
    let identity = match ensure_demo_session(&state.store).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::error!("demo session setup failed: {}", e);
            demo_identity(role)
        }
    };

    let content = if page.visible_for(role) {
        render_view(&state, page, &query).await
    } else {
        views::not_authorized_panel(page.title())
    };

    let expanded = state.store.expanded_sections().await;
    let sidebar = nav::render_sidebar(role, page, &expanded);
    let banner_hidden = state.store.banner_hidden().await;

    Html(shell::render(&shell::ShellContext {
        page,
        role,
        user_name: &identity.name,
        sidebar_html: &sidebar,
        content_html: &content,
        banner_hidden,
    }))
}

async fn render_view(state: &AppState, page: Page, query: &PageQuery) -> String {
    let client = &state.client;
    match page {
        Page::Dashboard => {
            let snapshot = state.dashboard.read().await.clone();
            views::dashboard::render(client, snapshot).await
        }
        Page::Billing => views::billing::render(client).await,
        Page::Profile => views::profile::render(client).await,
        Page::Tenant => views::tenant::render(client).await,
        Page::AdminPayments => {
            views::admin_payments::render(client, query.page.unwrap_or(1)).await
        }
        Page::TenantFinance => views::tenant_finance::render(client).await,
        Page::UserPayments => views::user_payments::render(client).await,
    }
}
