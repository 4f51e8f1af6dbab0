//! Application state and router assembly.

use std::sync::Arc;

use axum::{
    routing::{any, get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::ensure_demo_session;
use crate::client::GatewayClient;
use crate::config::config;
use crate::handlers::{api, pages, system};
use crate::mock::MockApi;
use crate::state::StateStore;
use crate::views::dashboard::DashboardData;

pub struct AppState {
    pub store: Arc<StateStore>,
    pub mock: Arc<MockApi>,
    pub client: GatewayClient,
    /// Periodically refreshed dashboard snapshot; None until the first fetch
    pub dashboard: RwLock<Option<DashboardData>>,
}

pub async fn build_state() -> anyhow::Result<Arc<AppState>> {
    let cfg = config();

    let store = Arc::new(StateStore::load(&cfg.demo.state_file));
    let identity = ensure_demo_session(&store).await?;
    tracing::info!(
        "console session ready for {} ({})",
        identity.name,
        identity.role
    );

    let mock = Arc::new(MockApi::new());
    let client = GatewayClient::from_config(mock.clone(), store.clone()).await?;

    Ok(Arc::new(AppState {
        store,
        mock,
        client,
        dashboard: RwLock::new(None),
    }))
}

pub fn app(state: Arc<AppState>) -> Router {
    let router = Router::new()
        // Console pages
        .route("/", get(pages::index))
        .route("/console/:page", get(pages::console_page))
        // Liveness
        .route("/health", get(system::health))
        // Console chrome mutations, registered before the catch-all
        .merge(console_ops_routes())
        // Demo backend
        .merge(mock_api_routes())
        .with_state(state);

    let router = if config().security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

fn console_ops_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/nav/toggle", post(api::nav_toggle))
        .route("/api/demo/role", put(api::demo_role))
        .route("/api/banner/hide", post(api::banner_hide))
}

fn mock_api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/*endpoint", any(api::dispatch))
}
