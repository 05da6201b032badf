#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;

use axum::{Router, middleware, routing::get};
use chrono::Utc;

use finyeza::api::handlers::redirect_handler;
use finyeza::api::middleware::auth::{self, ApiKey};
use finyeza::api::routes::protected_routes;
use finyeza::application::services::{AdminService, ClickRecorder, ResolverService};
use finyeza::domain::click_worker::run_click_worker;
use finyeza::domain::entities::{Link, LinkPatch};
use finyeza::domain::repositories::LinkStore;
use finyeza::infrastructure::persistence::MemoryLinkStore;
use finyeza::state::AppState;

pub const TEST_API_KEY: &str = "integration-test-key";
pub const TEST_BASE_URL: &str = "https://go.test";

/// Builds an [`AppState`] over an in-memory store with a live click worker.
///
/// Returns the store handle alongside the state so tests can seed records
/// and inspect what was persisted.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let store_dyn: Arc<dyn LinkStore> = store.clone();

    let (click_tx, click_rx) = mpsc::channel(1_000);
    tokio::spawn(run_click_worker(click_rx, store_dyn.clone()));

    let recorder = ClickRecorder::new(store_dyn.clone(), click_tx);

    let state = AppState {
        admin_service: Arc::new(AdminService::new(store_dyn.clone())),
        resolver_service: Arc::new(ResolverService::new(store_dyn, recorder)),
        api_key: ApiKey::new(TEST_API_KEY),
        base_url: TEST_BASE_URL.to_string(),
        behind_proxy: false,
    };

    (state, store)
}

/// Injects a fixed peer address so `ConnectInfo` extraction works without a
/// real TCP connection.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: std::net::SocketAddr = "203.0.113.9:12345".parse().unwrap();
        req.extensions_mut()
            .insert(axum::extract::ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Router exposing only the public redirect route.
pub fn redirect_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

/// Router exposing the protected API under `/api`, auth enforced.
pub fn api_router(state: AppState) -> Router {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new().nest("/api", protected).with_state(state)
}

/// Seeds a link directly into the store.
pub async fn seed_link(store: &MemoryLinkStore, code: &str, destination: &str, enabled: bool) {
    store
        .create(Link::new(code.to_string(), destination.to_string(), Utc::now()))
        .await
        .unwrap();

    if enabled {
        store
            .update_fields(code, LinkPatch::set_enabled(true, Utc::now()))
            .await
            .unwrap();
    }
}

/// Polls until the link has at least `min` recorded click events.
///
/// The click worker appends events asynchronously; the increment itself is
/// synchronous, but the telemetry row may land a moment later.
pub async fn wait_for_clicks(store: &MemoryLinkStore, code: &str, min: usize) {
    for _ in 0..100 {
        let clicks = store.recent_clicks(code, 1_000).await.unwrap();
        if clicks.len() >= min {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    panic!("expected at least {min} click events for '{code}'");
}
