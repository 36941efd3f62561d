#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use boolean_portal::config::Config;
use boolean_portal::routes::portal_router;
use boolean_portal::state::AppState;
use serde_json::{Value, json};
use std::net::SocketAddr;
use tower::Layer;

pub const STUDENT_EMAIL: &str = "john.smith@boolean.edu";
pub const STUDENT_SECRET: &str = "student123";
pub const FACULTY_EMAIL: &str = "sarah.johnson@boolean.edu";
pub const FACULTY_SECRET: &str = "faculty123";
pub const ADMIN_EMAIL: &str = "michael.brown@boolean.edu";
pub const ADMIN_SECRET: &str = "admin123";

/// Supplies a peer address to handlers that extract `ConnectInfo`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
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
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Configuration with latency removed so tests run instantly.
pub fn test_config() -> Config {
    Config {
        login_delay_ms: 0,
        redirect_delay_secs: 0,
        ..Config::default()
    }
}

pub fn create_test_state(config: Config) -> AppState {
    AppState::with_demo_users(config).unwrap()
}

/// Test server over the full portal router that keeps cookies between
/// requests, like a browser would.
pub fn server_with(config: Config) -> (TestServer, AppState) {
    let state = create_test_state(config);
    let app = portal_router(state.clone()).layer(MockConnectInfoLayer);

    let server = TestServer::builder()
        .save_cookies()
        .build(app)
        .unwrap();

    (server, state)
}

pub fn server() -> TestServer {
    server_with(test_config()).0
}

pub fn login_form(email: &str, password: &str) -> Vec<(&'static str, String)> {
    vec![("email", email.to_string()), ("password", password.to_string())]
}

pub fn login_body(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password })
}
