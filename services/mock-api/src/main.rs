use tracing::info;

use tailmate_core::config::Config;
use tailmate_core::tracing::init_tracing;

use tailmate_mock_api::config::MockApiConfig;
use tailmate_mock_api::router::build_router;
use tailmate_mock_api::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = MockApiConfig::from_env();

    let router = build_router(AppState::with_system_clock());
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("mock api listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
