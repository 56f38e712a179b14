use distill_api::build_router;
use distill_app::domain::ENDPOINTS;
use distill_app::{AppConfig, AppContext};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");
    tracing::debug!(?config, "Loaded configuration");

    let app_context = AppContext::new(&config);
    let app = build_router(app_context);

    for endpoint in ENDPOINTS {
        tracing::info!(
            "Registered POST {} ({}{})",
            endpoint.path,
            endpoint.template,
            if endpoint.structured { ", json mode" } else { "" }
        );
    }

    tracing::info!("Listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
