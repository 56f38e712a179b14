use crate::handlers;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::Router;
use distill_app::domain::ENDPOINTS;
use distill_app::AppContext;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(ctx: AppContext) -> Router {
    let mut router = Router::new().route("/api/health", get(handlers::health));

    for endpoint in ENDPOINTS {
        router = router.route(
            endpoint.path,
            get(handlers::greeting).post(
                move |State(ctx): State<AppContext>, headers: HeaderMap, body: Bytes| {
                    handlers::generate(ctx, endpoint, headers, body)
                },
            ),
        );
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(ctx)
}
