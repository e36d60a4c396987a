use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_short_url_handler, current_timestamp_handler, health_handler, hello_handler,
    redirect_handler, timestamp_handler, whoami_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api",
                Router::new()
                    .route("/hello", get(hello_handler))
                    .route("/whoami", get(whoami_handler))
                    .route("/timestamp", get(current_timestamp_handler))
                    .route("/timestamp/{ts}", get(timestamp_handler))
                    .route("/shorturl/new", post(create_short_url_handler))
                    .route("/shorturl/{hash}", get(redirect_handler)),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }
}
