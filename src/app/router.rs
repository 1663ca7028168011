use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::handlers;
use crate::core::diagram::DiagramService;

pub const DIAGRAM_ROUTE: &str = "/phase-change-diagram";

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub service: DiagramService,
}

pub fn create_router() -> Router {
    create_router_with_state(AppState::default())
}

pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route(DIAGRAM_ROUTE, get(handlers::phase_change_diagram))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
