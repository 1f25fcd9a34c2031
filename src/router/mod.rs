use crate::app::{App, shell};
use crate::model::AppState;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{AxumRouteListing, LeptosRoutes, file_and_error_handler};
use tower_http::trace::TraceLayer;

pub fn new(leptos_routes: Vec<AxumRouteListing>, app_state: AppState) -> Router {
    Router::new()
        .leptos_routes_with_context(
            &app_state,
            leptos_routes,
            {
                let state = app_state.clone();
                move || provide_context(state.clone())
            },
            {
                let options = app_state.leptos_options.clone();
                move || shell(options.clone())
            },
        )
        .fallback(file_and_error_handler::<AppState, _>(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Route list without starting a server, handy for checking what gets prerendered.
pub fn routes() -> Vec<AxumRouteListing> {
    leptos_axum::generate_route_list(App)
}
