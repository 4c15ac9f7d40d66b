//! # Café API Server
//!
//! HTTP surface for the café menu and contact-form services.

pub mod config;
pub mod handlers;
pub mod security;
pub mod utils;

use axum::{
    middleware,
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use cafe_core::services::{ContactService, MenuService};
use security::AccessPolicy;

pub fn build_router(
    menu_service: Arc<MenuService>,
    contact_service: Arc<ContactService>,
    access_policy: Arc<AccessPolicy>,
) -> Router {
    // Public routes (no token required)
    let public_routes = Router::new().route("/health", get(handlers::health::health_check));

    // Everything else requires the static bearer token
    let protected_routes = Router::new()
        .route(
            "/menu/categories/{mainCategory}",
            get(handlers::menu::get_categories),
        )
        .route(
            "/menu/items/{mainCategory}/{categoryId}",
            get(handlers::menu::get_items),
        )
        .route(
            "/menu/complete/{mainCategory}",
            get(handlers::menu::get_complete_menu),
        )
        .route("/menu/initialize", post(handlers::menu::initialize_menu))
        .route(
            "/menu/item",
            post(handlers::menu::create_item)
                .put(handlers::menu::update_item)
                .delete(handlers::menu::delete_item),
        )
        .route("/menu/category", put(handlers::menu::update_category))
        .route("/contact/submit", post(handlers::contact::submit))
        .route(
            "/contact/submissions",
            get(handlers::contact::list_submissions),
        )
        .layer(middleware::from_fn(security::middleware::require_bearer))
        .layer(Extension(access_policy));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(menu_service))
        .layer(Extension(contact_service))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
