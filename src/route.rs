//! Route definitions for the agency API
//!
//! Every route is mounted under `/api`:
//!
//! - `GET  /api/` and `GET /api/health` - liveness
//! - `POST /api/contact`, `GET /api/contact` - contact forms
//! - `POST /api/newsletter/subscribe` - newsletter signups
//! - `POST /api/services/inquiry`, `GET /api/services/inquiries` - service inquiries
//! - `GET  /api/store/products`, `GET /api/store/products/{id}` - product catalog
//! - `POST /api/chat` - chat widget
//! - `GET  /api/analytics/overview` - aggregate counters
//! - `POST /api/status`, `GET /api/status` - legacy status checks

use axum::routing::{get, post};
use axum::Router;

use crate::database::AppState;
use crate::handler::{
    analytics_overview, chat, create_status_check, get_product, health_check, list_contact_forms,
    list_products, list_service_inquiries, list_status_checks, root, submit_contact_form,
    submit_service_inquiry, subscribe_newsletter,
};
use crate::middleware::cors_layer;

/// Builds the application router with CORS applied to every route
///
/// # Example Usage
///
/// ```no_run
/// # use opsvantage_api::database::{AppState, Store};
/// # use opsvantage_api::route::create_app;
/// # let store = Store::open("data.redb", "opsvantage").unwrap();
/// let app = create_app(AppState::new(store));
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/contact", get(list_contact_forms).post(submit_contact_form))
        .route("/newsletter/subscribe", post(subscribe_newsletter))
        .route("/services/inquiry", post(submit_service_inquiry))
        .route("/services/inquiries", get(list_service_inquiries))
        .route("/store/products", get(list_products))
        .route("/store/products/{id}", get(get_product))
        .route("/chat", post(chat))
        .route("/analytics/overview", get(analytics_overview))
        .route("/status", get(list_status_checks).post(create_status_check));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors_layer())
        .with_state(state)
}
