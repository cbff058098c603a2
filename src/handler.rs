//! HTTP request handlers for the agency API
//!
//! Request bodies are validated by shape through the `Json` extractor before a
//! handler runs; a missing or mistyped field never reaches this module.
//! Each handler makes at most a few store calls and returns either the full
//! record or an [`ApiError`]. Storage failures are logged here, with the
//! identifier that triggered them, and answered with an opaque message.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::database::{AppState, Sort};
use crate::error::{ApiError, StoreError};
use crate::model::{
    AnalyticsOverview, ChatMessage, ChatMessageCreate, ChatReply, ContactForm, ContactFormCreate,
    DigitalProduct, NewsletterSubscription, NewsletterSubscriptionCreate, ServiceInquiry,
    ServiceInquiryCreate, StatusCheck, StatusCheckCreate, SUBSCRIPTION_STATUS_ACTIVE,
};
use crate::responder::respond;

/// Cap on list endpoints
pub const LIST_LIMIT: usize = 100;

/// Cap on the legacy status check listing
pub const STATUS_LIST_LIMIT: usize = 1000;

/// `GET /api/`
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "OpsVantage Digital API - Transforming businesses with AI-powered solutions"
    }))
}

/// `GET /api/health`
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
    }))
}

/// Stores a contact form submission
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "message": "We need a new website",
///   "budget": "$5k-$10k"  // Optional
/// }
/// ```
///
/// # Response
///
/// - **200 OK** - the stored record, with `id`, `timestamp` and `status: "new"`
/// - **500 Internal Server Error** - storage failure
pub async fn submit_contact_form(
    State(state): State<AppState>,
    Json(payload): Json<ContactFormCreate>,
) -> Result<Json<ContactForm>, ApiError> {
    let form = ContactForm::from(payload);

    state.store.insert(&form).await.map_err(|err| {
        error!(email = %form.email, error = %err, "error submitting contact form");
        ApiError::Internal("Failed to submit contact form")
    })?;

    // There is no mail transport; the team is notified through this log line.
    info!(email = %form.email, "new contact form submission");

    Ok(Json(form))
}

/// Lists the latest contact form submissions
///
/// # Response
///
/// - **200 OK** - up to 100 records, newest first
/// - **500 Internal Server Error** - storage failure
pub async fn list_contact_forms(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactForm>>, ApiError> {
    let forms = state
        .store
        .find_many(|_: &ContactForm| true, Sort::NewestFirst, LIST_LIMIT)
        .await
        .map_err(|err| {
            error!(error = %err, "error retrieving contact forms");
            ApiError::Internal("Failed to retrieve contact forms")
        })?;

    Ok(Json(forms))
}

/// Subscribes an email address to the newsletter
///
/// # Request Body
///
/// ```json
/// {
///   "email": "reader@example.com",
///   "name": "Reader"  // Optional
/// }
/// ```
///
/// # Response
///
/// - **200 OK** - the new subscription, `status: "active"`
/// - **400 Bad Request** - the email is already subscribed
/// - **500 Internal Server Error** - storage failure
///
/// # Note
///
/// The duplicate check and the insert are not atomic. Two identical signups
/// racing each other can both succeed.
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(payload): Json<NewsletterSubscriptionCreate>,
) -> Result<Json<NewsletterSubscription>, ApiError> {
    let email = payload.email.clone();
    let storage_failure = |err: StoreError| {
        error!(email = %email, error = %err, "error subscribing to newsletter");
        ApiError::Internal("Failed to subscribe to newsletter")
    };

    let lookup = email.clone();
    let existing = state
        .store
        .find_one(move |sub: &NewsletterSubscription| sub.email == lookup)
        .await
        .map_err(storage_failure)?;
    if existing.is_some() {
        return Err(ApiError::AlreadySubscribed);
    }

    let subscription = NewsletterSubscription::from(payload);
    state.store.insert(&subscription).await.map_err(storage_failure)?;

    info!(email = %subscription.email, "new newsletter subscription");

    Ok(Json(subscription))
}

/// Stores an inquiry about one of the agency's services
///
/// # Request Body
///
/// ```json
/// {
///   "service_id": "ai-integration",
///   "client_name": "John Smith",
///   "client_email": "john@example.com",
///   "project_details": "Chatbot for our support desk",
///   "budget_range": "$10k+"  // Optional
/// }
/// ```
///
/// # Response
///
/// - **200 OK** - the stored record, `status: "pending"`
/// - **500 Internal Server Error** - storage failure
pub async fn submit_service_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<ServiceInquiryCreate>,
) -> Result<Json<ServiceInquiry>, ApiError> {
    let inquiry = ServiceInquiry::from(payload);

    state.store.insert(&inquiry).await.map_err(|err| {
        error!(
            email = %inquiry.client_email,
            service_id = %inquiry.service_id,
            error = %err,
            "error submitting service inquiry"
        );
        ApiError::Internal("Failed to submit service inquiry")
    })?;

    info!(
        email = %inquiry.client_email,
        service_id = %inquiry.service_id,
        "new service inquiry"
    );

    Ok(Json(inquiry))
}

/// Lists the latest service inquiries
///
/// # Response
///
/// - **200 OK** - up to 100 records, newest first
/// - **500 Internal Server Error** - storage failure
pub async fn list_service_inquiries(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceInquiry>>, ApiError> {
    let inquiries = state
        .store
        .find_many(|_: &ServiceInquiry| true, Sort::NewestFirst, LIST_LIMIT)
        .await
        .map_err(|err| {
            error!(error = %err, "error retrieving service inquiries");
            ApiError::Internal("Failed to retrieve service inquiries")
        })?;

    Ok(Json(inquiries))
}

/// Lists the store catalog
///
/// Inactive products are filtered out before the cap is applied, so they
/// never take a slot in the listing.
///
/// # Response
///
/// - **200 OK** - up to 100 active products, newest first
/// - **500 Internal Server Error** - storage failure
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<DigitalProduct>>, ApiError> {
    let products = state
        .store
        .find_many(|product: &DigitalProduct| product.is_active, Sort::NewestFirst, LIST_LIMIT)
        .await
        .map_err(|err| {
            error!(error = %err, "error retrieving digital products");
            ApiError::Internal("Failed to retrieve products")
        })?;

    Ok(Json(products))
}

/// Fetches one product. Inactive products are reported as not found.
///
/// # Path Parameters
///
/// - `id` - product identifier
///
/// # Response
///
/// - **200 OK** - the product
/// - **404 Not Found** - unknown id, or the product is inactive
/// - **500 Internal Server Error** - storage failure
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DigitalProduct>, ApiError> {
    let product = state
        .store
        .get::<DigitalProduct>(&id)
        .await
        .map_err(|err| {
            error!(product_id = %id, error = %err, "error retrieving product");
            ApiError::Internal("Failed to retrieve product")
        })?;

    product
        .filter(|product| product.is_active)
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

/// Answers a chat message and logs the exchange
///
/// The reply is chosen before anything is stored, but it is only returned once
/// the exchange has been persisted.
///
/// # Request Body
///
/// ```json
/// {
///   "session_id": "b6f1c2",
///   "message": "How much does a website cost?"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "response": "Our pricing varies based on project scope. ...",
///   "session_id": "b6f1c2",
///   "timestamp": "2026-01-17T13:40:00Z"
/// }
/// ```
///
/// - **500 Internal Server Error** - the exchange could not be stored
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatMessageCreate>,
) -> Result<Json<ChatReply>, ApiError> {
    let response = respond(&payload.message);
    let message = ChatMessage::new(payload, response);

    state.store.insert(&message).await.map_err(|err| {
        error!(session_id = %message.session_id, error = %err, "error processing chat message");
        ApiError::Internal("Failed to process message")
    })?;

    Ok(Json(ChatReply {
        response: message.response,
        session_id: message.session_id,
        timestamp: Utc::now(),
    }))
}

/// Counts the records of the business collections
///
/// The four counts run concurrently and are not taken from one snapshot.
///
/// # Response
///
/// ```json
/// {
///   "contact_forms": 12,
///   "newsletter_subscribers": 40,
///   "service_inquiries": 3,
///   "chat_interactions": 250,
///   "generated_at": "2026-01-17T13:40:00Z"
/// }
/// ```
pub async fn analytics_overview(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsOverview>, ApiError> {
    let store = &state.store;

    let counts = tokio::try_join!(
        store.count(|_: &ContactForm| true),
        store.count(|sub: &NewsletterSubscription| sub.status == SUBSCRIPTION_STATUS_ACTIVE),
        store.count(|_: &ServiceInquiry| true),
        store.count(|_: &ChatMessage| true),
    );

    let (contact_forms, newsletter_subscribers, service_inquiries, chat_interactions) =
        counts.map_err(|err| {
            error!(error = %err, "error retrieving analytics");
            ApiError::Internal("Failed to retrieve analytics")
        })?;

    Ok(Json(AnalyticsOverview {
        contact_forms,
        newsletter_subscribers,
        service_inquiries,
        chat_interactions,
        generated_at: Utc::now(),
    }))
}

/// `POST /api/status`, legacy
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(payload): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    let check = StatusCheck::from(payload);

    state.store.insert(&check).await.map_err(|err| {
        error!(client_name = %check.client_name, error = %err, "error creating status check");
        ApiError::Internal("Failed to create status check")
    })?;

    Ok(Json(check))
}

/// `GET /api/status`, legacy
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = state
        .store
        .find_many(|_: &StatusCheck| true, Sort::Natural, STATUS_LIST_LIMIT)
        .await
        .map_err(|err| {
            error!(error = %err, "error retrieving status checks");
            ApiError::Internal("Failed to retrieve status checks")
        })?;

    Ok(Json(checks))
}
