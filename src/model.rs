//! Data models for the agency API
//!
//! Each entity comes as a pair: a `*Create` shape accepted from request bodies
//! and the full record that is stored and returned. The `From<*Create>`
//! conversions are the only place where identifiers, timestamps and default
//! field values are filled in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::{Collection, Document};

pub const CONTACT_STATUS_NEW: &str = "new";
pub const SUBSCRIPTION_STATUS_ACTIVE: &str = "active";
pub const INQUIRY_STATUS_PENDING: &str = "pending";

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_rating() -> f64 {
    5.0
}

fn default_true() -> bool {
    true
}

/// A contact form submission from the public website
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactForm {
    /// Generated UUID v4, never reused
    pub id: String,

    /// Visitor's name as typed in the form
    pub name: String,

    /// Reply address; logged as the notification for the team
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,

    /// Service the visitor is interested in, free text
    pub service: Option<String>,
    pub message: String,

    /// Budget bracket picked in the form, e.g. "$5k-$10k"
    pub budget: Option<String>,

    /// Server time of the submission (UTC)
    pub timestamp: DateTime<Utc>,

    /// Always "new"; no route transitions it yet
    pub status: String,
}

/// Request payload for `POST /api/contact`
///
/// # Example
/// ```json
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "message": "We need a new website",
///   "company": "Acme"  // Optional
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ContactFormCreate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub budget: Option<String>,
}

impl From<ContactFormCreate> for ContactForm {
    fn from(input: ContactFormCreate) -> Self {
        Self {
            id: new_id(),
            name: input.name,
            email: input.email,
            company: input.company,
            phone: input.phone,
            service: input.service,
            message: input.message,
            budget: input.budget,
            timestamp: Utc::now(),
            status: CONTACT_STATUS_NEW.to_string(),
        }
    }
}

impl Document for ContactForm {
    const COLLECTION: Collection = Collection::ContactForms;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Newsletter subscription. The email is unique across the collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsletterSubscription {
    pub id: String,

    /// Unique across active and inactive subscriptions
    pub email: String,
    pub name: Option<String>,
    pub timestamp: DateTime<Utc>,

    /// "active" on creation
    pub status: String,
}

/// Request payload for `POST /api/newsletter/subscribe`
///
/// # Example
/// ```json
/// {
///   "email": "reader@example.com",
///   "name": "Reader"  // Optional
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewsletterSubscriptionCreate {
    /// Address to subscribe; rejected if it is already in the collection
    pub email: String,

    /// Optional display name, not part of the uniqueness check
    pub name: Option<String>,
}

impl From<NewsletterSubscriptionCreate> for NewsletterSubscription {
    fn from(input: NewsletterSubscriptionCreate) -> Self {
        Self {
            id: new_id(),
            email: input.email,
            name: input.name,
            timestamp: Utc::now(),
            status: SUBSCRIPTION_STATUS_ACTIVE.to_string(),
        }
    }
}

impl Document for NewsletterSubscription {
    const COLLECTION: Collection = Collection::NewsletterSubscriptions;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Inquiry about one of the agency's services
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceInquiry {
    pub id: String,
    pub service_id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub project_details: String,
    pub budget_range: Option<String>,
    pub timeline: Option<String>,
    pub timestamp: DateTime<Utc>,

    /// "pending" on creation
    pub status: String,
}

/// Request payload for `POST /api/services/inquiry`
///
/// # Example
/// ```json
/// {
///   "service_id": "ai-integration",
///   "client_name": "John Smith",
///   "client_email": "john@example.com",
///   "project_details": "Chatbot for our support desk",
///   "timeline": "3 months"  // Optional
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServiceInquiryCreate {
    /// Slug of the service on the website, e.g. "web-development"
    pub service_id: String,
    pub client_name: String,
    pub client_email: String,

    /// Optional phone number for a callback
    pub client_phone: Option<String>,

    /// Free-text description of the project
    pub project_details: String,

    /// Budget bracket picked in the form
    pub budget_range: Option<String>,

    /// Expected delivery window, free text
    pub timeline: Option<String>,
}

impl From<ServiceInquiryCreate> for ServiceInquiry {
    fn from(input: ServiceInquiryCreate) -> Self {
        Self {
            id: new_id(),
            service_id: input.service_id,
            client_name: input.client_name,
            client_email: input.client_email,
            client_phone: input.client_phone,
            project_details: input.project_details,
            budget_range: input.budget_range,
            timeline: input.timeline,
            timestamp: Utc::now(),
            status: INQUIRY_STATUS_PENDING.to_string(),
        }
    }
}

impl Document for ServiceInquiry {
    const COLLECTION: Collection = Collection::ServiceInquiries;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Item of the digital store catalog
///
/// Products are soft-deleted through `is_active`; inactive products are never
/// served by the store routes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DigitalProduct {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Product kind as shown in the store, e.g. "E-book" or "Subscription"
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,

    /// Price before discount, shown struck through
    pub original_price: Option<f64>,

    /// Bullet points in display order
    pub features: Vec<String>,
    pub image_url: String,

    /// Star rating, 5.0 when not given
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_subscription: bool,
    pub category: String,

    /// Sort key of the catalog listing
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Catalog entry before an id and creation time are assigned
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DigitalProductCreate {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub features: Vec<String>,
    pub image_url: String,
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_subscription: bool,
    pub category: String,
}

impl From<DigitalProductCreate> for DigitalProduct {
    fn from(input: DigitalProductCreate) -> Self {
        Self {
            id: new_id(),
            title: input.title,
            description: input.description,
            kind: input.kind,
            price: input.price,
            original_price: input.original_price,
            features: input.features,
            image_url: input.image_url,
            rating: input.rating,
            is_bestseller: input.is_bestseller,
            is_subscription: input.is_subscription,
            category: input.category,
            created_at: Utc::now(),
            is_active: true,
        }
    }
}

impl Document for DigitalProduct {
    const COLLECTION: Collection = Collection::DigitalProducts;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Logged chat exchange. The response is fixed when the message is received.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub session_id: String,
    pub message: String,

    /// Canned reply sent back for `message`
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(input: ChatMessageCreate, response: &str) -> Self {
        Self {
            id: new_id(),
            session_id: input.session_id,
            message: input.message,
            response: response.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Request payload for `POST /api/chat`
///
/// # Example
/// ```json
/// {
///   "session_id": "b6f1c2",
///   "message": "How much does a website cost?"
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChatMessageCreate {
    /// Browser-generated id grouping the messages of one conversation
    pub session_id: String,

    /// What the visitor typed
    pub message: String,
}

impl Document for ChatMessage {
    const COLLECTION: Collection = Collection::ChatMessages;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Body returned by `POST /api/chat`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatReply {
    /// Canned reply picked for the message
    pub response: String,

    /// Echo of the request's session id
    pub session_id: String,

    /// Time the reply was produced (UTC)
    pub timestamp: DateTime<Utc>,
}

/// Legacy status check, kept for older clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Request payload for `POST /api/status`
///
/// # Example
/// ```json
/// { "client_name": "uptime-monitor" }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StatusCheckCreate {
    /// Name of the client reporting in
    pub client_name: String,
}

impl From<StatusCheckCreate> for StatusCheck {
    fn from(input: StatusCheckCreate) -> Self {
        Self {
            id: new_id(),
            client_name: input.client_name,
            timestamp: Utc::now(),
        }
    }
}

impl Document for StatusCheck {
    const COLLECTION: Collection = Collection::StatusChecks;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Aggregate counters returned by `GET /api/analytics/overview`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyticsOverview {
    pub contact_forms: u64,

    /// Subscriptions whose status is "active"
    pub newsletter_subscribers: u64,
    pub service_inquiries: u64,
    pub chat_interactions: u64,
    pub generated_at: DateTime<Utc>,
}
