//! Sample catalog inserted on first start

use tracing::info;

use crate::database::Store;
use crate::error::StoreError;
use crate::model::{DigitalProduct, DigitalProductCreate};

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The four products offered by a fresh store
pub fn sample_products() -> Vec<DigitalProductCreate> {
    vec![
        DigitalProductCreate {
            title: "AI Business Transformation Guide".to_string(),
            description: "Complete guide to implementing AI in your business operations".to_string(),
            kind: "E-book".to_string(),
            price: 49.99,
            original_price: Some(79.99),
            features: features(&["150+ pages", "Case studies", "Implementation templates", "Video tutorials"]),
            image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995".to_string(),
            rating: 4.9,
            is_bestseller: true,
            is_subscription: false,
            category: "AI".to_string(),
        },
        DigitalProductCreate {
            title: "Complete Web Development Masterclass".to_string(),
            description: "Master modern web development with React, Node.js, and more".to_string(),
            kind: "Course".to_string(),
            price: 199.99,
            original_price: Some(299.99),
            features: features(&["40+ hours content", "Hands-on projects", "Lifetime access", "Certificate"]),
            image_url: "https://images.unsplash.com/photo-1654618977232-a6c6dea9d1e8".to_string(),
            rating: 4.8,
            is_bestseller: false,
            is_subscription: false,
            category: "Web Development".to_string(),
        },
        DigitalProductCreate {
            title: "Digital Marketing Automation Toolkit".to_string(),
            description: "Automate your marketing with proven templates and strategies".to_string(),
            kind: "Course + Templates".to_string(),
            price: 149.99,
            original_price: Some(199.99),
            features: features(&["50+ templates", "Automation workflows", "Analytics dashboards", "Support"]),
            image_url: "https://images.unsplash.com/photo-1666698809123-44e998e93f23".to_string(),
            rating: 4.7,
            is_bestseller: false,
            is_subscription: false,
            category: "Marketing".to_string(),
        },
        DigitalProductCreate {
            title: "Premium Agency Subscription".to_string(),
            description: "Monthly access to all courses, templates, and exclusive content".to_string(),
            kind: "Subscription".to_string(),
            price: 97.00,
            original_price: None,
            features: features(&["All courses included", "Monthly new content", "Live Q&A sessions", "Priority support"]),
            image_url: "https://images.unsplash.com/photo-1519389950473-47ba0277781c".to_string(),
            rating: 4.9,
            is_bestseller: false,
            is_subscription: true,
            category: "Subscription".to_string(),
        },
    ]
}

/// Inserts the sample catalog when the product collection is empty and
/// returns how many products were written.
///
/// The emptiness check and the insert are separate transactions, so two
/// instances starting at once against the same file could both seed.
pub async fn seed_products(store: &Store) -> Result<usize, StoreError> {
    let existing = store.count(|_: &DigitalProduct| true).await?;
    if existing > 0 {
        info!(existing, "product catalog already populated, skipping seed");
        return Ok(0);
    }

    let products: Vec<DigitalProduct> = sample_products().into_iter().map(DigitalProduct::from).collect();
    let inserted = store.insert_many(&products).await?;

    info!(inserted, "sample digital products created");
    Ok(inserted)
}
