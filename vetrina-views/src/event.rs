use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded product-detail render.
///
/// The product name is a denormalized copy taken at record time; the
/// timestamp is captured when the value is constructed, not when the
/// triggering request arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEvent {
    pub product_id: u32,
    pub product_name: String,
    pub recorded_at: DateTime<Utc>,
}

impl ViewEvent {
    pub fn new(product_id: u32, product_name: impl Into<String>) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            recorded_at: Utc::now(),
        }
    }
}
