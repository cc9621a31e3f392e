use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use vetrina_views::{Engine, Result as StoreResult, StoreError, ViewEvent, ViewStore};

/// Polls until the stored count reaches `expected` or two seconds pass.
pub async fn wait_for_count(store: &ViewStore, product_id: u32, expected: u64) {
    for _ in 0..40 {
        if store.count(product_id).await.unwrap() == expected {
            return;
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    panic!("count for product {product_id} never reached {expected}");
}

/// Engine that always fails, for exercising the degraded read path.
#[derive(Clone)]
pub struct FailingEngine;

#[async_trait]
impl Engine for FailingEngine {
    async fn insert(&self, _event: ViewEvent) -> StoreResult<()> {
        Err(StoreError::Any(anyhow!("store is down")))
    }

    async fn count(&self, _product_id: u32) -> StoreResult<u64> {
        Err(StoreError::Any(anyhow!("store is down")))
    }
}
