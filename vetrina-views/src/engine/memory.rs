use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::{engine::Engine, error::Result, event::ViewEvent};

#[derive(Debug, Clone, Default)]
pub struct Memory(Arc<RwLock<Vec<ViewEvent>>>);

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Engine for Memory {
    async fn insert(&self, event: ViewEvent) -> Result<()> {
        self.0.write().push(event);

        Ok(())
    }

    async fn count(&self, product_id: u32) -> Result<u64> {
        let count = self
            .0
            .read()
            .iter()
            .filter(|event| event.product_id == product_id)
            .count();

        Ok(count as u64)
    }
}
