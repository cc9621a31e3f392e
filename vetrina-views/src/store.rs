use crate::{engine::Engine, error::Result, event::ViewEvent};

/// Handle to a view-event store.
///
/// Clonable and cheap to pass around; the engine behind it decides where the
/// events actually live.
#[derive(Clone)]
pub struct ViewStore {
    engine: Box<dyn Engine>,
}

impl ViewStore {
    pub fn new<E: Engine + 'static>(engine: E) -> Self {
        Self {
            engine: Box::new(engine),
        }
    }

    pub async fn insert(&self, event: ViewEvent) -> Result<()> {
        self.engine.insert(event).await
    }

    pub async fn count(&self, product_id: u32) -> Result<u64> {
        self.engine.count(product_id).await
    }
}
