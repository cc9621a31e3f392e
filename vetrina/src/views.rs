use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{error, warn};
use vetrina_views::{ViewEvent, ViewStore};

use crate::catalog::Product;

/// What the detail page knows about a product's popularity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCount {
    Counted(u64),
    /// The store could not answer; the page renders without a number.
    Unavailable,
}

/// Fire-and-forget half of the enrichment flow.
///
/// Events go through a bounded queue that a single worker drains into the
/// store, one best-effort insert each. When the queue is full the newest
/// event is dropped and the drop is logged.
#[derive(Debug, Clone)]
pub struct Recorder {
    tx: mpsc::Sender<ViewEvent>,
}

impl Recorder {
    /// Spawns the drain worker. `capacity` bounds the queue and must be at
    /// least one.
    pub fn spawn(store: ViewStore, capacity: usize) -> Self {
        let (tx, mut rx) = mpsc::channel(capacity);

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                if let Err(err) = store.insert(event).await {
                    error!("record view failed: {err}");
                }
            }
        });

        Self { tx }
    }

    /// Queue a view of an already-resolved product. Taking the product
    /// rather than a bare id ties every event to a successful lookup.
    pub fn record(&self, product: &Product) {
        let event = ViewEvent::new(product.id, product.name.as_str());

        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(product_id = event.product_id, "record queue full, view dropped");
            }
            Err(TrySendError::Closed(event)) => {
                error!(product_id = event.product_id, "record worker gone, view dropped");
            }
        }
    }
}
