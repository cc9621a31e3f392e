mod common;

use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use async_trait::async_trait;
use common::{wait_for_count, FailingEngine};
use tokio::{sync::Semaphore, time::sleep};
use vetrina::{catalog::Catalog, views::Recorder};
use vetrina_views::{Engine, Memory, Result as StoreResult, StoreError, ViewEvent, ViewStore};

/// Memory engine whose inserts block until permits are released.
#[derive(Clone)]
struct GatedEngine {
    inner: Memory,
    gate: Arc<Semaphore>,
}

impl GatedEngine {
    fn new() -> Self {
        Self {
            inner: Memory::new(),
            gate: Arc::new(Semaphore::new(0)),
        }
    }

    fn release(&self, permits: usize) {
        self.gate.add_permits(permits);
    }
}

#[async_trait]
impl Engine for GatedEngine {
    async fn insert(&self, event: ViewEvent) -> StoreResult<()> {
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|err| StoreError::Any(anyhow!(err)))?;
        permit.forget();

        self.inner.insert(event).await
    }

    async fn count(&self, product_id: u32) -> StoreResult<u64> {
        self.inner.count(product_id).await
    }
}

#[tokio::test]
async fn recorder_inserts_resolved_views() {
    let store = ViewStore::new(Memory::new());
    let recorder = Recorder::spawn(store.clone(), 8);
    let camera = Catalog::demo().get(1).unwrap();

    recorder.record(&camera);
    recorder.record(&camera);

    wait_for_count(&store, 1, 2).await;
}

#[tokio::test]
async fn failing_sink_never_reaches_the_caller() {
    let store = ViewStore::new(FailingEngine);
    let recorder = Recorder::spawn(store, 8);
    let watch = Catalog::demo().get(0).unwrap();

    // Nothing to observe beyond "does not panic or block": the worker eats
    // the failure and logs it.
    recorder.record(&watch);
    sleep(Duration::from_millis(50)).await;
}

#[tokio::test]
async fn full_queue_drops_the_overflow() {
    let engine = GatedEngine::new();
    let store = ViewStore::new(engine.clone());
    let recorder = Recorder::spawn(store.clone(), 1);
    let toy = Catalog::demo().get(3).unwrap();

    // Capacity one and a blocked sink: at most one event in flight plus one
    // queued, so the third view has nowhere to go.
    recorder.record(&toy);
    recorder.record(&toy);
    recorder.record(&toy);

    engine.release(3);

    for _ in 0..40 {
        if store.count(3).await.unwrap() >= 1 {
            break;
        }

        sleep(Duration::from_millis(50)).await;
    }

    // Give any queued event time to land before counting.
    sleep(Duration::from_millis(100)).await;

    let count = store.count(3).await.unwrap();

    assert!(count >= 1, "no view was recorded at all");
    assert!(count <= 2, "overflow view was not dropped (count {count})");
}
