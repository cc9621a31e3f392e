use async_trait::async_trait;
use dyn_clone::DynClone;

use crate::{error::Result, event::ViewEvent};

#[cfg(feature = "influx")]
mod influx;
#[cfg(feature = "memory")]
mod memory;

#[cfg(feature = "influx")]
pub use influx::*;
#[cfg(feature = "memory")]
pub use memory::*;

/// Storage backend for view events.
///
/// `insert` appends a single event (the sink half); `count` aggregates the
/// number of events recorded for one product (the reader half). A store with
/// no events for the given product answers `Ok(0)`; an `Err` always means
/// the count could not be determined.
#[async_trait]
pub trait Engine: DynClone + Send + Sync {
    async fn insert(&self, event: ViewEvent) -> Result<()>;

    async fn count(&self, product_id: u32) -> Result<u64>;
}

dyn_clone::clone_trait_object!(Engine);
