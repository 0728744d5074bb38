//! # Serialized Store
//!
//! This module defines [`StoreActor`], a task that owns a store and runs the operations
//! sent to it one at a time, and [`Serialized`], the cloneable handle that sends them.
//!
//! Wrapping a file store this way gives each file an exclusive region: an operation's
//! read, mutation and write all finish before the next queued operation starts reading.
//! The handle implements the same [`RecordStore`] / [`SingleRecordStore`] traits as the
//! store it wraps, so callers cannot tell the difference.
//!
//! # Usage Pattern
//!
//! 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and the handle.
//! 2.  **Run**: Spawn the actor's run loop in a background task.
//! 3.  **Use**: Clone the handle freely; drop every clone to stop the task.
//!
//! ```rust
//! use shop_records::domain::{Product, ProductCreate};
//! use shop_records::framework::{MemoryStore, RecordStore, StoreActor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, store) = StoreActor::new(MemoryStore::<Product>::new(), 16);
//!     tokio::spawn(actor.run());
//!
//!     let created = store.insert(ProductCreate::default()).await.unwrap();
//!     assert_eq!(store.get(&created.id).await.unwrap(), created);
//! }
//! ```

use crate::framework::entity::Record;
use crate::framework::error::{StoreError, StoreResult};
use crate::framework::store::{RecordStore, SingleRecordStore};
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// How concurrent operations on one file are coordinated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteDiscipline {
    /// No coordination. Overlapping mutations can lose updates.
    #[default]
    Unguarded,
    /// Every operation on a file runs inside that file's [`StoreActor`], one at a time.
    Serialized,
}

impl std::str::FromStr for WriteDiscipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unguarded" => Ok(Self::Unguarded),
            "serialized" => Ok(Self::Serialized),
            other => Err(format!("expected `unguarded` or `serialized`, got `{other}`")),
        }
    }
}

/// A unit of work queued to a [`StoreActor`].
type Job<S> = Box<dyn FnOnce(Arc<S>) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send>;

/// Owns a store and processes queued operations sequentially.
///
/// **Concurrency Model**:
/// Each store task processes its own queue *sequentially*, so two operations on the
/// same file never overlap. Different files get different tasks and run in parallel.
pub struct StoreActor<S> {
    receiver: mpsc::Receiver<Job<S>>,
    store: Arc<S>,
}

impl<S: Send + Sync + 'static> StoreActor<S> {
    /// Creates a store task around `store` and the handle that feeds it.
    ///
    /// `buffer_size` is the queue capacity; when it is full, callers wait for space.
    pub fn new(store: S, buffer_size: usize) -> (Self, Serialized<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: Arc::new(store),
        };
        (actor, Serialized { sender })
    }

    /// Runs queued operations until every handle has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "FileStore<Product>")
        let store_type = std::any::type_name::<S>()
            .split('<')
            .next()
            .and_then(|path| path.split("::").last())
            .unwrap_or("Unknown");
        info!(store_type, "Store task started");

        let mut handled: u64 = 0;
        while let Some(job) = self.receiver.recv().await {
            job(Arc::clone(&self.store)).await;
            handled += 1;
        }

        info!(store_type, handled, "Shutdown");
    }
}

/// A cloneable handle that runs store operations inside a [`StoreActor`].
pub struct Serialized<S> {
    sender: mpsc::Sender<Job<S>>,
}

impl<S> Clone for Serialized<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Send + Sync + 'static> Serialized<S> {
    /// Queues `op` and waits for its result.
    async fn exclusive<R, F, Fut>(&self, op: F) -> StoreResult<R>
    where
        F: FnOnce(Arc<S>) -> Fut + Send + 'static,
        Fut: Future<Output = StoreResult<R>> + Send + 'static,
        R: Send + 'static,
    {
        let (respond_to, response) = oneshot::channel();
        let job: Job<S> = Box::new(move |store| {
            Box::pin(async move {
                let _ = respond_to.send(op(store).await);
            })
        });
        self.sender
            .send(job)
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        debug!(queued = self.sender.max_capacity() - self.sender.capacity(), "Queued");
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}

#[async_trait]
impl<T, S> RecordStore<T> for Serialized<S>
where
    T: Record,
    S: RecordStore<T>,
{
    async fn list(&self, limit: Option<usize>) -> StoreResult<Vec<T>> {
        self.exclusive(move |store| async move {
            <S as RecordStore<T>>::list(&store, limit).await
        })
        .await
    }

    async fn get(&self, id: &str) -> StoreResult<T> {
        let id = id.to_owned();
        self.exclusive(move |store| async move {
            <S as RecordStore<T>>::get(&store, &id).await
        })
        .await
    }

    async fn insert(&self, params: T::Create) -> StoreResult<T> {
        self.exclusive(move |store| async move {
            <S as RecordStore<T>>::insert(&store, params).await
        })
        .await
    }

    async fn update(&self, id: &str, update: T::Update) -> StoreResult<T> {
        let id = id.to_owned();
        self.exclusive(move |store| async move {
            <S as RecordStore<T>>::update(&store, &id, update).await
        })
        .await
    }

    async fn delete(&self, id: &str) -> StoreResult<T> {
        let id = id.to_owned();
        self.exclusive(move |store| async move {
            <S as RecordStore<T>>::delete(&store, &id).await
        })
        .await
    }
}

#[async_trait]
impl<T, S> SingleRecordStore<T> for Serialized<S>
where
    T: Record,
    S: SingleRecordStore<T>,
{
    async fn get(&self, id: &str) -> StoreResult<T> {
        let id = id.to_owned();
        self.exclusive(move |store| async move {
            <S as SingleRecordStore<T>>::get(&store, &id).await
        })
        .await
    }

    async fn insert(&self, params: T::Create) -> StoreResult<T> {
        self.exclusive(move |store| async move {
            <S as SingleRecordStore<T>>::insert(&store, params).await
        })
        .await
    }

    async fn apply(&self, id: &str, action: T::Action) -> StoreResult<T> {
        let id = id.to_owned();
        self.exclusive(move |store| async move {
            <S as SingleRecordStore<T>>::apply(&store, &id, action).await
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, ProductCreate};
    use crate::framework::MemoryStore;

    #[test]
    fn parses_write_discipline() {
        assert_eq!("serialized".parse::<WriteDiscipline>(), Ok(WriteDiscipline::Serialized));
        assert_eq!(" Unguarded ".parse::<WriteDiscipline>(), Ok(WriteDiscipline::Unguarded));
        assert!("locked".parse::<WriteDiscipline>().is_err());
    }

    #[tokio::test]
    async fn closed_store_reports_store_closed() {
        let (actor, store) = StoreActor::new(MemoryStore::<Product>::new(), 4);
        drop(actor);
        let err = RecordStore::<Product>::list(&store, None).await.unwrap_err();
        assert!(matches!(err, StoreError::StoreClosed));
    }

    #[tokio::test]
    async fn task_stops_when_handles_drop() {
        let (actor, store) = StoreActor::new(MemoryStore::<Product>::new(), 4);
        let handle = tokio::spawn(actor.run());

        let created = RecordStore::<Product>::insert(&store, ProductCreate::default())
            .await
            .unwrap();
        let fetched = RecordStore::<Product>::get(&store, &created.id).await.unwrap();
        assert_eq!(fetched, created);

        drop(store);
        handle.await.unwrap();
    }
}
