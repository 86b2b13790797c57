//! The `TopicStore` trait: the persistence gateway contract.
//!
//! The trait is implemented by storage backends (e.g. `debate-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.
//!
//! Every operation is a single-document round trip. Nothing spans more than
//! one topic, and there is no version check on [`TopicStore::replace`]: two
//! concurrent fetch-mutate-replace sequences on the same topic can lose one
//! of the writes.

use std::future::Future;

use uuid::Uuid;

use crate::topic::Topic;

/// Upper bound on the number of topics returned by a single listing.
pub const MAX_LIST_TOPICS: usize = 1000;

/// Backend errors, with enough structure for callers to tell a missing
/// document apart from an unavailable store.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `true` when the operation failed because the topic does not exist.
  fn is_not_found(&self) -> bool;
}

/// Abstraction over a topic document store.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TopicStore: Send + Sync {
  type Error: StoreError;

  /// Persist a new topic document.
  fn insert<'a>(
    &'a self,
    topic: &'a Topic,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Return up to `limit` topics, newest `created_at` first. `limit` is
  /// clamped to [`MAX_LIST_TOPICS`].
  fn find_all(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Topic>, Self::Error>> + Send + '_;

  /// Retrieve a topic by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Topic>, Self::Error>> + Send + '_;

  /// Overwrite the stored document with the same id as `topic`.
  ///
  /// Fails with a not-found error if no such document exists.
  fn replace<'a>(
    &'a self,
    topic: &'a Topic,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove a topic and every argument it owns. Returns whether anything
  /// was deleted.
  fn delete_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
