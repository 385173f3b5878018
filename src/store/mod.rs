#[cfg(test)]
pub mod memory;
mod postgres;

pub use postgres::PgStore;

use axum::async_trait;

use crate::model::Post;

/// Fields of a post that the caller supplies on creation.
///
/// The id is assigned by the store and returned on the persisted [`Post`].
#[derive(Debug, Clone)]
pub struct NewPost {
	pub title: String,
	pub content: String,
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct StoreError(#[from] sqlx::Error);

/// Persistence interface for posts.
///
/// Handlers hold this behind an `Arc<dyn PostStore>` so tests can swap in
/// the in-memory implementation. Each method is a single storage round-trip
/// with no transactional coupling between calls.
#[async_trait]
pub trait PostStore: Send + Sync {
	/// Persists a new post and returns it with its assigned id.
	async fn insert(&self, new: NewPost) -> Result<Post, StoreError>;

	async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError>;

	/// Returns a page of posts, newest first (descending by id).
	async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Post>, StoreError>;

	/// Writes back an edited post. The post must already be persisted.
	async fn update(&self, post: &Post) -> Result<(), StoreError>;

	/// Removes a post. Removing an id that does not exist is a no-op.
	async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

	/// Clears the table. Test and reset path only.
	async fn delete_all(&self) -> Result<(), StoreError>;
}
