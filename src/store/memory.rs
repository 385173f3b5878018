//! In-memory [`PostStore`] used by the test harness in place of a live
//! database.

use std::sync::Mutex;

use axum::async_trait;

use super::{NewPost, PostStore, StoreError};
use crate::model::Post;

#[derive(Default)]
pub struct MemoryStore {
	inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
	next_id: i64,
	// Kept in insertion order, so ascending by id.
	posts: Vec<Post>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl PostStore for MemoryStore {
	async fn insert(&self, new: NewPost) -> Result<Post, StoreError> {
		let mut inner = self.inner.lock().unwrap();

		inner.next_id += 1;

		let post = Post {
			id: inner.next_id,
			title: new.title,
			content: new.content,
		};

		inner.posts.push(post.clone());

		Ok(post)
	}

	async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError> {
		let inner = self.inner.lock().unwrap();

		Ok(inner.posts.iter().find(|post| post.id == id).cloned())
	}

	async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Post>, StoreError> {
		let inner = self.inner.lock().unwrap();

		let posts = inner
			.posts
			.iter()
			.rev()
			.skip(usize::try_from(offset).unwrap_or_default())
			.take(usize::try_from(limit).unwrap_or_default())
			.cloned()
			.collect();

		Ok(posts)
	}

	async fn update(&self, post: &Post) -> Result<(), StoreError> {
		let mut inner = self.inner.lock().unwrap();

		if let Some(existing) = inner.posts.iter_mut().find(|existing| existing.id == post.id) {
			*existing = post.clone();
		}

		Ok(())
	}

	async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
		let mut inner = self.inner.lock().unwrap();

		inner.posts.retain(|post| post.id != id);

		Ok(())
	}

	async fn delete_all(&self) -> Result<(), StoreError> {
		let mut inner = self.inner.lock().unwrap();

		inner.posts.clear();

		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn new_post(n: usize) -> NewPost {
		NewPost {
			title: format!("Post {n}"),
			content: format!("content {n}"),
		}
	}

	#[tokio::test]
	async fn test_insert_assigns_increasing_ids() {
		let store = MemoryStore::new();

		let first = store.insert(new_post(0)).await.unwrap();
		let second = store.insert(new_post(1)).await.unwrap();

		assert!(second.id > first.id);
		assert_eq!(store.find_by_id(first.id).await.unwrap().unwrap(), first);
	}

	#[tokio::test]
	async fn test_find_page_is_newest_first() {
		let store = MemoryStore::new();

		for n in 0..5 {
			store.insert(new_post(n)).await.unwrap();
		}

		let page = store.find_page(2, 1).await.unwrap();
		let titles = page.iter().map(|post| post.title.as_str()).collect::<Vec<_>>();

		assert_eq!(titles, ["Post 3", "Post 2"]);
	}

	#[tokio::test]
	async fn test_delete_all_clears_every_post() {
		let store = MemoryStore::new();

		for n in 0..3 {
			store.insert(new_post(n)).await.unwrap();
		}

		store.delete_all().await.unwrap();

		assert!(store.find_page(10, 0).await.unwrap().is_empty());
	}
}
