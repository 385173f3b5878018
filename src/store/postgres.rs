use axum::async_trait;
use sqlx::PgPool;

use super::{NewPost, PostStore, StoreError};
use crate::model::Post;

/// [`PostStore`] backed by a PostgreSQL pool.
///
/// Concurrency control is the database's concern; this type only issues
/// single statements.
pub struct PgStore {
	pool: PgPool,
}

impl PgStore {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl PostStore for PgStore {
	async fn insert(&self, new: NewPost) -> Result<Post, StoreError> {
		let post = sqlx::query_as::<_, Post>(
			r"
			INSERT INTO post (title, content)
			VALUES ($1, $2)
			RETURNING id, title, content
			",
		)
		.bind(&new.title)
		.bind(&new.content)
		.fetch_one(&self.pool)
		.await?;

		Ok(post)
	}

	async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError> {
		let post = sqlx::query_as::<_, Post>(
			r"
			SELECT id, title, content FROM post
			WHERE id = $1
			",
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;

		Ok(post)
	}

	async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Post>, StoreError> {
		let posts = sqlx::query_as::<_, Post>(
			r"
			SELECT id, title, content FROM post
			ORDER BY id DESC
			LIMIT $1 OFFSET $2
			",
		)
		.bind(limit)
		.bind(offset)
		.fetch_all(&self.pool)
		.await?;

		Ok(posts)
	}

	async fn update(&self, post: &Post) -> Result<(), StoreError> {
		sqlx::query(
			r"
			UPDATE post
			SET title = $1, content = $2
			WHERE id = $3
			",
		)
		.bind(&post.title)
		.bind(&post.content)
		.bind(post.id)
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
		// Deleting an absent id is deliberately not an error.
		sqlx::query(
			r"
			DELETE FROM post
			WHERE id = $1
			",
		)
		.bind(id)
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	async fn delete_all(&self) -> Result<(), StoreError> {
		sqlx::query("DELETE FROM post").execute(&self.pool).await?;

		Ok(())
	}
}
