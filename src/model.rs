use serde::Serialize;

/// A model representing a single blog post.
///
/// Use this when fetching from the database. Responses to the client go
/// through [`crate::route::post::model::PostResponse`] instead, which clips
/// the title for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub content: String,
}
