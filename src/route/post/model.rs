pub use crate::route::model::Paginate;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::Post;

/// Number of title characters shown to readers.
const TITLE_PREVIEW_LEN: usize = 10;

/// Titles containing this word are rejected outright. A placeholder policy,
/// not a real moderation system.
const BANNED_TITLE_WORD: &str = "spam";

fn validate_title(title: &str) -> Result<(), ValidationError> {
	if title.trim().is_empty() {
		return Err(ValidationError::new("title must not be blank"));
	}

	if title.contains(BANNED_TITLE_WORD) {
		return Err(ValidationError::new("title must not contain the word \"spam\""));
	}

	Ok(())
}

fn validate_content(content: &str) -> Result<(), ValidationError> {
	if content.trim().is_empty() {
		return Err(ValidationError::new("content must not be blank"));
	}

	Ok(())
}

/// Request body for creating a post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostInput {
	/// The title of the post.
	#[validate(custom(function = "validate_title"))]
	pub title: String,
	/// The content of the post in Markdown format.
	#[validate(custom(function = "validate_content"))]
	pub content: String,
}

/// Request body for editing a post.
///
/// A missing field leaves the stored value alone; a field that is present
/// must pass the same checks as on creation, so a post can never be edited
/// into a blank state.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostInput {
	#[validate(custom(function = "validate_title"))]
	pub title: Option<String>,
	#[validate(custom(function = "validate_content"))]
	pub content: Option<String>,
}

impl UpdatePostInput {
	/// Overwrites the fields of `post` that were supplied in the request.
	pub fn apply(self, post: &mut Post) {
		if let Some(title) = self.title {
			post.title = title;
		}

		if let Some(content) = self.content {
			post.content = content;
		}
	}
}

/// Response body for a newly created post.
#[derive(Debug, Serialize)]
pub struct CreatedPost {
	/// The store-assigned identifier of the post.
	pub id: i64,
}

/// A post as presented to readers. The title is clipped to its first
/// [`TITLE_PREVIEW_LEN`] characters; the content is returned in full.
#[derive(Debug, Serialize)]
pub struct PostResponse {
	pub id: i64,
	pub title: String,
	pub content: String,
}

impl From<Post> for PostResponse {
	fn from(post: Post) -> Self {
		Self {
			id: post.id,
			title: clip_title(post.title),
			content: post.content,
		}
	}
}

fn clip_title(title: String) -> String {
	// char_indices so a clipped title never splits a codepoint.
	match title.char_indices().nth(TITLE_PREVIEW_LEN) {
		Some((index, _)) => title[..index].to_string(),
		None => title,
	}
}
