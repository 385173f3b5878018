use axum::extract::{Path, State};

use crate::{
	extract::{Json, Query},
	store::NewPost,
	Store,
};

use super::{model, Error, RouteError};

/// Creates a new post and returns its assigned id.
pub async fn create_post(
	State(store): State<Store>,
	Json(input): Json<model::CreatePostInput>,
) -> Result<Json<model::CreatedPost>, RouteError> {
	let post = store
		.insert(NewPost {
			title: input.title,
			content: input.content,
		})
		.await?;

	Ok(Json(model::CreatedPost { id: post.id }))
}

/// Returns a page of posts, newest first.
pub async fn get_posts(
	State(store): State<Store>,
	Query(paginate): Query<model::Paginate>,
) -> Result<Json<Vec<model::PostResponse>>, RouteError> {
	let posts = store.find_page(paginate.limit(), paginate.offset()).await?;

	Ok(Json(
		posts.into_iter().map(model::PostResponse::from).collect(),
	))
}

/// Returns a single post by its unique id.
pub async fn get_post(
	State(store): State<Store>,
	Path(post_id): Path<i64>,
) -> Result<Json<model::PostResponse>, RouteError> {
	let post = store.find_by_id(post_id).await?;

	Ok(Json(post.ok_or(Error::UnknownPost(post_id))?.into()))
}

/// Updates an existing post by its unique id.
///
/// Only the fields supplied in the body are replaced.
pub async fn update_post(
	State(store): State<Store>,
	Path(post_id): Path<i64>,
	Json(input): Json<model::UpdatePostInput>,
) -> Result<(), RouteError> {
	let mut post = store
		.find_by_id(post_id)
		.await?
		.ok_or(Error::UnknownPost(post_id))?;

	input.apply(&mut post);
	store.update(&post).await?;

	Ok(())
}

/// Deletes a post by its unique id.
///
/// Deleting an id that no longer exists succeeds, so the operation is safe
/// to retry.
pub async fn delete_post(
	State(store): State<Store>,
	Path(post_id): Path<i64>,
) -> Result<(), RouteError> {
	store.delete_by_id(post_id).await?;

	Ok(())
}
