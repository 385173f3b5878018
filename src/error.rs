use std::borrow::Cow;

use axum::{
	body::Body,
	extract::rejection::{JsonRejection, QueryRejection},
	http::{Response, StatusCode},
	response::IntoResponse,
	Json,
};
use serde::Serialize;

use crate::store::StoreError;

pub type Map = serde_json::Map<String, serde_json::Value>;

/// A single client-facing error message, optionally scoped to the request
/// field that caused it.
#[derive(Debug, Serialize)]
pub struct Message<'e> {
	pub content: Cow<'e, str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub field: Option<Cow<'e, str>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<Cow<'e, Map>>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'e> {
	success: bool,
	errors: Vec<Message<'e>>,
}

/// Maps an error to the status code and messages presented to the client.
///
/// The Display impl of the error is not sent to the client, so it can show
/// sensitive information.
pub trait ErrorShape: std::fmt::Debug {
	fn status(&self) -> StatusCode;
	fn errors(&self) -> Vec<Message<'_>>;

	fn response(&self) -> Response<Body> {
		(
			self.status(),
			Json(ErrorResponse {
				success: false,
				errors: self.errors(),
			}),
		)
			.into_response()
	}
}

/// Errors that can occur in any route, before or after the handler body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("json error: {0}")]
	Json(#[from] JsonRejection),
	#[error("query error: {0}")]
	Query(#[from] QueryRejection),
	#[error("database error: {0}")]
	Database(#[from] StoreError),
}

impl ErrorShape for AppError {
	fn status(&self) -> StatusCode {
		match self {
			Self::Validation(..) => StatusCode::BAD_REQUEST,
			Self::Json(rejection) => rejection.status(),
			Self::Query(rejection) => rejection.status(),
			Self::Database(..) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn errors(&self) -> Vec<Message<'_>> {
		match self {
			// One message per violated field. The validator has already
			// collected every violation, so nothing here is fail-fast.
			Self::Validation(errors) => errors
				.field_errors()
				.into_iter()
				.flat_map(|(field, errors)| {
					errors.iter().map(move |error| Message {
						content: error.message.clone().unwrap_or_else(|| error.code.clone()),
						field: Some(field.into()),
						details: None,
					})
				})
				.collect(),
			Self::Json(rejection) => vec![Message {
				content: rejection.body_text().into(),
				field: None,
				details: None,
			}],
			Self::Query(rejection) => vec![Message {
				content: rejection.body_text().into(),
				field: None,
				details: None,
			}],
			// Storage details stay opaque to the client.
			Self::Database(..) => Vec::new(),
		}
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response<Body> {
		if let Self::Database(error) = &self {
			tracing::error!(%error, "storage failure");
		}

		self.response()
	}
}

/// Error type for a route module: either an application-level error or the
/// module's own error type `E`.
///
/// Route modules alias this to their own error enum and implement
/// [`ErrorShape`] for it; see [`crate::route::post`].
#[derive(Debug)]
pub enum RouteError<E> {
	App(AppError),
	Route(E),
}

impl<E> From<AppError> for RouteError<E> {
	fn from(error: AppError) -> Self {
		Self::App(error)
	}
}

impl<E> From<StoreError> for RouteError<E> {
	fn from(error: StoreError) -> Self {
		Self::App(AppError::Database(error))
	}
}

impl<E> IntoResponse for RouteError<E>
where
	E: ErrorShape,
{
	fn into_response(self) -> Response<Body> {
		match self {
			Self::App(error) => error.into_response(),
			Self::Route(error) => error.response(),
		}
	}
}
