#![warn(clippy::pedantic)]

mod error;
mod extract;
mod model;
mod route;
mod store;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;

pub type Database = sqlx::Pool<sqlx::Postgres>;
pub type Store = Arc<dyn store::PostStore>;
pub type AppState = State;

/// The shared application state.
///
/// This should contain all shared dependencies that handlers need to access.
/// The store is held behind a trait object so tests can run the same app
/// against the in-memory implementation.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub store: Store,
}

fn router(state: State) -> Router {
	Router::new()
		.nest("/posts", route::post::routes())
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt::init();
	dotenvy::dotenv().ok();

	let pool = Database::connect(
		&std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
	)
	.await
	.expect("failed to connect to database");

	sqlx::migrate!()
		.run(&pool)
		.await
		.expect("failed to run migrations");

	let state = State {
		store: Arc::new(store::PgStore::new(pool)),
	};

	let port = std::env::var("PORT").map_or_else(
		|_| 3000,
		|port| port.parse().expect("PORT must be a number"),
	);

	let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on port {}", port);

	axum::serve(listener, router(state)).await.unwrap();
}
