use serde::Deserialize;
use validator::Validate;

/// These can be removed when [`serde`] supports
/// literal defaults: <https://github.com/serde-rs/serde/issues/368>
#[inline]
fn one() -> i64 {
	1
}

#[inline]
fn ten() -> i64 {
	10
}

/// Pagination query parameters.
///
/// Out-of-range values are clamped rather than rejected: page 0 (or anything
/// below 1) reads as the first page, and a non-positive size falls back to
/// the default of 10.
#[derive(Debug, Deserialize, Validate)]
pub struct Paginate {
	/// The page number to return (1-indexed).
	#[serde(default = "one")]
	pub page: i64,
	/// The number of items to return per page.
	#[serde(default = "ten")]
	pub size: i64,
}

impl Paginate {
	pub fn offset(&self) -> i64 {
		(self.page - 1).max(0) * self.limit()
	}

	pub fn limit(&self) -> i64 {
		if self.size > 0 {
			self.size
		} else {
			ten()
		}
	}
}
