//! Custom axum extractors for JobStack

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::Error;

/// Default page number for list endpoints (1-based)
const DEFAULT_PAGE: i64 = 1;

/// Default page size for list endpoints
const DEFAULT_PER_PAGE: i64 = 10;

/// Pagination query parameters for list endpoints.
///
/// Pages are 1-based and `per_page` defaults to 10. There is no upper
/// bound on `per_page`; callers may request arbitrarily large pages.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub per_page: Option<i64>,
}

impl Pagination {
    /// Get the page number, defaulting to 1, floored at 1
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    /// Get the page size, defaulting to 10, floored at 1 (uncapped)
    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1)
    }

    /// Row offset for the current page.
    ///
    /// Saturating arithmetic: query params are caller-chosen, and a huge
    /// page or per_page must not overflow into a negative offset.
    pub fn offset(&self) -> i64 {
        self.page().saturating_sub(1).saturating_mul(self.per_page())
    }

    /// Number of pages needed for `total` matching rows
    pub fn total_pages(&self, total: i64) -> i64 {
        total.saturating_add(self.per_page() - 1) / self.per_page()
    }
}

/// JSON extractor that validates the deserialized value before the
/// handler runs. Both malformed bodies and failed `validator` rules
/// reject with a 400 validation error.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| Error::validation(e.body_text()))?;
        value
            .validate()
            .map_err(|e| Error::validation(format!("Validation failed: {}", e)))?;
        Ok(ValidatedJson(value))
    }
}
