use crate::domain::title::is_valid_title;
use axum::extract::{FromRequestParts, Path};
use axum::http::StatusCode;
use axum::http::request::Parts;

/// Validated page name pulled out of the request path.
///
/// Every page handler declares this as an argument, which makes axum run the
/// validation before the handler body executes. A name that fails the title
/// pattern rejects the whole request with a 404 and no page operation runs.
pub struct PageTitle(pub String);

impl<S> FromRequestParts<S> for PageTitle
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(title) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;

        if is_valid_title(&title) {
            Ok(PageTitle(title))
        } else {
            Err(StatusCode::NOT_FOUND)
        }
    }
}
