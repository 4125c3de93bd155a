use crate::templates::NewTemplate;
use axum::http::StatusCode;
use axum::response::Html;

pub(super) async fn get() -> Result<Html<String>, StatusCode> {
    super::render(NewTemplate)
}
